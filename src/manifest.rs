use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const MANIFEST_FILE_NAME: &str = "licenses.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    /// Default output format (json, jsonl)
    pub format: Option<String>,
    #[serde(rename = "license", default)]
    pub licenses: Vec<LicenseEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LicenseEntry {
    pub id: String,
    pub name: String,
}

pub struct ManifestParser;

impl ManifestParser {
    /// Parse a licenses.toml manifest and return structured data
    pub fn parse_manifest<P: AsRef<Path>>(path: P) -> Result<Manifest> {
        let path_ref = path.as_ref();

        if !path_ref.exists() {
            return Err(anyhow::anyhow!(
                "License manifest not found: {}",
                path_ref.display()
            ));
        }

        let content = std::fs::read_to_string(path_ref)
            .with_context(|| format!("Failed to read license manifest: {}", path_ref.display()))?;

        if content.trim().is_empty() {
            return Err(anyhow::anyhow!(
                "License manifest is empty: {}",
                path_ref.display()
            ));
        }

        let manifest: Manifest = toml::from_str(&content).with_context(|| {
            format!(
                "Failed to parse license manifest as TOML: {}",
                path_ref.display()
            )
        })?;

        if manifest.licenses.is_empty() {
            eprintln!(
                "Warning: license manifest contains no [[license]] entries: {}",
                path_ref.display()
            );
        }

        Ok(manifest)
    }

    /// Extract (id, name) pairs from the manifest, input order preserved
    pub fn extract_pairs(manifest: &Manifest) -> Vec<(String, String)> {
        manifest
            .licenses
            .iter()
            .filter_map(|entry| {
                if entry.id.trim().is_empty() {
                    eprintln!("Warning: Skipping license entry with empty id");
                    return None;
                }
                if entry.name.trim().is_empty() {
                    eprintln!("Warning: Skipping license '{}' with empty name", entry.id);
                    return None;
                }
                Some((entry.id.clone(), entry.name.clone()))
            })
            .collect()
    }

    /// Find licenses.toml in current directory or parent directories
    pub fn find_manifest() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;

        loop {
            let manifest_path = current.join(MANIFEST_FILE_NAME);
            if manifest_path.exists() {
                return Some(manifest_path);
            }

            if !current.pop() {
                break;
            }
        }

        None
    }
}

/// Append one [[license]] entry to an existing manifest, keeping the file's
/// formatting and comments intact.
pub fn add_license_to_manifest<P: AsRef<Path>>(path: P, id: &str, name: &str) -> Result<()> {
    let path_ref = path.as_ref();

    let content = std::fs::read_to_string(path_ref)
        .with_context(|| format!("Failed to read license manifest: {}", path_ref.display()))?;

    let mut doc = content
        .parse::<toml_edit::DocumentMut>()
        .with_context(|| format!("Failed to parse license manifest: {}", path_ref.display()))?;

    let mut entry = toml_edit::Table::new();
    entry["id"] = toml_edit::value(id);
    entry["name"] = toml_edit::value(name);

    match doc.get_mut("license") {
        Some(item) => {
            let entries = item
                .as_array_of_tables_mut()
                .ok_or_else(|| anyhow::anyhow!("Invalid [[license]] format in manifest"))?;
            entries.push(entry);
        }
        None => {
            let mut entries = toml_edit::ArrayOfTables::new();
            entries.push(entry);
            doc["license"] = toml_edit::Item::ArrayOfTables(entries);
        }
    }

    std::fs::write(path_ref, doc.to_string())
        .with_context(|| format!("Failed to write license manifest: {}", path_ref.display()))?;

    Ok(())
}
