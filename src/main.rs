use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::PathBuf;

// Import from our library
use license_meta_export::manifest::{add_license_to_manifest, ManifestParser};
use license_meta_export::meta::LicenseMetaList;
use license_meta_export::output::{to_json, to_jsonl};

use license_meta_export::init;

#[derive(Parser)]
#[command(name = "license-meta-export")]
#[command(about = "Build SPDX license metadata records and export them as JSON or JSON Lines")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export license metadata records from the manifest
    Export {
        /// Path to licenses.toml (default: search upward from current directory)
        #[arg(short, long)]
        manifest: Option<PathBuf>,

        /// Output format
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Suppress stdout output
        #[arg(short, long)]
        quiet: bool,
    },
    /// Create a starter licenses.toml in the current directory
    Init,
    /// Add a license entry to the manifest
    Add {
        /// Short license identifier (e.g. MIT)
        id: String,

        /// Human-readable license name
        name: String,

        /// Path to licenses.toml (default: search upward from current directory)
        #[arg(short, long)]
        manifest: Option<PathBuf>,
    },
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    Json,
    Jsonl,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Export {
            manifest,
            format,
            output,
            quiet,
        } => handle_export(manifest, format, output, quiet),
        Commands::Init => init::generate_manifest(),
        Commands::Add { id, name, manifest } => handle_add(id, name, manifest),
    }
}

fn resolve_manifest_path(manifest: Option<PathBuf>) -> Result<PathBuf> {
    match manifest {
        Some(path) => Ok(path),
        None => ManifestParser::find_manifest().ok_or_else(|| {
            anyhow::anyhow!(
                "No licenses.toml found in current directory or parent directories.\n\
                 Run 'license-meta-export init' to create one."
            )
        }),
    }
}

fn handle_export(
    manifest: Option<PathBuf>,
    format: Option<OutputFormat>,
    output: Option<PathBuf>,
    quiet: bool,
) -> Result<()> {
    let manifest_path = resolve_manifest_path(manifest)?;
    let manifest = ManifestParser::parse_manifest(&manifest_path)?;

    let pairs = ManifestParser::extract_pairs(&manifest);
    let list = LicenseMetaList::from_pairs(
        pairs.iter().map(|(id, name)| (id.as_str(), name.as_str())),
    );

    // CLI argument overrides the manifest default
    let format = format.unwrap_or_else(|| match manifest.format.as_deref() {
        Some("jsonl") => OutputFormat::Jsonl,
        _ => OutputFormat::Json,
    });

    let output_content = match format {
        OutputFormat::Json => to_json(&list)?,
        OutputFormat::Jsonl => to_jsonl(&list.licenses)?,
    };

    match output {
        Some(path) => fs::write(path, output_content)?,
        None => {
            if !quiet {
                // JSONL already carries one newline per record
                print!("{}", output_content);
                if matches!(format, OutputFormat::Json) {
                    println!();
                }
            }
        }
    }

    Ok(())
}

fn handle_add(id: String, name: String, manifest: Option<PathBuf>) -> Result<()> {
    let manifest_path = resolve_manifest_path(manifest)?;

    add_license_to_manifest(&manifest_path, &id, &name)?;
    println!("Added {} ({}) to {}", id, name, manifest_path.display());

    Ok(())
}
