use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::manifest::MANIFEST_FILE_NAME;

const STARTER_MANIFEST: &str = include_str!("../presets/licenses.toml");

pub fn generate_manifest() -> Result<()> {
    generate_manifest_at_path(MANIFEST_FILE_NAME)?;
    println!("Created {} with example licenses", MANIFEST_FILE_NAME);

    Ok(())
}

pub fn generate_manifest_at_path<P: AsRef<Path>>(path: P) -> Result<()> {
    let manifest_path = path.as_ref();

    if manifest_path.exists() {
        return Err(anyhow::anyhow!(
            "{} already exists. Edit it directly or use 'license-meta-export add'.",
            manifest_path.display()
        ));
    }

    fs::write(manifest_path, STARTER_MANIFEST)?;
    Ok(())
}
