use crate::meta::{LicenseMeta, LicenseMetaList};
use anyhow::{Context, Result};
use rayon::prelude::*;

/// Serialize the aggregate list as one pretty-printed JSON document.
pub fn to_json(list: &LicenseMetaList) -> Result<String> {
    serde_json::to_string_pretty(list).context("Failed to serialize license list as JSON")
}

/// Serialize a single record as one compact JSON line.
pub fn to_json_line(meta: &LicenseMeta) -> Result<String> {
    serde_json::to_string(meta)
        .with_context(|| format!("Failed to serialize license record: {}", meta.license_id))
}

/// Serialize records as JSON Lines, one object per line, trailing newline.
///
/// Records are independent, so serialization runs in parallel; the indexed
/// collect keeps input order in the output.
pub fn to_jsonl(records: &[LicenseMeta]) -> Result<String> {
    let lines: Vec<String> = records
        .par_iter()
        .map(to_json_line)
        .collect::<Result<Vec<_>>>()?;

    let mut output = lines.join("\n");
    if !output.is_empty() {
        output.push('\n');
    }
    Ok(output)
}
