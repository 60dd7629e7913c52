pub mod init;
pub mod manifest;
pub mod meta;
pub mod output;

// Re-export main types for easy access
pub use manifest::{LicenseEntry, Manifest, ManifestParser};
pub use meta::{LicenseMeta, LicenseMetaList};
pub use output::{to_json, to_json_line, to_jsonl};
