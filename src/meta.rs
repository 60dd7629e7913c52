use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

const SPDX_LICENSE_BASE_URL: &str = "https://spdx.org/licenses";

// Placeholder compatibility entries. These are demo values, not a real
// compatibility matrix; every record carries the same map.
const DEFAULT_COMPATIBILITY: [(&str, bool); 2] = [("MIT", false), ("GPL-3.0", false)];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LicenseMeta {
    pub license_id: String,
    pub name: String,
    pub reference_url: String,
    pub details_url: String,
    pub osi_approved: bool,
    pub saas_compatible: bool,
    pub fsf_approved: bool,
    pub commercial_use_allowed: bool,
    pub compatibility: IndexMap<String, bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LicenseMetaList {
    pub licenses: Vec<LicenseMeta>,
}

impl LicenseMeta {
    /// Build a fully populated record from an id and display name.
    ///
    /// The URL fields are derived from the id; the approval flags are not
    /// known here and stay false until an authoritative source fills them.
    pub fn build(id: &str, name: &str) -> Self {
        Self {
            license_id: id.to_string(),
            name: name.to_string(),
            reference_url: reference_url(id),
            details_url: details_url(id),
            osi_approved: false,
            saas_compatible: false,
            fsf_approved: false,
            commercial_use_allowed: false,
            compatibility: DEFAULT_COMPATIBILITY
                .iter()
                .map(|(other, compatible)| (other.to_string(), *compatible))
                .collect(),
        }
    }
}

impl LicenseMetaList {
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Self {
            licenses: pairs
                .into_iter()
                .map(|(id, name)| LicenseMeta::build(id, name))
                .collect(),
        }
    }
}

pub fn reference_url(id: &str) -> String {
    format!("{}/{}.html", SPDX_LICENSE_BASE_URL, id)
}

pub fn details_url(id: &str) -> String {
    format!("{}/{}.json", SPDX_LICENSE_BASE_URL, id)
}
