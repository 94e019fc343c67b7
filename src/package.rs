//! Package record types returned by the search API.

use serde::{Deserialize, Serialize};

fn default_unknown() -> String {
    "Unknown".to_string()
}

/// One published version of a package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageVersion {
    /// Version string as published (not necessarily semver).
    pub version: String,
    /// Download count for this version.
    #[serde(default)]
    pub downloads: u64,
}

/// A single package entry from the search results.
///
/// Every field except `id` is optional on the wire; absent fields fall
/// back to the documented defaults instead of failing deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageRecord {
    /// Package identifier.
    pub id: String,
    /// Resource type reported by the registry.
    #[serde(rename = "@type", default = "default_unknown")]
    pub package_type: String,
    /// Owner account names, in registry order.
    #[serde(default)]
    pub owners: Vec<String>,
    /// Download count across all versions.
    #[serde(default)]
    pub total_downloads: u64,
    /// Project homepage.
    #[serde(default = "default_unknown")]
    pub project_url: String,
    /// Whether the package ID prefix is verified.
    #[serde(default)]
    pub verified: bool,
    /// All published versions, oldest first.
    #[serde(default)]
    pub versions: Vec<PackageVersion>,
}

impl PackageRecord {
    /// Creates a record with the given id and defaults everywhere else.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            package_type: default_unknown(),
            owners: Vec::new(),
            total_downloads: 0,
            project_url: default_unknown(),
            verified: false,
            versions: Vec::new(),
        }
    }
}

/// One page of search results as returned by the endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// Total number of matches on the server, across all pages.
    #[serde(default)]
    pub total_hits: u64,
    /// The records in this page.
    #[serde(default)]
    pub data: Vec<PackageRecord>,
}
