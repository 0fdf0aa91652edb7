//! Project version information extracted from the manifest

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel used when the artifact version cannot be found in the manifest
pub const DEV_VERSION: &str = "dev";

/// Version strings for documentation titles and footers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectVersion {
    /// Full version, verbatim from the manifest (e.g. `4.9.0-SNAPSHOT`)
    pub version: String,
    /// First two dot-separated segments of the version
    pub short_version: String,
    /// Release string shown by the documentation site
    pub release: String,
}

impl ProjectVersion {
    /// Creates the version triple from a raw version string
    pub fn new(version: impl Into<String>) -> Self {
        let version = version.into();
        Self {
            short_version: short_version(&version),
            release: version.clone(),
            version,
        }
    }

    /// The `dev` fallback used when the artifact is not declared
    pub fn dev() -> Self {
        Self::new(DEV_VERSION)
    }

    /// Returns true if this is the `dev` fallback
    pub fn is_dev(&self) -> bool {
        self.version == DEV_VERSION
    }
}

impl fmt::Display for ProjectVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.version)
    }
}

/// Joins the first two dot-separated segments of `version`
///
/// Versions with a single segment are returned as-is.
pub fn short_version(version: &str) -> String {
    version.split('.').take(2).collect::<Vec<_>>().join(".")
}
