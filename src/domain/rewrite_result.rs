//! Reference rewrite decision types

use super::ReferenceMapping;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reason why a manifest-declared dependency was not rewritten
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Declared version is an unreleased snapshot
    Snapshot,
    /// Dependency has no entry in the reference mapping
    Unmapped,
    /// Mapped base URL does not end in the `latest/` placeholder
    UrlShapeMismatch,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Snapshot => write!(f, "snapshot version"),
            SkipReason::Unmapped => write!(f, "not in reference mapping"),
            SkipReason::UrlShapeMismatch => write!(f, "base URL does not end in latest/"),
        }
    }
}

/// Result of one `<NAME.version>` declaration found in the manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RewriteOutcome {
    /// Mapping entry now points at the declared version
    Rewritten {
        dependency: String,
        version: String,
        /// URL before this rewrite
        from: String,
        /// URL after this rewrite
        to: String,
    },
    /// Declaration left the mapping untouched
    Skipped {
        dependency: String,
        version: String,
        reason: SkipReason,
    },
}

impl RewriteOutcome {
    /// Creates a Rewritten outcome
    pub fn rewritten(
        dependency: impl Into<String>,
        version: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        RewriteOutcome::Rewritten {
            dependency: dependency.into(),
            version: version.into(),
            from: from.into(),
            to: to.into(),
        }
    }

    /// Creates a Skipped outcome
    pub fn skipped(
        dependency: impl Into<String>,
        version: impl Into<String>,
        reason: SkipReason,
    ) -> Self {
        RewriteOutcome::Skipped {
            dependency: dependency.into(),
            version: version.into(),
            reason,
        }
    }

    pub fn dependency(&self) -> &str {
        match self {
            RewriteOutcome::Rewritten { dependency, .. }
            | RewriteOutcome::Skipped { dependency, .. } => dependency,
        }
    }

    pub fn version(&self) -> &str {
        match self {
            RewriteOutcome::Rewritten { version, .. } | RewriteOutcome::Skipped { version, .. } => {
                version
            }
        }
    }

    pub fn is_rewritten(&self) -> bool {
        matches!(self, RewriteOutcome::Rewritten { .. })
    }

    /// Returns the skip reason, if skipped
    pub fn skip_reason(&self) -> Option<SkipReason> {
        match self {
            RewriteOutcome::Skipped { reason, .. } => Some(*reason),
            RewriteOutcome::Rewritten { .. } => None,
        }
    }
}

impl fmt::Display for RewriteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RewriteOutcome::Rewritten { dependency, to, .. } => {
                write!(f, "{} -> {}", dependency, to)
            }
            RewriteOutcome::Skipped {
                dependency,
                version,
                reason,
            } => write!(f, "{}@{} skipped: {}", dependency, version, reason),
        }
    }
}

/// Final mapping plus one outcome per matched declaration, in manifest order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteReport {
    pub mapping: ReferenceMapping,
    pub outcomes: Vec<RewriteOutcome>,
}

impl RewriteReport {
    pub fn rewritten(&self) -> impl Iterator<Item = &RewriteOutcome> {
        self.outcomes.iter().filter(|o| o.is_rewritten())
    }

    pub fn skipped(&self) -> impl Iterator<Item = &RewriteOutcome> {
        self.outcomes.iter().filter(|o| !o.is_rewritten())
    }

    pub fn rewrite_count(&self) -> usize {
        self.rewritten().count()
    }

    /// Returns true if any mapped URL lacked the `latest/` placeholder
    pub fn has_url_mismatches(&self) -> bool {
        self.outcomes
            .iter()
            .any(|o| o.skip_reason() == Some(SkipReason::UrlShapeMismatch))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_reason_display() {
        assert_eq!(SkipReason::Snapshot.to_string(), "snapshot version");
        assert_eq!(SkipReason::Unmapped.to_string(), "not in reference mapping");
        assert!(SkipReason::UrlShapeMismatch.to_string().contains("latest/"));
    }

    #[test]
    fn test_outcome_accessors() {
        let outcome = RewriteOutcome::skipped("guava", "31.1-SNAPSHOT", SkipReason::Snapshot);
        assert_eq!(outcome.dependency(), "guava");
        assert_eq!(outcome.version(), "31.1-SNAPSHOT");
        assert!(!outcome.is_rewritten());
        assert_eq!(outcome.skip_reason(), Some(SkipReason::Snapshot));
    }

    #[test]
    fn test_outcome_display() {
        let outcome = RewriteOutcome::rewritten(
            "guava",
            "31.1",
            "https://example.org/latest/",
            "https://example.org/31.1/",
        );
        assert_eq!(outcome.to_string(), "guava -> https://example.org/31.1/");
    }

    #[test]
    fn test_report_counts() {
        let report = RewriteReport {
            mapping: ReferenceMapping::new(),
            outcomes: vec![
                RewriteOutcome::rewritten("a", "1.0", "https://a/latest/", "https://a/1.0/"),
                RewriteOutcome::skipped("b", "2.0", SkipReason::Unmapped),
                RewriteOutcome::skipped("c", "3.0", SkipReason::UrlShapeMismatch),
            ],
        };
        assert_eq!(report.rewrite_count(), 1);
        assert_eq!(report.skipped().count(), 2);
        assert!(report.has_url_mismatches());
    }

    #[test]
    fn test_outcome_serialize_tagged() {
        let outcome = RewriteOutcome::skipped("b", "2.0", SkipReason::Unmapped);
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["type"], "skipped");
        assert_eq!(json["reason"], "unmapped");
    }
}
