//! Project version resolution
//!
//! Looks for the first `    <artifactId>ID</artifactId>` line and takes the
//! value of the next `    <version>V</version>` line after it.

use crate::domain::ProjectVersion;
use crate::error::ManifestError;
use crate::manifest::read_manifest;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;

// Project version line: 4-space indent, value captured verbatim
static VERSION_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^    <version>(.*)</version>").unwrap());

/// Scanner state for [`VersionResolver::step`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanState {
    /// Waiting for the artifact declaration
    SeekingIdentifier,
    /// Artifact seen, waiting for its version line
    SeekingVersion,
    /// Version captured
    Done(String),
}

/// Resolves the version of one artifact from a manifest
#[derive(Debug, Clone)]
pub struct VersionResolver {
    artifact_id: String,
    /// Full declaration prefix, e.g. `    <artifactId>core</artifactId>`
    declaration: String,
}

impl VersionResolver {
    /// Create a resolver for the given artifact identifier
    pub fn new(artifact_id: impl Into<String>) -> Self {
        let artifact_id = artifact_id.into();
        let declaration = format!("    <artifactId>{}</artifactId>", artifact_id);
        Self {
            artifact_id,
            declaration,
        }
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    /// Advance the scanner by one line
    ///
    /// The declaration line itself is never taken as the version line.
    pub fn step(&self, state: ScanState, line: &str) -> ScanState {
        match state {
            ScanState::SeekingIdentifier => {
                if line.starts_with(&self.declaration) {
                    debug!(artifact = %self.artifact_id, "artifact declaration found");
                    ScanState::SeekingVersion
                } else {
                    ScanState::SeekingIdentifier
                }
            }
            ScanState::SeekingVersion => match VERSION_LINE_RE.captures(line) {
                Some(caps) => ScanState::Done(caps[1].to_string()),
                None => ScanState::SeekingVersion,
            },
            done @ ScanState::Done(_) => done,
        }
    }

    /// Resolve the version from in-memory manifest content
    ///
    /// Falls back to [`ProjectVersion::dev`] when the artifact or its version
    /// line is never found.
    pub fn resolve_str(&self, content: &str) -> ProjectVersion {
        let mut state = ScanState::SeekingIdentifier;

        for line in content.lines() {
            match self.step(state, line) {
                ScanState::Done(version) => {
                    debug!(artifact = %self.artifact_id, %version, "project version resolved");
                    return ProjectVersion::new(version);
                }
                next => state = next,
            }
        }

        debug!(
            artifact = %self.artifact_id,
            ?state,
            "no version found, falling back to dev"
        );
        ProjectVersion::dev()
    }

    /// Read the manifest at `path` and resolve the version
    pub fn resolve(&self, path: &Path) -> Result<ProjectVersion, ManifestError> {
        let content = read_manifest(path)?;
        Ok(self.resolve_str(&content))
    }
}

/// Resolve the version of `artifact_id` from the manifest at `path`
pub fn resolve(path: &Path, artifact_id: &str) -> Result<ProjectVersion, ManifestError> {
    VersionResolver::new(artifact_id).resolve(path)
}
