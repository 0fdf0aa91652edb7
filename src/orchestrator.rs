//! Run orchestration for a documentation build
//!
//! This module provides:
//! - Workflow coordination: resolve settings → resolve version → rewrite references
//! - A single manifest read shared by both scans

use crate::cli::CliArgs;
use crate::config::Settings;
use crate::domain::{ProjectVersion, RewriteReport};
use crate::error::AppError;
use crate::manifest::{read_manifest, ReferenceUrlRewriter, VersionResolver};
use std::path::PathBuf;
use tracing::debug;

/// Orchestrator for one documentation build
pub struct Orchestrator {
    settings: Settings,
}

/// Result of running the orchestrator
#[derive(Debug, Clone)]
pub struct OrchestratorResult {
    /// Manifest that was scanned
    pub manifest: PathBuf,
    /// Artifact whose version was resolved
    pub artifact: String,
    /// Version strings for the documentation
    pub project: ProjectVersion,
    /// Rewritten reference mapping with per-declaration outcomes
    pub references: RewriteReport,
}

impl OrchestratorResult {
    /// Returns true if a mapped URL could not be pinned because of its shape
    pub fn has_url_mismatches(&self) -> bool {
        self.references.has_url_mismatches()
    }
}

impl Orchestrator {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Create an orchestrator from command-line arguments and the config file
    pub fn from_cli(args: &CliArgs) -> Result<Self, AppError> {
        Ok(Self::new(Settings::from_cli(args)?))
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Read the manifest once and run both scans over it
    pub fn run(self) -> Result<OrchestratorResult, AppError> {
        let Settings {
            manifest,
            artifact,
            references,
        } = self.settings;

        debug!(manifest = %manifest.display(), %artifact, "scanning manifest");
        let content = read_manifest(&manifest)?;

        let resolver = VersionResolver::new(artifact);
        let project = resolver.resolve_str(&content);
        let references = ReferenceUrlRewriter::new().rewrite_str(&content, references);

        Ok(OrchestratorResult {
            manifest,
            artifact: resolver.artifact_id().to_string(),
            project,
            references,
        })
    }
}
