//! JSON output formatter for machine processing

use crate::domain::{ReferenceMapping, RewriteOutcome};
use crate::orchestrator::OrchestratorResult;
use crate::output::{OutputFormatter, Verbosity};
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    /// Verbosity level affects detail in output
    verbosity: Verbosity,
}

impl JsonFormatter {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

/// JSON representation of the full result
#[derive(Serialize)]
struct JsonOutput<'a> {
    manifest: String,
    artifact: &'a str,
    version: &'a str,
    short_version: &'a str,
    release: &'a str,
    /// Final reference mapping
    references: &'a ReferenceMapping,
    rewritten: Vec<&'a RewriteOutcome>,
    /// Skipped declarations (only in verbose mode)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    skipped: Vec<&'a RewriteOutcome>,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, result: &OrchestratorResult, writer: &mut dyn Write) -> std::io::Result<()> {
        let skipped = if self.verbosity == Verbosity::Verbose {
            result.references.skipped().collect()
        } else {
            Vec::new()
        };

        let output = JsonOutput {
            manifest: result.manifest.display().to_string(),
            artifact: &result.artifact,
            version: &result.project.version,
            short_version: &result.project.short_version,
            release: &result.project.release,
            references: &result.references.mapping,
            rewritten: result.references.rewritten().collect(),
            skipped,
        };

        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)
    }
}
