//! Text output formatter for human-readable display

use crate::domain::RewriteOutcome;
use crate::orchestrator::OrchestratorResult;
use crate::output::{OutputFormatter, Verbosity};
use colored::Colorize;
use std::io::Write;

/// Text formatter for human-readable output
pub struct TextFormatter {
    verbosity: Verbosity,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            color: true,
        }
    }

    /// Create a new text formatter with color option
    pub fn with_color(verbosity: Verbosity, color: bool) -> Self {
        Self { verbosity, color }
    }

    fn paint<F>(&self, text: &str, style: F) -> String
    where
        F: Fn(&str) -> colored::ColoredString,
    {
        if self.color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_project(
        &self,
        result: &OrchestratorResult,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let project = &result.project;
        writeln!(
            writer,
            "{} {}",
            self.paint(&result.artifact, |s| s.bold()),
            self.paint(&project.version, |s| s.green()),
        )?;
        if self.verbosity == Verbosity::Quiet {
            return Ok(());
        }
        writeln!(writer, "  short version: {}", project.short_version)?;
        writeln!(writer, "  release:       {}", project.release)?;
        if project.is_dev() {
            writeln!(
                writer,
                "  {}",
                self.paint("artifact version not found in manifest", |s| s.yellow())
            )?;
        }
        Ok(())
    }

    fn format_outcome(
        &self,
        outcome: &RewriteOutcome,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let label = match outcome.skip_reason() {
            None => self.paint("pinned", |s| s.green()),
            Some(_) => self.paint("skipped", |s| s.dimmed()),
        };
        write!(
            writer,
            "  {} {} {}",
            label,
            outcome.dependency(),
            outcome.version()
        )?;
        if let Some(reason) = outcome.skip_reason() {
            write!(writer, " ({})", reason)?;
        }
        writeln!(writer)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, result: &OrchestratorResult, writer: &mut dyn Write) -> std::io::Result<()> {
        self.format_project(result, writer)?;
        if self.verbosity == Verbosity::Quiet {
            return Ok(());
        }

        let report = &result.references;
        let shown: Vec<&RewriteOutcome> = if self.verbosity == Verbosity::Verbose {
            report.outcomes.iter().collect()
        } else {
            report.rewritten().collect()
        };

        if !shown.is_empty() {
            writeln!(writer)?;
            writeln!(writer, "{}", self.paint("Declared versions:", |s| s.bold()))?;
            for outcome in shown {
                self.format_outcome(outcome, writer)?;
            }
        }

        if !report.mapping.is_empty() {
            writeln!(writer)?;
            writeln!(writer, "{}", self.paint("References:", |s| s.bold()))?;
            let width = report.mapping.iter().map(|(n, _)| n.len()).max().unwrap_or(0);
            for (name, entry) in &report.mapping {
                write!(writer, "  {:width$}  {}", name, entry.url, width = width)?;
                if let Some(inventory) = &entry.inventory {
                    write!(writer, " ({})", inventory)?;
                }
                writeln!(writer)?;
            }
        }

        if report.has_url_mismatches() {
            writeln!(writer)?;
            writeln!(
                writer,
                "{}",
                self.paint(
                    "warning: some reference URLs do not end in latest/ and were left unchanged",
                    |s| s.yellow()
                )
            )?;
        }

        Ok(())
    }
}
