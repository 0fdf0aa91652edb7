//! CLI argument parsing module for docversion

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Documentation version and reference URL resolver
#[derive(Parser, Debug, Clone)]
#[command(
    name = "docversion",
    version,
    about = "Resolve documentation version strings and pin reference URLs from a Maven manifest"
)]
pub struct CliArgs {
    /// Manifest file (default: from config, then pom.xml)
    pub manifest: Option<PathBuf>,

    /// Artifact identifier whose version is used for the documentation
    #[arg(short, long)]
    pub artifact: Option<String>,

    /// Configuration file (default: docversion.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Extra reference mapping entry as NAME=URL (can be specified multiple times)
    #[arg(short, long, action = ArgAction::Append)]
    pub reference: Vec<String>,

    // Output options
    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,

    /// Exit with status 2 if a mapped URL does not end in latest/
    #[arg(long)]
    pub strict: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable quiet mode - minimal output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}
