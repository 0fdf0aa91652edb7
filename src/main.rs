//! docversion - Documentation version and reference URL resolver
//!
//! Prints the version strings and the pinned reference mapping for a
//! documentation build, as text or JSON.

use clap::Parser;
use docversion::cli::CliArgs;
use docversion::error::AppError;
use docversion::logging;
use docversion::orchestrator::Orchestrator;
use docversion::output::{create_formatter, OutputConfig};
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    if let Err(e) = logging::init(args.verbose) {
        eprintln!("Warning: {}", e);
    }

    let verbose = args.verbose;
    match run(args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            if verbose {
                if let Some(AppError::Manifest(err)) = e.downcast_ref::<AppError>() {
                    eprintln!(
                        "Hint: check that {} exists and is readable, or pass the manifest path",
                        err.path().display()
                    );
                }
            }
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    let orchestrator = Orchestrator::from_cli(&args)?;

    if args.verbose {
        let settings = orchestrator.settings();
        eprintln!("docversion v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Manifest: {}", settings.manifest.display());
        eprintln!("Artifact: {}", settings.artifact);
    }

    let result = orchestrator.run()?;

    let output_config = OutputConfig::from_cli(args.json, args.verbose, args.quiet);
    let formatter = create_formatter(output_config);

    let mut stdout = io::stdout().lock();
    formatter.format(&result, &mut stdout)?;
    stdout.flush()?;

    if args.strict && result.has_url_mismatches() {
        // Partial success - some references could not be pinned
        return Ok(ExitCode::from(2));
    }

    Ok(ExitCode::SUCCESS)
}
