//! Logging configuration using tracing
//!
//! Logs go to stderr so stdout stays usable for JSON output. `RUST_LOG`
//! overrides the default filter.

use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber
///
/// Defaults to `warn`, or `docversion=debug` when `verbose` is set.
pub fn init(verbose: bool) -> anyhow::Result<()> {
    let default = if verbose { "warn,docversion=debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {}", e))
}
