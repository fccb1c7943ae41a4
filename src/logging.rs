//! Diagnostic logging setup.
//!
//! Events go to stderr so they never mix with counts written to stdout.
//! `RUST_LOG`, when set, takes precedence over the command-line level.

use tracing_subscriber::EnvFilter;

use crate::cli::LogLevel;

/// Builds the filter for `level`, deferring to `RUST_LOG` when present.
#[must_use]
pub fn filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_tracing().as_str()))
}

/// Installs the global subscriber. Later calls are ignored.
pub fn init(level: LogLevel) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(level))
        .with_writer(std::io::stderr)
        .try_init();
}
