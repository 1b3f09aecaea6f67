#![deny(missing_docs)]

//! # Logging
//!
//! Installs the `tracing` subscriber. Diagnostics go to stderr so stdout
//! carries only the confirmation line.

use tracing_subscriber::EnvFilter;

/// Maps the `-v` count to a filter directive.
fn level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Initializes logging.
pub fn init(verbosity: u8) {
    // A subscriber installed earlier (e.g. by a test harness) stays in place.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level(verbosity)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}
