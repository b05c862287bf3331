//! Logging infrastructure for weekplan.
//!
//! Logs go to stderr so that plan output on stdout (tables or JSON) stays clean.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Map a `-v` count to a default level and initialize logging
///
/// 0 → warn, 1 → info, 2+ → debug. RUST_LOG still wins when set. Routine
/// progress of this one-shot planner stays hidden unless asked for.
pub fn init_for_verbosity(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    init_with_level(level)
}

/// Initialize logging with a specific default level
///
/// # Arguments
/// * `default_level` - Default log level (debug, info, warn, error)
///
/// This can still be overridden by RUST_LOG environment variable.
pub fn init_with_level(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

/// Initialize logging for testing (captures logs for test output)
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new("debug"))
        .try_init();
}
