//! Tracing subscriber setup for the console binary.
//!
//! Log lines go to stderr so they never interleave with the board on stdout.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Installs a global `fmt` subscriber.
///
/// An explicit `level` wins over `RUST_LOG`; with neither, only warnings and
/// errors are shown. Calling this twice is harmless.
pub fn setup_logger(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL)),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
