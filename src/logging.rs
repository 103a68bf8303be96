// Tracing setup for the binary
use crate::config::LoggingConfig;
use std::io;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Build the filter: RUST_LOG wins, then the configured level, then "warn".
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber. Logs go to stderr so they never interleave
/// with the status lines the shell prints on stdout.
pub fn init(config: &LoggingConfig) {
    let registry = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .with(env_filter(config));

    if let Err(e) = registry.try_init() {
        eprintln!("Logging already initialized: {e}");
    }
}
