//! Logging system configuration and initialization
//!
//! Console logging via tracing with configuration-based level control and
//! RUST_LOG override. Diagnostics go to stderr so the binaries' JSON output
//! on stdout stays machine-readable.

use anyhow::Result;
use tracing_subscriber::{EnvFilter, fmt};

// Re-export LoggingConfig from config module
pub use crate::infrastructure::config::LoggingConfig;

/// Initialize the logging system with default configuration
pub fn init_logging() -> Result<()> {
    init_logging_with_config(LoggingConfig::default())
}

/// Initialize logging with custom configuration.
///
/// The RUST_LOG environment variable overrides the configured level, e.g.
/// `RUST_LOG="debug,reqwest=debug" cargo run` to inspect HTTP details.
/// Unless TRACE is requested, HTTP client internals are kept at warn.
pub fn init_logging_with_config(config: LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let mut filter = EnvFilter::new(&config.level);

        if !config.level.to_lowercase().contains("trace") {
            filter = filter
                .add_directive("reqwest=warn".parse().unwrap())
                .add_directive("hyper=warn".parse().unwrap())
                .add_directive("h2=warn".parse().unwrap())
                .add_directive("html5ever=warn".parse().unwrap());
        }

        filter
    });

    fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
