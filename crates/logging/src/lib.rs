//! # Storefront Logging Infrastructure
//!
//! Structured logging utilities for the storefront tools.
//! Provides tracing integration with JSON output and environment-based configuration.

pub mod config;
pub mod macros;

pub use config::LoggingConfig;
// Re-export tracing macros
pub use tracing::{debug, error, info, trace, warn};

/// Initialize the logging system.
///
/// # Arguments
///
/// * `level` - Log level or filter directive
/// * `format` - Output format (json, pretty, compact)
/// * `log_file` - Optional path to log file
pub fn init(
    level: &str,
    format: &str,
    log_file: Option<&str>,
) -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    init_with_config(LoggingConfig::from_env(level, format, log_file))
}

/// Initialize logging with a custom configuration.
pub fn init_with_config(config: LoggingConfig) -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    let subscriber = config.build();
    tracing::subscriber::set_global_default(subscriber)?;
    if !config.is_known_format() {
        warn!(format = %config.format, "Unknown log format, using json");
    }
    debug!(level = %config.level, format = %config.format, "Logging initialized");
    Ok(())
}
