//! # Logging Configuration
//!
//! Configuration for the logging subsystem.
//! Supports environment variables and programmatic configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*};

/// Output formats understood by [`LoggingConfig::build`].
pub const FORMATS: [&str; 3] = ["json", "pretty", "compact"];

/// Logging configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct LoggingConfig {
    /// Log level or filter directive (e.g. `info`, `migration::seeds=debug`)
    #[serde(default = "default_level")]
    pub level: String,

    /// Output format (json, pretty, compact)
    #[serde(default = "default_format")]
    pub format: String,

    /// Optional log file path; lines are written as JSON and rotated hourly
    #[serde(default)]
    pub log_file: Option<String>,

    /// Environment (development, testing, production)
    #[serde(default = "default_environment")]
    pub environment: String,
}

fn default_level() -> String { "info".to_string() }

fn default_format() -> String { "pretty".to_string() }

fn default_environment() -> String { "development".to_string() }

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level:       default_level(),
            format:      default_format(),
            log_file:    None,
            environment: default_environment(),
        }
    }
}

impl LoggingConfig {
    /// Create configuration from environment variables, falling back to the
    /// given values.
    ///
    /// Reads `RUST_LOG`, `STOREFRONT_LOG_FORMAT`, `STOREFRONT_LOG_FILE` and
    /// `STOREFRONT_ENV`.
    pub fn from_env(level: &str, format: &str, log_file: Option<&str>) -> Self {
        Self {
            level:       std::env::var("RUST_LOG").unwrap_or_else(|_| level.to_string()),
            format:      std::env::var("STOREFRONT_LOG_FORMAT").unwrap_or_else(|_| format.to_string()),
            log_file:    std::env::var("STOREFRONT_LOG_FILE")
                .ok()
                .or(log_file.map(|s| s.to_string())),
            environment: std::env::var("STOREFRONT_ENV").unwrap_or_else(|_| default_environment()),
        }
    }

    /// Returns true if `format` names a known output format.
    pub fn is_known_format(&self) -> bool { FORMATS.contains(&self.format.as_str()) }

    /// Build the tracing subscriber from this configuration.
    ///
    /// Unknown formats fall back to JSON and unparsable filters to `info`.
    pub fn build(&self) -> Box<dyn tracing::Subscriber + Send + Sync> {
        let filter = EnvFilter::try_new(&self.level).unwrap_or_else(|_| EnvFilter::new("info"));
        let timer = fmt::time::UtcTime::rfc_3339();

        let file_layer = self.log_file.as_deref().map(|path| {
            let path = Path::new(path);
            let directory = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let file_name = path.file_name().unwrap_or_default();
            let appender = tracing_appender::rolling::hourly(directory, file_name);
            fmt::layer().json().with_writer(appender)
        });

        let registry = Registry::default().with(filter).with(file_layer);
        match self.format.as_str() {
            "pretty" => Box::new(registry.with(fmt::layer().pretty().with_timer(timer))),
            "compact" => Box::new(registry.with(fmt::layer().compact().with_timer(timer))),
            _ => Box::new(registry.with(fmt::layer().json().with_timer(timer))),
        }
    }
}
