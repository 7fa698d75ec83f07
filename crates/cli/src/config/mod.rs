//! # Database Configuration
//!
//! Database configuration handling for the CLI, reading from environment variables.

use error::{AppError, Result};
use sea_orm::DatabaseConnection;

/// Full connection URL; when set, every other database variable is ignored.
pub const DATABASE_URL_VAR: &str = "STOREFRONT_DATABASE_URL";

/// Variables that together describe a PostgreSQL connection.
pub const DATABASE_VARS: [&str; 5] = [
    "STOREFRONT_DATABASE_HOST",
    "STOREFRONT_DATABASE_PORT",
    "STOREFRONT_DATABASE_NAME",
    "STOREFRONT_DATABASE_USER",
    "STOREFRONT_DATABASE_PASSWORD",
];

/// Database configuration for CLI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// Explicit connection URL (any backend sea-orm supports)
    pub url:       Option<String>,
    /// Database host address
    pub host:      String,
    /// Database port number
    pub port:      u16,
    /// Database name
    pub database:  String,
    /// Database username
    pub username:  String,
    /// Database password
    pub password:  String,
    /// SSL mode
    pub ssl_mode:  String,
    /// Connection pool size
    pub pool_size: u32,
}

/// Errors that can occur when parsing database configuration.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseConfigError {
    /// The port number could not be parsed as a valid number.
    #[error("Invalid port number: {value}")]
    InvalidPort {
        /// The invalid port value that was provided.
        value: String,
    },

    /// The pool size could not be parsed as a positive number.
    #[error("Invalid pool size: {value}")]
    InvalidPoolSize {
        /// The invalid pool size that was provided.
        value: String,
    },
}

impl From<DatabaseConfigError> for AppError {
    fn from(err: DatabaseConfigError) -> Self { AppError::config(err) }
}

impl DatabaseConfig {
    /// Creates a new DatabaseConfig from environment variables.
    ///
    /// Returns `Err` if any variable has an invalid format.
    pub fn from_env() -> Result<Self, DatabaseConfigError> { Self::from_lookup(|key| std::env::var(key).ok()) }

    /// Creates a DatabaseConfig from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DatabaseConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_owned());

        let port_str = get("STOREFRONT_DATABASE_PORT", "5432");
        let port = port_str.parse::<u16>().map_err(|_e| {
            DatabaseConfigError::InvalidPort {
                value: port_str.clone(),
            }
        })?;

        let pool_str = get("STOREFRONT_DATABASE_POOL_SIZE", "10");
        let pool_size = pool_str
            .parse::<u32>()
            .ok()
            .filter(|size| *size > 0)
            .ok_or_else(|| {
                DatabaseConfigError::InvalidPoolSize {
                    value: pool_str.clone(),
                }
            })?;

        Ok(Self {
            url: lookup(DATABASE_URL_VAR).filter(|url| !url.is_empty()),
            host: get("STOREFRONT_DATABASE_HOST", "localhost"),
            port,
            database: get("STOREFRONT_DATABASE_NAME", "storefront"),
            username: get("STOREFRONT_DATABASE_USER", "storefront"),
            password: get("STOREFRONT_DATABASE_PASSWORD", ""),
            ssl_mode: get("STOREFRONT_DATABASE_SSL_MODE", "prefer"),
            pool_size,
        })
    }

    /// The explicit URL if one was given, otherwise a PostgreSQL URL.
    pub fn database_url(&self) -> String {
        match &self.url {
            Some(url) => url.clone(),
            None => build_database_url(self),
        }
    }

    /// Opens a connection pool for this configuration.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Database` if the connection fails.
    pub async fn connect(&self) -> Result<DatabaseConnection> {
        migration::connect_to_database(&self.database_url(), self.pool_size)
            .await
            .map_err(|e| AppError::database(format!("Failed to connect to database: {}", e)))
    }
}

/// Builds the DATABASE_URL from DatabaseConfig
///
/// # Arguments
///
/// * `config` - The database configuration to use
///
/// # Returns
///
/// A PostgreSQL connection URL string.
pub fn build_database_url(config: &DatabaseConfig) -> String {
    // Percent-encode username and password for PostgreSQL URI
    let encoded_username = percent_encode_userinfo(&config.username);
    let encoded_password = percent_encode_userinfo(&config.password);
    format!(
        "postgres://{}:{}@{}:{}/{}?sslmode={}",
        encoded_username, encoded_password, config.host, config.port, config.database, config.ssl_mode
    )
}

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Percent-encoding for username/password in PostgreSQL URIs.
///
/// Everything except unreserved characters is encoded as UTF-8 bytes.
fn percent_encode_userinfo(s: &str) -> String {
    let mut result = String::with_capacity(s.len().saturating_mul(3));
    for c in s.chars() {
        if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~') {
            result.push(c);
        }
        else {
            let mut buf = [0u8; 4];
            for byte in c.encode_utf8(&mut buf).as_bytes() {
                result.push('%');
                result.push(char::from(HEX_DIGITS[(byte >> 4) as usize]));
                result.push(char::from(HEX_DIGITS[(byte & 15) as usize]));
            }
        }
    }
    result
}
