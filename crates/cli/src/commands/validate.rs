//! # CLI Validate Command
//!
//! Configuration validation for the storefront CLI.

use error::{AppError, Result};

use crate::config::{DATABASE_URL_VAR, DATABASE_VARS, DatabaseConfig};

/// Validates the CLI configuration from the process environment.
pub fn validate() -> Result<()> { validate_with(|key| std::env::var(key).ok()) }

/// Validates the CLI configuration read through `lookup`.
///
/// Either a database URL or every connection variable must be set, and the
/// values must parse.
pub fn validate_with<F>(lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    let has_url = lookup(DATABASE_URL_VAR).is_some_and(|url| !url.is_empty());
    if !has_url {
        let missing: Vec<&str> = DATABASE_VARS
            .iter()
            .copied()
            .filter(|var| lookup(var).is_none())
            .collect();

        if !missing.is_empty() {
            return Err(AppError::validation(format!(
                "Missing required environment variables: {:?}",
                missing
            )));
        }
    }

    DatabaseConfig::from_lookup(lookup)?;
    tracing::info!(target: "validate", "Configuration is valid");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_alone_is_enough() {
        let result = validate_with(|key| (key == DATABASE_URL_VAR).then(|| "sqlite::memory:".to_string()));
        assert!(result.is_ok());
    }

    #[test]
    fn test_missing_variables() {
        let err = validate_with(|key| (key == "STOREFRONT_DATABASE_HOST").then(|| "db".to_string())).unwrap_err();
        assert_eq!(err.code(), "VALIDATION_ERROR");
        assert!(err.message().contains("STOREFRONT_DATABASE_PORT"));
        assert!(!err.message().contains("STOREFRONT_DATABASE_HOST"));
    }

    #[test]
    fn test_bad_port_is_reported() {
        let err = validate_with(|key| {
            match key {
                "STOREFRONT_DATABASE_PORT" => Some("99999".to_string()),
                k if DATABASE_VARS.contains(&k) => Some("x".to_string()),
                _ => None,
            }
        })
        .unwrap_err();
        assert_eq!(err.code(), "CONFIG_ERROR");
    }
}
