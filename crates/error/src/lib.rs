//! # Storefront Error Infrastructure
//!
//! Error types shared by the storefront crates.

pub mod traits;

pub use traits::ResultExt;

/// Convenience type alias for Result with AppError.
pub type Result<T, E = AppError> = std::result::Result<T, E>;

/// Main application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("NotFound: {message}")]
    NotFound {
        message: String,
    },

    #[error("Conflict: {message}")]
    Conflict {
        message: String,
    },

    #[error("Validation: {message}")]
    Validation {
        message: String,
    },

    #[error("Internal: {message}")]
    Internal {
        message: String,
    },

    #[error("Database: {message}")]
    Database {
        message: String,
    },

    #[error("IO: {message}")]
    Io {
        message: String,
    },

    #[error("Config: {message}")]
    Config {
        message: String,
    },

    #[error("Migration: {message}")]
    Migration {
        message: String,
    },
}

impl AppError {
    /// Create a not found error.
    #[inline]
    pub fn not_found(resource: impl ToString) -> Self {
        Self::NotFound {
            message: resource.to_string(),
        }
    }

    /// Create a conflict error.
    #[inline]
    pub fn conflict(message: impl ToString) -> Self {
        Self::Conflict {
            message: message.to_string(),
        }
    }

    /// Create a validation error.
    #[inline]
    pub fn validation(message: impl ToString) -> Self {
        Self::Validation {
            message: message.to_string(),
        }
    }

    /// Create an internal error.
    #[inline]
    pub fn internal(message: impl ToString) -> Self {
        Self::Internal {
            message: message.to_string(),
        }
    }

    /// Create a database error.
    #[inline]
    pub fn database(message: impl ToString) -> Self {
        Self::Database {
            message: message.to_string(),
        }
    }

    /// Create a config error.
    #[inline]
    pub fn config(message: impl ToString) -> Self {
        Self::Config {
            message: message.to_string(),
        }
    }

    /// Create a migration error.
    #[inline]
    pub fn migration(message: impl ToString) -> Self {
        Self::Migration {
            message: message.to_string(),
        }
    }

    /// Get the error code.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound {
                ..
            } => "NOT_FOUND",
            AppError::Conflict {
                ..
            } => "CONFLICT",
            AppError::Validation {
                ..
            } => "VALIDATION_ERROR",
            AppError::Internal {
                ..
            } => "INTERNAL_ERROR",
            AppError::Database {
                ..
            } => "DATABASE_ERROR",
            AppError::Io {
                ..
            } => "IO_ERROR",
            AppError::Config {
                ..
            } => "CONFIG_ERROR",
            AppError::Migration {
                ..
            } => "MIGRATION_ERROR",
        }
    }

    /// Get the error message.
    pub fn message(&self) -> String {
        match self {
            AppError::NotFound {
                message,
            }
            | AppError::Conflict {
                message,
            }
            | AppError::Validation {
                message,
            }
            | AppError::Internal {
                message,
            }
            | AppError::Database {
                message,
            }
            | AppError::Io {
                message,
            }
            | AppError::Config {
                message,
            }
            | AppError::Migration {
                message,
            } => message.clone(),
        }
    }

    /// Returns true for errors the seeder treats as fatal to a run.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            AppError::Conflict {
                ..
            }
        )
    }

    /// Add context to the error.
    #[inline]
    pub fn context(self, context: impl ToString) -> Self {
        let prefix = |message: String| format!("{}: {}", context.to_string(), message);
        match self {
            AppError::NotFound {
                message,
            } => {
                Self::NotFound {
                    message: prefix(message),
                }
            },
            AppError::Conflict {
                message,
            } => {
                Self::Conflict {
                    message: prefix(message),
                }
            },
            AppError::Validation {
                message,
            } => {
                Self::Validation {
                    message: prefix(message),
                }
            },
            AppError::Internal {
                message,
            } => {
                Self::Internal {
                    message: prefix(message),
                }
            },
            AppError::Database {
                message,
            } => {
                Self::Database {
                    message: prefix(message),
                }
            },
            AppError::Io {
                message,
            } => {
                Self::Io {
                    message: prefix(message),
                }
            },
            AppError::Config {
                message,
            } => {
                Self::Config {
                    message: prefix(message),
                }
            },
            AppError::Migration {
                message,
            } => {
                Self::Migration {
                    message: prefix(message),
                }
            },
        }
    }
}

/// Convert anyhow errors to AppError.
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal {
            message: err.to_string(),
        }
    }
}

/// Convert std::io errors to AppError.
impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
        }
    }
}

/// Convert Sea-ORM database errors to AppError.
///
/// Unique constraint violations become `Conflict` so callers can decide
/// whether the collision is recoverable. Missing rows become `NotFound`.
impl From<sea_orm::DbErr> for AppError {
    fn from(err: sea_orm::DbErr) -> Self {
        if let sea_orm::DbErr::RecordNotFound(what) = &err {
            return Self::not_found(what);
        }
        if matches!(err, sea_orm::DbErr::RecordNotUpdated) {
            return Self::not_found("Record to update");
        }
        match err.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(detail)) => {
                Self::Conflict {
                    message: detail,
                }
            },
            _ => {
                Self::Database {
                    message: err.to_string(),
                }
            },
        }
    }
}
