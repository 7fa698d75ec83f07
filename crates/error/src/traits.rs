//! # Error Traits
//!
//! Conversion traits for error handling.

use crate::{AppError, Result};

/// Extension methods for Result types.
pub trait ResultExt<T> {
    fn with_context<C: ToString>(self, context: C) -> Result<T>;
    fn context<C: ToString>(self, context: C) -> Result<T>
    where
        Self: Sized;
    fn log_error(self) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<AppError> + std::fmt::Display,
{
    fn with_context<C: ToString>(self, context: C) -> Result<T> {
        self.map_err(|e| {
            let err: AppError = e.into();
            err.context(context)
        })
    }

    fn context<C: ToString>(self, context: C) -> Result<T>
    where
        Self: Sized,
    {
        self.with_context(context)
    }

    fn log_error(self) -> Result<T> {
        self.map_err(|e| {
            let err: AppError = e.into();
            tracing::error!(error = %err, code = err.code(), "Error occurred");
            err
        })
    }
}
