//! Error handling traits

use super::types::{Error, Result};

/// Extension trait for Result types
pub trait ResultExt<T, E>: Sized {
    /// Add context to an error when converting to Error
    fn with_context(self, context: &'static str) -> Result<T>
    where
        E: Into<Error>;

    /// Map any error to [`Error::Fail`] carrying its display text
    fn or_fail(self, context: &'static str) -> Result<T>
    where
        E: core::fmt::Display;
}

impl<T, E> ResultExt<T, E> for core::result::Result<T, E> {
    fn with_context(self, context: &'static str) -> Result<T>
    where
        E: Into<Error>,
    {
        self.map_err(|e| e.into().with_context(context))
    }

    fn or_fail(self, context: &'static str) -> Result<T>
    where
        E: core::fmt::Display,
    {
        self.map_err(|e| Error::fail(context, e.to_string()))
    }
}
