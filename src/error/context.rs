//! Error context and reporting utilities

use crate::error::{DependorError, ErrorSeverity, Result};

/// Extension trait for Result to add context to errors
pub trait ResultExt<T, E> {
    /// Add context to an error with a custom message
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display,
    {
        self.map_err(|err| DependorError::Config {
            message: format!("{}: {}", context(), err),
        })
    }
}

/// Handle an error based on its severity
///
/// Warnings and errors are logged to stderr and swallowed; critical errors
/// are logged and returned so the caller can surface them.
pub fn handle_error(err: DependorError) -> Option<DependorError> {
    let severity = err.severity();
    let message = err.user_message();

    match severity {
        ErrorSeverity::Warning => {
            eprintln!("Warning: {}", message);
            None
        }
        ErrorSeverity::Error => {
            eprintln!("Error: {}", message);
            None
        }
        ErrorSeverity::Critical => {
            eprintln!("Critical Error: {}", message);
            Some(err)
        }
    }
}
