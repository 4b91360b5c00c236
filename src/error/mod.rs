//! Error handling for dependor
//!
//! Provides the error enum, result alias, severity triage and reporting
//! helpers used throughout the crate.

pub mod context;
pub mod types;

pub use context::{handle_error, ResultExt};
pub use types::{DependorError, ErrorSeverity, Result};
