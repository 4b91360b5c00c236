//! dependor - static import graph extraction for JavaScript/TypeScript
//!
//! Given a root directory, dependor walks the source tree, lexes every
//! `.js`/`.jsx`/`.ts`/`.tsx` file in a single pass, resolves aliases,
//! extensionless imports and index barrels, and returns an adjacency list
//! mapping each file to the files it imports. Intended for tooling that
//! reasons about code structure: affected-file detection, related-test
//! selection, dead-code and cycle analysis, build ordering.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod output;
pub mod parsers;
pub mod utils;

// Re-export commonly used types
pub use crate::config::Config;
pub use crate::core::{CancelToken, GraphDriver, Resolver, Walker};
pub use crate::error::{DependorError, ErrorSeverity, Result};
pub use crate::models::{DependencyGraph, FileToken, Settings};
pub use crate::parsers::Lexer;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
