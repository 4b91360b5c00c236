//! Run-level settings

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings controlling a single dependor run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Root directory of the source tree to parse
    pub root_path: PathBuf,

    /// Whether to dump the graph to `dependor-output.json`
    pub write_output: bool,

    /// Write the graph to this file instead of the default dump name
    pub output_file: Option<PathBuf>,

    /// Whether to print the human-readable dump instead of JSON
    pub pretty: bool,

    /// Whether to lex files on the worker pool
    pub parallel: bool,

    /// Whether to suppress non-essential output
    pub quiet: bool,

    /// Whether to log skipped directories and dropped files
    pub verbose: bool,

    /// Whether to use colors in the pretty dump
    pub use_colors: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            root_path: PathBuf::from("."),
            write_output: false,
            output_file: None,
            pretty: false,
            parallel: true,
            quiet: false,
            verbose: false,
            use_colors: true,
        }
    }
}

impl Settings {
    /// Settings for parsing `root` with everything else defaulted
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root_path: root.into(),
            ..Self::default()
        }
    }
}
