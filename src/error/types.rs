//! Error types and definitions for dependor
//!
//! Per-file problems (unreadable files, syntax errors caught by the lexer)
//! are diagnostics: they drop the offending file from the graph but never
//! abort the parse. Configuration and output problems are fatal.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Error severity levels for different error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Warning level errors - operation can continue
    Warning,
    /// Error level - current operation fails but overall process can continue
    Error,
    /// Critical level - process should terminate
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "WARNING"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Main error type for dependor operations
#[derive(Debug, Error)]
pub enum DependorError {
    /// Standard IO errors
    #[error("IO error: {source}")]
    Io {
        #[source]
        source: std::io::Error,
    },

    /// A source file could not be read
    #[error("Error reading {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The lexer hit something it cannot tokenize
    #[error("Syntax error in {file}: {message}")]
    Syntax { file: PathBuf, message: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Configuration file read errors
    #[error("Error reading configuration file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file parse errors
    #[error("Error parsing configuration file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Glob pattern errors
    #[error("Glob pattern error: {source}")]
    GlobPattern {
        #[source]
        source: glob::PatternError,
    },

    /// Invalid path errors
    #[error("Invalid path: {path}")]
    InvalidPath { path: PathBuf },

    /// JSON serialization error
    #[error("JSON serialization error: {source}")]
    JsonSerialize {
        #[source]
        source: serde_json::Error,
    },

    /// Output file write errors
    #[error("Error writing to output file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stdout write errors
    #[error("Error writing to stdout: {source}")]
    StdoutWrite {
        #[source]
        source: std::io::Error,
    },

    /// The parse was cancelled before completion
    #[error("Parse cancelled")]
    Cancelled,
}

impl DependorError {
    /// Get the severity level of this error
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Warning level errors - a single file is dropped, parsing continues
            DependorError::FileRead { .. } => ErrorSeverity::Warning,
            DependorError::Syntax { .. } => ErrorSeverity::Warning,

            // Critical errors - process should terminate
            DependorError::Config { .. } => ErrorSeverity::Critical,
            DependorError::ConfigParse { .. } => ErrorSeverity::Critical,
            DependorError::GlobPattern { .. } => ErrorSeverity::Critical,
            DependorError::InvalidPath { .. } => ErrorSeverity::Critical,
            DependorError::StdoutWrite { .. } => ErrorSeverity::Critical,
            DependorError::OutputWrite { .. } => ErrorSeverity::Critical,
            DependorError::Cancelled => ErrorSeverity::Critical,

            // Regular errors - current operation fails but overall process can continue
            _ => ErrorSeverity::Error,
        }
    }

    /// Check if this is a critical error that should terminate the process
    pub fn is_critical(&self) -> bool {
        self.severity() == ErrorSeverity::Critical
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            DependorError::FileRead { path, source } => {
                format!(
                    "Failed to read '{}': {}. The file is dropped from the graph.",
                    path.display(),
                    source
                )
            }
            DependorError::Syntax { file, message } => {
                format!(
                    "Could not tokenize '{}': {}. The file is dropped from the graph.",
                    file.display(),
                    message
                )
            }
            DependorError::InvalidPath { path } => {
                format!(
                    "Invalid path: '{}'. Please provide a valid directory path.",
                    path.display()
                )
            }
            DependorError::ConfigParse { path, source } => {
                format!(
                    "Invalid JSON in '{}': {}. Fix the config file or remove it to use defaults.",
                    path.display(),
                    source
                )
            }
            DependorError::GlobPattern { source } => {
                format!(
                    "Invalid ignore pattern: {}. Check ignorePatterns in dependor.json.",
                    source
                )
            }
            DependorError::Cancelled => {
                "The parse was cancelled before completion; partial results were discarded."
                    .to_string()
            }
            // For other errors, use the standard Display implementation
            _ => self.to_string(),
        }
    }

    /// Create an IO error
    pub fn io_error(source: std::io::Error) -> Self {
        DependorError::Io { source }
    }

    /// Create a file read error with path context
    pub fn file_read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DependorError::FileRead {
            path: path.into(),
            source,
        }
    }

    /// Create a lexer syntax error with file context
    pub fn syntax_error(file: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        DependorError::Syntax {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        DependorError::Config {
            message: message.into(),
        }
    }
}

// Implement From for common error types
impl From<std::io::Error> for DependorError {
    fn from(err: std::io::Error) -> Self {
        DependorError::io_error(err)
    }
}

impl From<glob::PatternError> for DependorError {
    fn from(err: glob::PatternError) -> Self {
        DependorError::GlobPattern { source: err }
    }
}

impl From<serde_json::Error> for DependorError {
    fn from(err: serde_json::Error) -> Self {
        DependorError::JsonSerialize { source: err }
    }
}

/// Result type alias for dependor operations
pub type Result<T> = std::result::Result<T, DependorError>;
