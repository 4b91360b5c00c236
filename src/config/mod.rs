//! Configuration management
//!
//! The configuration view over `dependor.json`: an ignore predicate for the
//! walker, alias substitution for the resolver, and pass-through access to
//! unrecognised sections. A missing or unreadable config file falls back to
//! defaults and is logged; only a malformed glob pattern is fatal.

pub mod parser;
#[cfg(test)]
mod tests;

use std::collections::HashMap;
use std::path::Path;

use crate::error::Result;
use serde_json::{Map, Value};

pub use parser::{parse_config_content, parse_config_file, RawConfig};

/// Name of the configuration file looked up in the scan root
pub const CONFIG_FILE_NAME: &str = "dependor.json";

/// Ignore pattern applied when no config file provides one
pub const DEFAULT_IGNORE_PATTERN: &str = "**/node_modules";

/// Immutable configuration view consulted by the walker and the resolver
#[derive(Debug)]
pub struct Config {
    ignore_patterns: Vec<String>,
    compiled_patterns: Vec<glob::Pattern>,
    path_aliases: HashMap<String, String>,
    custom: Map<String, Value>,
}

impl Config {
    /// Load `dependor.json` from `root`, falling back to defaults when the
    /// file is absent, unreadable or unparseable
    pub fn load(root: &Path) -> Result<Config> {
        let config_path = root.join(CONFIG_FILE_NAME);
        if !config_path.is_file() {
            return Self::default_config();
        }

        match parser::parse_config_file(&config_path) {
            Ok(raw) => Self::from_raw(raw),
            Err(err) => {
                eprintln!(
                    "Warning: {}. Falling back to the default configuration.",
                    err.user_message()
                );
                Self::default_config()
            }
        }
    }

    /// Build a configuration from an already-parsed raw config
    pub fn from_raw(raw: RawConfig) -> Result<Config> {
        let ignore_patterns = raw
            .ignore_patterns
            .unwrap_or_else(|| vec![DEFAULT_IGNORE_PATTERN.to_string()]);
        let compiled_patterns = parser::compile_patterns(&ignore_patterns)?;

        Ok(Config {
            ignore_patterns,
            compiled_patterns,
            path_aliases: raw.path_aliases.unwrap_or_default(),
            custom: raw.custom,
        })
    }

    fn default_config() -> Result<Config> {
        Self::from_raw(RawConfig::default())
    }

    /// True when `path` matches any configured ignore glob.
    /// `**` matches zero or more leading segments, so the default pattern
    /// `**/node_modules` prunes `node_modules` at any depth.
    pub fn should_ignore(&self, path: &str) -> bool {
        self.compiled_patterns
            .iter()
            .any(|pattern| pattern.matches(path))
    }

    /// Replace the first alias that prefixes `path` with its mapping.
    /// Alias iteration order is unspecified; aliases are expected to be
    /// mutually non-prefix.
    pub fn replace_aliases(&self, path: &str) -> String {
        for (alias, replacement) in &self.path_aliases {
            if path.starts_with(alias.as_str()) {
                return path.replacen(alias.as_str(), replacement, 1);
            }
        }
        path.to_string()
    }

    /// JSON-encoded bytes of one unrecognised top-level section, if present
    pub fn custom(&self, section: &str) -> Result<Option<Vec<u8>>> {
        match self.custom.get(section) {
            Some(value) => Ok(Some(serde_json::to_vec(value)?)),
            None => Ok(None),
        }
    }

    /// JSON-encoded bytes of all unrecognised top-level keys
    pub fn custom_config(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(&self.custom)?)
    }

    /// The configured ignore patterns
    pub fn ignore_patterns(&self) -> &[String] {
        &self.ignore_patterns
    }

    /// The configured alias table
    pub fn path_aliases(&self) -> &HashMap<String, String> {
        &self.path_aliases
    }
}

impl Default for Config {
    fn default() -> Self {
        // The default patterns always compile
        Self::default_config().expect("default configuration is valid")
    }
}
