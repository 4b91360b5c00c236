//! Configuration file parsing utilities

use std::fs;
use std::path::Path;

use crate::error::{DependorError, Result, ResultExt};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Raw shape of `dependor.json`.
///
/// Recognised keys are `ignorePatterns` and `pathAliases`; everything else
/// is collected verbatim so downstream tools can store their own sections in
/// the same file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawConfig {
    pub ignore_patterns: Option<Vec<String>>,
    pub path_aliases: Option<std::collections::HashMap<String, String>>,
    #[serde(flatten)]
    pub custom: Map<String, Value>,
}

/// Parse a `dependor.json` file into a raw configuration
pub fn parse_config_file<P: AsRef<Path>>(path: P) -> Result<RawConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| DependorError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config_content(&content, path)
}

/// Parse configuration content into a raw configuration
pub fn parse_config_content<P: AsRef<Path>>(content: &str, path: P) -> Result<RawConfig> {
    serde_json::from_str(content).map_err(|source| DependorError::ConfigParse {
        path: path.as_ref().to_path_buf(),
        source,
    })
}

/// Compile ignore patterns, failing on the first malformed glob
pub fn compile_patterns(patterns: &[String]) -> Result<Vec<glob::Pattern>> {
    patterns
        .iter()
        .map(|pattern| {
            glob::Pattern::new(pattern)
                .with_context(|| format!("Invalid ignore pattern '{}'", pattern))
        })
        .collect()
}
