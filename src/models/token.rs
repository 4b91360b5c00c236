//! Per-file lexer output

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Everything the lexer extracts from one source file.
///
/// Paths are slash-separated strings; relative import strings have already
/// been joined against the file's directory. The reserved identifiers
/// `"default"` (default imports/exports) and `"*"` (namespace imports and
/// wildcard re-exports) follow the conventions of the resolver:
/// `re_export_map` maps a named identifier to the path that provides it,
/// while a wildcard re-export is keyed by the path itself with value `"*"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileToken {
    /// The path the lexer was invoked with
    pub file_path: String,

    /// Import path -> identifiers imported from it (in source order).
    /// Multiple imports of the same path accumulate; a bare side-effect
    /// import or `require` leaves the list empty.
    pub imports: HashMap<String, Vec<String>>,

    /// Identifiers this file exports as its own names
    pub exports: Vec<String>,

    /// Paths appearing in `export ... from '...'` forms
    pub re_exports: Vec<String>,

    /// Re-exported identifier -> source path, plus `path -> "*"` entries
    /// for wildcard re-exports
    pub re_export_map: HashMap<String, String>,
}

impl FileToken {
    /// An empty token for `file_path`
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            ..Self::default()
        }
    }

    /// True when the file neither imports nor exports anything
    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
            && self.exports.is_empty()
            && self.re_exports.is_empty()
            && self.re_export_map.is_empty()
    }
}
