//! Import resolution and adjacency construction
//!
//! Runs after the driver hands over the complete token table. Three phases:
//! extension resolution (aliases, extensionless imports, index barrels),
//! barrel fill-in (expanding `export * from` inside index files), and edge
//! construction (routing identifiers imported through a barrel to the file
//! that actually defines them).

use crate::config::Config;
use crate::models::graph::DependencyGraph;
use crate::models::token::FileToken;
use crate::utils::paths::is_index_file;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Candidate suffixes tried in order when an import has no extension
const EXTENSION_CANDIDATES: [&str; 8] = [
    ".js",
    ".ts",
    ".jsx",
    ".tsx",
    "/index.js",
    "/index.ts",
    "/index.jsx",
    "/index.tsx",
];

/// Resolves a token table into the final dependency graph
pub struct Resolver {
    tokens: HashMap<String, FileToken>,
    config: Arc<Config>,
}

impl Resolver {
    /// Take ownership of the complete token table
    pub fn new(tokens: HashMap<String, FileToken>, config: Arc<Config>) -> Self {
        Self { tokens, config }
    }

    /// Run all three phases and produce the adjacency list
    pub fn resolve(mut self) -> DependencyGraph {
        self.resolve_extensions();
        self.expand_barrels();
        self.build_edges()
    }

    /// Phase A: rewrite every import path, re-export path and re-export-map
    /// entry into its canonical form. Aliases are substituted first, then
    /// the candidate suffixes are tried against the token table; the first
    /// hit wins. Paths that resolve to nothing on disk (external modules)
    /// keep their alias-substituted form.
    ///
    /// Running this phase on already-resolved input is a no-op.
    fn resolve_extensions(&mut self) {
        let known_paths: HashSet<String> = self.tokens.keys().cloned().collect();

        for token in self.tokens.values_mut() {
            let mut resolved_imports: HashMap<String, Vec<String>> =
                HashMap::with_capacity(token.imports.len());
            for (path, idents) in token.imports.drain() {
                let resolved = with_extension(&known_paths, &self.config, &path);
                resolved_imports.entry(resolved).or_default().extend(idents);
            }
            token.imports = resolved_imports;

            if token.re_exports.is_empty() {
                continue;
            }

            for path in token.re_exports.iter_mut() {
                let resolved = with_extension(&known_paths, &self.config, path.as_str());
                *path = resolved;
            }

            // Wildcard entries are keyed by path and need the key resolved so
            // barrel expansion can find the target; named entries carry the
            // path on the value side.
            let mut resolved_map = HashMap::with_capacity(token.re_export_map.len());
            for (key, value) in token.re_export_map.drain() {
                if value == "*" {
                    resolved_map.insert(with_extension(&known_paths, &self.config, &key), value);
                } else {
                    resolved_map.insert(key, with_extension(&known_paths, &self.config, &value));
                }
            }
            token.re_export_map = resolved_map;
        }
    }

    /// Phase B: expand `export * from './x'` entries inside index files so
    /// every identifier the target exports routes through the barrel to the
    /// target. Re-exports from non-index files are captured but not
    /// expanded.
    fn expand_barrels(&mut self) {
        let mut additions: Vec<(String, Vec<(String, String)>)> = Vec::new();

        for token in self.tokens.values() {
            if token.re_export_map.is_empty() || !is_index_file(&token.file_path) {
                continue;
            }

            let mut entries = Vec::new();
            for re_export_path in &token.re_exports {
                if !token.re_export_map.contains_key(re_export_path) {
                    continue;
                }
                if let Some(target) = self.tokens.get(re_export_path) {
                    for export in &target.exports {
                        entries.push((export.clone(), re_export_path.clone()));
                    }
                }
            }

            if !entries.is_empty() {
                additions.push((token.file_path.clone(), entries));
            }
        }

        for (barrel, entries) in additions {
            if let Some(token) = self.tokens.get_mut(&barrel) {
                token.re_export_map.extend(entries);
            }
        }
    }

    /// Phase C: build the adjacency list. Imports of non-index files edge
    /// directly; imports of index files resolve each identifier through the
    /// barrel's own exports or its re-export map.
    fn build_edges(&self) -> DependencyGraph {
        let mut graph = DependencyGraph::new();

        for token in self.tokens.values() {
            let mut edges: Vec<String> = Vec::new();
            let mut seen: HashSet<String> = HashSet::new();

            for (import_path, idents) in &token.imports {
                if is_index_file(import_path) && self.tokens.contains_key(import_path) {
                    for edge in self.resolve_index_import(import_path, idents) {
                        if seen.insert(edge.clone()) {
                            edges.push(edge);
                        }
                    }
                } else if seen.insert(import_path.clone()) {
                    edges.push(import_path.clone());
                }
            }

            graph.insert(token.file_path.clone(), edges);
        }

        graph
    }

    /// Route each imported identifier through an index file: identifiers the
    /// barrel exports itself edge to the barrel, re-exported identifiers
    /// edge to their source file, unknown identifiers add nothing.
    fn resolve_index_import(&self, path: &str, idents: &[String]) -> Vec<String> {
        let token = &self.tokens[path];
        let mut resolved: Vec<String> = Vec::new();

        for ident in idents {
            let target = if token.exports.contains(ident) {
                path
            } else if let Some(source) = token.re_export_map.get(ident) {
                source.as_str()
            } else {
                continue;
            };
            if !resolved.iter().any(|edge| edge == target) {
                resolved.push(target.to_string());
            }
        }

        resolved
    }
}

/// Resolve aliases and find the canonical on-disk form of an import path
fn with_extension(known_paths: &HashSet<String>, config: &Config, path: &str) -> String {
    let path = config.replace_aliases(path);
    for extension in EXTENSION_CANDIDATES {
        let candidate = format!("{}{}", path, extension);
        if known_paths.contains(&candidate) {
            return candidate;
        }
    }
    path
}
