//! Dependency graph data structure

use crate::error::{DependorError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet, VecDeque};
use std::fs;
use std::path::Path;

/// Default file name for `write_to_json_file`
pub const DEFAULT_OUTPUT_FILE: &str = "dependor-output.json";

/// An adjacency list mapping each file path to the file paths it imports.
///
/// The graph may contain cycles (A imports B, B imports A); consumers doing
/// traversals keep their own visited set. Edge order within a node is not
/// part of the contract.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DependencyGraph {
    edges: HashMap<String, Vec<String>>,
}

impl DependencyGraph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the edge list for a node
    pub fn insert(&mut self, node: impl Into<String>, edges: Vec<String>) {
        self.edges.insert(node.into(), edges);
    }

    /// The edge list for a node, if present
    pub fn get(&self, node: &str) -> Option<&[String]> {
        self.edges.get(node).map(|edges| edges.as_slice())
    }

    /// True when the node is part of the graph
    pub fn contains_node(&self, node: &str) -> bool {
        self.edges.contains_key(node)
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// True when the graph has no nodes
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Iterate over `(node, edges)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.edges.iter()
    }

    /// Iterate over node names
    pub fn nodes(&self) -> impl Iterator<Item = &String> {
        self.edges.keys()
    }

    /// Returns a new graph with every edge reversed, mapping each file to
    /// the files that import it
    pub fn reverse_edges(&self) -> DependencyGraph {
        let mut reversed: HashMap<String, Vec<String>> = HashMap::new();
        for (node, edges) in &self.edges {
            for edge in edges {
                reversed.entry(edge.clone()).or_default().push(node.clone());
            }
        }
        DependencyGraph { edges: reversed }
    }

    /// Breadth-first traversal from `starting_node`, calling `visit` on each
    /// reachable node exactly once
    pub fn traverse<F>(&self, starting_node: &str, mut visit: F)
    where
        F: FnMut(&str),
    {
        let mut queue = VecDeque::new();
        let mut seen = HashSet::new();
        queue.push_back(starting_node.to_string());
        seen.insert(starting_node.to_string());

        while let Some(current) = queue.pop_front() {
            visit(&current);
            if let Some(edges) = self.edges.get(&current) {
                for edge in edges {
                    if seen.insert(edge.clone()) {
                        queue.push_back(edge.clone());
                    }
                }
            }
        }
    }

    /// Serialize the graph as a single JSON object
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string(self).map_err(DependorError::from)
    }

    /// Write the graph as JSON to `path`, or to `dependor-output.json` in
    /// the working directory when no path is given
    pub fn write_to_json_file(&self, path: Option<&Path>) -> Result<()> {
        let write_path = path.unwrap_or_else(|| Path::new(DEFAULT_OUTPUT_FILE));
        let json = self.to_json_string()?;
        fs::write(write_path, json).map_err(|source| DependorError::OutputWrite {
            path: write_path.to_path_buf(),
            source,
        })
    }
}

impl FromIterator<(String, Vec<String>)> for DependencyGraph {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        DependencyGraph {
            edges: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(pairs: &[(&str, &[&str])]) -> DependencyGraph {
        pairs
            .iter()
            .map(|(node, edges)| {
                (
                    node.to_string(),
                    edges.iter().map(|edge| edge.to_string()).collect(),
                )
            })
            .collect()
    }

    fn edge_multiset(g: &DependencyGraph) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = g
            .iter()
            .flat_map(|(node, edges)| {
                edges
                    .iter()
                    .map(move |edge| (node.clone(), edge.clone()))
            })
            .collect();
        pairs.sort();
        pairs
    }

    #[test]
    fn test_reverse_edges() {
        let g = graph(&[("goose", &["wild", "chase"])]);
        let reversed = g.reverse_edges();

        assert_eq!(reversed.len(), 2);
        assert_eq!(reversed.get("wild"), Some(&["goose".to_string()][..]));
        assert_eq!(reversed.get("chase"), Some(&["goose".to_string()][..]));
    }

    #[test]
    fn test_double_reverse_is_identity_on_edges() {
        let g = graph(&[
            ("a", &["b", "c"]),
            ("b", &["c"]),
            ("c", &["a"]),
        ]);
        let twice = g.reverse_edges().reverse_edges();
        assert_eq!(edge_multiset(&g), edge_multiset(&twice));
    }

    #[test]
    fn test_traverse_visits_reachable_nodes_once() {
        let g = graph(&[
            ("wild", &["goose"]),
            ("goose", &["chase"]),
            ("chase", &[]),
            ("notRelated", &[]),
        ]);

        let mut visited = Vec::new();
        g.traverse("wild", |node| visited.push(node.to_string()));
        assert_eq!(visited, vec!["wild", "goose", "chase"]);
    }

    #[test]
    fn test_traverse_handles_cycles() {
        let g = graph(&[("a", &["b"]), ("b", &["a"])]);
        let mut visited = Vec::new();
        g.traverse("a", |node| visited.push(node.to_string()));
        assert_eq!(visited, vec!["a", "b"]);
    }

    #[test]
    fn test_json_round_trip() {
        let g = graph(&[("src/a.js", &["src/b.js"])]);
        let json = g.to_json_string().unwrap();
        let parsed: DependencyGraph = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, g);
    }

    #[test]
    fn test_write_to_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("graph.json");
        let g = graph(&[("src/a.js", &["src/b.js"])]);

        g.write_to_json_file(Some(&out)).unwrap();

        let contents = std::fs::read_to_string(&out).unwrap();
        let parsed: DependencyGraph = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed, g);
    }
}
