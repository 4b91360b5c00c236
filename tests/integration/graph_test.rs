//! End-to-end graph construction over an on-disk source tree

use dependor::models::config::Settings;
use dependor::models::graph::DependencyGraph;
use dependor::GraphDriver;
use std::fs;
use tempfile::{tempdir, TempDir};

/// Build a source tree shaped like a small real project: relative imports,
/// bare specifiers, an alias, a wildcard barrel and an ignored node_modules.
fn build_test_tree() -> TempDir {
    let dir = tempdir().unwrap();
    let files: &[(&str, &str)] = &[
        (
            "dependor.json",
            r#"{
                "ignorePatterns": ["**/node_modules"],
                "pathAliases": { "~": "util" },
                "whyOptions": { "maxDepth": 3 }
            }"#,
        ),
        (
            "a.js",
            "import { rexc, rexb } from './re-exports';\nimport foo from 'foo';\n",
        ),
        ("b.ts", "import foo from 'foo';\nexport const b = 1;\n"),
        (
            "util/c.js",
            "const _ = require('lodash');\nimport { b } from '../b';\nexport function c() {}\n",
        ),
        (
            "src/components/d.jsx",
            "import React from 'react';\nimport { i } from './i/i.jsx';\nimport { c } from '~/c';\n",
        ),
        ("src/components/i/i.jsx", "export const i = 1;\n"),
        (
            "src/components/sibling/fromSibling.js",
            "import { own } from '../i';\n",
        ),
        (
            "src/components/i/index.js",
            "export const own = 1;\nexport * from './i.jsx';\n",
        ),
        (
            "re-exports/index.js",
            "export { rexb } from './rexb';\nexport * from './rexc';\n",
        ),
        ("re-exports/rexb.js", "export const rexb = 1;\n"),
        ("re-exports/rexc.js", "export const rexc = 1;\n"),
        (
            "node_modules/lodash/index.js",
            "export const shouldNotAppear = 1;\n",
        ),
    ];

    for (path, contents) in files {
        let full = dir.path().join(path);
        fs::create_dir_all(full.parent().unwrap()).unwrap();
        fs::write(full, contents).unwrap();
    }
    dir
}

fn sorted_nodes(graph: &DependencyGraph) -> Vec<(String, Vec<String>)> {
    let mut nodes: Vec<(String, Vec<String>)> = graph
        .iter()
        .map(|(node, edges)| {
            let mut edges = edges.clone();
            edges.sort();
            (node.clone(), edges)
        })
        .collect();
    nodes.sort();
    nodes
}

fn expected_tree() -> Vec<(String, Vec<String>)> {
    let expected: &[(&str, &[&str])] = &[
        ("a.js", &["foo", "re-exports/rexb.js", "re-exports/rexc.js"]),
        ("b.ts", &["foo"]),
        ("re-exports/index.js", &[]),
        ("re-exports/rexb.js", &[]),
        ("re-exports/rexc.js", &[]),
        (
            "src/components/d.jsx",
            &["react", "src/components/i/i.jsx", "util/c.js"],
        ),
        ("src/components/i/i.jsx", &[]),
        ("src/components/i/index.js", &[]),
        (
            "src/components/sibling/fromSibling.js",
            &["src/components/i/index.js"],
        ),
        ("util/c.js", &["b.ts", "lodash"]),
    ];
    expected
        .iter()
        .map(|(node, edges)| {
            let mut edges: Vec<String> = edges.iter().map(|edge| edge.to_string()).collect();
            edges.sort();
            (node.to_string(), edges)
        })
        .collect()
}

#[test]
fn test_parse_full_tree() {
    let dir = build_test_tree();
    let driver = GraphDriver::new(Settings::with_root(dir.path())).unwrap();
    let graph = driver.parse().unwrap();

    assert_eq!(sorted_nodes(&graph), expected_tree());
}

#[test]
fn test_sync_parse_matches_parallel() {
    let dir = build_test_tree();

    let parallel = GraphDriver::new(Settings::with_root(dir.path()))
        .unwrap()
        .parse()
        .unwrap();
    let sync = GraphDriver::new(Settings {
        parallel: false,
        ..Settings::with_root(dir.path())
    })
    .unwrap()
    .parse()
    .unwrap();

    assert_eq!(sorted_nodes(&parallel), sorted_nodes(&sync));
}

#[test]
fn test_no_node_modules_files_in_graph() {
    let dir = build_test_tree();
    let graph = GraphDriver::new(Settings::with_root(dir.path()))
        .unwrap()
        .parse()
        .unwrap();

    assert!(graph.nodes().all(|node| !node.contains("node_modules")));
}

#[test]
fn test_barrel_import_links_to_defining_file() {
    let dir = build_test_tree();
    let graph = GraphDriver::new(Settings::with_root(dir.path()))
        .unwrap()
        .parse()
        .unwrap();

    // rexc comes through `export * from './rexc'`, rexb through a named
    // re-export; neither edge stops at the barrel
    let edges = graph.get("a.js").expect("a.js should be in the graph");
    assert!(edges.contains(&"re-exports/rexc.js".to_string()));
    assert!(edges.contains(&"re-exports/rexb.js".to_string()));
    assert!(!edges.contains(&"re-exports/index.js".to_string()));
}

#[test]
fn test_alias_routes_into_the_tree() {
    let dir = build_test_tree();
    let graph = GraphDriver::new(Settings::with_root(dir.path()))
        .unwrap()
        .parse()
        .unwrap();

    let edges = graph.get("src/components/d.jsx").unwrap();
    assert!(edges.contains(&"util/c.js".to_string()));
}

#[test]
fn test_reverse_edges_round_trip() {
    let dir = build_test_tree();
    let graph = GraphDriver::new(Settings::with_root(dir.path()))
        .unwrap()
        .parse()
        .unwrap();

    let mut original: Vec<(String, String)> = graph
        .iter()
        .flat_map(|(node, edges)| edges.iter().map(move |edge| (node.clone(), edge.clone())))
        .collect();
    let mut doubled: Vec<(String, String)> = graph
        .reverse_edges()
        .reverse_edges()
        .iter()
        .flat_map(|(node, edges)| edges.iter().map(move |edge| (node.clone(), edge.clone())))
        .collect();

    original.sort();
    doubled.sort();
    assert_eq!(original, doubled);
}
