//! Smoke tests for the command-line surface

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn dependor_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_dependor"))
}

fn write_tree(root: &Path, files: &[(&str, &str)]) {
    for (path, contents) in files {
        let full = root.join(path);
        fs::create_dir_all(full.parent().unwrap()).unwrap();
        fs::write(full, contents).unwrap();
    }
}

fn simple_tree(root: &Path) {
    write_tree(
        root,
        &[
            ("a.js", "import { b } from './b';\n"),
            ("b.js", "export const b = 1;\n"),
        ],
    );
}

#[test]
fn test_default_output_is_json_on_stdout() {
    let dir = tempdir().unwrap();
    simple_tree(dir.path());

    let output = dependor_bin().arg(dir.path()).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let graph: HashMap<String, Vec<String>> = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(graph.get("a.js").unwrap(), &vec!["b.js".to_string()]);
    assert!(graph.get("b.js").unwrap().is_empty());
}

#[test]
fn test_write_dumps_to_default_file() {
    let dir = tempdir().unwrap();
    simple_tree(dir.path());

    let output = dependor_bin()
        .arg(".")
        .arg("--write")
        .arg("--quiet")
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let dumped = fs::read_to_string(dir.path().join("dependor-output.json")).unwrap();
    let graph: HashMap<String, Vec<String>> = serde_json::from_str(&dumped).unwrap();
    assert!(graph.contains_key("a.js"));
}

#[test]
fn test_output_file_overrides_default_name() {
    let dir = tempdir().unwrap();
    simple_tree(dir.path());
    let out = dir.path().join("custom.json");

    let output = dependor_bin()
        .arg(dir.path())
        .arg("--output-file")
        .arg(&out)
        .arg("--quiet")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(out.exists());
}

#[test]
fn test_pretty_prints_human_readable_dump() {
    let dir = tempdir().unwrap();
    simple_tree(dir.path());

    let output = dependor_bin()
        .arg(dir.path())
        .arg("--pretty")
        .arg("--no-colors")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("\"a.js\": {"));
    assert!(stdout.contains("  \"b.js\","));
}

#[test]
fn test_nonexistent_root_fails_with_nonzero_exit() {
    let output = dependor_bin()
        .arg("definitely/not/a/real/path")
        .output()
        .unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_malformed_file_still_exits_zero() {
    let dir = tempdir().unwrap();
    write_tree(
        dir.path(),
        &[
            ("good.js", "export const ok = 1;\n"),
            ("broken.js", "import foo from \"./never-closed"),
        ],
    );

    let output = dependor_bin().arg(dir.path()).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let graph: HashMap<String, Vec<String>> = serde_json::from_str(stdout.trim()).unwrap();
    assert!(graph.contains_key("good.js"));
    assert!(!graph.contains_key("broken.js"));
}

#[test]
fn test_no_parallel_matches_parallel_output() {
    let dir = tempdir().unwrap();
    simple_tree(dir.path());

    let parallel = dependor_bin().arg(dir.path()).output().unwrap();
    let sequential = dependor_bin()
        .arg(dir.path())
        .arg("--no-parallel")
        .output()
        .unwrap();

    let parse = |bytes: Vec<u8>| -> HashMap<String, Vec<String>> {
        serde_json::from_str(String::from_utf8(bytes).unwrap().trim()).unwrap()
    };
    assert_eq!(parse(parallel.stdout), parse(sequential.stdout));
}
