//! Unit tests for the configuration view

use super::*;
use crate::error::DependorError;
use serde::Deserialize;
use std::fs;
use tempfile::tempdir;

const CONFIG_JSON: &str = r#"{
    "ignorePatterns": ["**/node_modules", "*/noRead.js"],
    "pathAliases": {
        "@monorepo/package": "root/package",
        "~": "root/home"
    },
    "findRelatedTestsOptions": {
        "testPattern": "(.spec.|.test.)(js|jsx|ts|tsx)$"
    }
}"#;

fn test_config() -> Config {
    let raw = parse_config_content(CONFIG_JSON, "dependor.json").unwrap();
    Config::from_raw(raw).unwrap()
}

#[test]
fn test_read_config() {
    let cfg = test_config();
    assert_eq!(
        cfg.ignore_patterns(),
        &["**/node_modules".to_string(), "*/noRead.js".to_string()]
    );
    assert_eq!(
        cfg.path_aliases().get("@monorepo/package"),
        Some(&"root/package".to_string())
    );
    assert_eq!(cfg.path_aliases().get("~"), Some(&"root/home".to_string()));
}

#[test]
fn test_replace_aliases() {
    let cfg = test_config();
    assert_eq!(
        cfg.replace_aliases("@monorepo/package/component/Foo.tsx"),
        "root/package/component/Foo.tsx"
    );
    assert_eq!(cfg.replace_aliases("~/path"), "root/home/path");
    assert_eq!(cfg.replace_aliases("lodash"), "lodash");
}

#[test]
fn test_should_ignore_recursive_glob() {
    let cfg = test_config();
    assert!(cfg.should_ignore("node_modules"));
    assert!(cfg.should_ignore("base/node_modules"));
    assert!(cfg.should_ignore("whoo/this/is/pretty/nested/node_modules"));
    assert!(cfg.should_ignore("base/noRead.js"));
    assert!(!cfg.should_ignore("this/path/is/ok"));
}

#[test]
fn test_custom_section_round_trip() {
    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct FindRelatedTestsOptions {
        test_pattern: String,
    }

    let cfg = test_config();
    let bytes = cfg
        .custom("findRelatedTestsOptions")
        .unwrap()
        .expect("section should be retained");
    let options: FindRelatedTestsOptions = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(options.test_pattern, "(.spec.|.test.)(js|jsx|ts|tsx)$");

    assert!(cfg.custom("missingSection").unwrap().is_none());
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    let cfg = Config::load(dir.path()).unwrap();
    assert_eq!(cfg.ignore_patterns(), &[DEFAULT_IGNORE_PATTERN.to_string()]);
    assert!(cfg.path_aliases().is_empty());
    assert!(cfg.should_ignore("a/b/node_modules"));
}

#[test]
fn test_malformed_json_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(CONFIG_FILE_NAME), "{ not json").unwrap();
    let cfg = Config::load(dir.path()).unwrap();
    assert_eq!(cfg.ignore_patterns(), &[DEFAULT_IGNORE_PATTERN.to_string()]);
}

#[test]
fn test_config_file_in_root_is_loaded() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(CONFIG_FILE_NAME), CONFIG_JSON).unwrap();
    let cfg = Config::load(dir.path()).unwrap();
    assert!(cfg.should_ignore("base/noRead.js"));
    assert_eq!(cfg.replace_aliases("~/x"), "root/home/x");
}

#[test]
fn test_malformed_glob_is_fatal() {
    let raw = parse_config_content(r#"{ "ignorePatterns": ["a["] }"#, "dependor.json").unwrap();
    match Config::from_raw(raw) {
        Err(DependorError::Config { message }) => {
            assert!(message.contains("a["));
        }
        other => panic!("Expected a fatal config error, got {:?}", other),
    }
}
