//! Config file tests.
//!
//! Loads `faultline.toml` files from a temporary directory through the
//! prelude, the way downstream crates consume them.

use faultline_common::prelude::*;
use std::fs;
use tempfile::TempDir;

fn write_config(dir: &TempDir, body: &str) -> std::path::PathBuf {
    let path = dir.path().join("faultline.toml");
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn load_full_config() {
    let tmp = TempDir::new().unwrap();
    let path = write_config(
        &tmp,
        r#"
[vector]
chain_separator = " / "
sibling_separator = "; "
group_open = "("
group_close = ")"
"#,
    );

    let config = FaultlineConfig::load_validated(&path).expect("should load successfully");
    assert_eq!(
        config.vector,
        VectorFormat {
            chain_separator: " / ".to_string(),
            sibling_separator: "; ".to_string(),
            group_open: "(".to_string(),
            group_close: ")".to_string(),
        }
    );
}

#[test]
fn missing_vector_section_defaults() {
    let tmp = TempDir::new().unwrap();
    let path = write_config(&tmp, "# nothing configured\n");

    let config = FaultlineConfig::load_validated(&path).unwrap();
    assert_eq!(config.vector, VectorFormat::default());
}

#[test]
fn unknown_section_rejected() {
    let tmp = TempDir::new().unwrap();
    let path = write_config(&tmp, "[registry]\nenabled = true\n");

    let err = FaultlineConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
}

#[test]
fn unbalanced_group_fails_validation() {
    let tmp = TempDir::new().unwrap();
    let path = write_config(&tmp, "[vector]\ngroup_open = \"\"\n");

    let err = FaultlineConfig::load_validated(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError(_)));
    assert!(err.to_string().contains("group_open"));
}

#[test]
fn missing_file_reported() {
    let tmp = TempDir::new().unwrap();
    let err = FaultlineConfig::load(&tmp.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound));
}
