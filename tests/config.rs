use std::fs;
use std::time::Duration;

use catalog_sync::CatalogError;
use catalog_sync::config::{ClientConfig, DEFAULT_ENDPOINT};
use tempfile::tempdir;

#[test]
fn defaults_match_deployment() {
    let config = ClientConfig::default();

    assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(config.timeout(), Duration::from_secs(30));
    assert!(!config.verbose);
    assert_eq!(config.placeholder_image, "placeholder.jpg");
    assert_eq!(config.sharing_host, "drive.google.com");
    config.endpoint_url().expect("default endpoint parses");
}

#[test]
fn json_file_overrides_only_given_keys() {
    let temp_dir = tempdir().expect("temporary directory");
    let path = temp_dir.path().join("catalog.json");
    fs::write(
        &path,
        r#"{"endpoint": "http://localhost:8080/exec", "timeout_ms": 1500, "verbose": true}"#,
    )
    .expect("config written");

    let config = ClientConfig::from_json_file(&path).expect("config loaded");

    assert_eq!(config.endpoint, "http://localhost:8080/exec");
    assert_eq!(config.timeout(), Duration::from_millis(1500));
    assert!(config.verbose);
    assert_eq!(config.placeholder_image, "placeholder.jpg");
}

#[test]
fn unknown_keys_are_rejected() {
    let temp_dir = tempdir().expect("temporary directory");
    let path = temp_dir.path().join("catalog.json");
    fs::write(&path, r#"{"endpiont": "typo"}"#).expect("config written");

    let error = ClientConfig::from_json_file(&path).expect_err("typo rejected");
    assert!(matches!(error, CatalogError::Parse(_)));
}

#[test]
fn missing_file_is_an_io_error() {
    let temp_dir = tempdir().expect("temporary directory");
    let error = ClientConfig::from_json_file(&temp_dir.path().join("absent.json"))
        .expect_err("missing file");
    assert!(matches!(error, CatalogError::Io(_)));
}
