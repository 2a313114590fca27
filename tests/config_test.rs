use std::fs;

use serial_test::serial;
use tempfile::TempDir;

use git_release::config::{load_config, Config};

#[test]
fn test_load_explicit_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("release.toml");
    fs::write(
        &path,
        r#"
        [release]
        version_file = "version.txt"
        default_remote = "upstream"
        "#,
    )
    .unwrap();

    let config = load_config(path.to_str()).unwrap();

    assert_eq!(config.release.version_file, "version.txt");
    assert_eq!(config.release.default_remote, "upstream");
}

#[test]
fn test_load_explicit_missing_path_fails() {
    assert!(load_config(Some("/nonexistent/gitrelease.toml")).is_err());
}

#[test]
fn test_load_invalid_toml_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("release.toml");
    fs::write(&path, "release = not valid toml [").unwrap();

    assert!(load_config(path.to_str()).is_err());
}

#[test]
#[serial]
fn test_discovers_config_in_current_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("gitrelease.toml"),
        r#"
        [release]
        default_remote = "fork"
        "#,
    )
    .unwrap();

    let original = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();
    let config = load_config(None);
    std::env::set_current_dir(original).unwrap();

    assert_eq!(config.unwrap().release.default_remote, "fork");
}

#[test]
#[serial]
fn test_defaults_when_no_config_present() {
    let dir = TempDir::new().unwrap();

    let original = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();
    let config = load_config(None);
    std::env::set_current_dir(original).unwrap();

    let config = config.unwrap();
    assert_eq!(config.release.default_remote, "origin");
    assert_eq!(config.release.version_file, "main.go");
}

#[test]
fn test_default_config_matches_unconfigured_behavior() {
    let config = Config::default();
    assert_eq!(config.release.default_remote, "origin");
    assert_eq!(config.matrix.targets.len(), 4);
    assert_eq!(config.matrix.manifests.latest_tag, "latest");
}
