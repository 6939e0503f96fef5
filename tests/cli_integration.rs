//! Integration tests for the belgianlake binary.
//!
//! Only paths that finish without an interactive terminal are covered here:
//! utility commands and store failures, which are reported before the editor
//! takes over the screen.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command with configuration isolated from the user's real files.
fn belgianlake(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("belgianlake").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env_remove("BELGIANLAKE_FILE")
        .env_remove("BELGIANLAKE_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_version_command() {
    let home = tempfile::tempdir().unwrap();
    belgianlake(&home)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "belgianlake {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn test_version_json() {
    let home = tempfile::tempdir().unwrap();
    belgianlake(&home)
        .args(["--json", "version"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""name": "belgianlake""#));
}

#[test]
fn test_missing_store_exits_not_found() {
    let home = tempfile::tempdir().unwrap();
    let missing = home.path().join("nope.jsonl");

    belgianlake(&home)
        .arg("--file")
        .arg(&missing)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_store_from_environment() {
    let home = tempfile::tempdir().unwrap();
    let missing = home.path().join("from-env.jsonl");

    belgianlake(&home)
        .env("BELGIANLAKE_FILE", &missing)
        .arg("run")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("from-env.jsonl"));
}

#[test]
fn test_malformed_store_exits_format_error() {
    let home = tempfile::tempdir().unwrap();
    let store = home.path().join("data.jsonl");
    std::fs::write(&store, "{\"print\":true,\"file\":\"a\"}\n{\"print\":1}\n").unwrap();

    belgianlake(&home)
        .current_dir(home.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("line 2"));

    // A failed load never rewrites the file.
    assert_eq!(
        std::fs::read_to_string(&store).unwrap(),
        "{\"print\":true,\"file\":\"a\"}\n{\"print\":1}\n"
    );
}

#[test]
fn test_config_init_then_show() {
    let home = tempfile::tempdir().unwrap();
    let config = home.path().join("cfg").join("config.toml");

    belgianlake(&home)
        .args(["config", "init", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));
    assert!(config.exists());

    belgianlake(&home)
        .args(["config", "init", "--config"])
        .arg(&config)
        .assert()
        .code(5)
        .stderr(predicate::str::contains("already exists"));

    belgianlake(&home)
        .args(["config", "show", "--file", "list.jsonl", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("path = \"list.jsonl\""))
        .stdout(predicate::str::contains("undo_limit = 0"));
}

#[test]
fn test_config_path_uses_config_dir() {
    let home = tempfile::tempdir().unwrap();
    belgianlake(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("belgianlake").and(predicate::str::contains("config.toml")));
}

#[test]
fn test_invalid_config_falls_back_to_defaults() {
    let home = tempfile::tempdir().unwrap();
    let config = home.path().join("broken.toml");
    std::fs::write(&config, "this is = = not toml").unwrap();

    belgianlake(&home)
        .args(["config", "show", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stderr(predicate::str::contains("Warning"))
        .stdout(predicate::str::contains("data.jsonl"));
}

#[test]
fn test_completions() {
    let home = tempfile::tempdir().unwrap();
    belgianlake(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("belgianlake"));
}
