//! Integration tests for the `typeahead` binary

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Binary pointed at a config path that doesn't exist, so a user config
/// never leaks into the test
fn typeahead(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("typeahead").unwrap();
    cmd.arg("--config").arg(dir.path().join("absent.toml"));
    cmd
}

#[test]
fn test_help_lists_flags() {
    Command::cargo_bin("typeahead")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--target-prop"))
        .stdout(predicate::str::contains("--enforce-list-only"))
        .stdout(predicate::str::contains("--query"));
}

#[test]
fn test_query_prints_exact_match_first() {
    let dir = TempDir::new().unwrap();
    typeahead(&dir)
        .args(["tests/fixtures/skills.json", "--query", "C", "--min-length", "1"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("C\nC++\nC#\nObjective-C\n"));
}

#[test]
fn test_query_below_min_length_prints_nothing() {
    let dir = TempDir::new().unwrap();
    typeahead(&dir)
        .args(["tests/fixtures/skills.json", "--query", "C"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_query_reads_stdin() {
    let dir = TempDir::new().unwrap();
    typeahead(&dir)
        .args(["--query", "rus"])
        .write_stdin(r#"[{"name": "Rust"}, {"name": "Go"}, {"name": "Rustacean"}]"#)
        .assert()
        .success()
        .stdout("Rust\nRustacean\n");
}

#[test]
fn test_query_with_nested_target_prop() {
    let dir = TempDir::new().unwrap();
    typeahead(&dir)
        .args([
            "tests/fixtures/nested.json",
            "--target-prop",
            "skill.label",
            "--query",
            "Kub",
        ])
        .assert()
        .success()
        .stdout("Kubernetes\n");
}

#[test]
fn test_query_uses_config_file() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "[suggestions]\nmin_length = 1\n").unwrap();

    Command::cargo_bin("typeahead")
        .unwrap()
        .arg("--config")
        .arg(&config)
        .args(["tests/fixtures/skills.json", "--query", "Go"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Go\n"));
}

#[test]
fn test_invalid_json_fails() {
    let dir = TempDir::new().unwrap();
    typeahead(&dir)
        .args(["tests/fixtures/invalid.json", "--query", "Rust"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid JSON"));
}

#[test]
fn test_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    typeahead(&dir)
        .args(["tests/fixtures/nonexistent.json", "--query", "Rust"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn test_invalid_target_prop_fails() {
    let dir = TempDir::new().unwrap();
    typeahead(&dir)
        .args(["tests/fixtures/skills.json", "--target-prop", "a[0", "--query", "Rust"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unterminated bracket"));
}
