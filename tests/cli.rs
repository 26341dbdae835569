//! End-to-end tests for the `rdocsite` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn rdocsite() -> Command {
    Command::cargo_bin("rdocsite").unwrap()
}

#[test]
fn emit_writes_default_configuration() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("config.json");

    rdocsite()
        .args(["emit", "--output"])
        .arg(&output)
        .assert()
        .success();

    let written = fs::read_to_string(&output).unwrap();
    let value: serde_json::Value =
        serde_json::from_str(&written).unwrap();
    assert_eq!(value["title"], "R language");
    assert_eq!(value["themeConfig"]["sidebar"][6], "/R-FAQ");
}

#[test]
fn emit_uses_sidebar_data_file() {
    let temp_dir = TempDir::new().unwrap();
    let sidebar = temp_dir.path().join("sidebar.json");
    let output = temp_dir.path().join("config.json");
    fs::write(&sidebar, r#"["/a", "/b"]"#).unwrap();

    rdocsite()
        .args(["emit", "--compact", "--sidebar"])
        .arg(&sidebar)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let written = fs::read_to_string(&output).unwrap();
    let value: serde_json::Value =
        serde_json::from_str(&written).unwrap();
    assert_eq!(
        value["themeConfig"]["sidebar"],
        serde_json::json!(["/a", "/b"])
    );
}

#[test]
fn check_reports_entry_count() {
    let temp_dir = TempDir::new().unwrap();
    let sidebar = temp_dir.path().join("sidebar.json");
    fs::write(&sidebar, r#"["/R-intro", "/R-lang"]"#).unwrap();

    rdocsite()
        .args(["check", "--sidebar"])
        .arg(&sidebar)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 sidebar entries"));
}

#[test]
fn check_fails_on_malformed_source() {
    let temp_dir = TempDir::new().unwrap();
    let sidebar = temp_dir.path().join("sidebar.json");
    fs::write(&sidebar, r#"{"not": "an array"}"#).unwrap();

    rdocsite()
        .args(["check", "--sidebar"])
        .arg(&sidebar)
        .assert()
        .failure()
        .stderr(predicate::str::contains("data source error"));
}

#[test]
fn missing_subcommand_shows_help() {
    rdocsite()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
