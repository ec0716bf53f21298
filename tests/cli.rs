//! Integration tests for the nixci binary

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const VALID_DRAFT: &str = r#"{
  "firstName": "Ada",
  "lastName": "Lovelace",
  "email": "ada@example.com",
  "password": "Abcdef1!",
  "accountType": "soleTrader"
}"#;

fn nixci(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("nixci").unwrap();
    cmd.env("NIXCI_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn validate_accepts_complete_draft() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("draft.json");
    fs::write(&path, VALID_DRAFT).unwrap();

    nixci(&dir)
        .arg("validate")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Draft is valid."));
}

#[test]
fn validate_reports_weak_password() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("draft.yaml");
    fs::write(
        &path,
        "firstName: Ada\nlastName: Lovelace\nemail: a@b.co\npassword: abc\naccountType: worker\n",
    )
    .unwrap();

    nixci(&dir)
        .arg("validate")
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("weak password"))
        .stderr(predicate::str::contains("Draft rejected at 1 step(s)"));
}

#[test]
fn validate_honours_format_flag() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("draft.txt");
    fs::write(&path, "firstName: Ada\n").unwrap();

    nixci(&dir)
        .args(["validate", "--format", "yaml"])
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("lastName"));
}

#[test]
fn submissions_empty_log() {
    let dir = TempDir::new().unwrap();

    nixci(&dir)
        .arg("submissions")
        .assert()
        .success()
        .stdout(predicate::str::contains("No submissions found."));
}

#[test]
fn init_then_config_shows_paths() {
    let dir = TempDir::new().unwrap();

    nixci(&dir).arg("init").assert().success();
    assert!(dir.path().join("config.json").exists());

    nixci(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Default language: English"))
        .stdout(predicate::str::contains("submissions.log"));
}
