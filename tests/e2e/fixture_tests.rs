use super::helpers::TestProject;
use predicates::prelude::*;

#[test]
fn test_help_and_version() {
    TestProject::bin().arg("--help").assert().success();
    TestProject::bin().arg("--version").assert().success();
}

#[test]
fn test_invalid_format_is_rejected() {
    TestProject::bin()
        .args(["report", ".", "--format", "csv"])
        .assert()
        .code(2);
}

#[test]
fn test_zero_timeout_is_rejected() {
    TestProject::bin()
        .args(["report", ".", "--timeout", "0"])
        .assert()
        .code(2);
    TestProject::bin()
        .args(["check", ".", "--timeout", "0"])
        .assert()
        .code(2);
}

#[test]
fn test_missing_composer_binary() {
    let dir = tempfile::tempdir().unwrap();

    TestProject::bin()
        .arg("report")
        .arg(dir.path())
        .args(["--composer", "/nonexistent/composer"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to run"));
}

#[test]
fn test_config_show_defaults() {
    let dir = tempfile::tempdir().unwrap();

    let output = TestProject::bin()
        .arg("config")
        .arg(dir.path())
        .arg("--show")
        .output()
        .unwrap();
    assert!(output.status.success());

    let config: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(config["composer"], "composer");
    assert_eq!(config["format"], "table");
}
