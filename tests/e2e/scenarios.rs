#![cfg(unix)]

use super::helpers::{TestProject, LISTING};
use predicates::prelude::*;

#[test]
fn test_report_table() {
    let project = TestProject::new(LISTING);

    project
        .run("report", &[])
        .assert()
        .success()
        .stdout(predicate::str::contains("License Summary (4 dependencies)"))
        .stdout(predicate::str::contains("│ license"))
        .stdout(predicate::str::contains("│ GPL-3.0"))
        .stdout(predicate::str::contains("License: MIT License (https://spdx.org/licenses/MIT.html)"))
        .stdout(predicate::str::contains("CAN NOT"));
}

#[test]
fn test_report_json() {
    let project = TestProject::new(LISTING);

    let output = project.run("report", &["--format", "json"]).output().unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let summary = report["summary"].as_array().unwrap();
    assert_eq!(summary.len(), 3);
    assert_eq!(summary[0]["license"], "MIT");
    assert_eq!(summary[0]["count"], 2);
    assert_eq!(report["licenses"][2]["identifier"], "BSD-3-Clause");
    assert_eq!(report["dependencies"]["GPL-3.0"][0]["name"], "phpseclib/phpseclib");
}

#[test]
fn test_report_to_file() {
    let project = TestProject::new(LISTING);
    let out = project.path().join("report.txt");

    project
        .run("report", &["--output", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let content = std::fs::read_to_string(out).unwrap();
    assert!(content.contains("BSD 3-Clause"));
}

#[test]
fn test_report_unknown_license_fails_without_output() {
    let project = TestProject::new(&LISTING.replace("BSD-3-Clause", "proprietary"));

    project
        .run("report", &[])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("'proprietary'"));
}

#[test]
fn test_report_with_license_data_file() {
    let project = TestProject::new(&LISTING.replace("BSD-3-Clause", "proprietary"));
    let data = project.path().join("licenses.toml");
    std::fs::write(
        &data,
        r#"
[[license]]
identifier = "MIT"
short_name = "MIT"
source = "internal"

[[license]]
identifier = "GPL-3.0"
short_name = "GPLv3"
source = "internal"
must = ["Disclose source"]

[[license]]
identifier = "proprietary"
short_name = "Proprietary"
source = "internal"
cannot = ["Distribution"]
"#,
    )
    .unwrap();

    project
        .run("report", &["--license-data", data.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("License: Proprietary (internal)"));
}

#[test]
fn test_report_license_data_extends_bundled_data() {
    let project = TestProject::new(&LISTING.replace("BSD-3-Clause", "proprietary"));
    let data = project.path().join("internal-licenses.toml");
    std::fs::write(
        &data,
        r#"
[[license]]
identifier = "proprietary"
short_name = "Proprietary"
source = "internal"
cannot = ["Distribution"]
"#,
    )
    .unwrap();

    project
        .run("report", &["--license-data", data.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("License: MIT License (https://spdx.org/licenses/MIT.html)"))
        .stdout(predicate::str::contains("License: GNU General Public License v3.0"))
        .stdout(predicate::str::contains("License: Proprietary (internal)"));
}

#[test]
fn test_report_dual_licensed_row() {
    let project = TestProject::new(&LISTING.replace("BSD-3-Clause", "BSD-3-Clause, MIT"));

    project
        .run("report", &[])
        .assert()
        .success()
        .stdout(predicate::str::contains("│ BSD-3-Clause,"))
        .stdout(predicate::str::contains("License: BSD 3-Clause"));
}

#[test]
fn test_report_malformed_listing() {
    let project = TestProject::new("Name: acme/shop\nVersion: dev-main\n");

    project
        .run("report", &[])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Could not filter out headers"));
}

#[test]
fn test_check_blacklist_violation() {
    let project = TestProject::new(LISTING);

    project
        .run("check", &["--blacklist", "GPL-3.0"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Blacklisted license found!"))
        .stdout(predicate::str::contains("phpseclib/phpseclib"))
        .stdout(predicate::str::contains("Non white-listed").not());
}

#[test]
fn test_check_whitelist_violation_json() {
    let project = TestProject::new(LISTING);

    let output = project
        .run("check", &["--whitelist", "MIT", "--whitelist", "BSD-3-Clause", "--format", "json", "--exit-zero"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let violations: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(violations[0]["reason"], "Blacklisted license found!");
    assert!(violations[0]["offending_dependencies"].as_array().unwrap().is_empty());
    assert_eq!(violations[1]["reason"], "Non white-listed license found!");
    assert_eq!(violations[1]["offending_dependencies"][0]["license"], "GPL-3.0");
}

#[test]
fn test_check_clean_project() {
    let project = TestProject::new(LISTING);

    project
        .run("check", &["--blacklist", "AGPL-3.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No license violations found"));
}

#[test]
fn test_check_overlapping_lists() {
    let project = TestProject::new(LISTING);

    project
        .run("check", &["--blacklist", "MIT", "--whitelist", "MIT"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("black- and whitelisted at the same time: \"MIT\""));
}

#[test]
fn test_check_uses_configured_policy() {
    let project = TestProject::new(LISTING);
    project.write_config(
        r#"
[policy]
name = "Project policy"
blacklist = ["BSD-3-Clause"]
"#,
    );

    project
        .run("check", &[])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("twig/twig"));
}

#[test]
fn test_check_respects_fail_on_violations() {
    let project = TestProject::new(LISTING);
    project.write_config("fail_on_violations = false\n");

    project
        .run("check", &["--blacklist", "GPL-3.0"])
        .assert()
        .success()
        .stderr(predicate::str::contains("License violations found"));
}

#[test]
fn test_init_and_validate() {
    let project = TestProject::new(LISTING);

    TestProject::bin()
        .args(["init", "yellow"])
        .arg(project.path())
        .assert()
        .success();

    TestProject::bin()
        .arg("config")
        .arg(project.path())
        .arg("--validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));

    project
        .run("check", &[])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Blacklisted license found!"));
}

#[test]
fn test_config_validate_rejects_overlap() {
    let project = TestProject::new(LISTING);
    project.write_config("[policy]\nblacklist = [\"MIT\"]\nwhitelist = [\"MIT\"]\n");

    TestProject::bin()
        .arg("config")
        .arg(project.path())
        .arg("--validate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("\"MIT\""));
}
