use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const LISTING: &str = "Name: acme/shop
Version: dev-main
Licenses: proprietary
Dependencies:

Name                  Version  License
doctrine/inflector    2.0.8    MIT
phpseclib/phpseclib   3.0.34   GPL-3.0
psr/log               3.0.0    MIT
twig/twig             v3.8.0   BSD-3-Clause
";

/// A project directory with a fake `composer` that prints a canned listing.
pub struct TestProject {
    pub dir: TempDir,
    composer: PathBuf,
}

impl TestProject {
    pub fn new(listing: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let listing_path = dir.path().join("listing.txt");
        fs::write(&listing_path, listing).expect("Failed to write listing");

        let composer = dir.path().join("fake-composer");
        fs::write(
            &composer,
            format!("#!/bin/sh\ncat '{}'\n", listing_path.display()),
        )
        .expect("Failed to write fake composer");
        make_executable(&composer);

        Self { dir, composer }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_config(&self, content: &str) {
        fs::write(self.dir.path().join("license-checker.toml"), content)
            .expect("Failed to write config");
    }

    /// Run a subcommand against this project with the fake composer
    pub fn run(&self, subcommand: &str, args: &[&str]) -> Command {
        let mut cmd = cargo_bin_cmd!("composer-license-auditor");
        cmd.arg(subcommand)
            .arg(self.dir.path())
            .arg("--composer")
            .arg(&self.composer)
            .args(args)
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn bin() -> Command {
        cargo_bin_cmd!("composer-license-auditor")
    }
}

#[cfg(unix)]
fn make_executable(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
        .expect("Failed to make fake composer executable");
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) {}
