use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use anyhow::{bail, Context, Result};
use crate::policy::LicensePolicy;

pub const CONFIG_FILE_NAME: &str = "license-checker.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Composer executable used to list licenses
    pub composer: Option<String>,

    /// Output format (table, json)
    pub format: Option<String>,

    /// Seconds to wait for the license listing
    pub timeout_secs: Option<u64>,

    /// TOML file with license metadata, consulted before the bundled data
    pub license_data: Option<PathBuf>,

    /// Exit non-zero when `check` finds violations
    pub fail_on_violations: Option<bool>,

    /// Blacklist / whitelist configuration
    pub policy: Option<LicensePolicy>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            composer: Some("composer".to_string()),
            format: Some("table".to_string()),
            timeout_secs: Some(60),
            license_data: None,
            fail_on_violations: Some(true),
            policy: None,
        }
    }
}

/// Path of the config file for a project directory
pub fn config_path(project_dir: &Path) -> PathBuf {
    project_dir.join(CONFIG_FILE_NAME)
}

/// Load configuration from `license-checker.toml` in the project directory.
///
/// Keys missing from the file fall back to the defaults.
pub fn load_config(project_dir: &Path) -> Result<Config> {
    let path = config_path(project_dir);

    if !path.exists() {
        tracing::debug!(path = %path.display(), "No config file, using defaults");
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let loaded: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    if loaded.timeout_secs == Some(0) {
        bail!("Invalid {}: timeout_secs must be at least 1", path.display());
    }

    let mut config = loaded.merge_defaults();

    // relative dataset paths are relative to the config file
    if let Some(data) = &config.license_data {
        if data.is_relative() {
            config.license_data = Some(project_dir.join(data));
        }
    }

    Ok(config)
}

impl Config {
    fn merge_defaults(self) -> Self {
        let defaults = Config::default();
        Self {
            composer: self.composer.or(defaults.composer),
            format: self.format.or(defaults.format),
            timeout_secs: self.timeout_secs.or(defaults.timeout_secs),
            license_data: self.license_data,
            fail_on_violations: self.fail_on_violations.or(defaults.fail_on_violations),
            policy: self.policy,
        }
    }
}
