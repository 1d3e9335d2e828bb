pub mod check;
pub mod config;
pub mod init;
pub mod report;

pub use check::handle_check;
pub use config::handle_config;
pub use init::handle_init;
pub use report::handle_report;

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::time::Duration;

use composer_license_auditor::composer::{ComposerCommand, DEFAULT_COMPOSER};
use composer_license_auditor::config::Config;
use composer_license_auditor::license::{
    BundledLicenseLookup, FileLicenseLookup, LayeredLicenseLookup, LicenseLookup,
};

/// Project directory from the CLI, defaulting to the current directory
fn project_dir(path: Option<PathBuf>) -> PathBuf {
    path.unwrap_or_else(|| PathBuf::from("."))
}

/// Composer runner, CLI arguments overriding config values
fn composer_command(config: &Config, composer: Option<String>, timeout: Option<u64>) -> ComposerCommand {
    let program = composer
        .or_else(|| config.composer.clone())
        .unwrap_or_else(|| DEFAULT_COMPOSER.to_string());

    let mut command = ComposerCommand::new(program);
    if let Some(seconds) = timeout.or(config.timeout_secs) {
        command = command.with_timeout(Duration::from_secs(seconds));
    }
    command
}

/// License metadata source: a configured dataset file first, then the bundled data
fn license_lookup(config: &Config, license_data: Option<&Path>) -> Result<Box<dyn LicenseLookup>> {
    let bundled: Box<dyn LicenseLookup> = Box::new(BundledLicenseLookup::new()?);

    match license_data.or(config.license_data.as_deref()) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "Using license data file ahead of bundled data");
            let file: Box<dyn LicenseLookup> = Box::new(FileLicenseLookup::from_path(path)?);
            Ok(Box::new(LayeredLicenseLookup::new(vec![file, bundled])))
        }
        None => Ok(bundled),
    }
}
