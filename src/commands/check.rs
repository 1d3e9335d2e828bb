use anyhow::Result;
use std::path::PathBuf;
use crate::cli::OutputFormat;
use composer_license_auditor::composer::LicenseListing;
use composer_license_auditor::config::load_config;
use composer_license_auditor::license::parse_dependencies;
use composer_license_auditor::output::{format_violations_table, write_output};
use composer_license_auditor::policy::ConstraintViolationDetector;

#[allow(clippy::too_many_arguments)]
pub fn handle_check(
    path: Option<PathBuf>,
    composer: Option<String>,
    blacklist: Vec<String>,
    whitelist: Vec<String>,
    format: Option<OutputFormat>,
    exit_zero: bool,
    timeout: Option<u64>,
    quiet: bool,
) -> Result<()> {
    let project_dir = super::project_dir(path);
    let config = load_config(&project_dir)?;

    // CLI lists replace the configured ones
    let mut policy = config.policy.clone().unwrap_or_default();
    if !blacklist.is_empty() {
        policy = policy.with_blacklist(blacklist);
    }
    if !whitelist.is_empty() {
        policy = policy.with_whitelist(whitelist);
    }

    let detector = ConstraintViolationDetector::new(policy);
    // Reject a broken policy before running composer
    detector.ensure_configuration_is_valid()?;

    let listing = super::composer_command(&config, composer, timeout);
    let raw = listing.list_licenses(&project_dir)?;
    let dependencies = parse_dependencies(&raw)?;

    let violations = detector.detect_violations(&dependencies)?;

    let format = OutputFormat::resolve(format, config.format.as_deref());
    let output_content = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&violations)?,
        OutputFormat::Table => format_violations_table(&violations),
    };

    if !quiet {
        write_output(std::io::stdout().lock(), &output_content)?;
    }

    let offending: usize = violations.iter().map(|v| v.offending_dependencies.len()).sum();
    if offending > 0 {
        if !quiet {
            eprintln!("License violations found: {} dependencies", offending);
        }

        if !exit_zero && config.fail_on_violations.unwrap_or(true) {
            std::process::exit(1);
        }
    }

    Ok(())
}
