use anyhow::{Context, Result};
use std::fs::File;
use std::path::PathBuf;
use crate::cli::OutputFormat;
use composer_license_auditor::config::load_config;
use composer_license_auditor::output::{format_report_table, write_output};
use composer_license_auditor::report::ReportGenerator;

#[allow(clippy::too_many_arguments)]
pub fn handle_report(
    path: Option<PathBuf>,
    composer: Option<String>,
    format: Option<OutputFormat>,
    output: Option<PathBuf>,
    license_data: Option<PathBuf>,
    timeout: Option<u64>,
    quiet: bool,
) -> Result<()> {
    let project_dir = super::project_dir(path);
    let config = load_config(&project_dir)?;

    let listing = super::composer_command(&config, composer, timeout);
    let lookup = super::license_lookup(&config, license_data.as_deref())?;

    // The whole report is built before anything is written
    let report = ReportGenerator::new(&listing, &*lookup).check(&project_dir)?;

    let format = OutputFormat::resolve(format, config.format.as_deref());
    let output_content = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&report)?,
        OutputFormat::Table => format_report_table(&report),
    };

    match output {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            write_output(file, &output_content)?;
        }
        None => {
            if !quiet {
                write_output(std::io::stdout().lock(), &output_content)?;
            }
        }
    }

    Ok(())
}
