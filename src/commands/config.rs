use anyhow::Result;
use std::path::PathBuf;
use composer_license_auditor::config::load_config;
use composer_license_auditor::policy::ConstraintViolationDetector;

pub fn handle_config(path: Option<PathBuf>, show: bool, validate: bool, quiet: bool) -> Result<()> {
    if !show && !validate {
        if !quiet {
            eprintln!("Use --show or --validate");
        }
        std::process::exit(1);
    }

    let project_dir = super::project_dir(path);

    let config = match load_config(&project_dir) {
        Ok(config) => config,
        Err(e) => {
            if !quiet {
                eprintln!("❌ Configuration validation failed: {:#}", e);
            }
            std::process::exit(1);
        }
    };

    if show && !quiet {
        println!("{}", serde_json::to_string_pretty(&config)?);
    }

    if validate {
        let detector = ConstraintViolationDetector::new(config.policy.unwrap_or_default());
        match detector.ensure_configuration_is_valid() {
            Ok(()) => {
                if !quiet {
                    println!("✅ Configuration is valid");
                }
            }
            Err(e) => {
                if !quiet {
                    eprintln!("❌ Configuration validation failed: {}", e);
                }
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
