use anyhow::Result;
use std::path::PathBuf;
use crate::cli::InitPreset;
use composer_license_auditor::init;

pub fn handle_init(policy: InitPreset, path: Option<PathBuf>, quiet: bool) -> Result<()> {
    let init_preset = match policy {
        InitPreset::Green => init::InitPreset::Green,
        InitPreset::Yellow => init::InitPreset::Yellow,
        InitPreset::Red => init::InitPreset::Red,
    };

    let project_dir = super::project_dir(path);
    let result = init::generate_config(&project_dir, init_preset);

    if result.is_ok() && !quiet {
        println!("✅ Configuration initialized successfully");
    }

    result
}
