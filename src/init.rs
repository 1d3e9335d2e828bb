use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::config::config_path;

#[derive(Debug, Clone, Copy)]
pub enum InitPreset {
    Green,
    Yellow,
    Red,
}

/// Write a preset policy into the project's `license-checker.toml`.
pub fn generate_config(project_dir: &Path, preset: InitPreset) -> Result<()> {
    generate_config_at_path(config_path(project_dir), preset)
}

/// Write a preset `[policy]` table into `path`.
///
/// Other keys and comments in an existing file are kept; an existing
/// `[policy]` table is replaced.
pub fn generate_config_at_path<P: AsRef<Path>>(path: P, preset: InitPreset) -> Result<()> {
    let path = path.as_ref();

    let existing = if path.exists() {
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?
    } else {
        String::new()
    };

    let mut doc = existing
        .parse::<toml_edit::DocumentMut>()
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    let preset_doc = get_preset_config(preset)
        .parse::<toml_edit::DocumentMut>()
        .context("Invalid preset config format")?;
    let policy = preset_doc
        .get("policy")
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("Preset has no [policy] table"))?;

    doc["policy"] = policy;

    fs::write(path, doc.to_string())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::info!(path = %path.display(), ?preset, "Wrote preset policy");
    Ok(())
}

fn get_preset_config(preset: InitPreset) -> &'static str {
    match preset {
        InitPreset::Red => include_str!("../presets/red.toml"),
        InitPreset::Green => include_str!("../presets/green.toml"),
        InitPreset::Yellow => include_str!("../presets/yellow.toml"),
    }
}
