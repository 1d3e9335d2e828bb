use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::License;
use crate::error::{AuditError, Result};

const BUNDLED_LICENSES: &str = include_str!("../../data/licenses.toml");

/// Resolves a license identifier to its metadata.
pub trait LicenseLookup {
    fn look_up(&self, identifier: &str) -> Result<License>;
}

/// A TOML document of `[[license]]` tables.
#[derive(Debug, Deserialize)]
struct LicenseDataset {
    #[serde(rename = "license", default)]
    licenses: Vec<License>,
}

impl LicenseDataset {
    fn parse(content: &str, source_name: &str) -> Result<Self> {
        let dataset: LicenseDataset = toml::from_str(content).map_err(|e| AuditError::LicenseData {
            source_name: source_name.to_string(),
            details: e.to_string(),
        })?;

        if let Some(blank) = dataset.licenses.iter().find(|l| l.identifier.trim().is_empty()) {
            return Err(AuditError::LicenseData {
                source_name: source_name.to_string(),
                details: format!("license '{}' has an empty identifier", blank.short_name),
            });
        }

        Ok(dataset)
    }

    fn find(&self, identifier: &str) -> Option<&License> {
        // dual licenses are listed as "BSD-3-Clause, MIT"; match the first one
        let identifier = identifier.trim_end_matches(',');

        // exact identifier, then alias, then either one ignoring case
        self.licenses
            .iter()
            .find(|l| l.identifier == identifier)
            .or_else(|| {
                self.licenses
                    .iter()
                    .find(|l| l.aliases.iter().any(|alias| alias == identifier))
            })
            .or_else(|| {
                self.licenses.iter().find(|l| {
                    l.identifier.eq_ignore_ascii_case(identifier)
                        || l.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(identifier))
                })
            })
    }

    fn look_up(&self, identifier: &str) -> Result<License> {
        match self.find(identifier) {
            Some(license) => {
                tracing::debug!(identifier, resolved = %license.identifier, "Resolved license");
                Ok(license.clone())
            }
            None => Err(AuditError::Lookup {
                identifier: identifier.to_string(),
            }),
        }
    }
}

/// Lookup backed by the dataset compiled into the binary.
#[derive(Debug)]
pub struct BundledLicenseLookup {
    dataset: LicenseDataset,
}

impl BundledLicenseLookup {
    pub fn new() -> Result<Self> {
        Ok(Self {
            dataset: LicenseDataset::parse(BUNDLED_LICENSES, "bundled license data")?,
        })
    }
}

impl LicenseLookup for BundledLicenseLookup {
    fn look_up(&self, identifier: &str) -> Result<License> {
        self.dataset.look_up(identifier)
    }
}

/// Lookup backed by a user supplied TOML file in the bundled format.
#[derive(Debug)]
pub struct FileLicenseLookup {
    dataset: LicenseDataset,
}

impl FileLicenseLookup {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let source_name = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|e| AuditError::LicenseData {
            source_name: source_name.clone(),
            details: e.to_string(),
        })?;

        Ok(Self {
            dataset: LicenseDataset::parse(&content, &source_name)?,
        })
    }
}

impl LicenseLookup for FileLicenseLookup {
    fn look_up(&self, identifier: &str) -> Result<License> {
        self.dataset.look_up(identifier)
    }
}

/// Tries each lookup in order; the first one that knows the identifier wins.
///
/// Only `Lookup` misses fall through to the next layer, other errors stop
/// the search.
pub struct LayeredLicenseLookup {
    layers: Vec<Box<dyn LicenseLookup>>,
}

impl LayeredLicenseLookup {
    pub fn new(layers: Vec<Box<dyn LicenseLookup>>) -> Self {
        Self { layers }
    }
}

impl LicenseLookup for LayeredLicenseLookup {
    fn look_up(&self, identifier: &str) -> Result<License> {
        for layer in &self.layers {
            match layer.look_up(identifier) {
                Err(AuditError::Lookup { .. }) => continue,
                result => return result,
            }
        }

        Err(AuditError::Lookup {
            identifier: identifier.to_string(),
        })
    }
}
