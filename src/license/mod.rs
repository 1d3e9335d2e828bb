use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub mod lookup;
pub mod parser;

pub use lookup::{BundledLicenseLookup, FileLicenseLookup, LayeredLicenseLookup, LicenseLookup};
pub use parser::{filter_header_output, parse_dependencies, parse_dependency_line};

/// A single dependency as reported by the package manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    pub name: String,
    pub version: String,
    pub license: String,
}

impl Dependency {
    pub fn new(name: impl Into<String>, version: impl Into<String>, license: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            license: license.into(),
        }
    }
}

/// Human readable metadata for one license.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    pub identifier: String,
    pub short_name: String,
    pub source: String,
    /// Alternative identifiers that resolve to this license
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub can: Vec<String>,
    #[serde(default)]
    pub cannot: Vec<String>,
    #[serde(default)]
    pub must: Vec<String>,
}

/// Group dependencies by license identifier.
///
/// Groups keep the order in which each identifier first appears, and each
/// group keeps its dependencies in input order.
pub fn group_by_license(dependencies: Vec<Dependency>) -> IndexMap<String, Vec<Dependency>> {
    let mut grouped: IndexMap<String, Vec<Dependency>> = IndexMap::new();

    for dependency in dependencies {
        grouped
            .entry(dependency.license.clone())
            .or_default()
            .push(dependency);
    }

    grouped
}
