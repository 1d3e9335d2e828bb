use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::composer::LicenseListing;
use crate::error::Result;
use crate::license::{group_by_license, parse_dependencies, Dependency, License, LicenseLookup};

/// One row of the summary table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseCount {
    pub license: String,
    pub count: usize,
}

/// The can / cannot / must table of one license, padded to equal length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseTable {
    pub identifier: String,
    pub short_name: String,
    pub source: String,
    pub rows: Vec<[String; 3]>,
}

impl LicenseTable {
    pub fn from_license(identifier: &str, license: &License) -> Self {
        let count = license
            .can
            .len()
            .max(license.cannot.len())
            .max(license.must.len());

        let cell = |column: &[String], i: usize| column.get(i).cloned().unwrap_or_default();
        let rows = (0..count)
            .map(|i| {
                [
                    cell(&license.can[..], i),
                    cell(&license.cannot[..], i),
                    cell(&license.must[..], i),
                ]
            })
            .collect();

        Self {
            identifier: identifier.to_string(),
            short_name: license.short_name.clone(),
            source: license.source.clone(),
            rows,
        }
    }
}

/// Everything needed to render a license report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LicenseReport {
    pub generated_at: DateTime<Utc>,
    pub summary: Vec<LicenseCount>,
    pub licenses: Vec<LicenseTable>,
    pub dependencies: IndexMap<String, Vec<Dependency>>,
}

impl LicenseReport {
    pub fn total_dependencies(&self) -> usize {
        self.summary.iter().map(|row| row.count).sum()
    }
}

/// Builds license reports from a listing source and a lookup source.
pub struct ReportGenerator<'a> {
    listing: &'a dyn LicenseListing,
    lookup: &'a dyn LicenseLookup,
}

impl<'a> ReportGenerator<'a> {
    pub fn new(listing: &'a dyn LicenseListing, lookup: &'a dyn LicenseLookup) -> Self {
        Self { listing, lookup }
    }

    /// Build the license report for a project.
    ///
    /// Nothing is rendered here; a parse or lookup failure leaves the caller
    /// with no partial report.
    pub fn check(&self, project_path: &Path) -> Result<LicenseReport> {
        let raw = self.listing.list_licenses(project_path)?;
        let dependencies = parse_dependencies(&raw)?;
        build_report(dependencies, self.lookup)
    }
}

/// Group dependencies, resolve each license once and lay out the tables.
pub fn build_report(dependencies: Vec<Dependency>, lookup: &dyn LicenseLookup) -> Result<LicenseReport> {
    let grouped = group_by_license(dependencies);

    let summary = grouped
        .iter()
        .map(|(license, items)| LicenseCount {
            license: license.clone(),
            count: items.len(),
        })
        .collect();

    let licenses = grouped
        .keys()
        .map(|identifier| {
            let license = lookup.look_up(identifier)?;
            Ok(LicenseTable::from_license(identifier, &license))
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::info!(
        dependencies = grouped.values().map(Vec::len).sum::<usize>(),
        licenses = grouped.len(),
        "Built license report"
    );

    Ok(LicenseReport {
        generated_at: Utc::now(),
        summary,
        licenses,
        dependencies: grouped,
    })
}
