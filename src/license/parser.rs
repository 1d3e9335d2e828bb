use super::Dependency;
use crate::error::{AuditError, Result};

/// Lines between the blank separator and the first dependency row: the blank
/// line itself and the `Name Version License` heading.
pub const LINES_BEFORE_DEPENDENCY_VERSIONS: usize = 2;

/// Drop everything up to and including the column heading of the listing.
///
/// `composer licenses` prints a project block, a blank line, a heading row and
/// then one row per dependency.
pub fn filter_header_output(lines: &[&str]) -> Result<Vec<String>> {
    let separator = lines
        .iter()
        .position(|line| line.trim().is_empty())
        .ok_or_else(|| AuditError::parsing("Could not filter out headers"))?;

    Ok(lines
        .iter()
        .skip(separator + LINES_BEFORE_DEPENDENCY_VERSIONS)
        .map(|line| line.to_string())
        .collect())
}

/// Split one listing row into a dependency.
pub fn parse_dependency_line(line: &str) -> Result<Dependency> {
    let mut columns = line.split_whitespace();

    match (columns.next(), columns.next(), columns.next()) {
        (Some(name), Some(version), Some(license)) => Ok(Dependency::new(name, version, license)),
        _ => Err(AuditError::parsing(format!(
            "Expected 'name version license' but found '{}'",
            line.trim()
        ))),
    }
}

/// Parse raw listing output into dependencies.
pub fn parse_dependencies(raw: &str) -> Result<Vec<Dependency>> {
    let lines: Vec<&str> = raw.lines().collect();
    let rows = filter_header_output(&lines)?;

    let dependencies = rows
        .iter()
        .filter(|row| !row.trim().is_empty())
        .map(|row| parse_dependency_line(row))
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(count = dependencies.len(), "Parsed dependency rows");
    Ok(dependencies)
}
