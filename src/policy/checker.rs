use serde::{Deserialize, Serialize};

use super::config::LicensePolicy;
use crate::error::{AuditError, Result};
use crate::license::Dependency;

pub const BLACKLIST_REASON: &str = "Blacklisted license found!";
pub const WHITELIST_REASON: &str = "Non white-listed license found!";

/// A reason together with the dependencies that triggered it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstraintViolation {
    pub reason: String,
    pub offending_dependencies: Vec<Dependency>,
}

impl ConstraintViolation {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            offending_dependencies: Vec::new(),
        }
    }

    pub fn add(&mut self, dependency: Dependency) {
        self.offending_dependencies.push(dependency);
    }

    /// Whether any dependency triggered this violation
    pub fn is_violated(&self) -> bool {
        !self.offending_dependencies.is_empty()
    }
}

/// Checks dependencies against a license policy.
#[derive(Debug, Clone)]
pub struct ConstraintViolationDetector {
    policy: LicensePolicy,
}

impl ConstraintViolationDetector {
    pub fn new(policy: LicensePolicy) -> Self {
        Self { policy }
    }

    /// Reject policies that black- and whitelist the same license.
    pub fn ensure_configuration_is_valid(&self) -> Result<()> {
        let overlap = self.policy.overlap();
        if overlap.is_empty() {
            Ok(())
        } else {
            Err(AuditError::Configuration { licenses: overlap })
        }
    }

    /// Detect violations.
    ///
    /// Always returns the blacklist violation first and the whitelist violation
    /// second, whether or not they contain any dependency.
    pub fn detect_violations(&self, dependencies: &[Dependency]) -> Result<[ConstraintViolation; 2]> {
        self.ensure_configuration_is_valid()?;

        let violations = [
            self.detect_blacklist_violation(dependencies),
            self.detect_whitelist_violation(dependencies),
        ];

        for violation in violations.iter().filter(|v| v.is_violated()) {
            tracing::info!(
                reason = %violation.reason,
                count = violation.offending_dependencies.len(),
                "Policy violation detected"
            );
        }

        Ok(violations)
    }

    fn detect_blacklist_violation(&self, dependencies: &[Dependency]) -> ConstraintViolation {
        let mut violation = ConstraintViolation::new(BLACKLIST_REASON);

        if !self.policy.blacklist.is_empty() {
            for dependency in dependencies {
                if self.policy.blacklist.contains(&dependency.license) {
                    violation.add(dependency.clone());
                }
            }
        }

        violation
    }

    fn detect_whitelist_violation(&self, dependencies: &[Dependency]) -> ConstraintViolation {
        let mut violation = ConstraintViolation::new(WHITELIST_REASON);

        if !self.policy.whitelist.is_empty() {
            for dependency in dependencies {
                if !self.policy.whitelist.contains(&dependency.license) {
                    violation.add(dependency.clone());
                }
            }
        }

        violation
    }
}
