pub mod composer;
pub mod config;
pub mod error;
pub mod init;
pub mod license;
pub mod logging;
pub mod output;
pub mod policy;
pub mod report;

// Re-export main types for easy access
pub use composer::{ComposerCommand, LicenseListing};
pub use error::AuditError;
pub use license::{Dependency, License, LicenseLookup, BundledLicenseLookup, FileLicenseLookup, LayeredLicenseLookup};
pub use policy::{ConstraintViolation, ConstraintViolationDetector, LicensePolicy};
pub use report::{LicenseReport, ReportGenerator};
