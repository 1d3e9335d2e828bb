pub mod config;
pub mod checker;

// Re-export main types
pub use config::LicensePolicy;
pub use checker::{ConstraintViolation, ConstraintViolationDetector, BLACKLIST_REASON, WHITELIST_REASON};
