use thiserror::Error;

/// Errors raised by the audit core.
///
/// Parsing, configuration and lookup failures are kept apart from failures of
/// the external listing command so callers can tell "the tool broke" from
/// "the tool printed something we don't understand".
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("Failed to parse license listing: {reason}")]
    Parsing { reason: String },

    #[error("Licenses must not be black- and whitelisted at the same time: {}", quote_list(.licenses))]
    Configuration { licenses: Vec<String> },

    #[error("No license metadata found for '{identifier}'\n\n💡 Hint: Provide a dataset with --license-data that defines this identifier")]
    Lookup { identifier: String },

    #[error("Failed to run '{command}': {details}\n\n💡 Hint: Please verify that composer is installed or pass --composer <path>")]
    ProcessSpawn { command: String, details: String },

    #[error("'{command}' exited with {status}\n{stderr}")]
    ProcessFailed {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("'{command}' produced no output")]
    EmptyOutput { command: String },

    #[error("'{command}' did not finish within {seconds}s and was killed")]
    Timeout { command: String, seconds: u64 },

    #[error("Invalid license data in {source_name}: {details}")]
    LicenseData { source_name: String, details: String },
}

impl AuditError {
    pub fn parsing(reason: impl Into<String>) -> Self {
        AuditError::Parsing {
            reason: reason.into(),
        }
    }
}

fn quote_list(items: &[String]) -> String {
    format!("\"{}\"", items.join("\", \""))
}

pub type Result<T> = std::result::Result<T, AuditError>;
