use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// License policy: a deny-list and an allow-list of license identifiers.
///
/// An empty list disables that side of the check.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LicensePolicy {
    /// Policy name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Policy description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Licenses that must not be used
    #[serde(default)]
    pub blacklist: Vec<String>,
    /// Licenses that may be used; anything else is a violation
    #[serde(default)]
    pub whitelist: Vec<String>,
}

impl LicensePolicy {
    pub fn new(blacklist: Vec<String>, whitelist: Vec<String>) -> Self {
        Self {
            name: None,
            description: None,
            blacklist,
            whitelist,
        }
    }

    /// Replace the blacklist wholesale
    pub fn with_blacklist(mut self, licenses: Vec<String>) -> Self {
        self.blacklist = licenses;
        self
    }

    /// Replace the whitelist wholesale
    pub fn with_whitelist(mut self, licenses: Vec<String>) -> Self {
        self.whitelist = licenses;
        self
    }

    /// Licenses present on both lists, in blacklist order.
    pub fn overlap(&self) -> Vec<String> {
        self.blacklist
            .iter()
            .filter(|license| self.whitelist.contains(license))
            .cloned()
            .collect::<IndexSet<String>>()
            .into_iter()
            .collect()
    }
}
