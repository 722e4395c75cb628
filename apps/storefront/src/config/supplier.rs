//! Supplier catalog configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Supplier (UnderCutters) catalog configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplierConfig {
    /// Call the real supplier API. When false the in-process fake is used.
    #[serde(default)]
    pub enabled: bool,
    /// Base URL of the supplier API.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SupplierConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl SupplierConfig {
    /// Request timeout as a `Duration`.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_base_url() -> String {
    "https://undercutters.azurewebsites.net/api".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}
