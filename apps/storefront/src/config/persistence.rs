//! Product and order store configuration.

use serde::{Deserialize, Serialize};

/// Which adapter backs the product store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStoreBackend {
    /// SQLite database through `sqlx`.
    #[default]
    Sqlite,
    /// In-memory fake seeded with the development catalog.
    Memory,
}

/// Product store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductStoreConfig {
    /// Backend adapter.
    #[serde(default)]
    pub backend: ProductStoreBackend,
    /// SQLite connection URL (ignored by the memory backend).
    #[serde(default = "default_database_url")]
    pub database_url: String,
    /// Maximum pooled connections.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Seconds to wait for a pooled connection.
    #[serde(default = "default_acquire_timeout_secs")]
    pub acquire_timeout_secs: u64,
    /// Seed the store with initial products when it is empty.
    #[serde(default = "default_true")]
    pub seed: bool,
}

impl Default for ProductStoreConfig {
    fn default() -> Self {
        Self {
            backend: ProductStoreBackend::default(),
            database_url: default_database_url(),
            max_connections: default_max_connections(),
            acquire_timeout_secs: default_acquire_timeout_secs(),
            seed: true,
        }
    }
}

impl ProductStoreConfig {
    /// In-memory store configuration, used by tests and development runs.
    #[must_use]
    pub fn memory() -> Self {
        Self {
            backend: ProductStoreBackend::Memory,
            ..Self::default()
        }
    }

    /// SQLite store at `database_url`.
    #[must_use]
    pub fn sqlite(database_url: impl Into<String>) -> Self {
        Self {
            backend: ProductStoreBackend::Sqlite,
            database_url: database_url.into(),
            ..Self::default()
        }
    }
}

/// Order store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrdersConfig {
    /// Load the three sample orders at startup.
    #[serde(default = "default_true")]
    pub seed: bool,
}

impl Default for OrdersConfig {
    fn default() -> Self {
        Self { seed: true }
    }
}

pub(crate) const fn default_true() -> bool {
    true
}

fn default_database_url() -> String {
    "sqlite://./data/products.db".to_string()
}

const fn default_max_connections() -> u32 {
    5
}

const fn default_acquire_timeout_secs() -> u64 {
    30
}
