//! Configuration module for the storefront.
//!
//! Provides configuration loading, validation, and environment variable
//! interpolation for the product store, order store, supplier client and logging.
//!
//! # Usage
//!
//! ```rust,ignore
//! use storefront::config::{Config, load_config};
//!
//! // Load from default path (config.yaml)
//! let config = load_config(None)?;
//!
//! // Access configuration values
//! println!("product store: {:?}", config.product_store.backend);
//! ```

mod observability;
mod persistence;
mod supplier;

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use observability::{LOG_FORMATS, LoggingConfig, ObservabilityConfig};
pub use persistence::{OrdersConfig, ProductStoreBackend, ProductStoreConfig};
pub use supplier::SupplierConfig;

/// Default configuration file path.
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Product store configuration.
    #[serde(default)]
    pub product_store: ProductStoreConfig,
    /// Order store configuration.
    #[serde(default)]
    pub orders: OrdersConfig,
    /// Supplier catalog configuration.
    #[serde(default)]
    pub supplier: SupplierConfig,
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

// ============================================
// Configuration Loading
// ============================================

/// Load configuration from a YAML file with environment variable interpolation.
///
/// # Arguments
///
/// * `path` - Optional path to the config file. Defaults to "config.yaml".
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed, or validated.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let path = path.unwrap_or(DEFAULT_CONFIG_PATH);

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_string(),
        source: e,
    })?;

    load_config_from_string(&contents)
}

/// Load configuration from `path`, or use defaults if the file does not exist.
///
/// # Errors
///
/// Returns a `ConfigError` if an existing file cannot be read, parsed, or validated.
pub fn load_config_or_default(path: &str) -> Result<Config, ConfigError> {
    if Path::new(path).exists() {
        load_config(Some(path))
    } else {
        let config = Config::default();
        validate_config(&config)?;
        Ok(config)
    }
}

/// Load configuration from a YAML string (useful for testing).
///
/// # Errors
///
/// Returns a `ConfigError` if the YAML cannot be parsed or validated.
pub fn load_config_from_string(yaml: &str) -> Result<Config, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    let config: Config = serde_yaml_bw::from_str(&interpolated)?;
    validate_config(&config)?;
    Ok(config)
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax.
#[allow(clippy::expect_used)] // Regex is compile-time constant; expect() is safe here
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    re.replace_all(input, |cap: &regex::Captures<'_>| {
        let default_value = cap.get(2).map(|m| m.as_str());
        match std::env::var(&cap[1]) {
            Ok(v) if !v.is_empty() => v,
            _ => default_value.map_or_else(String::new, str::to_string),
        }
    })
    .into_owned()
}

/// Validate configuration values.
fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let store = &config.product_store;

    if store.backend == ProductStoreBackend::Sqlite {
        if store.database_url.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "product_store.database_url must be set for the sqlite backend".to_string(),
            ));
        }
        if store.max_connections == 0 {
            return Err(ConfigError::ValidationError(
                "product_store.max_connections must be positive".to_string(),
            ));
        }
        if store.acquire_timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "product_store.acquire_timeout_secs must be positive".to_string(),
            ));
        }
    }

    if config.supplier.enabled {
        if config.supplier.base_url.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "supplier.base_url must be set when the supplier is enabled".to_string(),
            ));
        }
        if config.supplier.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "supplier.timeout_secs must be positive".to_string(),
            ));
        }
    }

    let format = config.observability.logging.format.as_str();
    if !LOG_FORMATS.contains(&format) {
        return Err(ConfigError::ValidationError(format!(
            "observability.logging.format must be one of: {LOG_FORMATS:?}"
        )));
    }

    Ok(())
}
