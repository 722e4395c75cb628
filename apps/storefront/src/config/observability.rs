//! Logging settings consumed by `telemetry::init_tracing`.

use serde::{Deserialize, Serialize};

use super::persistence::default_true;

/// Observability settings. Only console logging is configurable.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ObservabilityConfig {
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset, e.g. `info` or
    /// `storefront=debug,sqlx=warn`.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Output format: `json`, `pretty` or `compact`.
    #[serde(default = "default_log_format")]
    pub format: String,
    /// Emit an event when each span closes (`FmtSpan::CLOSE`), so the
    /// `#[instrument]`ed store calls log their duration.
    #[serde(default = "default_true")]
    pub include_spans: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            include_spans: true,
        }
    }
}

/// Accepted values for `LoggingConfig::format`.
pub const LOG_FORMATS: [&str; 3] = ["json", "pretty", "compact"];

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid_and_span_events_on() {
        let config = LoggingConfig::default();
        assert!(LOG_FORMATS.contains(&config.format.as_str()));
        assert!(config.include_spans);
    }

    #[test]
    fn span_events_can_be_turned_off() {
        let config: ObservabilityConfig =
            serde_yaml_bw::from_str("logging:\n  include_spans: false\n").unwrap();
        assert!(!config.logging.include_spans);
        assert_eq!(config.logging.level, "info");
    }
}
