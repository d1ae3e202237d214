//! Configuration data model.
//!
//! Every field has a default so the application works without a config file.

use serde::Deserialize;
use std::path::PathBuf;

/// Root application configuration.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// strftime format for todo creation timestamps
    pub timestamp_format: String,
    /// Tick interval driving clock refresh, in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            timestamp_format: "%H:%M".to_string(),
            tick_rate_ms: 250,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub enabled: bool,
    /// tracing filter directive, e.g. "info" or "tallypad=debug"
    pub level: String,
    /// Log directory; defaults to the platform data dir when unset
    pub log_dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: "info".to_string(),
            log_dir: None,
        }
    }
}
