pub mod model;

use std::path::PathBuf;
use thiserror::Error;

pub use model::{AppConfig, LoggingConfig, UiConfig};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config from {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tallypad")
        .join("config.toml")
}

/// Load the config file, falling back to defaults when it does not exist.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let path = config_path();
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    Ok(toml::from_str(&contents)?)
}
