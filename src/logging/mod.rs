//! Session logging.
//!
//! The terminal is owned by the UI, so tracing output goes to a daily log
//! file under the platform data dir (default:
//! `~/.local/share/tallypad/logs/`). Filter level and enablement come from
//! `[logging]` in the config file.

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber. No-op when logging is disabled.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let dir = log_dir(config);
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let filename = format!("tallypad_{}.log", chrono::Local::now().format("%Y-%m-%d"));
    let path = dir.join(filename);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter =
        EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

fn log_dir(config: &LoggingConfig) -> PathBuf {
    match &config.log_dir {
        Some(dir) => dir.clone(),
        None => dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tallypad")
            .join("logs"),
    }
}
