//! Centralized path management for appwatch

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Get the appwatch config directory
pub fn appwatch_config_dir() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .context("Unable to determine user config directory")?
        .join("appwatch");

    Ok(config_dir)
}

/// Get the appwatch data directory, creating it if needed
pub fn appwatch_data_dir() -> Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".local/share")))
        .context("Unable to determine user data directory")?
        .join("appwatch");

    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("creating data directory at {}", data_dir.display()))?;

    Ok(data_dir)
}

/// Default location of `config.toml`
pub fn config_file_path() -> Result<PathBuf> {
    Ok(appwatch_config_dir()?.join("config.toml"))
}

/// Default location of the action log
pub fn default_log_path() -> Result<PathBuf> {
    Ok(appwatch_data_dir()?.join("appwatch.log"))
}
