use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::paths;

/// User configuration, read from `~/.config/appwatch/config.toml`.
///
/// Every key is optional; a missing file means all defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// AUR helper binary, e.g. `paru`. Detected from PATH when unset.
    pub aur_helper: Option<String>,
    /// Ask before removing a package.
    pub confirm: bool,
    /// Print removal commands instead of running them.
    pub dry_run: bool,
    /// Log file, defaults to `~/.local/share/appwatch/appwatch.log`.
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            aur_helper: None,
            confirm: true,
            dry_run: false,
            log_file: None,
        }
    }
}

impl AppConfig {
    /// Load from `path`, or from the default location when `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => paths::config_file_path()?,
        };
        Self::load_from_path(&path)
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("reading config file from {}", path.display()))?;
        Self::from_toml(&contents)
            .with_context(|| format!("parsing config file at {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("invalid appwatch configuration")
    }

    pub fn aur_helper(&self) -> Option<&str> {
        self.aur_helper.as_deref()
    }

    /// Resolved log file path.
    pub fn log_path(&self) -> Result<PathBuf> {
        match &self.log_file {
            Some(path) => Ok(path.clone()),
            None => paths::default_log_path(),
        }
    }
}
