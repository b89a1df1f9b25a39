use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated HOME and XDG directories for one appwatch invocation.
pub struct TestEnvironment {
    temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir()?;
        fs::create_dir_all(temp_dir.path().join("config"))?;
        fs::create_dir_all(temp_dir.path().join("data"))?;
        Ok(Self { temp_dir })
    }

    pub fn home(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn config_home(&self) -> PathBuf {
        self.home().join("config")
    }

    pub fn data_home(&self) -> PathBuf {
        self.home().join("data")
    }

    /// Write `~/.config/appwatch/config.toml` inside the sandbox.
    pub fn write_config(&self, contents: &str) -> Result<PathBuf> {
        let dir = self.config_home().join("appwatch");
        fs::create_dir_all(&dir)?;
        let path = dir.join("config.toml");
        fs::write(&path, contents)?;
        Ok(path)
    }

    pub fn log_file(&self) -> PathBuf {
        self.data_home().join("appwatch").join("appwatch.log")
    }
}
