use crate::error::AdminError;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rows shown per page
    pub page_size: usize,
    pub toast_display_ms: u64,
    pub toast_exit_ms: u64,
    pub tick_rate_ms: u64,
    /// Directory with `<section>.csv` / `<section>.json` row files
    pub data_dir: Option<String>,
    /// Where selection exports are written
    pub export_dir: String,
    /// Default log filter when RUST_LOG is unset
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: 20,
            toast_display_ms: 3000,
            toast_exit_ms: 300,
            tick_rate_ms: 100,
            data_dir: None,
            export_dir: ".".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".admin-tui"))
    }

    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    pub fn toast_display(&self) -> Duration {
        Duration::from_millis(self.toast_display_ms)
    }

    pub fn toast_exit(&self) -> Duration {
        Duration::from_millis(self.toast_exit_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    /// Read a config file. Missing fields take their defaults.
    pub fn load_from(path: &Path) -> Result<Config, AdminError> {
        let contents = fs::read_to_string(path).map_err(|source| AdminError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| AdminError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `path`, writing the defaults there first if it does not exist
    pub fn load_or_init(path: &Path) -> anyhow::Result<Config> {
        if !path.exists() {
            let config = Config::default();
            config.save_to(path)?;
            return Ok(config);
        }
        Ok(Self::load_from(path)?)
    }

    /// Save the config to `path`
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;

        Ok(())
    }
}
