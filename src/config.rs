//! Configuration management for blocklaunch
//!
//! Handles loading, saving, and default configuration values.
//! Config file location: ~/.config/blocklaunch/config.toml
//!
//! User state (account, theme color, locale) lives in storage, not here.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const APP_DIR: &str = "blocklaunch";

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Locale used when none has been stored
    pub default_locale: String,
    /// Directory of `<locale>.json` message catalogs
    pub messages_dir: Option<PathBuf>,
    /// Override for the durable storage directory
    pub storage_dir: Option<PathBuf>,
    /// Log filter when RUST_LOG is unset
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_locale: "zh-CN".to_string(),
            messages_dir: None,
            storage_dir: None,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join(APP_DIR);
        Ok(config_dir.join("config.toml"))
    }

    /// Load config from the default path, creating it if missing
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load config from `path`, or write and return the default if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Config::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {:?}", path))
    }

    /// Save config to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let content = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }

    /// Directory for durable storage and the log file
    pub fn data_dir(&self) -> Result<PathBuf> {
        match &self.storage_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(dirs::data_dir()
                .context("Could not determine data directory")?
                .join(APP_DIR)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.default_locale, "zh-CN");
        assert_eq!(config.log_level, "info");
        assert!(config.messages_dir.is_none());
    }

    #[test]
    fn test_load_creates_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());
        assert!(path.exists());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_locale = \"en-US\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.default_locale, "en-US");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_storage_dir_override() {
        let config = Config {
            storage_dir: Some(PathBuf::from("/tmp/bl")),
            ..Config::default()
        };
        assert_eq!(config.data_dir().unwrap(), PathBuf::from("/tmp/bl"));
    }
}
