//! Key-value storage
//!
//! Two stores back the shell:
//! - `LocalStorage`: durable, a JSON object file in the data directory
//! - `SessionStorage`: in memory, lives as long as the process
//!
//! Values are plain strings, like the browser storages they stand in for.

use anyhow::{Context, Result};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

/// Well-known storage keys
pub mod keys {
    pub const COLOR: &str = "color";
    pub const ACCOUNT_TYPE: &str = "accountType";
    pub const ACCOUNT_NAME: &str = "accountName";
    pub const LOCALE: &str = "locale";
    pub const TAB: &str = "tab";
}

/// Minimal string key-value store
pub trait Storage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Durable storage, written through to disk on every change
#[derive(Debug, Clone, Default)]
pub struct LocalStorage {
    path: Option<PathBuf>,
    entries: BTreeMap<String, String>,
}

impl LocalStorage {
    pub const FILE_NAME: &'static str = "local_storage.json";

    /// Open the store file inside `dir`, creating nothing until the first write.
    ///
    /// A file that does not parse is treated as empty storage.
    pub fn open(dir: &Path) -> Result<Self> {
        let path = dir.join(Self::FILE_NAME);

        let entries = if path.exists() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read storage from {:?}", path))?;
            match serde_json::from_str(&content) {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "storage file is corrupt, starting empty");
                    BTreeMap::new()
                }
            }
        } else {
            BTreeMap::new()
        };

        Ok(Self {
            path: Some(path),
            entries,
        })
    }

    /// Storage that never touches the disk
    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self::default()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn flush(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create storage directory {:?}", parent))?;
        }

        let content = serde_json::to_string_pretty(&self.entries)
            .context("Failed to serialize storage")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write storage to {:?}", path))
    }
}

impl Storage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

/// Session storage, dropped with the process
#[derive(Debug, Clone, Default)]
pub struct SessionStorage {
    entries: HashMap<String, String>,
}

impl SessionStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for SessionStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
