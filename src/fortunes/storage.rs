use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::FortuneList;
use crate::config::StorageConfig;

/// String key/value storage in the shape of the browser `localStorage` API
pub trait Storage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    fn remove_item(&self, key: &str);
}

/// File backed storage (saved to local_storage.json)
///
/// Every key lives in one JSON object. The whole file is rewritten on each
/// change. Clones share the same in-memory map.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    path: PathBuf,
    items: Arc<Mutex<BTreeMap<String, String>>>,
}

impl LocalStorage {
    const FILENAME: &'static str = "local_storage.json";

    /// Get the default storage directory
    pub fn default_dir() -> PathBuf {
        if let Some(mut path) = dirs::data_local_dir() {
            path.push("fortune-sidebar");
            return path;
        }

        // Fallback to home directory
        if let Some(mut path) = dirs::home_dir() {
            path.push(".fortune-sidebar");
            return path;
        }

        PathBuf::from(".")
    }

    /// Open the storage file in `dir`, reading existing items if any
    pub fn open(dir: impl AsRef<Path>) -> Self {
        let path = dir.as_ref().join(Self::FILENAME);

        let items = if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                    tracing::warn!(path = %path.display(), ?e, "Malformed storage file, starting empty");
                    BTreeMap::new()
                }),
                Err(e) => {
                    tracing::warn!(path = %path.display(), ?e, "Failed to read storage file");
                    BTreeMap::new()
                }
            }
        } else {
            BTreeMap::new()
        };

        tracing::debug!(path = %path.display(), keys = items.len(), "Opened local storage");

        Self {
            path,
            items: Arc::new(Mutex::new(items)),
        }
    }

    #[cfg(test)]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, items: &BTreeMap<String, String>) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                tracing::error!(?e, "Failed to create storage directory");
                return;
            }
        }

        match serde_json::to_string_pretty(items) {
            Ok(content) => {
                if let Err(e) = fs::write(&self.path, content) {
                    tracing::error!(path = %self.path.display(), ?e, "Failed to write storage file");
                }
            }
            Err(e) => {
                tracing::error!(?e, "Failed to serialize storage");
            }
        }
    }
}

impl Storage for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.lock().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        let mut items = self.items.lock();
        items.insert(key.to_string(), value.to_string());
        self.flush(&items);
    }

    fn remove_item(&self, key: &str) {
        let mut items = self.items.lock();
        if items.remove(key).is_some() {
            self.flush(&items);
        }
    }
}

/// In-process storage
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Arc<Mutex<BTreeMap<String, String>>>,
}

#[cfg(test)]
impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.lock().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        self.items.lock().insert(key.to_string(), value.to_string());
    }

    fn remove_item(&self, key: &str) {
        self.items.lock().remove(key);
    }
}

/// Saves and restores the fortune list under a single storage key
#[derive(Debug, Clone)]
pub struct FortuneStorage<S> {
    storage: S,
    key: String,
}

impl FortuneStorage<LocalStorage> {
    /// Open the configured storage file, defaulting to the local data directory
    pub fn from_config(config: &StorageConfig) -> Self {
        let dir = config
            .directory
            .clone()
            .unwrap_or_else(LocalStorage::default_dir);
        Self::new(LocalStorage::open(dir), config.key.clone())
    }
}

impl<S: Storage> FortuneStorage<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Read the saved list
    ///
    /// Returns an empty list when nothing was saved yet. A value that is not
    /// a JSON string array is treated the same way.
    pub fn load(&self) -> FortuneList {
        let Some(value) = self.storage.get_item(&self.key) else {
            return Vec::new();
        };

        serde_json::from_str(&value).unwrap_or_else(|e| {
            tracing::warn!(key = %self.key, ?e, "Stored fortunes are not a string array");
            Vec::new()
        })
    }

    /// Overwrite the saved list
    pub fn save(&self, fortunes: &[String]) {
        tracing::debug!(key = %self.key, count = fortunes.len(), "Saving fortunes");

        match serde_json::to_string(fortunes) {
            Ok(value) => self.storage.set_item(&self.key, &value),
            Err(e) => tracing::error!(?e, "Failed to serialize fortunes"),
        }
    }

    /// Forget the saved list
    pub fn clear(&self) {
        self.storage.remove_item(&self.key);
    }
}
