use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

mod remote_config;
mod sidebar_config;
mod storage_config;

pub use remote_config::RemoteConfig;
pub use sidebar_config::SidebarConfig;
pub use storage_config::StorageConfig;

/// Global application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub remote: RemoteConfig,
    pub sidebar: SidebarConfig,
    pub storage: StorageConfig,
}

impl Config {
    /// Get the config file path (config.json in the user config directory)
    pub fn path() -> PathBuf {
        const FILENAME: &str = "config.json";
        if let Some(mut path) = dirs::config_dir() {
            path.push("fortune-sidebar");
            path.push(FILENAME);
            return path;
        }

        // Fallback to home directory
        if let Some(mut path) = dirs::home_dir() {
            path.push(".fortune-sidebar");
            path.push(FILENAME);
            return path;
        }

        PathBuf::from(FILENAME)
    }

    /// Load configuration from the default path or return default
    pub fn load() -> Self {
        Self::load_from(Self::path())
    }

    /// Load configuration from `path` or return default
    ///
    /// A missing file is not an error. A malformed file is logged and ignored.
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!(path = %path.display(), ?e, "Malformed config file, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(path = %path.display(), ?e, "Failed to read config file");
                Self::default()
            }
        }
    }
}

/// Global configuration instance
///
/// Populated from disk on first access. `main` may replace it before launch
/// to apply command line overrides.
pub static CONFIG: LazyLock<RwLock<Config>> = LazyLock::new(|| RwLock::new(Config::load()));
