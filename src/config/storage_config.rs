use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Storage key holding the saved fortune list
pub const DEFAULT_STORAGE_KEY: &str = "fortune";

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

/// Configuration for persisted fortunes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageConfig {
    #[serde(default = "default_storage_key")]
    pub key: String,
    /// Directory holding `local_storage.json` (defaults to the local data directory)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            key: default_storage_key(),
            directory: None,
        }
    }
}
