use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Location of the published fortune document
pub const DEFAULT_FORTUNES_URL: &str =
    "https://cse110-sp23-group1.github.io/Origami-Fortune-Teller/assets/fortunes.json";

fn default_fortunes_url() -> String {
    DEFAULT_FORTUNES_URL.to_string()
}

/// Configuration for the remote fortune document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteConfig {
    /// URL of the JSON document holding `english.default`
    #[serde(default = "default_fortunes_url")]
    pub url: String,
    /// Whole-request timeout in seconds. No timeout when unset.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl RemoteConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            url: default_fortunes_url(),
            timeout_secs: None,
        }
    }
}
