use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

use super::FortuneList;
use crate::config::RemoteConfig;

/// Reasons the remote fortune document could not be used
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] ureq::Error),
    #[error("Malformed fortune document: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Fortune document has no default english fortunes")]
    Empty,
    #[error("Fetch task did not complete: {0}")]
    Worker(String),
}

/// Something that can produce a fortune list, possibly blocking
pub trait FortuneSource {
    fn fetch(&self) -> Result<FortuneList, FetchError>;
}

/// Published document shape: `{ "english": { "default": [...] } }`
#[derive(Debug, Deserialize)]
struct FortuneDocument {
    english: LanguageFortunes,
}

#[derive(Debug, Deserialize)]
struct LanguageFortunes {
    default: FortuneList,
}

/// Extract the default english fortunes from a document body
fn parse_document(body: &str) -> Result<FortuneList, FetchError> {
    let document: FortuneDocument = serde_json::from_str(body)?;
    let fortunes = document.english.default;
    if fortunes.is_empty() {
        return Err(FetchError::Empty);
    }
    Ok(fortunes)
}

/// Fortunes fetched over HTTP
#[derive(Debug, Clone)]
pub struct RemoteFortunes {
    url: String,
    timeout: Option<Duration>,
}

impl RemoteFortunes {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn from_config(config: &RemoteConfig) -> Self {
        Self::new(config.url.clone()).with_timeout(config.timeout())
    }
}

impl FortuneSource for RemoteFortunes {
    fn fetch(&self) -> Result<FortuneList, FetchError> {
        tracing::debug!(url = %self.url, timeout = ?self.timeout, "Fetching fortunes");

        let mut response = ureq::get(&self.url)
            .config()
            .timeout_global(self.timeout)
            .build()
            .call()?;
        let body = response.body_mut().read_to_string()?;

        parse_document(&body)
    }
}
