use std::sync::Arc;

use super::remote::{FetchError, FortuneSource};
use super::storage::{FortuneStorage, Storage};
use super::{fallback_fortunes, FortuneList};

/// Produces the initial fortune list: saved fortunes first, then the remote
/// document, then the fallback list. Never fails and never returns an empty
/// list.
pub struct FortuneLoader<S, R> {
    storage: FortuneStorage<S>,
    source: Arc<R>,
}

impl<S, R> FortuneLoader<S, R>
where
    S: Storage,
    R: FortuneSource + Send + Sync + 'static,
{
    pub fn new(storage: FortuneStorage<S>, source: R) -> Self {
        Self {
            storage,
            source: Arc::new(source),
        }
    }

    /// Load fortunes, running the network fetch on a blocking worker
    pub async fn load(&self) -> FortuneList {
        let stored = self.storage.load();
        if !stored.is_empty() {
            tracing::debug!(count = stored.len(), "Loaded fortunes from storage");
            return stored;
        }

        let source = Arc::clone(&self.source);
        let fetched = tokio::task::spawn_blocking(move || source.fetch())
            .await
            .unwrap_or_else(|e| Err(FetchError::Worker(e.to_string())));

        resolve(stored, || fetched)
    }
}

/// Compose the three sources
///
/// `fetch` is only called when `stored` is empty.
pub fn resolve<F>(stored: FortuneList, fetch: F) -> FortuneList
where
    F: FnOnce() -> Result<FortuneList, FetchError>,
{
    if !stored.is_empty() {
        return stored;
    }

    match fetch() {
        Ok(fortunes) if !fortunes.is_empty() => {
            tracing::debug!(count = fortunes.len(), "Loaded fortunes from remote document");
            fortunes
        }
        Ok(_) => {
            tracing::warn!(error = %FetchError::Empty, "Using fallback fortunes");
            fallback_fortunes()
        }
        Err(e) => {
            tracing::warn!(error = %e, "Using fallback fortunes");
            fallback_fortunes()
        }
    }
}
