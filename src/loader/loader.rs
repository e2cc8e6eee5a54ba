use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::watch;

use super::{LoadState, Slot, StateWatcher};
use crate::catalog::{normalize, CatalogDocument, Record};
use crate::config::LoaderConfig;
use crate::error::FetchError;
use crate::transport::{HttpTransport, Transport};

/// Fetches a catalog collection once per activation and tracks the outcome.
///
/// ## Example
///
/// ```ignore
/// use catalog_loader::{CatalogLoader, LoaderConfig};
///
/// let loader = CatalogLoader::new(
///     LoaderConfig::new().with_endpoint("http://127.0.0.1:8080/meals.json"),
/// );
///
/// loader.activate();
/// let state = loader.settled().await;
/// ```
///
/// Dropping the loader (or calling [`deactivate`](Self::deactivate)) ends the
/// lifecycle: a fetch still in flight finishes, but its result is discarded.
pub struct CatalogLoader<T: Transport = HttpTransport> {
    transport: Arc<T>,
    config: LoaderConfig,
    slot: Arc<watch::Sender<Slot>>,
}

impl CatalogLoader<HttpTransport> {
    /// A loader that reads over HTTP.
    pub fn new(config: LoaderConfig) -> Self {
        Self::with_transport(HttpTransport::new(), config)
    }
}

impl<T: Transport> CatalogLoader<T> {
    pub fn with_transport(transport: T, config: LoaderConfig) -> Self {
        let (tx, _rx) = watch::channel(Slot::default());
        Self {
            transport: Arc::new(transport),
            config,
            slot: Arc::new(tx),
        }
    }

    pub fn endpoint(&self) -> &str {
        self.config.endpoint()
    }

    /// Start a fetch and return immediately.
    ///
    /// The state is reset to `Loading` before this returns. Any fetch from an
    /// earlier activation that has not resolved yet is superseded: its result
    /// will be dropped.
    ///
    /// Must be called from within a Tokio runtime; otherwise the activation
    /// fails straight away.
    pub fn activate(&self) {
        let generation = self.reset();
        let endpoint = self.config.endpoint().to_string();

        tracing::debug!(generation, endpoint = %endpoint, "activating catalog loader");

        match Handle::try_current() {
            Ok(handle) => {
                let transport = Arc::clone(&self.transport);
                let slot = Arc::clone(&self.slot);
                handle.spawn(async move {
                    let outcome = fetch(transport.as_ref(), &endpoint).await;
                    settle(&slot, generation, outcome);
                });
            }
            Err(e) => {
                settle(
                    &self.slot,
                    generation,
                    Err(FetchError::NoRuntime(e.to_string())),
                );
            }
        }
    }

    /// Snapshot of the current state.
    pub fn current_state(&self) -> LoadState {
        self.slot.borrow().state.clone()
    }

    /// Wait until the state leaves `Loading` and return it.
    ///
    /// Waits forever if the loader was never activated.
    pub async fn settled(&self) -> LoadState {
        let mut rx = self.slot.subscribe();
        let settled = rx
            .wait_for(|slot| !slot.state.is_loading())
            .await
            .map(|slot| slot.state.clone());

        // The sender lives as long as `self`, so the wait cannot be cut short.
        settled.unwrap_or_else(|_| self.current_state())
    }

    /// A read-only watcher for the rendering layer.
    pub fn subscribe(&self) -> StateWatcher {
        StateWatcher::new(self.slot.subscribe())
    }

    /// End this lifecycle. Same as dropping the loader.
    pub fn deactivate(self) {}

    fn reset(&self) -> u64 {
        let mut generation = 0;
        self.slot.send_modify(|slot| {
            slot.generation += 1;
            slot.state = LoadState::Loading;
            generation = slot.generation;
        });
        generation
    }
}

impl<T: Transport> Drop for CatalogLoader<T> {
    fn drop(&mut self) {
        // Retire the current generation without waking watchers.
        self.slot.send_if_modified(|slot| {
            slot.generation += 1;
            false
        });
    }
}

async fn fetch<T: Transport>(transport: &T, endpoint: &str) -> Result<Vec<Record>, FetchError> {
    let response = transport.get(endpoint).await?;
    if !response.is_success() {
        return Err(FetchError::Status(response.status));
    }

    let document = CatalogDocument::parse(&response.body)?;
    Ok(normalize(document))
}

/// Apply a fetch outcome if `generation` is still the current activation.
fn settle(slot: &watch::Sender<Slot>, generation: u64, outcome: Result<Vec<Record>, FetchError>) {
    let (next, count) = match outcome {
        Ok(records) => {
            let count = records.len();
            (LoadState::ready(records), Some(count))
        }
        Err(err) => {
            tracing::warn!(generation, error = %err, "catalog load failed");
            (LoadState::failed(), None)
        }
    };

    let applied = slot.send_if_modified(|current| {
        if current.generation != generation {
            return false;
        }
        current.state = next;
        true
    });

    if !applied {
        tracing::debug!(generation, "discarding stale catalog completion");
    } else if let Some(records) = count {
        tracing::info!(generation, records, "catalog loaded");
    }
}
