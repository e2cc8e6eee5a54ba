use tokio::sync::watch;

use super::{LoadState, Slot};

/// Read-only view of a loader's state for the rendering layer.
///
/// Obtained from [`CatalogLoader::subscribe`](super::CatalogLoader::subscribe).
/// A watcher can read the current snapshot and await the next transition; it
/// can never write.
#[derive(Debug, Clone)]
pub struct StateWatcher {
    rx: watch::Receiver<Slot>,
}

impl StateWatcher {
    pub(crate) fn new(rx: watch::Receiver<Slot>) -> Self {
        Self { rx }
    }

    /// The current state.
    pub fn current(&self) -> LoadState {
        self.rx.borrow().state.clone()
    }

    /// Wait for the next state change and return the new state.
    ///
    /// Returns `None` once the loader and all of its in-flight fetches are gone.
    pub async fn changed(&mut self) -> Option<LoadState> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().state.clone())
    }
}
