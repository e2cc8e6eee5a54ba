//! Loader - one fetch per activation, tracked as a single tagged state.
//!
//! A [`CatalogLoader`] owns its [`LoadState`]. `activate()` resets it to
//! `Loading`, spawns the fetch on the current Tokio runtime and returns at
//! once. The spawned task is the only writer after that: it normalizes the
//! response and moves the state to `Ready`, or collapses any failure into
//! `Failed` with the generic message.
//!
//! Every activation gets a new generation number. A completion only lands if
//! its generation is still current, so neither a re-activation nor dropping
//! the loader can be overwritten by a fetch that resolves late.
//!
//! ## Example
//!
//! ```ignore
//! use catalog_loader::{CatalogLoader, LoaderConfig, LoadState};
//!
//! let loader = CatalogLoader::new(LoaderConfig::default());
//! loader.activate();
//! assert!(loader.current_state().is_loading());
//!
//! match loader.settled().await {
//!     LoadState::Ready { records } => println!("{} items", records.len()),
//!     LoadState::Failed { message } => eprintln!("{}", message),
//!     LoadState::Loading => unreachable!(),
//! }
//! ```

mod loader;
mod state;
mod watcher;

pub use loader::CatalogLoader;
pub use state::{LoadState, GENERIC_FAILURE_MESSAGE};
pub use watcher::StateWatcher;

/// What the state channel holds: the state plus the activation it belongs to.
#[derive(Debug, Clone, Default)]
pub(crate) struct Slot {
    pub(crate) generation: u64,
    pub(crate) state: LoadState,
}
