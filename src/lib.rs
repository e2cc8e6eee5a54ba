pub mod catalog;
mod config;
mod error;
mod loader;
pub mod render;
pub mod transport;

pub use catalog::{normalize, CatalogDocument, CatalogEntry, Record};
pub use config::{LoaderConfig, DEFAULT_ENDPOINT, ENDPOINT_ENV};
pub use error::FetchError;
pub use loader::{CatalogLoader, LoadState, StateWatcher, GENERIC_FAILURE_MESSAGE};
pub use render::{render, CellRenderer, Section};
pub use transport::{HttpTransport, RawResponse, Transport, TransportError};
