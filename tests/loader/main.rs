//! CatalogLoader integration tests.

mod support;
mod staleness;
