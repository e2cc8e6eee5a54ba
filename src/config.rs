//! Loader configuration.

/// Collection the loader reads when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "https://all-the-practice-default-rtdb.firebaseio.com/meals.json";

/// Environment variable consulted by [`LoaderConfig::from_env`].
pub const ENDPOINT_ENV: &str = "CATALOG_ENDPOINT";

/// Where a [`CatalogLoader`](crate::CatalogLoader) reads from.
///
/// The endpoint is fixed for the lifetime of the loader; activations never
/// take a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    endpoint: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl LoaderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// `CATALOG_ENDPOINT` if set and non-empty, the default otherwise.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup(ENDPOINT_ENV) {
            Some(endpoint) if !endpoint.trim().is_empty() => {
                Self::default().with_endpoint(endpoint.trim())
            }
            _ => Self::default(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}
