//! Transport - the request/response primitive the loader reads through.
//!
//! The loader only needs one operation: GET a URL and hand back the status
//! and the full body. [`HttpTransport`] does that over reqwest; tests plug in
//! their own implementation to script responses and completion order.

mod http;

use std::error::Error;
use std::fmt;
use std::future::Future;

pub use http::HttpTransport;

/// A completed response: status code and raw body bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Build a 200 response.
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self::new(200, body)
    }

    /// True for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request failed before a response was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportError {
    message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for TransportError {}

/// Issues a single read against a URL.
///
/// Shared with the spawned fetch task, so implementations must be
/// `Send + Sync + 'static` and return a `Send` future.
pub trait Transport: Send + Sync + 'static {
    fn get(&self, url: &str) -> impl Future<Output = Result<RawResponse, TransportError>> + Send;
}
