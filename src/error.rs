use std::error::Error;
use std::fmt;

use crate::transport::TransportError;

/// Why a fetch failed.
///
/// These causes are logged, never surfaced: every variant collapses into
/// [`LoadState::Failed`](crate::LoadState::Failed) carrying the generic message.
#[derive(Debug)]
pub enum FetchError {
    /// The request never produced a response.
    Transport(TransportError),
    /// The response status did not indicate success.
    Status(u16),
    /// The body was not a JSON object of catalog entries.
    Decode(serde_json::Error),
    /// `activate()` was called outside a Tokio runtime.
    NoRuntime(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport(e) => write!(f, "transport error: {}", e),
            FetchError::Status(status) => write!(f, "unexpected status: {}", status),
            FetchError::Decode(e) => write!(f, "decode failed: {}", e),
            FetchError::NoRuntime(msg) => write!(f, "no async runtime: {}", msg),
        }
    }
}

impl Error for FetchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            FetchError::Transport(e) => Some(e),
            FetchError::Decode(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TransportError> for FetchError {
    fn from(err: TransportError) -> Self {
        FetchError::Transport(err)
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err)
    }
}
