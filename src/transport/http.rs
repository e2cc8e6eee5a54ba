//! reqwest-backed transport.

use reqwest::Client;

use super::{RawResponse, Transport, TransportError};

/// GETs over HTTP(S) with a shared `reqwest::Client`.
///
/// No timeout is set; a request runs until the server answers or the
/// connection fails.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a pre-built client (custom TLS, proxies, default headers).
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<RawResponse, TransportError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| TransportError::new(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::new(e.to_string()))?;

        Ok(RawResponse::new(status, body.to_vec()))
    }
}
