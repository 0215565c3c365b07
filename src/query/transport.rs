//! HTTP transport seam for the query helper.
//!
//! [`OllamaClient`](super::OllamaClient) talks to the network only through the
//! [`Transport`] trait, so tests can swap in a recording mock.

use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::Value as JsonValue;
use thiserror::Error;
use tracing::debug;

/// Status and raw body of an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Shorthand for a `200 OK` response.
    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Failures below the HTTP layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The connection could not be established.
    #[error("connection failed: {0}")]
    Connect(String),

    /// The request was sent but failed (timeout, protocol error, ...).
    #[error("request failed: {0}")]
    Request(String),

    /// The response body could not be read.
    #[error("failed to read response body: {0}")]
    Body(String),

    /// The HTTP client could not be constructed.
    #[error("failed to create HTTP client: {0}")]
    Client(String),
}

/// A blocking JSON POST.
pub trait Transport {
    fn post_json(&self, url: &str, body: &JsonValue) -> Result<TransportResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn post_json(&self, url: &str, body: &JsonValue) -> Result<TransportResponse, TransportError> {
        (**self).post_json(url, body)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn post_json(&self, url: &str, body: &JsonValue) -> Result<TransportResponse, TransportError> {
        (**self).post_json(url, body)
    }
}

/// [`Transport`] backed by a blocking `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Creates a transport. `None` disables the request timeout entirely.
    ///
    /// System proxies are bypassed; the endpoint is a local service.
    pub fn new(timeout: Option<Duration>) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(timeout)
            .no_proxy()
            .build()
            .map_err(|e| TransportError::Client(e.to_string()))?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn post_json(&self, url: &str, body: &JsonValue) -> Result<TransportResponse, TransportError> {
        debug!(url, "POST");

        let response = self.client.post(url).json(body).send().map_err(|e| {
            if e.is_connect() {
                TransportError::Connect(e.to_string())
            } else {
                TransportError::Request(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| TransportError::Body(e.to_string()))?;

        debug!(status, bytes = body.len(), "Response received");
        Ok(TransportResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_success_range() {
        assert!(TransportResponse::ok("").is_success());
        assert!(TransportResponse::new(204, "").is_success());
        assert!(!TransportResponse::new(404, "").is_success());
        assert!(!TransportResponse::new(500, "").is_success());
    }

    #[test]
    fn test_http_transport_builds_without_timeout() {
        assert!(HttpTransport::new(None).is_ok());
    }

    #[test]
    fn test_connection_refused_is_classified() {
        // Bind to an ephemeral port, then free it so nothing is listening there.
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let transport = HttpTransport::new(Some(Duration::from_secs(5))).unwrap();
        let url = format!("http://127.0.0.1:{}/api/generate", port);

        let err = transport
            .post_json(&url, &serde_json::json!({ "prompt": "hi" }))
            .unwrap_err();
        assert!(matches!(err, TransportError::Connect(_)), "got {:?}", err);
    }
}
