//! Error types for the query helper.

use thiserror::Error;

/// Classified failures of a single generation request.
///
/// Every failure is handled at the call site; the helper never retries.
/// The `Display` text is written for direct display in place of a response.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    /// The endpoint could not be reached at the transport level.
    #[error("Could not connect to Ollama API. Is Ollama running?")]
    ConnectionFailure,

    /// The request failed for a transport reason other than connecting.
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// The server answered with a non-success status or an embedded `error` field.
    #[error("API Error: {0}")]
    RemoteError(String),

    /// The response body could not be parsed. Holds a prefix of the raw body.
    #[error("Invalid JSON response: {0}...")]
    MalformedResponse(String),

    /// Not enough free system memory to run the model.
    #[error(
        "Insufficient system memory. Available: {available_gb:.1}GB, Required: {required_gb:.1}GB. Please free up memory or use a smaller model."
    )]
    InsufficientResources { available_gb: f64, required_gb: f64 },

    /// Anything that does not fit the categories above.
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl QueryError {
    /// Renders the error as the warning text shown in place of a response.
    pub fn to_display_text(&self) -> String {
        format!("⚠️ {}", self)
    }

    /// Whether the request failed before reaching the network.
    pub fn is_local(&self) -> bool {
        matches!(self, QueryError::InsufficientResources { .. })
    }
}
