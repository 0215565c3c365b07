//! OllamaClient - one-shot generation requests against a local Ollama server.
//!
//! # Example
//!
//! ```rust,no_run
//! use llm_param_notebooks::query::{GenerationOptions, OllamaClient};
//!
//! # fn example() -> Result<(), llm_param_notebooks::query::QueryError> {
//! // Default configuration (localhost:11434, llama2, 8.4 GB memory floor)
//! let client = OllamaClient::new()?;
//! let story = client.query(
//!     "Write a one-sentence story about a mysterious door in the forest.",
//!     GenerationOptions::new().temperature(0.7),
//! )?;
//!
//! // Failures rendered as text, the way the notebooks display them
//! let text = client.query_text("Describe a sunset", GenerationOptions::new().seed(42));
//! # Ok(())
//! # }
//! ```

use std::env;
use std::time::Duration;

use serde::Deserialize;
use serde_json::Value as JsonValue;
use tracing::{debug, info, instrument, warn};

use super::error::QueryError;
use super::memory::{MemoryProbe, REQUIRED_MEMORY_GB, SystemMemory, check_system_memory};
use super::options::{GenerationOptions, GenerationRequest};
use super::transport::{HttpTransport, Transport, TransportError};

pub const DEFAULT_MODEL: &str = "llama2";
pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434";
const GENERATE_PATH: &str = "/api/generate";

/// Returned when the server answers without any `response` fragment.
pub const NO_RESPONSE_PLACEHOLDER: &str = "No response received";

/// How much of an unparseable body is kept in [`QueryError::MalformedResponse`].
const MALFORMED_PREFIX_CHARS: usize = 200;

/// Configuration for [`OllamaClient`].
#[derive(Debug, Clone, PartialEq)]
pub struct QueryConfig {
    /// Server base URL (e.g. `http://localhost:11434`)
    pub endpoint: String,
    /// Model identifier sent with every request
    pub model: String,
    /// Minimum available memory, in GB, before a request is attempted
    pub required_memory_gb: f64,
    /// Request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            required_memory_gb: REQUIRED_MEMORY_GB,
            timeout: None,
        }
    }
}

impl QueryConfig {
    /// Loads configuration from environment variables.
    ///
    /// Environment variables:
    /// - `OLLAMA_HOST` (optional, defaults to `http://localhost:11434`)
    /// - `OLLAMA_MODEL` (optional, defaults to `llama2`)
    pub fn from_env() -> Self {
        let endpoint = env::var("OLLAMA_HOST").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        let model = env::var("OLLAMA_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Self::default().with_endpoint(endpoint).with_model(model)
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_required_memory_gb(mut self, required_gb: f64) -> Self {
        self.required_memory_gb = required_gb;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Full URL of the generation endpoint.
    pub fn generate_url(&self) -> String {
        format!("{}{}", self.endpoint.trim_end_matches('/'), GENERATE_PATH)
    }
}

/// Synchronous client for the Ollama `/api/generate` endpoint.
///
/// Each call is independent: check memory, post once, classify the outcome.
/// There is no retry and no state shared between calls.
#[derive(Debug, Clone)]
pub struct OllamaClient<T = HttpTransport, M = SystemMemory> {
    config: QueryConfig,
    transport: T,
    memory: M,
}

impl OllamaClient {
    /// Creates a client with the default configuration.
    pub fn new() -> Result<Self, QueryError> {
        Self::with_config(QueryConfig::default())
    }

    /// Creates a client configured from `OLLAMA_HOST` / `OLLAMA_MODEL`.
    pub fn from_env() -> Result<Self, QueryError> {
        Self::with_config(QueryConfig::from_env())
    }

    /// Creates a client over HTTP with the given configuration.
    pub fn with_config(config: QueryConfig) -> Result<Self, QueryError> {
        let transport = HttpTransport::new(config.timeout)?;
        Ok(Self::with_parts(config, transport, SystemMemory))
    }
}

impl<T: Transport, M: MemoryProbe> OllamaClient<T, M> {
    /// Assembles a client from explicit parts. Used to inject test doubles.
    pub fn with_parts(config: QueryConfig, transport: T, memory: M) -> Self {
        Self {
            config,
            transport,
            memory,
        }
    }

    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    /// Sends one generation request and returns the concatenated response text.
    #[instrument(skip_all, fields(model = %self.config.model))]
    pub fn query(&self, prompt: &str, options: GenerationOptions) -> Result<String, QueryError> {
        let check = check_system_memory(&self.memory, self.config.required_memory_gb);
        if !check.sufficient {
            warn!(
                available_gb = check.available_gb,
                required_gb = self.config.required_memory_gb,
                "Skipping request: insufficient memory"
            );
            return Err(QueryError::InsufficientResources {
                available_gb: check.available_gb,
                required_gb: self.config.required_memory_gb,
            });
        }

        let request = GenerationRequest::new(&self.config.model, prompt, options);
        let body = serde_json::to_value(&request)
            .map_err(|e| QueryError::UnexpectedError(e.to_string()))?;

        let url = self.config.generate_url();
        debug!(url = %url, options = request.options.len(), "Sending generation request");

        let response = self.transport.post_json(&url, &body)?;

        if !response.is_success() {
            let message = find_error(&response.body).unwrap_or_else(|| {
                format!("HTTP {}: {}", response.status, body_prefix(&response.body))
            });
            return Err(QueryError::RemoteError(message));
        }

        let text = parse_generate_body(&response.body)?;
        info!(chars = text.len(), "Generation complete");
        Ok(text)
    }

    /// Like [`query`](Self::query), but renders failures as warning text.
    pub fn query_text(&self, prompt: &str, options: GenerationOptions) -> String {
        match self.query(prompt, options) {
            Ok(text) => text,
            Err(e) => e.to_display_text(),
        }
    }
}

impl From<TransportError> for QueryError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Connect(_) => QueryError::ConnectionFailure,
            TransportError::Request(message) => QueryError::RequestFailed(message),
            TransportError::Body(message) | TransportError::Client(message) => {
                QueryError::UnexpectedError(message)
            }
        }
    }
}

// =============================================================================
// Response parsing
// =============================================================================

#[derive(Debug, Deserialize)]
struct GenerateChunk {
    #[serde(default)]
    response: Option<String>,
    #[serde(default)]
    error: Option<JsonValue>,
}

fn error_message(error: JsonValue) -> String {
    match error {
        JsonValue::String(message) => message,
        other => other.to_string(),
    }
}

fn body_prefix(body: &str) -> String {
    body.chars().take(MALFORMED_PREFIX_CHARS).collect()
}

/// Looks for an `error` field in any line of the body.
fn find_error(body: &str) -> Option<String> {
    body.lines()
        .filter_map(|line| serde_json::from_str::<GenerateChunk>(line.trim()).ok())
        .find_map(|chunk| chunk.error)
        .map(error_message)
}

/// Parses a newline-delimited `/api/generate` body.
///
/// `response` fragments are concatenated in order. The first `error` field
/// wins. A final line that fails to parse after at least one good line is
/// treated as a truncated fragment and dropped; any other bad line makes the
/// whole body malformed.
pub fn parse_generate_body(body: &str) -> Result<String, QueryError> {
    let lines: Vec<&str> = body
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        return Err(QueryError::MalformedResponse(body_prefix(body)));
    }

    let last = lines.len() - 1;
    let mut text = String::new();
    let mut saw_fragment = false;

    for (index, line) in lines.iter().enumerate() {
        match serde_json::from_str::<GenerateChunk>(line) {
            Ok(chunk) => {
                if let Some(error) = chunk.error {
                    return Err(QueryError::RemoteError(error_message(error)));
                }
                if let Some(fragment) = chunk.response {
                    text.push_str(&fragment);
                    saw_fragment = true;
                }
            }
            Err(e) if index == last && index > 0 => {
                warn!(error = %e, "Dropping truncated trailing fragment");
            }
            Err(_) => return Err(QueryError::MalformedResponse(body_prefix(body))),
        }
    }

    if !saw_fragment {
        return Ok(NO_RESPONSE_PLACEHOLDER.to_string());
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = QueryConfig::default();
        assert_eq!(config.endpoint, "http://localhost:11434");
        assert_eq!(config.model, "llama2");
        assert!((config.required_memory_gb - 8.4).abs() < f64::EPSILON);
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_config_builders() {
        let config = QueryConfig::default()
            .with_endpoint("http://192.168.1.100:11434/")
            .with_model("mistral")
            .with_required_memory_gb(4.0)
            .with_timeout(Duration::from_secs(30));

        assert_eq!(config.model, "mistral");
        assert_eq!(config.generate_url(), "http://192.168.1.100:11434/api/generate");
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_from_env_defaults() {
        unsafe {
            std::env::remove_var("OLLAMA_HOST");
            std::env::remove_var("OLLAMA_MODEL");
        }

        let config = QueryConfig::from_env();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_parse_concatenates_fragments() {
        let body = "{\"response\":\"Hel\",\"done\":false}\n{\"response\":\"lo\",\"done\":true}\n";
        assert_eq!(parse_generate_body(body).unwrap(), "Hello");
    }

    #[test]
    fn test_parse_single_object() {
        let body = r#"{"model":"llama2","response":"Hi there","done":true}"#;
        assert_eq!(parse_generate_body(body).unwrap(), "Hi there");
    }

    #[test]
    fn test_parse_missing_response_uses_placeholder() {
        assert_eq!(
            parse_generate_body(r#"{"done":true}"#).unwrap(),
            NO_RESPONSE_PLACEHOLDER
        );
    }

    #[test]
    fn test_parse_embedded_error() {
        let err = parse_generate_body(r#"{"error":"model not found"}"#).unwrap_err();
        assert_eq!(err, QueryError::RemoteError("model not found".to_string()));
    }

    #[test]
    fn test_parse_non_string_error() {
        let err = parse_generate_body(r#"{"error":{"code":42}}"#).unwrap_err();
        assert_eq!(err, QueryError::RemoteError("{\"code\":42}".to_string()));
    }

    #[test]
    fn test_parse_drops_truncated_trailing_line() {
        let body = "{\"response\":\"Hel\"}\n{\"response\":\"lo\"}\n{\"respon";
        assert_eq!(parse_generate_body(body).unwrap(), "Hello");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse_generate_body("<html>Bad Gateway</html>").unwrap_err();
        assert_eq!(
            err,
            QueryError::MalformedResponse("<html>Bad Gateway</html>".to_string())
        );
    }

    #[test]
    fn test_parse_rejects_bad_middle_line() {
        let body = "{\"response\":\"a\"}\nnot json\n{\"response\":\"b\"}";
        assert!(matches!(
            parse_generate_body(body),
            Err(QueryError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_parse_empty_body_is_malformed() {
        assert!(matches!(
            parse_generate_body("  \n"),
            Err(QueryError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_malformed_prefix_is_truncated() {
        let body = "x".repeat(500);
        match parse_generate_body(&body) {
            Err(QueryError::MalformedResponse(prefix)) => assert_eq!(prefix.len(), 200),
            other => panic!("Expected MalformedResponse, got {:?}", other),
        }
    }

    #[test]
    fn test_transport_error_mapping() {
        assert_eq!(
            QueryError::from(TransportError::Connect("refused".into())),
            QueryError::ConnectionFailure
        );
        assert_eq!(
            QueryError::from(TransportError::Request("timed out".into())),
            QueryError::RequestFailed("timed out".into())
        );
        assert_eq!(
            QueryError::from(TransportError::Body("eof".into())),
            QueryError::UnexpectedError("eof".into())
        );
    }
}
