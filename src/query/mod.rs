//! Query helper for a locally hosted Ollama model.
//!
//! A query checks available memory, posts one request to `/api/generate` and
//! classifies the outcome into a [`QueryError`] variant. Nothing is retried.

mod client;
mod error;
mod memory;
mod options;
mod transport;

pub use client::{
    DEFAULT_ENDPOINT, DEFAULT_MODEL, NO_RESPONSE_PLACEHOLDER, OllamaClient, QueryConfig,
    parse_generate_body,
};
pub use error::QueryError;
pub use memory::{MemoryCheck, MemoryProbe, REQUIRED_MEMORY_GB, SystemMemory, check_system_memory};
pub use options::{GenerationOptions, GenerationRequest, OptionValue};
pub use transport::{HttpTransport, Transport, TransportError, TransportResponse};
