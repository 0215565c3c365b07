//! 'llm-param-notebooks' - Tutorial notebooks on LLM inference parameters.
//!
//! This library builds Jupyter notebooks (nbformat v4) that explain the
//! sampling controls of a locally hosted Ollama model: temperature, top-p,
//! top-k, max tokens, presence and frequency penalties, stop sequences, the
//! system prompt and the seed. It also ships the small query helper the
//! notebooks rely on to call the model and render prompt/response pairs.
//!
//! # Building notebooks
//!
//! ```rust,no_run
//! use llm_param_notebooks::topics::{self, Topic, DEFAULT_OUTPUT_DIR};
//!
//! # fn example() -> Result<(), llm_param_notebooks::notebook::NotebookError> {
//! // One notebook
//! let path = topics::build_topic(Topic::Temperature, DEFAULT_OUTPUT_DIR)?;
//!
//! // All of them
//! let paths = topics::build_all(DEFAULT_OUTPUT_DIR)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Querying the model
//!
//! ```rust,no_run
//! use llm_param_notebooks::query::{GenerationOptions, OllamaClient, QueryError};
//!
//! # fn example() -> Result<(), QueryError> {
//! let client = OllamaClient::from_env()?;
//! match client.query("Describe a futuristic city in one sentence.", GenerationOptions::new().top_k(10)) {
//!     Ok(text) => println!("{}", text),
//!     Err(QueryError::ConnectionFailure) => eprintln!("Is Ollama running?"),
//!     Err(e) => eprintln!("{}", e),
//! }
//! # Ok(())
//! # }
//! ```

pub mod display;
pub mod notebook;
pub mod observability;
pub mod query;
pub mod topics;

pub use display::{display_example, render_example};
pub use notebook::{Block, Document, NotebookError};
pub use query::{GenerationOptions, OllamaClient, QueryConfig, QueryError};
pub use topics::{DEFAULT_OUTPUT_DIR, Topic, build_all, build_topic};
