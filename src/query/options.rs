//! Generation request body and its option map.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Keys owned by the request itself; options cannot override them.
const RESERVED_KEYS: [&str; 2] = ["model", "prompt"];

/// A single option value: numeric, text, or a list of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Integer(i64),
    Float(f64),
    Text(String),
    TextList(Vec<String>),
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Integer(value)
    }
}

impl From<i32> for OptionValue {
    fn from(value: i32) -> Self {
        OptionValue::Integer(value.into())
    }
}

impl From<u32> for OptionValue {
    fn from(value: u32) -> Self {
        OptionValue::Integer(value.into())
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        OptionValue::Float(value)
    }
}

impl From<f32> for OptionValue {
    fn from(value: f32) -> Self {
        OptionValue::Float(value.into())
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Text(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Text(value)
    }
}

impl From<Vec<String>> for OptionValue {
    fn from(value: Vec<String>) -> Self {
        OptionValue::TextList(value)
    }
}

impl From<Vec<&str>> for OptionValue {
    fn from(value: Vec<&str>) -> Self {
        OptionValue::TextList(value.into_iter().map(str::to_string).collect())
    }
}

/// Caller-supplied generation controls, keyed by parameter name.
///
/// # Example
///
/// ```
/// use llm_param_notebooks::query::GenerationOptions;
///
/// let options = GenerationOptions::new()
///     .temperature(0.7)
///     .stop(["Q:", "\n"])
///     .system("You are a helpful assistant.");
/// assert_eq!(options.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GenerationOptions {
    values: BTreeMap<String, OptionValue>,
}

impl GenerationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an arbitrary option, replacing any previous value.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn temperature(self, value: f64) -> Self {
        self.set("temperature", value)
    }

    pub fn top_p(self, value: f64) -> Self {
        self.set("top_p", value)
    }

    pub fn top_k(self, value: i64) -> Self {
        self.set("top_k", value)
    }

    pub fn frequency_penalty(self, value: f64) -> Self {
        self.set("frequency_penalty", value)
    }

    pub fn presence_penalty(self, value: f64) -> Self {
        self.set("presence_penalty", value)
    }

    /// Maximum number of tokens to generate (Ollama's name for `max_tokens`).
    pub fn num_predict(self, value: i64) -> Self {
        self.set("num_predict", value)
    }

    pub fn stop<I, S>(self, sequences: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let list: Vec<String> = sequences.into_iter().map(Into::into).collect();
        self.set("stop", list)
    }

    /// System instruction sent as the `system` field.
    pub fn system(self, instruction: impl Into<String>) -> Self {
        self.set("system", instruction.into())
    }

    pub fn seed(self, value: i64) -> Self {
        self.set("seed", value)
    }

    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// The JSON body posted to `/api/generate`.
///
/// Options are flattened next to `model` and `prompt`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationRequest {
    pub model: String,
    pub prompt: String,
    #[serde(flatten)]
    pub options: GenerationOptions,
}

impl GenerationRequest {
    /// Merges `prompt`, `model` and the caller's options into one body.
    pub fn new(
        model: impl Into<String>,
        prompt: impl Into<String>,
        mut options: GenerationOptions,
    ) -> Self {
        for key in RESERVED_KEYS {
            if options.values.remove(key).is_some() {
                warn!(option = key, "Ignoring option that collides with a request field");
            }
        }

        Self {
            model: model.into(),
            prompt: prompt.into(),
            options,
        }
    }
}
