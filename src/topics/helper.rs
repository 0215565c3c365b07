//! The `query_ollama` helper cell shared by every topic notebook.
//!
//! Each notebook starts with a small Python function that posts to the local
//! Ollama endpoint with one parameter under study. The function body is the
//! same for every topic apart from the parameter, so it is rendered from a
//! template.

use minijinja::Environment;
use serde::Serialize;

use crate::notebook::{Block, NotebookError};
use crate::query::{DEFAULT_ENDPOINT, DEFAULT_MODEL};

const QUERY_HELPER_TEMPLATE: &str = r##"import json
from subprocess import Popen, PIPE

def query_ollama(prompt, {{ param }}={{ default }}):
    """Query Ollama with {{ description }}"""
    cmd = [
        "curl",
        "{{ url }}",
        "-d",
        json.dumps({
            "model": "{{ model }}",
            "prompt": prompt,
            "{{ field }}": {{ value }}
        })
    ]

    process = Popen(cmd, stdout=PIPE, stderr=PIPE)
    output, _ = process.communicate()

    responses = [json.loads(line) for line in output.decode().strip().split("\n")]
    return "".join(r.get("response", "") for r in responses)"##;

// The seed is only sent when given, so the payload is built conditionally.
const SEED_HELPER_TEMPLATE: &str = r##"import json
from subprocess import Popen, PIPE

def query_ollama(prompt, seed=None):
    """Query Ollama with a specific seed"""
    payload = {
        "model": "{{ model }}",
        "prompt": prompt
    }
    if seed is not None:
        payload["seed"] = seed

    cmd = [
        "curl",
        "{{ url }}",
        "-d",
        json.dumps(payload)
    ]

    process = Popen(cmd, stdout=PIPE, stderr=PIPE)
    output, _ = process.communicate()

    responses = [json.loads(line) for line in output.decode().strip().split("\n")]
    return "".join(r.get("response", "") for r in responses)"##;

/// Parameters of the generated `query_ollama` function.
#[derive(Debug, Clone, Serialize)]
pub(super) struct QueryHelper {
    /// Python argument name
    pub param: &'static str,
    /// Python default value expression
    pub default: &'static str,
    /// Docstring tail, e.g. "a specific top_k setting"
    pub description: &'static str,
    /// JSON field sent to Ollama
    pub field: &'static str,
    /// Python expression for the field value
    pub value: &'static str,
}

impl QueryHelper {
    /// Helper whose argument maps one-to-one onto an Ollama field.
    pub(super) fn setting(param: &'static str, default: &'static str) -> Self {
        Self {
            param,
            default,
            description: "",
            field: param,
            value: param,
        }
    }

    pub(super) fn description(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    pub(super) fn field(mut self, field: &'static str, value: &'static str) -> Self {
        self.field = field;
        self.value = value;
        self
    }

    pub(super) fn to_block(&self) -> Result<Block, NotebookError> {
        let description = if self.description.is_empty() {
            format!("a specific {} setting", self.param)
        } else {
            self.description.to_string()
        };

        let source = render_cell(
            QUERY_HELPER_TEMPLATE,
            minijinja::context! {
                param => self.param,
                default => self.default,
                description => description,
                field => self.field,
                value => self.value,
                url => generate_url(),
                model => DEFAULT_MODEL,
            },
        )?;
        Ok(Block::example(source))
    }
}

/// Helper cell for the seed notebook.
pub(super) fn seed_helper_block() -> Result<Block, NotebookError> {
    let source = render_cell(
        SEED_HELPER_TEMPLATE,
        minijinja::context! {
            url => generate_url(),
            model => DEFAULT_MODEL,
        },
    )?;
    Ok(Block::example(source))
}

fn generate_url() -> String {
    format!("{}/api/generate", DEFAULT_ENDPOINT)
}

/// Renders a cell template with a serializable context.
fn render_cell<T: Serialize>(template: &str, context: T) -> Result<String, minijinja::Error> {
    let mut env = Environment::new();
    env.add_template("cell", template)?;
    let tmpl = env.get_template("cell")?;
    tmpl.render(context)
}
