//! Tutorial notebooks, one per inference-time parameter.
//!
//! Every topic is a fixed table of blocks. [`build_topic`] turns a topic into
//! a [`Document`] and writes it under the output directory; [`build_all`]
//! does so for every topic.

mod frequency_penalty;
mod helper;
mod max_tokens;
mod presence_penalty;
mod seed;
mod stop_sequences;
mod system_prompt;
mod temperature;
mod top_k;
mod top_p;

use std::path::{Path, PathBuf};

use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};
use tracing::info;

use crate::notebook::{Block, Document, NotebookError};

/// Where the notebooks are written unless told otherwise.
pub const DEFAULT_OUTPUT_DIR: &str = "notebooks/prompt-engineering/parameters";

/// An inference-time parameter covered by a tutorial notebook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Topic {
    Temperature,
    TopP,
    TopK,
    MaxTokens,
    PresencePenalty,
    FrequencyPenalty,
    StopSequences,
    SystemPrompt,
    Seed,
}

impl Topic {
    /// All topics in notebook order.
    pub fn all() -> Vec<Topic> {
        Topic::iter().collect()
    }

    /// Output file name; the numbering follows the tutorial sequence, which
    /// skips 08.
    pub fn file_name(&self) -> &'static str {
        match self {
            Topic::Temperature => "01_temperature.ipynb",
            Topic::TopP => "02_top_p.ipynb",
            Topic::TopK => "03_top_k.ipynb",
            Topic::MaxTokens => "04_max_tokens.ipynb",
            Topic::PresencePenalty => "05_presence_penalty.ipynb",
            Topic::FrequencyPenalty => "06_frequency_penalty.ipynb",
            Topic::StopSequences => "07_stop_sequences.ipynb",
            Topic::SystemPrompt => "09_system_prompt.ipynb",
            Topic::Seed => "10_seed.ipynb",
        }
    }

    /// The Ollama request field the notebook demonstrates.
    pub fn request_field(&self) -> &'static str {
        match self {
            Topic::Temperature => "temperature",
            Topic::TopP => "top_p",
            Topic::TopK => "top_k",
            Topic::MaxTokens => "num_predict",
            Topic::PresencePenalty => "presence_penalty",
            Topic::FrequencyPenalty => "frequency_penalty",
            Topic::StopSequences => "stop",
            Topic::SystemPrompt => "system",
            Topic::Seed => "seed",
        }
    }

    /// The ordered content blocks of this topic's notebook.
    pub fn blocks(&self) -> Result<Vec<Block>, NotebookError> {
        match self {
            Topic::Temperature => temperature::blocks(),
            Topic::TopP => top_p::blocks(),
            Topic::TopK => top_k::blocks(),
            Topic::MaxTokens => max_tokens::blocks(),
            Topic::PresencePenalty => presence_penalty::blocks(),
            Topic::FrequencyPenalty => frequency_penalty::blocks(),
            Topic::StopSequences => stop_sequences::blocks(),
            Topic::SystemPrompt => system_prompt::blocks(),
            Topic::Seed => seed::blocks(),
        }
    }

    pub fn document(&self) -> Result<Document, NotebookError> {
        Document::build(self.blocks()?)
    }
}

/// Builds one topic notebook and writes it into `out_dir`.
///
/// Returns the path of the written file.
pub fn build_topic(topic: Topic, out_dir: impl AsRef<Path>) -> Result<PathBuf, NotebookError> {
    let path = out_dir.as_ref().join(topic.file_name());
    topic.document()?.write(&path)?;
    Ok(path)
}

/// Builds every topic notebook into `out_dir`.
pub fn build_all(out_dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, NotebookError> {
    let out_dir = out_dir.as_ref();
    let paths = Topic::iter()
        .map(|topic| build_topic(topic, out_dir))
        .collect::<Result<Vec<_>, _>>()?;

    info!(count = paths.len(), dir = %out_dir.display(), "Built all notebooks");
    Ok(paths)
}
