//! The notebook document: an ordered, non-empty list of blocks.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value as JsonValue};
use tracing::{debug, info};

use super::cell::{Block, RawCell};
use super::NotebookError;

/// nbformat major version written and accepted.
pub const NBFORMAT: u32 = 4;
/// nbformat minor version written.
pub const NBFORMAT_MINOR: u32 = 5;

/// A complete notebook ready to be written to disk.
///
/// # Example
///
/// ```rust,no_run
/// use llm_param_notebooks::notebook::{Block, Document};
///
/// # fn example() -> Result<(), llm_param_notebooks::notebook::NotebookError> {
/// let doc = Document::build(vec![
///     Block::narrative("# Temperature"),
///     Block::example("print(query_ollama(\"Hi\", temperature=0.2))"),
/// ])?;
/// doc.write("notebooks/prompt-engineering/parameters/01_temperature.ipynb")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    blocks: Vec<Block>,
    metadata: Map<String, JsonValue>,
}

impl Document {
    /// Assembles a document from an ordered sequence of blocks.
    ///
    /// Returns [`NotebookError::EmptyDocument`] if `blocks` is empty.
    pub fn build(blocks: impl IntoIterator<Item = Block>) -> Result<Self, NotebookError> {
        let blocks: Vec<Block> = blocks.into_iter().collect();
        if blocks.is_empty() {
            return Err(NotebookError::EmptyDocument);
        }
        Ok(Self {
            blocks,
            metadata: Map::new(),
        })
    }

    /// Adds a notebook-level metadata entry (e.g. `kernelspec`).
    pub fn with_metadata(mut self, key: impl Into<String>, value: JsonValue) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn metadata(&self) -> &Map<String, JsonValue> {
        &self.metadata
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Always `false`; a document holds at least one block.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Serializes the document the way nbformat writes it: sorted keys,
    /// one-space indentation and a trailing newline.
    pub fn to_json_string(&self) -> Result<String, NotebookError> {
        let raw = RawNotebook {
            cells: self
                .blocks
                .iter()
                .enumerate()
                .map(|(index, block)| block.to_cell(index))
                .collect(),
            metadata: self.metadata.clone(),
            nbformat: NBFORMAT,
            nbformat_minor: NBFORMAT_MINOR,
        };

        let mut buf = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b" "));
        raw.serialize(&mut serializer)?;
        buf.push(b'\n');

        // serde_json only ever emits valid UTF-8.
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Parses a notebook previously produced by [`Document::to_json_string`]
    /// or by any nbformat v4 writer.
    pub fn from_json_str(json: &str) -> Result<Self, NotebookError> {
        let raw: RawNotebook = serde_json::from_str(json)?;
        if raw.nbformat != NBFORMAT {
            return Err(NotebookError::UnsupportedFormat(raw.nbformat));
        }

        let blocks = raw
            .cells
            .into_iter()
            .map(Block::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let mut doc = Self::build(blocks)?;
        doc.metadata = raw.metadata;
        Ok(doc)
    }

    /// Writes the document to `path`, creating missing parent directories.
    ///
    /// Existing files are overwritten. The write is not atomic.
    pub fn write(&self, path: impl AsRef<Path>) -> Result<(), NotebookError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| NotebookError::io(parent, e))?;
        }

        let json = self.to_json_string()?;
        fs::write(path, json.as_bytes()).map_err(|e| NotebookError::io(path, e))?;

        info!(
            path = %path.display(),
            cells = self.blocks.len(),
            "Wrote notebook"
        );
        Ok(())
    }

    /// Reads and parses a notebook file.
    pub fn read(path: impl AsRef<Path>) -> Result<Self, NotebookError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Reading notebook");
        let json = fs::read_to_string(path).map_err(|e| NotebookError::io(path, e))?;
        Self::from_json_str(&json)
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct RawNotebook {
    cells: Vec<RawCell>,
    #[serde(default)]
    metadata: Map<String, JsonValue>,
    nbformat: u32,
    nbformat_minor: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Document {
        Document::build(vec![
            Block::narrative("# Heading\n\nSome text."),
            Block::example("x = 1\nprint(x)"),
        ])
        .unwrap()
    }

    #[test]
    fn test_build_rejects_empty() {
        let err = Document::build(Vec::new()).unwrap_err();
        assert!(matches!(err, NotebookError::EmptyDocument));
    }

    #[test]
    fn test_build_preserves_order() {
        let doc = sample();
        assert_eq!(doc.len(), 2);
        assert!(!doc.is_empty());
        assert!(doc.blocks()[0].is_narrative());
        assert!(doc.blocks()[1].is_example());
    }

    #[test]
    fn test_json_layout() {
        let json = sample().to_json_string().unwrap();
        assert!(json.starts_with("{\n \"cells\": [\n"));
        assert!(json.ends_with("}\n"));

        let value: JsonValue = serde_json::from_str(&json).unwrap();
        assert_eq!(value["nbformat"], json!(4));
        assert_eq!(value["nbformat_minor"], json!(5));
        assert_eq!(value["metadata"], json!({}));
        assert_eq!(value["cells"][1]["source"], json!(["x = 1\n", "print(x)"]));
    }

    #[test]
    fn test_json_round_trip_with_metadata() {
        let doc = sample().with_metadata("language_info", json!({ "name": "python" }));
        let parsed = Document::from_json_str(&doc.to_json_string().unwrap()).unwrap();
        assert_eq!(parsed, doc);
    }

    #[test]
    fn test_rejects_other_nbformat_versions() {
        let json = r#"{"cells": [], "metadata": {}, "nbformat": 3, "nbformat_minor": 0}"#;
        let err = Document::from_json_str(json).unwrap_err();
        assert!(matches!(err, NotebookError::UnsupportedFormat(3)));
    }

    #[test]
    fn test_rejects_notebook_without_cells() {
        let json = r#"{"cells": [], "metadata": {}, "nbformat": 4, "nbformat_minor": 5}"#;
        let err = Document::from_json_str(json).unwrap_err();
        assert!(matches!(err, NotebookError::EmptyDocument));
    }

    #[test]
    fn test_reads_heading_from_single_string_source() {
        let json = r##"{
 "cells": [
  {"cell_type": "markdown", "metadata": {}, "source": "# Seed Parameter in LLMs"}
 ],
 "metadata": {},
 "nbformat": 4,
 "nbformat_minor": 5
}"##;
        let doc = Document::from_json_str(json).unwrap();
        assert_eq!(doc.blocks(), &[Block::narrative("# Seed Parameter in LLMs")]);
    }

    #[test]
    fn test_unicode_is_written_verbatim() {
        let doc = Document::build(vec![Block::narrative("⚠️ careful")]).unwrap();
        assert!(doc.to_json_string().unwrap().contains("⚠️ careful"));
    }
}
