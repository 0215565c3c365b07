//! Notebook blocks and their nbformat v4 cell representation.

use serde::de::Deserializer;
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use super::NotebookError;

/// One unit of notebook content.
///
/// A `Narrative` block becomes a Markdown cell and an `Example` block becomes
/// a code cell with no outputs. Blocks are immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Explanatory Markdown text.
    Narrative(String),
    /// Executable example source.
    Example(String),
}

impl Block {
    /// Creates a narrative (Markdown) block.
    pub fn narrative(text: impl Into<String>) -> Self {
        Block::Narrative(text.into())
    }

    /// Creates an example (code) block.
    pub fn example(source: impl Into<String>) -> Self {
        Block::Example(source.into())
    }

    /// Returns the text or source of the block.
    pub fn text(&self) -> &str {
        match self {
            Block::Narrative(text) | Block::Example(text) => text,
        }
    }

    pub fn is_narrative(&self) -> bool {
        matches!(self, Block::Narrative(_))
    }

    pub fn is_example(&self) -> bool {
        matches!(self, Block::Example(_))
    }

    pub(crate) fn to_cell(&self, index: usize) -> RawCell {
        let id = Some(format!("cell-{}", index));
        match self {
            Block::Narrative(text) => RawCell::Markdown {
                id,
                metadata: Map::new(),
                source: Source(text.clone()),
            },
            Block::Example(source) => RawCell::Code {
                execution_count: None,
                id,
                metadata: Map::new(),
                outputs: Vec::new(),
                source: Source(source.clone()),
            },
        }
    }
}

impl TryFrom<RawCell> for Block {
    type Error = NotebookError;

    fn try_from(cell: RawCell) -> Result<Self, Self::Error> {
        match cell {
            RawCell::Markdown { source, .. } => Ok(Block::Narrative(source.0)),
            RawCell::Code { source, .. } => Ok(Block::Example(source.0)),
            RawCell::Raw { .. } => Err(NotebookError::UnsupportedCell("raw".to_string())),
            RawCell::Unknown => Err(NotebookError::UnsupportedCell("unknown".to_string())),
        }
    }
}

// =============================================================================
// nbformat v4 wire types
// =============================================================================

// Field order is alphabetical so the serialized keys come out sorted, matching
// the layout nbformat itself writes.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "cell_type", rename_all = "lowercase")]
pub(crate) enum RawCell {
    Code {
        #[serde(default)]
        execution_count: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        #[serde(default)]
        metadata: Map<String, JsonValue>,
        #[serde(default)]
        outputs: Vec<JsonValue>,
        source: Source,
    },
    Markdown {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        #[serde(default)]
        metadata: Map<String, JsonValue>,
        source: Source,
    },
    Raw {
        #[serde(default)]
        source: Source,
    },
    #[serde(other)]
    Unknown,
}

/// Cell source text.
///
/// Written as a list of lines that keep their trailing newline; read from
/// either that list form or a single string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Source(pub(crate) String);

impl Serialize for Source {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let lines: Vec<&str> = self.0.split_inclusive('\n').collect();
        let mut seq = serializer.serialize_seq(Some(lines.len()))?;
        for line in lines {
            seq.serialize_element(line)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Source {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Multiline {
            Single(String),
            Lines(Vec<String>),
        }

        Ok(match Multiline::deserialize(deserializer)? {
            Multiline::Single(text) => Source(text),
            Multiline::Lines(lines) => Source(lines.concat()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_narrative_becomes_markdown_cell() {
        let cell = Block::narrative("# Title\n\nBody").to_cell(0);
        let value = serde_json::to_value(&cell).unwrap();
        assert_eq!(
            value,
            json!({
                "cell_type": "markdown",
                "id": "cell-0",
                "metadata": {},
                "source": ["# Title\n", "\n", "Body"]
            })
        );
    }

    #[test]
    fn test_example_becomes_code_cell() {
        let cell = Block::example("print(1)").to_cell(3);
        let value = serde_json::to_value(&cell).unwrap();
        assert_eq!(
            value,
            json!({
                "cell_type": "code",
                "execution_count": null,
                "id": "cell-3",
                "metadata": {},
                "outputs": [],
                "source": ["print(1)"]
            })
        );
    }

    #[test]
    fn test_empty_source_serializes_as_empty_list() {
        let value = serde_json::to_value(Source(String::new())).unwrap();
        assert_eq!(value, json!([]));
    }

    #[test]
    fn test_source_accepts_single_string() {
        let cell: RawCell = serde_json::from_value(json!({
            "cell_type": "code",
            "source": "x = 1\ny = 2"
        }))
        .unwrap();
        let block = Block::try_from(cell).unwrap();
        assert_eq!(block, Block::example("x = 1\ny = 2"));
    }

    #[test]
    fn test_raw_cell_is_rejected() {
        let cell: RawCell = serde_json::from_value(json!({
            "cell_type": "raw",
            "metadata": {},
            "source": ["raw text"]
        }))
        .unwrap();
        let err = Block::try_from(cell).unwrap_err();
        assert!(matches!(err, NotebookError::UnsupportedCell(kind) if kind == "raw"));
    }

    #[test]
    fn test_unknown_cell_type_is_rejected() {
        let cell: RawCell = serde_json::from_value(json!({
            "cell_type": "heading",
            "source": "old"
        }))
        .unwrap();
        assert!(Block::try_from(cell).is_err());
    }

    #[test]
    fn test_block_accessors() {
        let block = Block::narrative("text");
        assert!(block.is_narrative());
        assert!(!block.is_example());
        assert_eq!(block.text(), "text");
    }
}
