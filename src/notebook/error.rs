//! Error types for building, writing and reading notebooks.

use std::path::PathBuf;

/// Errors that can occur while assembling or persisting a notebook.
#[derive(Debug, thiserror::Error)]
pub enum NotebookError {
    /// A document must contain at least one block.
    #[error("Cannot build a notebook from an empty block list")]
    EmptyDocument,

    /// Reading, writing or creating directories failed.
    #[error("I/O error at '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The notebook JSON could not be serialized or parsed.
    #[error("Notebook JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A cell template failed to render.
    #[error("Failed to render cell template: {0}")]
    Template(#[from] minijinja::Error),

    /// The notebook contains a cell type that has no block counterpart.
    #[error("Unsupported cell type: {0}")]
    UnsupportedCell(String),

    /// The notebook is not an nbformat v4 document.
    #[error("Unsupported nbformat version: {0}")]
    UnsupportedFormat(u32),
}

impl NotebookError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        NotebookError::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_mentions_path() {
        let err = NotebookError::io(
            "out/01_temperature.ipynb",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let message = err.to_string();
        assert!(message.contains("out/01_temperature.ipynb"));
        assert!(message.contains("denied"));
    }

    #[test]
    fn test_empty_document_message() {
        assert_eq!(
            NotebookError::EmptyDocument.to_string(),
            "Cannot build a notebook from an empty block list"
        );
    }
}
