//! Notebook assembly and nbformat v4 serialization.
//!
//! A [`Document`] is an ordered, non-empty list of [`Block`]s. Narrative blocks
//! become Markdown cells, example blocks become code cells. Writing a document
//! creates any missing parent directories and produces byte-identical output
//! for identical documents, so regenerating a notebook is idempotent.

mod cell;
mod document;
mod error;

pub use cell::Block;
pub use document::{Document, NBFORMAT, NBFORMAT_MINOR};
pub use error::NotebookError;
