//! Error types for untextract library.

use std::io;
use thiserror::Error;

/// Result type alias for untextract operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading, reconstructing or rendering tables.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The analysis response is not valid JSON or does not match the block schema.
    #[error("Invalid analysis response: {0}")]
    Json(#[from] serde_json::Error),

    /// The analysis job has not produced a usable result.
    #[error("Analysis job not complete (status: {0})")]
    JobNotComplete(String),

    /// A cell references a word that is not in the word index (strict mode only).
    #[error("Cell {cell_id} references unknown word {word_id}")]
    MissingWord {
        /// Id of the referencing CELL block
        cell_id: String,
        /// Id that could not be resolved
        word_id: String,
    },

    /// Invalid page range specification.
    #[error("Invalid page range: {0}")]
    InvalidPageRange(String),

    /// Error during rendering (HTML, text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}
