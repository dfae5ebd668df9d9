//! Error types for the Lexigraph library.
//!
//! All fallible operations return [`Result`], with [`LexigraphError`] as the
//! error type. The taxonomy is deliberately small: most "failures" a user can
//! provoke (unknown word, no path, no bridge words) are ordinary query
//! results, not errors — the only fatal condition is a missing input text,
//! since the graph cannot be built without it.

use std::io;

use thiserror::Error;

/// The main error type for Lexigraph operations.
#[derive(Error, Debug)]
pub enum LexigraphError {
    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input text file could not be located.
    #[error("Input text not found: {0}")]
    MissingSource(String),

    /// Analysis-related errors (tokenization, invalid patterns, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Graph-related errors (malformed edge dumps, etc.)
    #[error("Graph error: {0}")]
    Graph(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with LexigraphError.
pub type Result<T> = std::result::Result<T, LexigraphError>;

impl LexigraphError {
    /// Create a new missing-source error.
    pub fn missing_source<S: Into<String>>(msg: S) -> Self {
        LexigraphError::MissingSource(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        LexigraphError::Analysis(msg.into())
    }

    /// Create a new graph error.
    pub fn graph<S: Into<String>>(msg: S) -> Self {
        LexigraphError::Graph(msg.into())
    }
}
