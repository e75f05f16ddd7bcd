//! Error types for chordclass.
//!
//! Training and classification failures are caller-input errors; nothing here
//! is transient, so nothing is retried.

use thiserror::Error;

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// Training was attempted on a corpus that cannot produce a model
    #[error("Invalid corpus: {0}")]
    InvalidCorpus(String),

    /// Classification was attempted before any training pass succeeded
    #[error("Model not trained: call train before classify")]
    ModelNotTrained,

    /// A difficulty index outside the configured scale
    #[error("Unknown difficulty index {index}; scale has {available} entries")]
    UnknownDifficulty { index: usize, available: usize },

    /// Smoothing constant must be finite and positive
    #[error("Invalid smoothing constant: {0}")]
    InvalidSmoothing(f64),

    /// Corpus or config file I/O
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Corpus or config file contents
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<tempfile::PersistError> for Error {
    fn from(err: tempfile::PersistError) -> Self {
        Error::Io(err.error)
    }
}
