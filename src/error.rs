//! Error types for the gender decoder.
//!
//! All fallible operations in this crate return [`Result`], whose error side
//! is the [`DecoderError`] enum.
//!
//! # Examples
//!
//! ```
//! use gender_decoder::error::{DecoderError, Result};
//!
//! fn load() -> Result<()> {
//!     Err(DecoderError::lexicon("masculine list is missing"))
//! }
//!
//! match load() {
//!     Ok(_) => println!("Loaded"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for gender decoder operations.
#[derive(Error, Debug)]
pub enum DecoderError {
    /// I/O errors (file operations, stdin, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Lexicon configuration errors (malformed stem lists, invalid stems)
    #[error("Lexicon error: {0}")]
    Lexicon(String),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Corpus errors (bulk ingestion, annotated data loading)
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// CSV reading/writing errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with DecoderError.
pub type Result<T> = std::result::Result<T, DecoderError>;

impl DecoderError {
    /// Create a new lexicon (configuration) error.
    pub fn lexicon<S: Into<String>>(msg: S) -> Self {
        DecoderError::Lexicon(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        DecoderError::Analysis(msg.into())
    }

    /// Create a new corpus error.
    pub fn corpus<S: Into<String>>(msg: S) -> Self {
        DecoderError::Corpus(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        DecoderError::InvalidArgument(msg.into())
    }

    /// Whether this error comes from a malformed lexicon.
    pub fn is_configuration(&self) -> bool {
        matches!(self, DecoderError::Lexicon(_))
    }
}
