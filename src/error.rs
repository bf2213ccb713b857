//! Error types for the tokenframe library

use thiserror::Error;

/// Errors surfaced by the tokenize-and-expand pipeline
#[derive(Error, Debug)]
pub enum Error {
    /// Input table or arguments are malformed (non-scalar column, ragged
    /// row, missing column, missing unit argument)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Markup formats only support word tokenization
    #[error("unit `{unit}` cannot be combined with format `{format}`; markup formats require `words`")]
    UnsupportedCombination { unit: String, format: String },

    /// Unit name does not match any built-in splitter
    #[error("unknown token unit `{0}`")]
    UnknownTokenUnit(String),

    /// A splitter returned a column of the wrong length
    #[error("splitter returned {actual} token lists for {expected} input rows")]
    TokenizerContractViolation { expected: usize, actual: usize },

    /// Invalid regex pattern for the `regex` unit
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// I/O failure at the boundary
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an `InvalidInput` error from any message
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }
}

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, Error>;
