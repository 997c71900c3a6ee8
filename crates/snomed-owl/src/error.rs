//! Error types for axiom expression parsing.

use thiserror::Error;

/// Errors that can occur while parsing an OWL axiom expression.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OwlError {
    /// Parse error at a specific position in the input.
    #[error("parse error at position {position}: {message}")]
    ParseError {
        /// Position in the input where the error occurred.
        position: usize,
        /// Description of the error.
        message: String,
    },

    /// The axiom expression ended unexpectedly.
    #[error("axiom expression is incomplete: {0}")]
    Incomplete(String),

    /// Empty input provided.
    #[error("empty axiom expression")]
    EmptyExpression,
}

/// Result type for axiom expression parsing.
pub type OwlResult<T> = std::result::Result<T, OwlError>;
