//! Error types for value access, reading, and shape checks

use thiserror::Error;

use crate::value::{Tag, Value};

/// Main error type for value operations
#[derive(Error, Debug)]
pub enum Error {
    /// A handle was accessed as a kind it does not hold
    #[error("Tag mismatch: expected {expected}, got {got}")]
    TagMismatch {
        /// Tag the caller asked for
        expected: Tag,
        /// Tag actually stored in the value
        got: Tag,
    },

    /// A record lacks a field the caller requires
    #[error("Missing field: {field}")]
    MissingField {
        /// Name of the absent field
        field: String,
    },

    /// A record field holds a value of the wrong shape
    #[error("Invalid field {field}: expected {expected}, got {got}")]
    InvalidField {
        /// Name of the offending field
        field: String,
        /// Description of what was expected
        expected: String,
        /// Kind of the value actually found
        got: String,
    },

    /// A function was called with the wrong number of arguments
    #[error("Arity error: {name} expects {expected} argument(s), got {got}")]
    Arity {
        /// Function name
        name: String,
        /// Declared arity
        expected: usize,
        /// Number of arguments supplied
        got: usize,
    },

    /// A native function reported a failure
    #[error("Error calling {name}: {message}")]
    Call {
        /// Function name
        name: String,
        /// Message returned by the function
        message: String,
    },

    /// A literal could not be read
    #[error(transparent)]
    Read(#[from] ReadError),
}

/// Errors raised while reading a printed literal back into a value
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReadError {
    /// The source could not be tokenized
    #[error("Lex error: {0}")]
    Lex(String),

    /// A token appeared where it is not allowed
    #[error("Unexpected token: {found}")]
    UnexpectedToken {
        /// Rendering of the token found
        found: String,
    },

    /// The input ended in the middle of a value
    #[error("Unexpected end of input")]
    UnexpectedEnd,

    /// A numeric literal could not be decoded
    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    /// A bare identifier that names no literal
    #[error("Unknown identifier: {0}")]
    UnknownIdent(String),

    /// The same field name appeared twice in one record literal
    #[error("Duplicate field: {0}")]
    DuplicateField(String),

    /// Nesting exceeded the configured limit
    #[error("Nesting too deep: limit is {limit}")]
    TooDeep {
        /// Configured maximum depth
        limit: usize,
    },

    /// Input continued after a complete value
    #[error("Trailing input after value: {found}")]
    TrailingInput {
        /// Rendering of the first extra token
        found: String,
    },
}

/// Result type alias for value operations
pub type Result<T> = std::result::Result<T, Error>;

/// Get the user-facing kind name of a value, for error messages.
pub fn type_name(value: &Value) -> &'static str {
    value.tag().name()
}
