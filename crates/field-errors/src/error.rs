//! Error types for field error decoding.
//!
//! Decoding is strict: payloads that do not fit the message, list, or nested
//! mapping shapes are reported with the dotted path of the offending entry.

use thiserror::Error;

/// Errors raised while decoding a field error payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldErrorsError {
    /// The payload is not valid JSON.
    #[error("invalid field error JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The payload root is not a JSON object.
    #[error("field error payload must be an object, found {found}")]
    UnexpectedRoot {
        /// JSON type found at the root.
        found: &'static str,
    },

    /// An entry holds a value that is neither text, a list of text, nor an
    /// object.
    #[error("unsupported field error value at '{path}': {found}")]
    UnsupportedValue {
        /// Dotted path to the offending entry.
        path: String,
        /// JSON type found at that path.
        found: &'static str,
    },

    /// Nested mappings exceed the permitted depth.
    #[error("field errors nested deeper than {limit} levels at '{path}'")]
    TooDeep {
        /// Dotted path to the mapping that crossed the limit.
        path: String,
        /// Maximum permitted depth.
        limit: usize,
    },
}
