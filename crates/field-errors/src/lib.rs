//! Decoding and flattening of nested backend field validation errors.
//!
//! Form submissions rejected by the NewAra backend come back as a JSON object
//! mapping field names to a message, a list of messages, or another object of
//! the same shape. This crate decodes that payload into an explicit tree and
//! renders it as one readable, newline-separated string.
//!
//! # Overview
//!
//! - [`FieldErrors`] is the ordered field-to-error mapping.
//! - [`FieldError`] is one entry: a message, a list of messages, or a nested
//!   mapping.
//! - Decoding rejects shapes that do not fit the tree and stops at
//!   [`MAX_DEPTH`] levels of nesting.
//! - [`FieldErrors::flatten`] joins every message in payload order.
//!
//! # Example
//!
//! ```
//! use field_errors::FieldErrors;
//!
//! let json = r#"{ "field1": ["required"], "field2": { "sub": "too long" } }"#;
//! let errors = FieldErrors::from_json(json).expect("valid payload");
//!
//! assert_eq!(errors.flatten(), "required\ntoo long");
//! ```

mod error;
mod flatten;
mod tree;

pub use error::FieldErrorsError;
pub use flatten::flatten_value;
pub use tree::{FieldError, FieldErrors, MAX_DEPTH};
