//! Field error tree and its JSON decoding.
//!
//! The backend returns validation failures as a JSON object whose values are
//! a single message, a list of messages, or another object of the same shape.
//! Decoding maps each of those onto a [`FieldError`] variant and keeps the
//! payload's key order, which is the order messages are shown in.
//!
//! # Decoding rules
//!
//! - Strings, numbers, and booleans are leaf messages (rendered as text).
//! - Arrays must contain only leaf messages.
//! - Objects recurse, up to [`MAX_DEPTH`] levels including the root.
//! - `null`, and arrays holding arrays, objects, or `null`, are rejected.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::FieldErrorsError;

/// Maximum nesting depth accepted when decoding, counting the root mapping.
pub const MAX_DEPTH: usize = 32;

/// Errors reported for a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// One message.
    Message(String),
    /// Several messages, shown one per line.
    Messages(Vec<String>),
    /// Errors for the fields of a nested object.
    Nested(FieldErrors),
}

impl FieldError {
    /// Build a single-message entry.
    pub fn message(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }

    /// Build a multi-message entry.
    pub fn messages<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Messages(messages.into_iter().map(Into::into).collect())
    }
}

/// Ordered mapping from field name to [`FieldError`].
///
/// Entries keep the order in which they were decoded or added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Value")]
pub struct FieldErrors {
    entries: Vec<(String, FieldError)>,
}

impl FieldErrors {
    /// Create an empty mapping.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an entry, returning the extended mapping.
    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>, error: FieldError) -> Self {
        self.entries.push((field.into(), error));
        self
    }

    /// Decode a field error payload from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`FieldErrorsError::ParseError`] for malformed JSON, and the
    /// errors of [`FieldErrors::from_value`] for well-formed JSON of the wrong
    /// shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use field_errors::FieldErrors;
    ///
    /// let errors = FieldErrors::from_json(r#"{ "x": "bad" }"#).expect("valid payload");
    /// assert_eq!(errors.flatten(), "bad");
    /// ```
    pub fn from_json(json: &str) -> Result<Self, FieldErrorsError> {
        let value: Value =
            serde_json::from_str(json).map_err(|error| FieldErrorsError::ParseError {
                message: error.to_string(),
            })?;
        Self::from_value(&value)
    }

    /// Decode a field error payload from an already parsed JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`FieldErrorsError::UnexpectedRoot`] when `value` is not an
    /// object, [`FieldErrorsError::UnsupportedValue`] for entries outside the
    /// accepted shapes, and [`FieldErrorsError::TooDeep`] when nesting exceeds
    /// [`MAX_DEPTH`].
    pub fn from_value(value: &Value) -> Result<Self, FieldErrorsError> {
        match value {
            Value::Object(map) => decode_mapping(map, "", 1),
            other => Err(FieldErrorsError::UnexpectedRoot {
                found: json_type(other),
            }),
        }
    }

    /// Look up the entry for `field`.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, error)| error)
    }

    /// Iterate over entries in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldError)> {
        self.entries
            .iter()
            .map(|(name, error)| (name.as_str(), error))
    }

    /// Number of top-level fields.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the mapping has no fields.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TryFrom<Value> for FieldErrors {
    type Error = FieldErrorsError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(&value)
    }
}

fn decode_mapping(
    map: &Map<String, Value>,
    parent: &str,
    depth: usize,
) -> Result<FieldErrors, FieldErrorsError> {
    if depth > MAX_DEPTH {
        return Err(FieldErrorsError::TooDeep {
            path: parent.to_owned(),
            limit: MAX_DEPTH,
        });
    }

    let mut entries = Vec::with_capacity(map.len());
    for (field, value) in map {
        let path = join_path(parent, field);
        let error = match value {
            Value::Array(items) => FieldError::Messages(decode_messages(items, &path)?),
            Value::Object(nested) => FieldError::Nested(decode_mapping(nested, &path, depth + 1)?),
            other => FieldError::Message(leaf_text(other, &path)?),
        };
        entries.push((field.clone(), error));
    }
    Ok(FieldErrors { entries })
}

fn decode_messages(items: &[Value], path: &str) -> Result<Vec<String>, FieldErrorsError> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| leaf_text(item, &format!("{path}[{index}]")))
        .collect()
}

fn leaf_text(value: &Value, path: &str) -> Result<String, FieldErrorsError> {
    match value {
        Value::String(text) => Ok(text.clone()),
        Value::Number(number) => Ok(number.to_string()),
        Value::Bool(flag) => Ok(flag.to_string()),
        other => Err(FieldErrorsError::UnsupportedValue {
            path: path.to_owned(),
            found: json_type(other),
        }),
    }
}

fn join_path(parent: &str, field: &str) -> String {
    if parent.is_empty() {
        field.to_owned()
    } else {
        format!("{parent}.{field}")
    }
}

const fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
