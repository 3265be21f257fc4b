//! Rendering of field errors as newline-separated text.

use std::fmt;

use serde_json::Value;

use crate::error::FieldErrorsError;
use crate::tree::{FieldError, FieldErrors};

impl FieldErrors {
    /// Join every message into one newline-separated string.
    ///
    /// Messages follow the mapping's key order. Lists contribute one line per
    /// message. A nested mapping is flattened on its own and contributes that
    /// text as one entry, so an empty nested mapping leaves an empty line.
    ///
    /// # Examples
    ///
    /// ```
    /// use field_errors::{FieldError, FieldErrors};
    ///
    /// let errors = FieldErrors::new()
    ///     .with_field("field1", FieldError::messages(["required"]))
    ///     .with_field(
    ///         "field2",
    ///         FieldError::Nested(FieldErrors::new().with_field("sub", FieldError::message("too long"))),
    ///     );
    ///
    /// assert_eq!(errors.flatten(), "required\ntoo long");
    /// assert_eq!(FieldErrors::new().flatten(), "");
    /// ```
    #[must_use]
    pub fn flatten(&self) -> String {
        let mut entries = Vec::with_capacity(self.len());
        for (_, error) in self.iter() {
            match error {
                FieldError::Message(message) => entries.push(message.clone()),
                FieldError::Messages(messages) => entries.extend(messages.iter().cloned()),
                FieldError::Nested(nested) => entries.push(nested.flatten()),
            }
        }
        entries.join("\n")
    }

    /// Every leaf message in display order. Empty containers yield nothing.
    #[must_use]
    pub fn messages(&self) -> Vec<&str> {
        let mut lines = Vec::new();
        self.collect_lines(&mut lines);
        lines
    }

    fn collect_lines<'a>(&'a self, lines: &mut Vec<&'a str>) {
        for (_, error) in self.iter() {
            match error {
                FieldError::Message(message) => lines.push(message),
                FieldError::Messages(messages) => lines.extend(messages.iter().map(String::as_str)),
                FieldError::Nested(nested) => nested.collect_lines(lines),
            }
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.flatten())
    }
}

/// Decode `value` and flatten it in one step.
///
/// # Errors
///
/// Returns the decoding errors of [`FieldErrors::from_value`].
///
/// # Examples
///
/// ```
/// use field_errors::flatten_value;
/// use serde_json::json;
///
/// let text = flatten_value(&json!({ "x": "bad" })).expect("valid payload");
/// assert_eq!(text, "bad");
/// ```
pub fn flatten_value(value: &Value) -> Result<String, FieldErrorsError> {
    FieldErrors::from_value(value).map(|errors| errors.flatten())
}
