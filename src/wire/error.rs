//! Error types for the wire JSON codec.

use thiserror::Error;

/// Error while reading a message from JSON.
#[derive(Debug, Error)]
pub enum WireError {
    /// The document is not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A message node is not an object.
    #[error("expected JSON object, got {0}")]
    NotObject(&'static str),

    /// A field has the wrong JSON type.
    #[error("field '{field}' must be {expected}, got {found}")]
    InvalidField {
        /// Field name.
        field: &'static str,
        /// Expected JSON type.
        expected: &'static str,
        /// Actual JSON type.
        found: &'static str,
    },

    /// A param entry is missing its `type` or `value`.
    #[error("param '{key}' is missing '{field}'")]
    MissingParamField {
        /// Param key.
        key: String,
        /// Missing field name.
        field: &'static str,
    },

    /// A param has an unknown type tag.
    #[error("param '{key}' has unknown type '{tag}'")]
    UnknownParamType {
        /// Param key.
        key: String,
        /// The unrecognized tag.
        tag: String,
    },

    /// A param value does not fit its declared type.
    #[error("param '{key}' is not a valid {type_name}")]
    InvalidParam {
        /// Param key.
        key: String,
        /// Declared type.
        type_name: &'static str,
    },
}
