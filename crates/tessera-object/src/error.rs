//! Error type for the JSON helpers.

use thiserror::Error;

/// Failure to encode a value or to rebuild one from JSON text.
#[derive(Error, Debug)]
pub enum ObjectError {
    /// The input is not well-formed JSON text.
    #[error("invalid JSON: {0}")]
    Syntax(#[source] serde_json::Error),

    /// The input is valid JSON but its fields do not fit the requested type.
    #[error("JSON does not match the requested type: {0}")]
    Shape(#[source] serde_json::Error),

    /// The value could not be represented as JSON (e.g. a map with non-string keys).
    #[error("value cannot be encoded as JSON: {0}")]
    Encode(#[source] serde_json::Error),
}
