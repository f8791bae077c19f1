//! JSON text helpers.
//!
//! [`deserialize`] works in two steps: the text is parsed into a plain
//! [`Value`] record with no behavior attached, and the record is then
//! rebuilt as the requested type. Callers that want to inspect the record
//! first can run the steps separately with [`parse`] and [`rebuild`].

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ObjectError;

/// Encode `value` as compact JSON text.
///
/// Field order follows the value's `Serialize` implementation; for derived
/// structs that is declaration order.
///
/// # Errors
///
/// Returns [`ObjectError::Encode`] if the value has no JSON form, such as a
/// map whose keys are not strings.
pub fn serialize<T: Serialize + ?Sized>(value: &T) -> Result<String, ObjectError> {
    serde_json::to_string(value).map_err(ObjectError::Encode)
}

/// Parse JSON text into a plain record.
///
/// # Errors
///
/// Returns [`ObjectError::Syntax`] if `json` is not well-formed JSON text.
pub fn parse(json: &str) -> Result<Value, ObjectError> {
    serde_json::from_str(json).map_err(ObjectError::Syntax)
}

/// Rebuild a parsed record as `P`.
///
/// Fields `P` does not know are dropped.
///
/// # Errors
///
/// Returns [`ObjectError::Shape`] if the record lacks fields `P` requires or
/// holds them with the wrong JSON type.
pub fn rebuild<P: DeserializeOwned>(record: Value) -> Result<P, ObjectError> {
    serde_json::from_value(record).map_err(ObjectError::Shape)
}

/// Parse `json` and rebuild it as `P`.
///
/// # Errors
///
/// - [`ObjectError::Syntax`] if `json` is malformed.
/// - [`ObjectError::Shape`] if it is well-formed but does not fit `P`.
pub fn deserialize<P: DeserializeOwned>(json: &str) -> Result<P, ObjectError> {
    rebuild(parse(json)?)
}
