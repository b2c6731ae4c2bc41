//! JSON rendering of envelopes and payloads

use serde::Serialize;
use serde_json::Value;

use crate::error::SerializationError;

/// Compact JSON, the form sent on the wire.
pub fn serialize<T: Serialize + ?Sized>(value: &T) -> Result<String, SerializationError> {
    Ok(serde_json::to_string(value)?)
}

/// Pretty-printed JSON, for logs and debugging.
pub fn serialize_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String, SerializationError> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value, SerializationError> {
    Ok(serde_json::to_value(value)?)
}
