use crate::core::projection::ProjectionPayload;
use crate::error::Result;
use serde::Serialize;

/// Serialize a projection payload as compact records-oriented JSON
pub fn serialize_payload(payload: &ProjectionPayload) -> Result<String> {
    Ok(serde_json::to_string(payload)?)
}

/// Pretty-printed JSON with two-space indentation, for terminal output
pub fn to_json_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
