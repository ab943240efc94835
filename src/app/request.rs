use crate::error::ApiError;
use serde::de::DeserializeOwned;

pub const NO_BODY: &str = "No request body";
pub const INVALID_STRING: &str = "Please enter a valid string";

/// Decodes a JSON request body. An empty body or a literal `null` counts as missing.
pub fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ApiError::BadRequest(NO_BODY.to_string()));
    }

    let value: serde_json::Value = serde_json::from_slice(body)
        .map_err(|e| ApiError::BadRequest(format!("Invalid JSON body: {}", e)))?;
    if value.is_null() {
        return Err(ApiError::BadRequest(NO_BODY.to_string()));
    }

    serde_json::from_value(value)
        .map_err(|e| ApiError::BadRequest(format!("Invalid request body: {}", e)))
}

/// Returns the trimmed text, rejecting missing or blank input.
pub fn require_text(text: Option<&str>) -> Result<&str, ApiError> {
    match text.map(str::trim) {
        Some(t) if !t.is_empty() => Ok(t),
        _ => Err(ApiError::BadRequest(INVALID_STRING.to_string())),
    }
}
