//! # Request Body Parsing
//!
//! Write bodies are read leniently. Only a body declared as JSON is parsed;
//! anything else, and an empty body, reads as `{}` and projects to an empty
//! record. Declared JSON that does not parse is rejected with 400.

use axum::body::Bytes;
use axum::http::{header, HeaderMap};
use serde_json::{Map, Value};

use super::errors::{RestError, RestResult};

/// Whether the request declares a JSON body (`application/json` or `*/*+json`)
pub fn is_json_content(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || essence
            .strip_prefix("application/")
            .map_or(false, |subtype| subtype.ends_with("+json"))
}

/// Read a write body as a JSON value.
///
/// Top-level values must be objects or arrays; a bare string or number is
/// rejected the same way malformed JSON is.
pub fn read_body(headers: &HeaderMap, bytes: &Bytes) -> RestResult<Value> {
    if !is_json_content(headers) || bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }

    let value: Value = serde_json::from_slice(bytes)
        .map_err(|e| RestError::InvalidBody(e.to_string()))?;

    match value {
        Value::Object(_) | Value::Array(_) => Ok(value),
        _ => Err(RestError::InvalidBody(
            "top-level value must be an object or array".to_string(),
        )),
    }
}
