//! Response decoding.
//!
//! The service answers with a bare record, a `{"data": ...}` envelope, or
//! sometimes nothing useful at all. Mutations tolerate that; listings do not.

use agenda_core::records::{EntityKind, Listing, Record};
use agenda_core::remote::RemoteError;
use serde_json::Value;
use tracing::debug;

/// Strips a `{"data": ...}` envelope. Anything else is returned as-is.
pub fn unwrap_envelope(value: Value) -> Value {
    match value {
        Value::Object(mut map) if !map.contains_key("id") && map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}

fn parse_body(body: &str) -> Result<Value, RemoteError> {
    serde_json::from_str(body).map_err(|error| RemoteError::InvalidResponse(error.to_string()))
}

/// Decodes the body of a mutation response.
///
/// Blank bodies and JSON that is not a `kind` record yield `None`; a body
/// that is not JSON at all is an error.
pub fn decode_record(kind: EntityKind, body: &str) -> Result<Option<Record>, RemoteError> {
    if body.trim().is_empty() {
        return Ok(None);
    }

    let value = unwrap_envelope(parse_body(body)?);
    match Record::from_value(kind, value) {
        Ok(record) => Ok(Some(record)),
        Err(error) => {
            debug!(%kind, %error, "response is not a record");
            Ok(None)
        }
    }
}

/// Decodes the body of a list response.
///
/// `null` is an empty list. Related records embedded in the documents are
/// kept in the listing's index.
pub fn decode_listing(kind: EntityKind, body: &str) -> Result<Listing, RemoteError> {
    let documents = match unwrap_envelope(parse_body(body)?) {
        Value::Array(documents) => documents,
        Value::Null => Vec::new(),
        other => {
            return Err(RemoteError::InvalidResponse(format!(
                "expected a list of {}, got {}",
                kind.collection(),
                json_type(&other)
            )))
        }
    };

    Listing::from_documents(kind, documents)
        .map_err(|error| RemoteError::InvalidResponse(error.to_string()))
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
