//! JSON output formatting.

use agenda_core::records::{EntityKind, RecordId};
use serde::Serialize;

use crate::error::Result;

/// Format a value as JSON.
pub fn format_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Acknowledgement printed when the store returned no record.
#[derive(Debug, Serialize)]
pub struct Acknowledgement<'a> {
    pub kind: EntityKind,
    pub id: &'a RecordId,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
