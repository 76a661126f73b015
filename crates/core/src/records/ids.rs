use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::ValidationError;

/// Identifier of a record on the remote service.
///
/// Usually a UUID, but caller-supplied ids are taken as-is: uniqueness is
/// enforced by the remote service, not here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Generates a random v4 UUID identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Parses a caller-supplied id, trimming surrounding whitespace.
    ///
    /// `.` and `..` are rejected: URL parsers treat them as path navigation
    /// even when escaped.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::BlankId);
        }
        if matches!(trimmed, "." | "..") {
            return Err(ValidationError::InvalidId(trimmed.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Uses the supplied id when present, otherwise generates one.
    pub fn or_generate(value: Option<&str>) -> Result<Self, ValidationError> {
        match value {
            Some(value) => Self::parse(value),
            None => Ok(Self::generate()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for RecordId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
