use thiserror::Error;

use super::kind::{EntityKind, Relation};

/// Errors detected locally, before a command reaches the remote service.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid Date Time: {0}")]
    InvalidDateTime(String),
    #[error("Invalid Email: {0}")]
    InvalidEmail(String),
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    #[error("Record ID cannot be blank")]
    BlankId,
    #[error("Invalid ID: {0}")]
    InvalidId(String),
    #[error("A {kind} requires at least one {relation} ID")]
    MissingRelation { kind: EntityKind, relation: Relation },
    #[error("At least one update option must be specified.")]
    NoUpdateFields { kind: EntityKind },
    #[error("A {kind} has no {relation} relation")]
    UnsupportedRelation { kind: EntityKind, relation: Relation },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        assert_eq!(
            ValidationError::InvalidDateTime("tomorrow".to_string()).to_string(),
            "Invalid Date Time: tomorrow"
        );
        assert_eq!(
            ValidationError::InvalidEmail("ann@x".to_string()).to_string(),
            "Invalid Email: ann@x"
        );
        assert_eq!(
            ValidationError::NoUpdateFields {
                kind: EntityKind::Participant
            }
            .to_string(),
            "At least one update option must be specified."
        );
    }

    #[test]
    fn test_missing_relation_display() {
        let error = ValidationError::MissingRelation {
            kind: EntityKind::Calendar,
            relation: Relation::Meetings,
        };
        assert_eq!(error.to_string(), "A calendar requires at least one meeting ID");
    }

    #[test]
    fn test_unsupported_relation_display() {
        let error = ValidationError::UnsupportedRelation {
            kind: EntityKind::Participant,
            relation: Relation::Meetings,
        };
        assert_eq!(error.to_string(), "A participant has no meeting relation");
    }
}
