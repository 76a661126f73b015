//! Client error types.

use agenda_core::records::ValidationError;
use agenda_core::remote::RemoteError;
use thiserror::Error;

/// Result type alias for client module.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can stop a command.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Input rejected locally; nothing was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Remote(#[from] RemoteError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClientError {
    /// True when the command was refused before contacting the remote service.
    pub fn is_validation(&self) -> bool {
        matches!(self, ClientError::Validation(_))
    }

    /// Message shown to the user.
    ///
    /// Validation messages are printed as-is; everything else is prefixed
    /// the way unexpected failures are reported.
    pub fn user_message(&self) -> String {
        if self.is_validation() {
            self.to_string()
        } else {
            format!("An error occurred: {self}")
        }
    }
}

#[cfg(test)]
mod tests {
    use agenda_core::records::EntityKind;

    use super::*;

    #[test]
    fn test_validation_message_is_unprefixed() {
        let error = ClientError::from(ValidationError::InvalidEmail("a@b".to_string()));
        assert!(error.is_validation());
        assert_eq!(error.user_message(), "Invalid Email: a@b");
    }

    #[test]
    fn test_no_update_fields_message() {
        let error = ClientError::from(ValidationError::NoUpdateFields {
            kind: EntityKind::Meeting,
        });
        assert_eq!(
            error.user_message(),
            "At least one update option must be specified."
        );
    }

    #[test]
    fn test_remote_message_is_prefixed() {
        let error = ClientError::from(RemoteError::Transport("connection refused".to_string()));
        assert!(!error.is_validation());
        assert_eq!(
            error.user_message(),
            "An error occurred: Connection failed: connection refused"
        );
    }
}
