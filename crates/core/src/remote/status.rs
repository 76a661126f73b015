//! Pure mapping from HTTP error responses to [`RemoteError`].

use serde_json::Value;

use super::RemoteError;

/// Extracts a readable message from an error response body.
///
/// JSON bodies carrying an `error`, `message` or `detail` string use the
/// first one found, in that order. Any other non-blank body is used trimmed.
/// Blank bodies yield `None`.
pub fn error_message_from_body(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(trimmed) {
        for key in ["error", "message", "detail"] {
            if let Some(Value::String(message)) = map.get(key) {
                return Some(message.clone());
            }
        }
    }

    Some(trimmed.to_string())
}

/// Maps a non-success status and its body to a [`RemoteError`].
///
/// - 404 -> `NotFound` naming `resource`
/// - anything else -> `Rejected` with the body message, or the bare status
///   when the body is blank
///
/// # Examples
///
/// ```
/// use agenda_core::remote::{status_to_remote_error, RemoteError};
///
/// let error = status_to_remote_error(404, "", "meeting M1");
/// assert_eq!(error, RemoteError::NotFound { resource: "meeting M1".to_string() });
/// ```
pub fn status_to_remote_error(status: u16, body: &str, resource: &str) -> RemoteError {
    if status == 404 {
        return RemoteError::NotFound {
            resource: resource.to_string(),
        };
    }

    RemoteError::Rejected {
        status,
        message: error_message_from_body(body).unwrap_or_else(|| format!("HTTP {status}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_404_maps_to_not_found() {
        assert_eq!(
            status_to_remote_error(404, r#"{"error": "missing"}"#, "calendar C1"),
            RemoteError::NotFound {
                resource: "calendar C1".to_string()
            }
        );
    }

    #[test]
    fn test_json_error_field_is_used() {
        assert_eq!(
            status_to_remote_error(400, r#"{"error": "invalid email"}"#, "participants"),
            RemoteError::Rejected {
                status: 400,
                message: "invalid email".to_string()
            }
        );
    }

    #[test]
    fn test_json_message_field_is_used() {
        let error = status_to_remote_error(409, r#"{"message": "duplicate id"}"#, "meetings");
        assert_eq!(error.to_string(), "Server returned 409: duplicate id");
    }

    #[test]
    fn test_json_detail_field_is_used() {
        let error = status_to_remote_error(422, r#"{"detail": "url is invalid"}"#, "attachments");
        assert_eq!(error.to_string(), "Server returned 422: url is invalid");

        assert_eq!(
            error_message_from_body(r#"{"detail": "second", "error": "first"}"#),
            Some("first".to_string())
        );
    }

    #[test]
    fn test_plain_body_is_trimmed() {
        let error = status_to_remote_error(500, "  boom\n", "meetings");
        assert_eq!(
            error,
            RemoteError::Rejected {
                status: 500,
                message: "boom".to_string()
            }
        );
    }

    #[test]
    fn test_blank_body_uses_status() {
        let error = status_to_remote_error(503, "", "attachments");
        assert_eq!(error.to_string(), "Server returned 503: HTTP 503");
    }

    #[test]
    fn test_json_without_known_keys_is_kept_raw() {
        assert_eq!(
            error_message_from_body(r#"{"code": 7}"#),
            Some(r#"{"code": 7}"#.to_string())
        );
        assert_eq!(error_message_from_body("   "), None);
    }
}
