//! HTTP client for the agenda record service.

mod decode;
mod store;

use std::borrow::Cow;

pub use decode::{decode_listing, decode_record, unwrap_envelope};

use agenda_core::records::{EntityKind, RecordId, Relation, RelationAction};
use agenda_core::remote::{status_to_remote_error, RemoteError};
use reqwest::Method;
use tracing::debug;

/// HTTP client for the agenda record service.
#[derive(Debug, Clone)]
pub struct AgendaClient {
    client: reqwest::Client,
    base_url: String,
}

impl AgendaClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends a request and returns the body of a successful response.
    ///
    /// `resource` names the target in a not-found error.
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
        resource: &str,
    ) -> Result<String, RemoteError> {
        debug!(%method, path, "sending request");
        let mut request = self.client.request(method, self.url(path));
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request
            .send()
            .await
            .map_err(|error| RemoteError::Transport(error.to_string()))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|error| RemoteError::Transport(error.to_string()))?;
        debug!(
            status = status.as_u16(),
            bytes = text.len(),
            "received response"
        );

        if status.is_success() {
            Ok(text)
        } else {
            Err(status_to_remote_error(status.as_u16(), &text, resource))
        }
    }
}

/// `/meetings`
pub fn collection_path(kind: EntityKind) -> String {
    format!("/{}", kind.collection())
}

/// Percent-encodes an id so it stays a single path segment.
fn id_segment(id: &RecordId) -> Cow<'_, str> {
    urlencoding::encode(id.as_str())
}

/// `/meetings/{id}`
pub fn record_path(kind: EntityKind, id: &RecordId) -> String {
    format!("/{}/{}", kind.collection(), id_segment(id))
}

/// `/meetings/{id}/addParticipants`, `/calendars/{id}/removeMeetings`, ...
pub fn relation_path(
    kind: EntityKind,
    id: &RecordId,
    relation: Relation,
    action: RelationAction,
) -> String {
    format!(
        "/{}/{}/{}{}",
        kind.collection(),
        id_segment(id),
        action.verb(),
        relation.heading()
    )
}

/// Attachments are patched; everything else is replaced with PUT.
pub fn update_method(kind: EntityKind) -> Method {
    match kind {
        EntityKind::Attachment => Method::PATCH,
        EntityKind::Meeting | EntityKind::Calendar | EntityKind::Participant => Method::PUT,
    }
}
