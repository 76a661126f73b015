//! [`RecordStore`] over HTTP.

use agenda_core::records::{
    EntityKind, Listing, Record, RecordId, RecordPatch, Relation, RelationAction,
};
use agenda_core::remote::{RecordStore, RemoteError, Result};
use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;

use super::{
    collection_path, decode_listing, decode_record, record_path, relation_path, update_method,
    AgendaClient,
};

fn to_body<T: Serialize>(value: &T) -> Result<serde_json::Value> {
    serde_json::to_value(value).map_err(|error| RemoteError::InvalidRequest(error.to_string()))
}

impl AgendaClient {
    async fn edit_relation(
        &self,
        kind: EntityKind,
        id: &RecordId,
        relation: Relation,
        action: RelationAction,
        related_id: &RecordId,
    ) -> Result<Option<Record>> {
        let body = to_body(&[related_id])?;
        let text = self
            .send(
                Method::POST,
                &relation_path(kind, id, relation, action),
                Some(body),
                &format!("{kind} {id}"),
            )
            .await?;
        decode_record(kind, &text)
    }
}

#[async_trait]
impl RecordStore for AgendaClient {
    async fn create(&self, record: &Record) -> Result<Option<Record>> {
        let kind = record.kind();
        let text = self
            .send(
                Method::POST,
                &collection_path(kind),
                Some(to_body(record)?),
                kind.collection(),
            )
            .await?;
        decode_record(kind, &text)
    }

    async fn get_all(&self, kind: EntityKind) -> Result<Listing> {
        let text = self
            .send(Method::GET, &collection_path(kind), None, kind.collection())
            .await?;
        decode_listing(kind, &text)
    }

    async fn update(&self, patch: &RecordPatch) -> Result<Option<Record>> {
        let kind = patch.kind();
        let id = patch.id();
        let text = self
            .send(
                update_method(kind),
                &record_path(kind, id),
                Some(to_body(patch)?),
                &format!("{kind} {id}"),
            )
            .await?;
        decode_record(kind, &text)
    }

    async fn delete(&self, kind: EntityKind, id: &RecordId) -> Result<()> {
        self.send(
            Method::DELETE,
            &record_path(kind, id),
            None,
            &format!("{kind} {id}"),
        )
        .await?;
        Ok(())
    }

    async fn add_relation(
        &self,
        kind: EntityKind,
        id: &RecordId,
        relation: Relation,
        related_id: &RecordId,
    ) -> Result<Option<Record>> {
        self.edit_relation(kind, id, relation, RelationAction::Add, related_id)
            .await
    }

    async fn remove_relation(
        &self,
        kind: EntityKind,
        id: &RecordId,
        relation: Relation,
        related_id: &RecordId,
    ) -> Result<Option<Record>> {
        self.edit_relation(kind, id, relation, RelationAction::Remove, related_id)
            .await
    }
}
