use async_trait::async_trait;

use crate::records::{EntityKind, Listing, Record, RecordId, RecordPatch, Relation};

use super::Result;

/// Operations the command layer needs from the remote service.
///
/// Mutations return the record the store echoes back, or `None` when the
/// store acknowledges without returning a record.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Creates a new record.
    async fn create(&self, record: &Record) -> Result<Option<Record>>;

    /// Lists every record of `kind`.
    async fn get_all(&self, kind: EntityKind) -> Result<Listing>;

    /// Sends the set fields of `patch`; omitted fields are preserved.
    async fn update(&self, patch: &RecordPatch) -> Result<Option<Record>>;

    /// Deletes a record by id.
    async fn delete(&self, kind: EntityKind, id: &RecordId) -> Result<()>;

    /// Links `related_id` into the `relation` set of the record.
    async fn add_relation(
        &self,
        kind: EntityKind,
        id: &RecordId,
        relation: Relation,
        related_id: &RecordId,
    ) -> Result<Option<Record>>;

    /// Unlinks `related_id` from the `relation` set of the record.
    async fn remove_relation(
        &self,
        kind: EntityKind,
        id: &RecordId,
        relation: Relation,
        related_id: &RecordId,
    ) -> Result<Option<Record>>;
}
