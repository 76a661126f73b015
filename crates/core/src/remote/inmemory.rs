//! In-memory record store.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::records::{
    EntityKind, Listing, Record, RecordId, RecordPatch, Relation, RelationAction,
    RelationDirective,
};

use super::{RecordStore, RemoteError, Result};

type Key = (EntityKind, RecordId);

/// Store that keeps records in memory and does the bookkeeping the remote
/// service owns: the reciprocal Meeting/Calendar side of a link, and
/// unlinking a deleted record from everything that referenced it.
///
/// Data is lost when the store is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    records: Arc<RwLock<HashMap<Key, Record>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a stored record.
    pub async fn get(&self, kind: EntityKind, id: &RecordId) -> Option<Record> {
        let records = self.records.read().await;
        records.get(&(kind, id.clone())).cloned()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

fn not_found(kind: EntityKind, id: &RecordId) -> RemoteError {
    RemoteError::NotFound {
        resource: format!("{kind} {id}"),
    }
}

/// The relation holding the other side of a link, when both sides are kept.
fn mirror(kind: EntityKind, relation: Relation) -> Option<Relation> {
    match (kind, relation) {
        (EntityKind::Meeting, Relation::Calendars) => Some(Relation::Meetings),
        (EntityKind::Calendar, Relation::Meetings) => Some(Relation::Calendars),
        _ => None,
    }
}

/// Applies `action` to the reciprocal side of a link, if that record exists.
fn sync_mirror(
    records: &mut HashMap<Key, Record>,
    kind: EntityKind,
    id: &RecordId,
    relation: Relation,
    related_id: &RecordId,
    action: RelationAction,
) {
    let Some(reverse) = mirror(kind, relation) else {
        return;
    };
    if let Some(other) = records.get_mut(&(relation.related_kind(), related_id.clone())) {
        let directive = RelationDirective {
            relation: reverse,
            action,
            id: id.clone(),
        };
        // The mirror relation is always owned by the other kind.
        let _ = other.apply(&directive);
    }
}

async fn edit_relation(
    store: &InMemoryStore,
    kind: EntityKind,
    id: &RecordId,
    directive: RelationDirective,
) -> Result<Option<Record>> {
    let mut records = store.records.write().await;
    let record = records
        .get_mut(&(kind, id.clone()))
        .ok_or_else(|| not_found(kind, id))?;

    record
        .apply(&directive)
        .map_err(|error| RemoteError::Rejected {
            status: 400,
            message: error.to_string(),
        })?;
    let updated = record.clone();

    sync_mirror(
        &mut records,
        kind,
        id,
        directive.relation,
        &directive.id,
        directive.action,
    );
    Ok(Some(updated))
}

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn create(&self, record: &Record) -> Result<Option<Record>> {
        let mut records = self.records.write().await;
        let kind = record.kind();
        let id = record.id().clone();
        if records.contains_key(&(kind, id.clone())) {
            return Err(RemoteError::Rejected {
                status: 409,
                message: format!("{kind} {id} already exists"),
            });
        }

        for relation in kind.relations() {
            if let Some(set) = record.relation(*relation) {
                for related_id in set {
                    sync_mirror(
                        &mut records,
                        kind,
                        &id,
                        *relation,
                        related_id,
                        RelationAction::Add,
                    );
                }
            }
        }

        records.insert((kind, id), record.clone());
        Ok(Some(record.clone()))
    }

    async fn get_all(&self, kind: EntityKind) -> Result<Listing> {
        let records = self.records.read().await;
        let mut listed: Vec<Record> = records
            .values()
            .filter(|record| record.kind() == kind)
            .cloned()
            .collect();
        listed.sort_by(|a, b| a.id().cmp(b.id()));

        let mut listing = Listing::new(listed);
        for relation in kind.relations() {
            let related_kind = relation.related_kind();
            for record in records.values().filter(|record| record.kind() == related_kind) {
                listing.related.insert(record.clone());
            }
        }
        Ok(listing)
    }

    async fn update(&self, patch: &RecordPatch) -> Result<Option<Record>> {
        let mut records = self.records.write().await;
        let kind = patch.kind();
        let record = records
            .get_mut(&(kind, patch.id().clone()))
            .ok_or_else(|| not_found(kind, patch.id()))?;
        patch.apply_to(record);
        Ok(Some(record.clone()))
    }

    async fn delete(&self, kind: EntityKind, id: &RecordId) -> Result<()> {
        let mut records = self.records.write().await;
        if records.remove(&(kind, id.clone())).is_none() {
            return Err(not_found(kind, id));
        }

        for record in records.values_mut() {
            for relation in record.kind().relations() {
                if relation.related_kind() == kind {
                    let _ = record.apply(&RelationDirective::remove(*relation, id.clone()));
                }
            }
        }
        Ok(())
    }

    async fn add_relation(
        &self,
        kind: EntityKind,
        id: &RecordId,
        relation: Relation,
        related_id: &RecordId,
    ) -> Result<Option<Record>> {
        edit_relation(
            self,
            kind,
            id,
            RelationDirective::add(relation, related_id.clone()),
        )
        .await
    }

    async fn remove_relation(
        &self,
        kind: EntityKind,
        id: &RecordId,
        relation: Relation,
        related_id: &RecordId,
    ) -> Result<Option<Record>> {
        edit_relation(
            self,
            kind,
            id,
            RelationDirective::remove(relation, related_id.clone()),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{Calendar, Meeting, MeetingPatch, Participant};

    fn id(value: &str) -> RecordId {
        RecordId::parse(value).unwrap()
    }

    fn meeting(value: &str) -> Record {
        let mut meeting = Meeting::new(id(value));
        meeting.title = "Sync".to_string();
        meeting.participants.insert(id("P1"));
        meeting.into()
    }

    #[tokio::test]
    async fn test_create_and_list() {
        let store = InMemoryStore::new();
        store.create(&meeting("M2")).await.unwrap();
        store.create(&meeting("M1")).await.unwrap();
        store
            .create(&Participant::new(id("P1")).into())
            .await
            .unwrap();

        let listing = store.get_all(EntityKind::Meeting).await.unwrap();
        let ids: Vec<&str> = listing.records.iter().map(|r| r.id().as_str()).collect();
        assert_eq!(ids, vec!["M1", "M2"]);
        assert!(listing.related.get(EntityKind::Participant, &id("P1")).is_some());
    }

    #[tokio::test]
    async fn test_create_duplicate_is_rejected() {
        let store = InMemoryStore::new();
        store.create(&meeting("M1")).await.unwrap();
        let result = store.create(&meeting("M1")).await;
        assert!(matches!(result, Err(RemoteError::Rejected { status: 409, .. })));
    }

    #[tokio::test]
    async fn test_update_preserves_unset_fields() {
        let store = InMemoryStore::new();
        store.create(&meeting("M1")).await.unwrap();

        let patch = MeetingPatch::new(id("M1")).with_location("Room 4");
        let updated = store.update(&patch.into()).await.unwrap().unwrap();

        let Record::Meeting(updated) = updated else {
            panic!("expected a meeting");
        };
        assert_eq!(updated.title, "Sync");
        assert_eq!(updated.location, "Room 4");
    }

    #[tokio::test]
    async fn test_update_missing_record() {
        let store = InMemoryStore::new();
        let patch = MeetingPatch::new(id("M9")).with_title("x");
        let result = store.update(&patch.into()).await;
        assert_eq!(
            result,
            Err(RemoteError::NotFound {
                resource: "meeting M9".to_string()
            })
        );
    }

    #[tokio::test]
    async fn test_add_relation_is_idempotent() {
        let store = InMemoryStore::new();
        store.create(&meeting("M1")).await.unwrap();

        for _ in 0..2 {
            store
                .add_relation(EntityKind::Meeting, &id("M1"), Relation::Participants, &id("P2"))
                .await
                .unwrap();
        }

        let record = store.get(EntityKind::Meeting, &id("M1")).await.unwrap();
        assert_eq!(record.relation(Relation::Participants).map(|s| s.len()), Some(2));
    }

    #[tokio::test]
    async fn test_remove_absent_relation_is_noop() {
        let store = InMemoryStore::new();
        store.create(&meeting("M1")).await.unwrap();

        let result = store
            .remove_relation(EntityKind::Meeting, &id("M1"), Relation::Attachments, &id("A9"))
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_unsupported_relation_is_rejected() {
        let store = InMemoryStore::new();
        store
            .create(&Participant::new(id("P1")).into())
            .await
            .unwrap();

        let result = store
            .add_relation(EntityKind::Participant, &id("P1"), Relation::Meetings, &id("M1"))
            .await;
        assert!(matches!(result, Err(RemoteError::Rejected { status: 400, .. })));
    }

    #[tokio::test]
    async fn test_calendar_link_is_mirrored() {
        let store = InMemoryStore::new();
        store.create(&meeting("M1")).await.unwrap();

        let mut calendar = Calendar::new(id("C1"));
        calendar.meetings.insert(id("M1"));
        store.create(&calendar.into()).await.unwrap();

        let stored = store.get(EntityKind::Meeting, &id("M1")).await.unwrap();
        assert!(stored
            .relation(Relation::Calendars)
            .is_some_and(|set| set.contains(&id("C1"))));

        store
            .remove_relation(EntityKind::Calendar, &id("C1"), Relation::Meetings, &id("M1"))
            .await
            .unwrap();
        let stored = store.get(EntityKind::Meeting, &id("M1")).await.unwrap();
        assert!(stored
            .relation(Relation::Calendars)
            .is_some_and(|set| set.is_empty()));
    }

    #[tokio::test]
    async fn test_delete_unlinks_references() {
        let store = InMemoryStore::new();
        store.create(&meeting("M1")).await.unwrap();
        store
            .create(&Participant::new(id("P1")).into())
            .await
            .unwrap();

        store.delete(EntityKind::Participant, &id("P1")).await.unwrap();

        let stored = store.get(EntityKind::Meeting, &id("M1")).await.unwrap();
        assert!(stored
            .relation(Relation::Participants)
            .is_some_and(|set| set.is_empty()));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_delete_missing_record() {
        let store = InMemoryStore::new();
        let result = store.delete(EntityKind::Attachment, &id("A1")).await;
        assert!(matches!(result, Err(RemoteError::NotFound { .. })));
    }
}
