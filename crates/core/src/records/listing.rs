//! List results and the id lookup used to display related records.

use std::collections::HashMap;

use serde_json::Value;

use super::ids::RecordId;
use super::kind::{EntityKind, Relation};
use super::types::Record;

/// Related records known to the client, keyed by kind and id.
///
/// Relations are stored as ids; this index turns them back into records when
/// printing, so no record ever holds a pointer to another.
#[derive(Debug, Clone, Default)]
pub struct RecordIndex {
    records: HashMap<(EntityKind, RecordId), Record>,
}

/// Outcome of looking up a related id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved<'a> {
    Found(&'a Record),
    Missing(&'a RecordId),
}

impl RecordIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a record.
    pub fn insert(&mut self, record: Record) {
        self.records
            .insert((record.kind(), record.id().clone()), record);
    }

    pub fn get(&self, kind: EntityKind, id: &RecordId) -> Option<&Record> {
        self.records.get(&(kind, id.clone()))
    }

    pub fn resolve<'a>(&'a self, kind: EntityKind, id: &'a RecordId) -> Resolved<'a> {
        match self.get(kind, id) {
            Some(record) => Resolved::Found(record),
            None => Resolved::Missing(id),
        }
    }

    /// Resolves every id `record` holds for `relation`, in relation order.
    pub fn related<'a>(&'a self, record: &'a Record, relation: Relation) -> Vec<Resolved<'a>> {
        record
            .relation(relation)
            .map(|set| {
                set.iter()
                    .map(|id| self.resolve(relation.related_kind(), id))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Records of one kind plus whatever related records came embedded with them.
#[derive(Debug, Clone, Default)]
pub struct Listing {
    pub records: Vec<Record>,
    pub related: RecordIndex,
}

impl Listing {
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records,
            related: RecordIndex::new(),
        }
    }

    /// Decodes raw list documents of `kind`.
    ///
    /// Relation arrays may hold bare ids or embedded records. Embedded
    /// records that decode are kept in [`Listing::related`]; the owning
    /// record keeps only their ids.
    pub fn from_documents(kind: EntityKind, documents: Vec<Value>) -> serde_json::Result<Self> {
        let mut related = RecordIndex::new();
        let mut records = Vec::with_capacity(documents.len());

        for document in documents {
            for relation in kind.relations() {
                let Some(Value::Array(entries)) = document.get(relation.field()) else {
                    continue;
                };
                for entry in entries.iter().filter(|entry| entry.is_object()) {
                    if let Ok(record) = Record::from_value(relation.related_kind(), entry.clone()) {
                        related.insert(record);
                    }
                }
            }
            records.push(Record::from_value(kind, document)?);
        }

        Ok(Self { records, related })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
