//! Relation sets and single-id relation directives.
//!
//! Relations are stored as ids on both sides of a link; records are resolved
//! from ids only when displaying (see [`super::RecordIndex`]).

use serde::{Deserialize, Deserializer, Serialize};

use super::error::ValidationError;
use super::ids::RecordId;
use super::kind::{Relation, RelationAction};

/// An insertion-ordered set of related record ids.
///
/// Adding an id that is already present and removing one that is absent are
/// both no-ops.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RelationSet(Vec<RecordId>);

impl RelationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses comma-split command-line values, skipping blank entries and
    /// duplicates.
    pub fn parse_list<S: AsRef<str>>(values: &[S]) -> Self {
        values
            .iter()
            .filter_map(|value| RecordId::parse(value.as_ref()).ok())
            .collect()
    }

    /// Adds `id` if absent. Returns true if the set changed.
    pub fn insert(&mut self, id: RecordId) -> bool {
        if self.0.contains(&id) {
            return false;
        }
        self.0.push(id);
        true
    }

    /// Removes `id` if present. Returns true if the set changed.
    pub fn remove(&mut self, id: &RecordId) -> bool {
        let before = self.0.len();
        self.0.retain(|existing| existing != id);
        self.0.len() != before
    }

    pub fn contains(&self, id: &RecordId) -> bool {
        self.0.contains(id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RecordId> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Applies an add or remove action for `id`.
    pub fn apply(&mut self, action: RelationAction, id: &RecordId) -> bool {
        match action {
            RelationAction::Add => self.insert(id.clone()),
            RelationAction::Remove => self.remove(id),
        }
    }
}

impl FromIterator<RecordId> for RelationSet {
    fn from_iter<I: IntoIterator<Item = RecordId>>(iter: I) -> Self {
        let mut set = RelationSet::new();
        for id in iter {
            set.insert(id);
        }
        set
    }
}

impl<'a> IntoIterator for &'a RelationSet {
    type Item = &'a RecordId;
    type IntoIter = std::slice::Iter<'a, RecordId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A related entry as returned by the remote: a bare id or an embedded record.
#[derive(Deserialize)]
#[serde(untagged)]
enum RelatedRef {
    Id(RecordId),
    Embedded { id: RecordId },
}

impl RelatedRef {
    fn into_id(self) -> RecordId {
        match self {
            RelatedRef::Id(id) | RelatedRef::Embedded { id } => id,
        }
    }
}

impl<'de> Deserialize<'de> for RelationSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let refs: Option<Vec<RelatedRef>> = Option::deserialize(deserializer)?;
        Ok(refs
            .unwrap_or_default()
            .into_iter()
            .map(RelatedRef::into_id)
            .collect())
    }
}

/// A single add or remove instruction against one related id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationDirective {
    pub relation: Relation,
    pub action: RelationAction,
    pub id: RecordId,
}

impl RelationDirective {
    pub fn add(relation: Relation, id: RecordId) -> Self {
        Self {
            relation,
            action: RelationAction::Add,
            id,
        }
    }

    pub fn remove(relation: Relation, id: RecordId) -> Self {
        Self {
            relation,
            action: RelationAction::Remove,
            id,
        }
    }

    /// Builds a directive from a raw command-line id.
    pub fn parse(
        relation: Relation,
        action: RelationAction,
        value: &str,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            relation,
            action,
            id: RecordId::parse(value)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(value: &str) -> RecordId {
        RecordId::parse(value).unwrap()
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut set = RelationSet::new();
        assert!(set.insert(id("P1")));
        assert!(!set.insert(id("P1")));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut set: RelationSet = [id("P1")].into_iter().collect();
        assert!(!set.remove(&id("P2")));
        assert_eq!(set.len(), 1);
        assert!(set.remove(&id("P1")));
        assert!(set.is_empty());
        assert!(!set.remove(&id("P1")));
    }

    #[test]
    fn test_preserves_insertion_order() {
        let set: RelationSet = [id("b"), id("a"), id("b"), id("c")].into_iter().collect();
        let ids: Vec<&str> = set.iter().map(RecordId::as_str).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_parse_list_skips_blank_and_duplicates() {
        let set = RelationSet::parse_list(&["P1", " ", "P2", "P1", ""]);
        let ids: Vec<&str> = set.iter().map(RecordId::as_str).collect();
        assert_eq!(ids, vec!["P1", "P2"]);
    }

    #[test]
    fn test_apply_action() {
        let mut set = RelationSet::new();
        assert!(set.apply(RelationAction::Add, &id("A1")));
        assert!(!set.apply(RelationAction::Add, &id("A1")));
        assert!(set.apply(RelationAction::Remove, &id("A1")));
        assert!(!set.apply(RelationAction::Remove, &id("A1")));
    }

    #[test]
    fn test_deserialize_bare_ids() {
        let set: RelationSet = serde_json::from_str(r#"["P1", "P2"]"#).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains(&id("P2")));
    }

    #[test]
    fn test_deserialize_embedded_records() {
        let json = r#"[{"id": "P1", "name": "Ann", "email": "ann@x.com"}, "P2"]"#;
        let set: RelationSet = serde_json::from_str(json).unwrap();
        assert!(set.contains(&id("P1")));
        assert!(set.contains(&id("P2")));
    }

    #[test]
    fn test_deserialize_null_as_empty() {
        let set: RelationSet = serde_json::from_str("null").unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_serializes_as_id_array() {
        let set = RelationSet::parse_list(&["M1", "M2"]);
        assert_eq!(serde_json::to_string(&set).unwrap(), r#"["M1","M2"]"#);
    }

    #[test]
    fn test_directive_parse_rejects_blank() {
        assert_eq!(
            RelationDirective::parse(Relation::Participants, RelationAction::Add, " "),
            Err(ValidationError::BlankId)
        );
        let directive =
            RelationDirective::parse(Relation::Participants, RelationAction::Add, "P2").unwrap();
        assert_eq!(directive, RelationDirective::add(Relation::Participants, id("P2")));
    }
}
