use std::fmt;

use serde::{Deserialize, Serialize};

/// The four record types managed by the remote service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Meeting,
    Calendar,
    Participant,
    Attachment,
}

impl EntityKind {
    /// Lowercase singular name, as used on the command line.
    pub fn noun(&self) -> &'static str {
        match self {
            EntityKind::Meeting => "meeting",
            EntityKind::Calendar => "calendar",
            EntityKind::Participant => "participant",
            EntityKind::Attachment => "attachment",
        }
    }

    /// Capitalized name used in record summaries, e.g. `(Meeting) id: ...`.
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Meeting => "Meeting",
            EntityKind::Calendar => "Calendar",
            EntityKind::Participant => "Participant",
            EntityKind::Attachment => "Attachment",
        }
    }

    /// Collection path segment on the remote service.
    pub fn collection(&self) -> &'static str {
        match self {
            EntityKind::Meeting => "meetings",
            EntityKind::Calendar => "calendars",
            EntityKind::Participant => "participants",
            EntityKind::Attachment => "attachments",
        }
    }

    /// Relations this kind owns, in display order.
    pub fn relations(&self) -> &'static [Relation] {
        match self {
            EntityKind::Meeting => &[
                Relation::Calendars,
                Relation::Participants,
                Relation::Attachments,
            ],
            EntityKind::Calendar => &[Relation::Meetings],
            EntityKind::Participant | EntityKind::Attachment => &[],
        }
    }

    /// Returns true if `relation` can be edited on this kind.
    pub fn supports(&self, relation: Relation) -> bool {
        self.relations().contains(&relation)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.noun())
    }
}

/// A many-to-many link named from the owning side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    Participants,
    Attachments,
    Calendars,
    Meetings,
}

impl Relation {
    /// Kind of the records on the other end of the link.
    pub fn related_kind(&self) -> EntityKind {
        match self {
            Relation::Participants => EntityKind::Participant,
            Relation::Attachments => EntityKind::Attachment,
            Relation::Calendars => EntityKind::Calendar,
            Relation::Meetings => EntityKind::Meeting,
        }
    }

    /// Field name holding the related ids in a record payload.
    pub fn field(&self) -> &'static str {
        self.related_kind().collection()
    }

    /// Section heading used when listing related records.
    pub fn heading(&self) -> &'static str {
        match self {
            Relation::Participants => "Participants",
            Relation::Attachments => "Attachments",
            Relation::Calendars => "Calendars",
            Relation::Meetings => "Meetings",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.related_kind().noun())
    }
}

/// Whether a relation directive links or unlinks a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationAction {
    Add,
    Remove,
}

impl RelationAction {
    pub fn verb(&self) -> &'static str {
        match self {
            RelationAction::Add => "add",
            RelationAction::Remove => "remove",
        }
    }
}
