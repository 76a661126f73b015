use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::error::ValidationError;
use super::ids::RecordId;
use super::kind::{EntityKind, Relation};
use super::relations::{RelationDirective, RelationSet};

/// Records compare and hash by id only, so relation sets stay correct while
/// the rest of a record is edited in place.
macro_rules! identity_by_id {
    ($($ty:ty),+) => {$(
        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                self.id == other.id
            }
        }

        impl Eq for $ty {}

        impl Hash for $ty {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.id.hash(state);
            }
        }
    )+};
}

/// A scheduled meeting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meeting {
    pub id: RecordId,
    #[serde(default)]
    pub title: String,
    /// `YYYY-MM-DD HH:MM AM|PM` when created locally; the remote may echo
    /// its own rendering.
    #[serde(default, alias = "dateTime")]
    pub datetime: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub participants: RelationSet,
    #[serde(default)]
    pub attachments: RelationSet,
    #[serde(default)]
    pub calendars: RelationSet,
}

impl Meeting {
    pub fn new(id: RecordId) -> Self {
        Self {
            id,
            title: String::new(),
            datetime: String::new(),
            location: String::new(),
            details: String::new(),
            participants: RelationSet::new(),
            attachments: RelationSet::new(),
            calendars: RelationSet::new(),
        }
    }

    pub fn relation(&self, relation: Relation) -> Option<&RelationSet> {
        match relation {
            Relation::Participants => Some(&self.participants),
            Relation::Attachments => Some(&self.attachments),
            Relation::Calendars => Some(&self.calendars),
            Relation::Meetings => None,
        }
    }

    fn relation_mut(&mut self, relation: Relation) -> Option<&mut RelationSet> {
        match relation {
            Relation::Participants => Some(&mut self.participants),
            Relation::Attachments => Some(&mut self.attachments),
            Relation::Calendars => Some(&mut self.calendars),
            Relation::Meetings => None,
        }
    }
}

/// A named collection of meetings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Calendar {
    pub id: RecordId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub meetings: RelationSet,
}

impl Calendar {
    pub fn new(id: RecordId) -> Self {
        Self {
            id,
            title: String::new(),
            details: String::new(),
            meetings: RelationSet::new(),
        }
    }
}

/// Someone invited to meetings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    pub id: RecordId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl Participant {
    pub fn new(id: RecordId) -> Self {
        Self {
            id,
            name: String::new(),
            email: String::new(),
        }
    }
}

/// A link to a document attached to meetings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attachment {
    pub id: RecordId,
    #[serde(default, alias = "attachmentUrl")]
    pub url: String,
}

impl Attachment {
    pub fn new(id: RecordId) -> Self {
        Self {
            id,
            url: String::new(),
        }
    }
}

identity_by_id!(Meeting, Calendar, Participant, Attachment);

/// Any of the four record types.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Record {
    Meeting(Meeting),
    Calendar(Calendar),
    Participant(Participant),
    Attachment(Attachment),
}

impl Record {
    /// Decodes a record payload of a known kind.
    pub fn from_value(kind: EntityKind, value: serde_json::Value) -> serde_json::Result<Self> {
        Ok(match kind {
            EntityKind::Meeting => Record::Meeting(serde_json::from_value(value)?),
            EntityKind::Calendar => Record::Calendar(serde_json::from_value(value)?),
            EntityKind::Participant => Record::Participant(serde_json::from_value(value)?),
            EntityKind::Attachment => Record::Attachment(serde_json::from_value(value)?),
        })
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            Record::Meeting(_) => EntityKind::Meeting,
            Record::Calendar(_) => EntityKind::Calendar,
            Record::Participant(_) => EntityKind::Participant,
            Record::Attachment(_) => EntityKind::Attachment,
        }
    }

    pub fn id(&self) -> &RecordId {
        match self {
            Record::Meeting(m) => &m.id,
            Record::Calendar(c) => &c.id,
            Record::Participant(p) => &p.id,
            Record::Attachment(a) => &a.id,
        }
    }

    /// Returns the id set for `relation`, if this kind owns it.
    pub fn relation(&self, relation: Relation) -> Option<&RelationSet> {
        match self {
            Record::Meeting(m) => m.relation(relation),
            Record::Calendar(c) if relation == Relation::Meetings => Some(&c.meetings),
            _ => None,
        }
    }

    /// Applies a single add/remove directive to the owning relation set.
    ///
    /// Returns whether the set changed; fails if this kind does not own the
    /// relation.
    pub fn apply(&mut self, directive: &RelationDirective) -> Result<bool, ValidationError> {
        let kind = self.kind();
        let set = match self {
            Record::Meeting(m) => m.relation_mut(directive.relation),
            Record::Calendar(c) if directive.relation == Relation::Meetings => {
                Some(&mut c.meetings)
            }
            _ => None,
        };

        match set {
            Some(set) => Ok(set.apply(directive.action, &directive.id)),
            None => Err(ValidationError::UnsupportedRelation {
                kind,
                relation: directive.relation,
            }),
        }
    }
}

impl From<Meeting> for Record {
    fn from(meeting: Meeting) -> Self {
        Record::Meeting(meeting)
    }
}

impl From<Calendar> for Record {
    fn from(calendar: Calendar) -> Self {
        Record::Calendar(calendar)
    }
}

impl From<Participant> for Record {
    fn from(participant: Participant) -> Self {
        Record::Participant(participant)
    }
}

impl From<Attachment> for Record {
    fn from(attachment: Attachment) -> Self {
        Record::Attachment(attachment)
    }
}
