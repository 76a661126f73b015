//! Partial updates.
//!
//! A patch names a record by id and carries only the fields a command sets.
//! Each field is a [`Field`], so "leave unchanged" is a distinct state and
//! never confused with an empty value. Relation edits travel beside the
//! patch as [`RelationDirective`]s, one remote call each.

use serde::{Serialize, Serializer};

use super::error::ValidationError;
use super::ids::RecordId;
use super::kind::EntityKind;
use super::relations::RelationDirective;
use super::types::{Attachment, Calendar, Meeting, Participant, Record};
use crate::validation::{
    is_valid_email, is_valid_url, limit_string, validate_date_time, MAX_DETAILS_LEN,
    MAX_LOCATION_LEN, MAX_NAME_LEN, MAX_TITLE_LEN,
};

/// A patch field: either left alone or set to a value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Field<T> {
    #[default]
    Unset,
    Set(T),
}

impl<T> Field<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, Field::Unset)
    }

    pub fn is_set(&self) -> bool {
        matches!(self, Field::Set(_))
    }

    pub fn as_set(&self) -> Option<&T> {
        match self {
            Field::Set(value) => Some(value),
            Field::Unset => None,
        }
    }

    /// Writes the value into `target` when set.
    pub fn apply_to(&self, target: &mut T)
    where
        T: Clone,
    {
        if let Field::Set(value) = self {
            *target = value.clone();
        }
    }
}

impl<T> From<Option<T>> for Field<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Field::Set(value),
            None => Field::Unset,
        }
    }
}

/// Unset fields are skipped by the owning struct; a set field serializes as
/// its bare value.
impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Field::Set(value) => value.serialize(serializer),
            Field::Unset => serializer.serialize_none(),
        }
    }
}

fn ensure_supported(
    kind: EntityKind,
    directive: &RelationDirective,
) -> Result<(), ValidationError> {
    if kind.supports(directive.relation) {
        Ok(())
    } else {
        Err(ValidationError::UnsupportedRelation {
            kind,
            relation: directive.relation,
        })
    }
}

/// Changes to a meeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeetingPatch {
    pub id: RecordId,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub title: Field<String>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub datetime: Field<String>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub location: Field<String>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub details: Field<String>,
    #[serde(skip)]
    pub directives: Vec<RelationDirective>,
}

impl MeetingPatch {
    pub fn new(id: RecordId) -> Self {
        Self {
            id,
            title: Field::Unset,
            datetime: Field::Unset,
            location: Field::Unset,
            details: Field::Unset,
            directives: Vec::new(),
        }
    }

    /// Sets the title, capped at 2000 characters.
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Field::Set(limit_string(title, MAX_TITLE_LEN));
        self
    }

    /// Sets the date-time after checking its format.
    pub fn with_datetime(mut self, datetime: &str) -> Result<Self, ValidationError> {
        if !validate_date_time(datetime) {
            return Err(ValidationError::InvalidDateTime(datetime.to_string()));
        }
        self.datetime = Field::Set(datetime.to_string());
        Ok(self)
    }

    /// Sets the location, capped at 2000 characters.
    pub fn with_location(mut self, location: &str) -> Self {
        self.location = Field::Set(limit_string(location, MAX_LOCATION_LEN));
        self
    }

    /// Sets the details, capped at 10000 characters.
    pub fn with_details(mut self, details: &str) -> Self {
        self.details = Field::Set(limit_string(details, MAX_DETAILS_LEN));
        self
    }

    pub fn with_directive(mut self, directive: RelationDirective) -> Result<Self, ValidationError> {
        ensure_supported(EntityKind::Meeting, &directive)?;
        self.directives.push(directive);
        Ok(self)
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_unset()
            && self.datetime.is_unset()
            && self.location.is_unset()
            && self.details.is_unset()
            && self.directives.is_empty()
    }

    pub fn apply_to(&self, meeting: &mut Meeting) {
        self.title.apply_to(&mut meeting.title);
        self.datetime.apply_to(&mut meeting.datetime);
        self.location.apply_to(&mut meeting.location);
        self.details.apply_to(&mut meeting.details);
    }
}

/// Changes to a calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarPatch {
    pub id: RecordId,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub title: Field<String>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub details: Field<String>,
    #[serde(skip)]
    pub directives: Vec<RelationDirective>,
}

impl CalendarPatch {
    pub fn new(id: RecordId) -> Self {
        Self {
            id,
            title: Field::Unset,
            details: Field::Unset,
            directives: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Field::Set(limit_string(title, MAX_TITLE_LEN));
        self
    }

    pub fn with_details(mut self, details: &str) -> Self {
        self.details = Field::Set(limit_string(details, MAX_DETAILS_LEN));
        self
    }

    pub fn with_directive(mut self, directive: RelationDirective) -> Result<Self, ValidationError> {
        ensure_supported(EntityKind::Calendar, &directive)?;
        self.directives.push(directive);
        Ok(self)
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_unset() && self.details.is_unset() && self.directives.is_empty()
    }

    pub fn apply_to(&self, calendar: &mut Calendar) {
        self.title.apply_to(&mut calendar.title);
        self.details.apply_to(&mut calendar.details);
    }
}

/// Changes to a participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParticipantPatch {
    pub id: RecordId,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub name: Field<String>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub email: Field<String>,
}

impl ParticipantPatch {
    pub fn new(id: RecordId) -> Self {
        Self {
            id,
            name: Field::Unset,
            email: Field::Unset,
        }
    }

    /// Sets the name, capped at 600 characters.
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Field::Set(limit_string(name, MAX_NAME_LEN));
        self
    }

    pub fn with_email(mut self, email: &str) -> Result<Self, ValidationError> {
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail(email.to_string()));
        }
        self.email = Field::Set(email.to_string());
        Ok(self)
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_unset() && self.email.is_unset()
    }

    pub fn apply_to(&self, participant: &mut Participant) {
        self.name.apply_to(&mut participant.name);
        self.email.apply_to(&mut participant.email);
    }
}

/// Changes to an attachment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttachmentPatch {
    pub id: RecordId,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub url: Field<String>,
}

impl AttachmentPatch {
    pub fn new(id: RecordId) -> Self {
        Self {
            id,
            url: Field::Unset,
        }
    }

    pub fn with_url(mut self, url: &str) -> Result<Self, ValidationError> {
        if !is_valid_url(url) {
            return Err(ValidationError::InvalidUrl(url.to_string()));
        }
        self.url = Field::Set(url.to_string());
        Ok(self)
    }

    pub fn is_empty(&self) -> bool {
        self.url.is_unset()
    }

    pub fn apply_to(&self, attachment: &mut Attachment) {
        self.url.apply_to(&mut attachment.url);
    }
}

/// A patch for any record type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RecordPatch {
    Meeting(MeetingPatch),
    Calendar(CalendarPatch),
    Participant(ParticipantPatch),
    Attachment(AttachmentPatch),
}

impl RecordPatch {
    pub fn kind(&self) -> EntityKind {
        match self {
            RecordPatch::Meeting(_) => EntityKind::Meeting,
            RecordPatch::Calendar(_) => EntityKind::Calendar,
            RecordPatch::Participant(_) => EntityKind::Participant,
            RecordPatch::Attachment(_) => EntityKind::Attachment,
        }
    }

    pub fn id(&self) -> &RecordId {
        match self {
            RecordPatch::Meeting(p) => &p.id,
            RecordPatch::Calendar(p) => &p.id,
            RecordPatch::Participant(p) => &p.id,
            RecordPatch::Attachment(p) => &p.id,
        }
    }

    /// Relation edits to send before the field update, in command order.
    pub fn directives(&self) -> &[RelationDirective] {
        match self {
            RecordPatch::Meeting(p) => &p.directives,
            RecordPatch::Calendar(p) => &p.directives,
            RecordPatch::Participant(_) | RecordPatch::Attachment(_) => &[],
        }
    }

    /// True when neither a field nor a relation edit was requested.
    pub fn is_empty(&self) -> bool {
        match self {
            RecordPatch::Meeting(p) => p.is_empty(),
            RecordPatch::Calendar(p) => p.is_empty(),
            RecordPatch::Participant(p) => p.is_empty(),
            RecordPatch::Attachment(p) => p.is_empty(),
        }
    }

    /// Rejects a patch that would change nothing.
    pub fn ensure_not_empty(self) -> Result<Self, ValidationError> {
        if self.is_empty() {
            return Err(ValidationError::NoUpdateFields { kind: self.kind() });
        }
        Ok(self)
    }

    /// Merges set fields into `record`, preserving everything else.
    ///
    /// Records of another kind are left untouched.
    pub fn apply_to(&self, record: &mut Record) {
        match (self, record) {
            (RecordPatch::Meeting(p), Record::Meeting(m)) => p.apply_to(m),
            (RecordPatch::Calendar(p), Record::Calendar(c)) => p.apply_to(c),
            (RecordPatch::Participant(p), Record::Participant(pt)) => p.apply_to(pt),
            (RecordPatch::Attachment(p), Record::Attachment(a)) => p.apply_to(a),
            _ => {}
        }
    }
}

impl From<MeetingPatch> for RecordPatch {
    fn from(patch: MeetingPatch) -> Self {
        RecordPatch::Meeting(patch)
    }
}

impl From<CalendarPatch> for RecordPatch {
    fn from(patch: CalendarPatch) -> Self {
        RecordPatch::Calendar(patch)
    }
}

impl From<ParticipantPatch> for RecordPatch {
    fn from(patch: ParticipantPatch) -> Self {
        RecordPatch::Participant(patch)
    }
}

impl From<AttachmentPatch> for RecordPatch {
    fn from(patch: AttachmentPatch) -> Self {
        RecordPatch::Attachment(patch)
    }
}
