//! Create requests.
//!
//! Raw command-line input for a new record. Converting a request into a
//! record is where ids are generated, lengths capped and formats checked,
//! so nothing invalid can reach the store.

use super::error::ValidationError;
use super::ids::RecordId;
use super::kind::{EntityKind, Relation};
use super::relations::RelationSet;
use super::types::{Attachment, Calendar, Meeting, Participant};
use crate::validation::{
    is_valid_email, is_valid_url, limit_string, validate_date_time, MAX_DETAILS_LEN,
    MAX_LOCATION_LEN, MAX_NAME_LEN, MAX_TITLE_LEN,
};

fn require_non_empty(
    set: RelationSet,
    kind: EntityKind,
    relation: Relation,
) -> Result<RelationSet, ValidationError> {
    if set.is_empty() {
        return Err(ValidationError::MissingRelation { kind, relation });
    }
    Ok(set)
}

/// Request to create a meeting.
#[derive(Debug, Clone, Default)]
pub struct CreateMeetingRequest {
    pub id: Option<String>,
    pub title: String,
    pub datetime: String,
    pub location: String,
    pub details: String,
    pub participant_ids: Vec<String>,
    pub attachment_ids: Vec<String>,
    pub calendar_ids: Vec<String>,
}

impl CreateMeetingRequest {
    pub fn new(
        title: impl Into<String>,
        datetime: impl Into<String>,
        location: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            datetime: datetime.into(),
            location: location.into(),
            details: details.into(),
            ..Self::default()
        }
    }

    /// Use a caller-supplied id instead of generating one.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_participants(mut self, ids: Vec<String>) -> Self {
        self.participant_ids = ids;
        self
    }

    pub fn with_attachments(mut self, ids: Vec<String>) -> Self {
        self.attachment_ids = ids;
        self
    }

    pub fn with_calendars(mut self, ids: Vec<String>) -> Self {
        self.calendar_ids = ids;
        self
    }

    /// Validates the request and builds the meeting to send.
    ///
    /// Fails on a malformed date-time or when no participant id is given.
    pub fn into_meeting(self) -> Result<Meeting, ValidationError> {
        let id = RecordId::or_generate(self.id.as_deref())?;
        if !validate_date_time(&self.datetime) {
            return Err(ValidationError::InvalidDateTime(self.datetime));
        }
        let participants = require_non_empty(
            RelationSet::parse_list(&self.participant_ids),
            EntityKind::Meeting,
            Relation::Participants,
        )?;

        let mut meeting = Meeting::new(id);
        meeting.title = limit_string(&self.title, MAX_TITLE_LEN);
        meeting.datetime = self.datetime;
        meeting.location = limit_string(&self.location, MAX_LOCATION_LEN);
        meeting.details = limit_string(&self.details, MAX_DETAILS_LEN);
        meeting.participants = participants;
        meeting.attachments = RelationSet::parse_list(&self.attachment_ids);
        meeting.calendars = RelationSet::parse_list(&self.calendar_ids);
        Ok(meeting)
    }
}

/// Request to create a calendar.
#[derive(Debug, Clone, Default)]
pub struct CreateCalendarRequest {
    pub id: Option<String>,
    pub title: String,
    pub details: String,
    pub meeting_ids: Vec<String>,
}

impl CreateCalendarRequest {
    pub fn new(title: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            details: details.into(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_meetings(mut self, ids: Vec<String>) -> Self {
        self.meeting_ids = ids;
        self
    }

    /// Validates the request and builds the calendar to send.
    ///
    /// A calendar must start with at least one meeting.
    pub fn into_calendar(self) -> Result<Calendar, ValidationError> {
        let id = RecordId::or_generate(self.id.as_deref())?;
        let meetings = require_non_empty(
            RelationSet::parse_list(&self.meeting_ids),
            EntityKind::Calendar,
            Relation::Meetings,
        )?;

        let mut calendar = Calendar::new(id);
        calendar.title = limit_string(&self.title, MAX_TITLE_LEN);
        calendar.details = limit_string(&self.details, MAX_DETAILS_LEN);
        calendar.meetings = meetings;
        Ok(calendar)
    }
}

/// Request to create a participant.
#[derive(Debug, Clone, Default)]
pub struct CreateParticipantRequest {
    pub id: Option<String>,
    pub name: String,
    pub email: String,
}

impl CreateParticipantRequest {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn into_participant(self) -> Result<Participant, ValidationError> {
        let id = RecordId::or_generate(self.id.as_deref())?;
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail(self.email));
        }

        let mut participant = Participant::new(id);
        participant.name = limit_string(&self.name, MAX_NAME_LEN);
        participant.email = self.email;
        Ok(participant)
    }
}

/// Request to create an attachment.
#[derive(Debug, Clone, Default)]
pub struct CreateAttachmentRequest {
    pub id: Option<String>,
    pub url: String,
}

impl CreateAttachmentRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            id: None,
            url: url.into(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn into_attachment(self) -> Result<Attachment, ValidationError> {
        let id = RecordId::or_generate(self.id.as_deref())?;
        if !is_valid_url(&self.url) {
            return Err(ValidationError::InvalidUrl(self.url));
        }

        let mut attachment = Attachment::new(id);
        attachment.url = self.url;
        Ok(attachment)
    }
}
