use agenda_core::records::{
    AttachmentPatch, CalendarPatch, CreateAttachmentRequest, CreateCalendarRequest,
    CreateMeetingRequest, CreateParticipantRequest, EntityKind, MeetingPatch, ParticipantPatch,
    Record, RecordId, RecordPatch, Relation, RelationAction, RelationDirective, ValidationError,
};
use tracing::warn;

use crate::cli::create::CreateTarget;
use crate::cli::delete::DeleteTarget;
use crate::cli::list::ListTarget;
use crate::cli::update::UpdateTarget;
use crate::cli::Commands;

/// Command verbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Create,
    Update,
    Delete,
    List,
}

impl Verb {
    /// Printed when a verb is given without a record type.
    pub fn guidance(&self) -> &'static str {
        match self {
            Verb::Create => {
                "Use one of the subcommands to create a specific record type \
                 (meeting, calendar, participant, attachment)."
            }
            Verb::Update => "Use one of the subcommands to update a specific type of record.",
            Verb::Delete => {
                "Use one of the subcommands to delete a specific record type \
                 (meeting, calendar, participant, attachment)."
            }
            Verb::List => "Use one of the subcommands to list records for a specific type.",
        }
    }
}

/// A validated command, ready to run against a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Create(Record),
    Update(RecordPatch),
    Delete {
        kind: EntityKind,
        id: RecordId,
    },
    /// `filter` is carried for logging only.
    List {
        kind: EntityKind,
        filter: Option<String>,
    },
    /// A bare verb: print guidance, touch nothing.
    Usage(Verb),
}

impl TryFrom<Commands> for Operation {
    type Error = ValidationError;

    fn try_from(command: Commands) -> Result<Self, Self::Error> {
        match command {
            Commands::Create(command) => match command.target {
                Some(target) => create_operation(target),
                None => Ok(Operation::Usage(Verb::Create)),
            },
            Commands::Update(command) => match command.target {
                Some(target) => update_operation(target),
                None => Ok(Operation::Usage(Verb::Update)),
            },
            Commands::Delete(command) => match command.target {
                Some(target) => delete_operation(target),
                None => Ok(Operation::Usage(Verb::Delete)),
            },
            Commands::List(command) => Ok(match command.target {
                Some(target) => list_operation(target),
                None => Operation::Usage(Verb::List),
            }),
        }
    }
}

fn create_operation(target: CreateTarget) -> Result<Operation, ValidationError> {
    let record: Record = match target {
        CreateTarget::Meeting {
            meeting_id,
            title,
            datetime,
            location,
            details,
            calendar_ids,
            participant_ids,
            attachment_ids,
        } => {
            let mut request = CreateMeetingRequest::new(title, datetime, location, details)
                .with_participants(participant_ids)
                .with_attachments(attachment_ids)
                .with_calendars(calendar_ids);
            if let Some(id) = meeting_id {
                request = request.with_id(id);
            }
            request.into_meeting()?.into()
        }
        CreateTarget::Calendar {
            calendar_id,
            title,
            details,
            meeting_ids,
        } => {
            let mut request =
                CreateCalendarRequest::new(title, details).with_meetings(meeting_ids);
            if let Some(id) = calendar_id {
                request = request.with_id(id);
            }
            request.into_calendar()?.into()
        }
        CreateTarget::Participant {
            participant_id,
            name,
            email,
        } => {
            let mut request = CreateParticipantRequest::new(name, email);
            if let Some(id) = participant_id {
                request = request.with_id(id);
            }
            request.into_participant()?.into()
        }
        CreateTarget::Attachment {
            attachment_id,
            meeting_ids,
            url,
        } => {
            if !meeting_ids.is_empty() {
                warn!(
                    ?meeting_ids,
                    "--meetingIds is not sent when creating an attachment"
                );
            }
            let mut request = CreateAttachmentRequest::new(url);
            if let Some(id) = attachment_id {
                request = request.with_id(id);
            }
            request.into_attachment()?.into()
        }
    };
    Ok(Operation::Create(record))
}

/// Collects the single-id relation flags in the order they are sent.
fn directives<const N: usize>(
    flags: [(Option<String>, Relation, RelationAction); N],
) -> Result<Vec<RelationDirective>, ValidationError> {
    flags
        .into_iter()
        .filter_map(|(value, relation, action)| {
            value.map(|value| RelationDirective::parse(relation, action, &value))
        })
        .collect()
}

fn update_operation(target: UpdateTarget) -> Result<Operation, ValidationError> {
    use RelationAction::{Add, Remove};

    let patch: RecordPatch = match target {
        UpdateTarget::Meeting {
            id,
            title,
            datetime,
            location,
            details,
            add_participant_id,
            remove_participant_id,
            add_attachment_id,
            remove_attachment_id,
        } => {
            let mut patch = MeetingPatch::new(RecordId::parse(&id)?);
            if let Some(title) = title {
                patch = patch.with_title(&title);
            }
            if let Some(datetime) = datetime {
                patch = patch.with_datetime(&datetime)?;
            }
            if let Some(location) = location {
                patch = patch.with_location(&location);
            }
            if let Some(details) = details {
                patch = patch.with_details(&details);
            }
            for directive in directives([
                (add_participant_id, Relation::Participants, Add),
                (remove_participant_id, Relation::Participants, Remove),
                (add_attachment_id, Relation::Attachments, Add),
                (remove_attachment_id, Relation::Attachments, Remove),
            ])? {
                patch = patch.with_directive(directive)?;
            }
            patch.into()
        }
        UpdateTarget::Calendar {
            id,
            title,
            details,
            add_meeting_id,
            remove_meeting_id,
        } => {
            let mut patch = CalendarPatch::new(RecordId::parse(&id)?);
            if let Some(title) = title {
                patch = patch.with_title(&title);
            }
            if let Some(details) = details {
                patch = patch.with_details(&details);
            }
            for directive in directives([
                (add_meeting_id, Relation::Meetings, Add),
                (remove_meeting_id, Relation::Meetings, Remove),
            ])? {
                patch = patch.with_directive(directive)?;
            }
            patch.into()
        }
        UpdateTarget::Participant { id, name, email } => {
            let mut patch = ParticipantPatch::new(RecordId::parse(&id)?);
            if let Some(name) = name {
                patch = patch.with_name(&name);
            }
            if let Some(email) = email {
                patch = patch.with_email(&email)?;
            }
            patch.into()
        }
        UpdateTarget::Attachment { id, url } => {
            let mut patch = AttachmentPatch::new(RecordId::parse(&id)?);
            if let Some(url) = url {
                patch = patch.with_url(&url)?;
            }
            patch.into()
        }
    };
    Ok(Operation::Update(patch.ensure_not_empty()?))
}

fn delete_operation(target: DeleteTarget) -> Result<Operation, ValidationError> {
    let (kind, id) = match target {
        DeleteTarget::Meeting { meeting_id } => (EntityKind::Meeting, meeting_id),
        DeleteTarget::Calendar { calendar_id } => (EntityKind::Calendar, calendar_id),
        DeleteTarget::Participant { participant_id } => (EntityKind::Participant, participant_id),
        DeleteTarget::Attachment { attachment_id } => (EntityKind::Attachment, attachment_id),
    };
    Ok(Operation::Delete {
        kind,
        id: RecordId::parse(&id)?,
    })
}

fn list_operation(target: ListTarget) -> Operation {
    let (kind, filter) = match target {
        ListTarget::Meeting { meeting_id } => (EntityKind::Meeting, meeting_id),
        ListTarget::Calendar { calendar_id } => (EntityKind::Calendar, calendar_id),
        ListTarget::Participant { participant_id } => (EntityKind::Participant, participant_id),
        ListTarget::Attachment { attachment_id } => (EntityKind::Attachment, attachment_id),
    };
    Operation::List { kind, filter }
}
