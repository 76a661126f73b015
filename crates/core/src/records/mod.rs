mod error;
mod ids;
mod kind;
mod listing;
mod patch;
mod relations;
mod requests;
mod types;

pub use error::ValidationError;
pub use ids::RecordId;
pub use kind::{EntityKind, Relation, RelationAction};
pub use listing::{Listing, RecordIndex, Resolved};
pub use patch::{AttachmentPatch, CalendarPatch, Field, MeetingPatch, ParticipantPatch, RecordPatch};
pub use relations::{RelationDirective, RelationSet};
pub use requests::{
    CreateAttachmentRequest, CreateCalendarRequest, CreateMeetingRequest,
    CreateParticipantRequest,
};
pub use types::{Attachment, Calendar, Meeting, Participant, Record};
