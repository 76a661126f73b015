//! `delete` subcommands.

use clap::{Parser, Subcommand};

/// Delete a record. Without a record type, prints guidance only.
#[derive(Debug, Parser)]
pub struct DeleteCommand {
    #[command(subcommand)]
    pub target: Option<DeleteTarget>,
}

/// Record types that can be deleted.
#[derive(Debug, Subcommand)]
pub enum DeleteTarget {
    /// Delete a meeting.
    Meeting {
        /// Meeting ID.
        #[arg(long = "meetingId")]
        meeting_id: String,
    },
    /// Delete a calendar.
    Calendar {
        /// Calendar ID.
        #[arg(long = "calendarId")]
        calendar_id: String,
    },
    /// Delete a participant.
    Participant {
        /// Participant ID.
        #[arg(long = "participantId")]
        participant_id: String,
    },
    /// Delete an attachment.
    Attachment {
        /// Attachment ID.
        #[arg(long = "attachmentId")]
        attachment_id: String,
    },
}
