//! `list` subcommands.
//!
//! The id options are accepted for compatibility but do not filter results.

use clap::{Parser, Subcommand};

/// List records. Without a record type, prints guidance only.
#[derive(Debug, Parser)]
pub struct ListCommand {
    #[command(subcommand)]
    pub target: Option<ListTarget>,
}

/// Record types that can be listed.
#[derive(Debug, Subcommand)]
pub enum ListTarget {
    /// List all meetings.
    Meeting {
        /// Meeting ID (ignored).
        #[arg(long = "meetingId")]
        meeting_id: Option<String>,
    },
    /// List all calendars.
    Calendar {
        /// Calendar ID (ignored).
        #[arg(long = "calendarId")]
        calendar_id: Option<String>,
    },
    /// List all participants.
    Participant {
        /// Participant ID (ignored).
        #[arg(long = "participantId")]
        participant_id: Option<String>,
    },
    /// List all attachments.
    Attachment {
        /// Attachment ID (ignored).
        #[arg(long = "attachmentId")]
        attachment_id: Option<String>,
    },
}
