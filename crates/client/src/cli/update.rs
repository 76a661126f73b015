//! `update` subcommands.
//!
//! Every option except `--id` is optional; at least one must be given.
//! Relation options add or remove a single id per invocation.

use clap::{Parser, Subcommand};

/// Update a record. Without a record type, prints guidance only.
#[derive(Debug, Parser)]
pub struct UpdateCommand {
    #[command(subcommand)]
    pub target: Option<UpdateTarget>,
}

/// Record types that can be updated.
#[derive(Debug, Subcommand)]
pub enum UpdateTarget {
    /// Update a meeting.
    Meeting {
        /// Meeting ID.
        #[arg(long)]
        id: String,
        /// New title.
        #[arg(long)]
        title: Option<String>,
        /// New date and time, as `YYYY-MM-DD HH:MM AM|PM`.
        #[arg(long)]
        datetime: Option<String>,
        /// New location.
        #[arg(long)]
        location: Option<String>,
        /// New details.
        #[arg(long)]
        details: Option<String>,
        /// Participant ID to add.
        #[arg(long = "add-participantId")]
        add_participant_id: Option<String>,
        /// Participant ID to remove.
        #[arg(long = "remove-participantId")]
        remove_participant_id: Option<String>,
        /// Attachment ID to add.
        #[arg(long = "add-attachmentId")]
        add_attachment_id: Option<String>,
        /// Attachment ID to remove.
        #[arg(long = "remove-attachmentId")]
        remove_attachment_id: Option<String>,
    },
    /// Update a calendar.
    Calendar {
        /// Calendar ID.
        #[arg(long)]
        id: String,
        /// New title.
        #[arg(long)]
        title: Option<String>,
        /// New details.
        #[arg(long)]
        details: Option<String>,
        /// Meeting ID to add.
        #[arg(long = "add-meetingId")]
        add_meeting_id: Option<String>,
        /// Meeting ID to remove.
        #[arg(long = "remove-meetingId")]
        remove_meeting_id: Option<String>,
    },
    /// Update a participant.
    Participant {
        /// Participant ID.
        #[arg(long)]
        id: String,
        /// New name.
        #[arg(long)]
        name: Option<String>,
        /// New email.
        #[arg(long)]
        email: Option<String>,
    },
    /// Update an attachment.
    Attachment {
        /// Attachment ID.
        #[arg(long)]
        id: String,
        /// New URL.
        #[arg(long)]
        url: Option<String>,
    },
}
