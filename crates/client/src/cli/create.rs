//! `create` subcommands.

use clap::{Parser, Subcommand};

/// Create a record. Without a record type, prints guidance only.
#[derive(Debug, Parser)]
pub struct CreateCommand {
    #[command(subcommand)]
    pub target: Option<CreateTarget>,
}

/// Record types that can be created.
#[derive(Debug, Subcommand)]
pub enum CreateTarget {
    /// Create a meeting.
    Meeting {
        /// Meeting ID; generated when omitted.
        #[arg(long = "meetingId")]
        meeting_id: Option<String>,
        /// Meeting title.
        #[arg(long)]
        title: String,
        /// Date and time, as `YYYY-MM-DD HH:MM AM|PM`.
        #[arg(long)]
        datetime: String,
        /// Meeting location.
        #[arg(long)]
        location: String,
        /// Meeting details.
        #[arg(long)]
        details: String,
        /// Comma-separated calendar IDs.
        #[arg(long = "calendarIds", value_delimiter = ',')]
        calendar_ids: Vec<String>,
        /// Comma-separated participant IDs; at least one.
        #[arg(long = "participantIds", value_delimiter = ',', required = true)]
        participant_ids: Vec<String>,
        /// Comma-separated attachment IDs.
        #[arg(long = "attachmentIds", value_delimiter = ',')]
        attachment_ids: Vec<String>,
    },
    /// Create a calendar.
    Calendar {
        /// Calendar ID; generated when omitted.
        #[arg(long = "calendarId")]
        calendar_id: Option<String>,
        /// Calendar title.
        #[arg(long)]
        title: String,
        /// Calendar details.
        #[arg(long)]
        details: String,
        /// Comma-separated meeting IDs; at least one.
        #[arg(long = "meetingIds", value_delimiter = ',')]
        meeting_ids: Vec<String>,
    },
    /// Create a participant.
    Participant {
        /// Participant ID; generated when omitted.
        #[arg(long = "participantId")]
        participant_id: Option<String>,
        /// Participant name.
        #[arg(long)]
        name: String,
        /// Participant email.
        #[arg(long)]
        email: String,
    },
    /// Create an attachment.
    Attachment {
        /// Attachment ID; generated when omitted.
        #[arg(long = "attachmentId")]
        attachment_id: Option<String>,
        /// Comma-separated meeting IDs (accepted, not sent).
        #[arg(long = "meetingIds", value_delimiter = ',')]
        meeting_ids: Vec<String>,
        /// Attachment URL.
        #[arg(long)]
        url: String,
    },
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use crate::cli::{Cli, Commands};

    use super::*;

    fn parse(args: &[&str]) -> Result<Option<CreateTarget>, clap::Error> {
        let cli = Cli::try_parse_from(args)?;
        match cli.command {
            Commands::Create(command) => Ok(command.target),
            other => panic!("expected create, got {other:?}"),
        }
    }

    #[test]
    fn test_create_meeting_splits_id_lists() {
        let target = parse(&[
            "agenda",
            "create",
            "meeting",
            "--title",
            "Sync",
            "--datetime",
            "2024-06-01 02:30 PM",
            "--location",
            "Room 1",
            "--details",
            "Weekly",
            "--participantIds",
            "P1,P2",
            "--calendarIds",
            "C1",
        ])
        .unwrap();

        let Some(CreateTarget::Meeting {
            meeting_id,
            participant_ids,
            calendar_ids,
            attachment_ids,
            ..
        }) = target
        else {
            panic!("expected a meeting");
        };
        assert_eq!(meeting_id, None);
        assert_eq!(participant_ids, vec!["P1", "P2"]);
        assert_eq!(calendar_ids, vec!["C1"]);
        assert!(attachment_ids.is_empty());
    }

    #[test]
    fn test_create_meeting_requires_participants_flag() {
        let error = parse(&[
            "agenda",
            "create",
            "meeting",
            "--title",
            "Sync",
            "--datetime",
            "2024-06-01 02:30 PM",
            "--location",
            "Room 1",
            "--details",
            "Weekly",
        ])
        .unwrap_err();
        assert_eq!(
            error.kind(),
            clap::error::ErrorKind::MissingRequiredArgument
        );
    }

    #[test]
    fn test_create_participant_requires_email() {
        let error = parse(&["agenda", "create", "participant", "--name", "Ann"]).unwrap_err();
        assert_eq!(
            error.kind(),
            clap::error::ErrorKind::MissingRequiredArgument
        );
    }

    #[test]
    fn test_bare_create_has_no_target() {
        assert!(parse(&["agenda", "create"]).unwrap().is_none());
    }
}
