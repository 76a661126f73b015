//! Output formatting functions.

pub mod json;
pub mod pretty;

use crate::cli::OutputFormat;
use crate::commands::Outcome;
use crate::error::Result;

use json::{format_json, Acknowledgement};

/// Renders a command outcome for stdout.
///
/// Returns `None` when there is nothing to print. In quiet mode a create
/// prints only the new id, and updates and deletes print nothing.
pub fn render(outcome: &Outcome, format: OutputFormat, quiet: bool) -> Result<Option<String>> {
    match format {
        OutputFormat::Json => render_json(outcome).map(Some),
        OutputFormat::Pretty => Ok(render_pretty(outcome, quiet)),
    }
}

fn render_pretty(outcome: &Outcome, quiet: bool) -> Option<String> {
    match outcome {
        Outcome::Created { record, .. } if quiet => Some(record.id().to_string()),
        Outcome::Created { record, .. } => {
            Some(pretty::created_message(record.kind(), record.id()))
        }
        Outcome::Updated { .. } | Outcome::Deleted { .. } if quiet => None,
        Outcome::Updated { kind, id, .. } => Some(pretty::updated_message(*kind, id)),
        Outcome::Deleted { kind, id, .. } => Some(pretty::deleted_message(*kind, id)),
        Outcome::Listed { kind, listing } => Some(pretty::format_listing(*kind, listing)),
        Outcome::Usage(verb) => Some(verb.guidance().to_string()),
    }
}

fn render_json(outcome: &Outcome) -> Result<String> {
    match outcome {
        Outcome::Created { record, stored } => format_json(stored.as_ref().unwrap_or(record)),
        Outcome::Updated {
            stored: Some(stored),
            ..
        } => format_json(stored),
        Outcome::Updated { kind, id, .. } => format_json(&Acknowledgement {
            kind: *kind,
            id,
            status: "updated",
            error: None,
        }),
        Outcome::Deleted { kind, id, error } => format_json(&Acknowledgement {
            kind: *kind,
            id,
            status: "deleted",
            error: error.as_ref().map(ToString::to_string),
        }),
        Outcome::Listed { listing, .. } => format_json(&listing.records),
        Outcome::Usage(verb) => format_json(&serde_json::json!({ "usage": verb.guidance() })),
    }
}
