//! CLI command definitions.

pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use clap::{Parser, Subcommand, ValueEnum};

/// Default address of the record service.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Manage meetings, calendars, participants and attachments.
#[derive(Debug, Parser)]
#[command(name = "agenda")]
#[command(about = "CLI client for the agenda record service", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = "AGENDA_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    /// Log requests and dispatched operations to stderr.
    #[arg(long, short)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable record summaries.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a record.
    Create(create::CreateCommand),
    /// Update a record.
    Update(update::UpdateCommand),
    /// Delete a record.
    Delete(delete::DeleteCommand),
    /// List records of one type.
    List(list::ListCommand),
}
