//! agenda_client - CLI client for the agenda record service.

pub mod cli;
pub mod client;
pub mod commands;
pub mod error;
pub mod output;

pub use client::AgendaClient;
pub use error::{ClientError, Result};
