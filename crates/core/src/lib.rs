//! agenda_core - record model for the agenda CLI.
//!
//! Pure data types and validation for meetings, calendars, participants and
//! attachments, plus the [`remote::RecordStore`] port the command layer talks to.

pub mod records;
pub mod remote;
pub mod validation;
