//! The record-store port.
//!
//! The command layer talks to the remote service only through
//! [`RecordStore`]. The HTTP adapter lives in the client crate;
//! [`InMemoryStore`] stands in for the remote in tests.

mod error;
mod inmemory;
mod status;
mod traits;

pub use error::{RemoteError, Result};
pub use inmemory::InMemoryStore;
pub use status::{error_message_from_body, status_to_remote_error};
pub use traits::RecordStore;
