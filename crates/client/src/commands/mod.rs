//! The command layer.
//!
//! Parsed CLI input becomes a typed [`Operation`], validated before any
//! store call. [`execute`] then drives the store and reports an [`Outcome`].

mod execute;
mod operation;

pub use execute::{execute, run, Outcome};
pub use operation::{Operation, Verb};
