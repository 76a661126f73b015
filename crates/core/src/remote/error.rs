use thiserror::Error;

/// Errors reported by a record store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RemoteError {
    #[error("{resource} not found")]
    NotFound { resource: String },
    #[error("Server returned {status}: {message}")]
    Rejected { status: u16, message: String },
    #[error("Connection failed: {0}")]
    Transport(String),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
    /// The request body could not be encoded; nothing was sent.
    #[error("Could not encode request: {0}")]
    InvalidRequest(String),
}

/// Result type for record store operations.
pub type Result<T> = std::result::Result<T, RemoteError>;
