//! Client error handling
//!
//! The client performs no local recovery, retry, or fallback: every
//! failure surfaces to the immediate caller.

use thiserror::Error;

/// Errors produced by the API client
#[derive(Error, Debug)]
pub enum ClientError {
    /// Rejected locally, before any network call is made
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Network-level failure from the underlying transport
    /// (connection refused, timeout, DNS failure, malformed body)
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success HTTP status returned by the backend,
    /// propagated with the original status and body
    #[error("Remote error ({status}): {body}")]
    Remote {
        status: reqwest::StatusCode,
        body: String,
    },
}

/// Result type alias for client operations
pub type ClientResult<T> = Result<T, ClientError>;
