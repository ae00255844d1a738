//! Error types and result alias for sporeget-core operations.
//!
//! Every failure during a traversal is fatal: nothing is retried and no
//! partial link set is ever returned. Components hand errors back up the
//! call chain; only the binary decides what a failure means for the
//! process.

use thiserror::Error;

/// The error type returned by every fallible sporeget-core operation.
#[derive(Error, Debug)]
pub enum Error {
    /// Transport-level failure from the HTTP client.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A request exceeded the fixed per-request timeout.
    #[error("timed out: {0}")]
    Timeout(String),

    /// The server answered with a non-success status code.
    #[error("status code {status} on {url}")]
    Http {
        /// URL of the failed request.
        url: String,
        /// HTTP status code the server returned.
        status: u16,
    },

    /// The lookup endpoint reported that the username does not exist.
    #[error("user not found: {0}")]
    UserNotFound(String),

    /// A fetched document did not have the expected shape.
    #[error("unexpected document: {0}")]
    UnexpectedDocument(String),

    /// An identifier failed validation at construction.
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl Error {
    /// Stable category label for log events.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Network(_) => "network",
            Self::Timeout(_) => "timeout",
            Self::Http { .. } => "http",
            Self::UserNotFound(_) => "user_not_found",
            Self::UnexpectedDocument(_) => "unexpected_document",
            Self::InvalidId(_) => "invalid_id",
        }
    }
}

/// Convenience alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
