//! Error types for Finding API calls.
//!
//! Validation failures keep the typed [`ValidationError`] from
//! `finding-query`. Everything after validation (request construction,
//! transport, status, decoding) carries a stable string message.

use finding_query::ValidationError;

/// Top-level error type for a Finding API call.
#[derive(Debug, thiserror::Error)]
pub enum FindingError {
    /// The raw parameters are not a legal request. No network call was made.
    #[error("invalid parameters: {0}")]
    Validation(#[from] ValidationError),

    /// The request URL could not be built.
    #[error("request error: {0}")]
    Request(String),

    /// The HTTP request failed before a response was received.
    #[error("transport error: {0}")]
    Transport(String),

    /// The service answered with a non-200 status.
    #[error("unexpected status code: {0}")]
    Status(u16),

    /// The response body could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl FindingError {
    /// HTTP-style status for callers that surface errors over HTTP:
    /// 400 for validation failures, 500 for everything else.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            _ => 500,
        }
    }
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, FindingError>;
