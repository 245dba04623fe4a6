//! Envelope error types.

use thiserror::Error;

/// Result type for envelope operations.
pub type EnvelopeResult<T> = Result<T, EnvelopeError>;

/// Errors that can occur while writing an envelope.
#[derive(Debug, Error)]
pub enum EnvelopeError {
    /// The envelope code is not a valid HTTP status code.
    #[error("invalid HTTP status code: {0}")]
    InvalidStatus(u16),

    /// The payload could not be encoded as JSON.
    #[error("failed to encode response body: {0}")]
    Json(#[from] serde_json::Error),

    /// The response could not be assembled.
    #[error("failed to build response: {0}")]
    Http(#[from] http::Error),
}
