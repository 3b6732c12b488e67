//! Error types for the recognition engine boundary.
//!
//! Everything recoverable (empty input, weak match, short trace) resolves
//! into a valid `RecognitionResult` so callers can treat UNREADABLE
//! uniformly; only a failing external collaborator crosses the boundary as
//! an error.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// The external image-recognition collaborator failed. Surfaced verbatim,
    /// never downgraded to an UNREADABLE result.
    #[error("Fallback recognition failed: {0}")]
    Fallback(String),

    /// The collaborator answered, but its payload did not decode.
    #[error("Fallback response could not be parsed: {0}")]
    FallbackPayload(String),
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::FallbackPayload(err.to_string())
    }
}

pub type EngineResult<T> = Result<T, EngineError>;
