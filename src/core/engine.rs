// File: src/core/engine.rs
use crate::core::types::{Provenance, RecognitionRequest, RecognitionResult};
use crate::core::{matcher, strokes};
use crate::error::EngineResult;
use crate::fallback::FallbackRecognizer;
use tracing::{debug, info};

/// Stub confidences at or above this never escalate to the collaborator.
const FALLBACK_THRESHOLD: f64 = 0.6;

/// The recognition façade.
///
/// Stateless across calls: every request is an immutable snapshot and every
/// result is built fresh, so concurrent recognitions need no locking. The
/// only owned piece is the optional handle to the external image-recognition
/// collaborator.
pub struct RecognitionEngine {
    fallback: Option<Box<dyn FallbackRecognizer>>,
}

impl Default for RecognitionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RecognitionEngine {
    /// Engine without an external collaborator; freehand input stays local.
    pub fn new() -> Self {
        Self { fallback: None }
    }

    pub fn with_fallback(fallback: Box<dyn FallbackRecognizer>) -> Self {
        Self {
            fallback: Some(fallback),
        }
    }

    /// Dispatches one recognition request.
    ///
    /// Structured input is authoritative: a non-empty primitive sequence is
    /// decoded by the template matcher and never escalated, however weak the
    /// match. Freehand traces go through the stroke stub, and only a
    /// low-confidence stub verdict with fallback permitted (and a snapshot to
    /// send) reaches the external collaborator. A failing collaborator is the
    /// one condition that surfaces as an error instead of a result.
    pub async fn recognize(&self, request: &RecognitionRequest) -> EngineResult<RecognitionResult> {
        if !request.primitives.is_empty() {
            debug!(tokens = request.primitives.len(), "structured input, local decode");
            return Ok(matcher::recognize_primitives(&request.primitives));
        }

        let local = strokes::recognize_trace(&request.trace);
        if !request.allow_fallback || local.confidence >= FALLBACK_THRESHOLD {
            return Ok(local);
        }

        let Some(fallback) = &self.fallback else {
            debug!("fallback permitted but no collaborator configured");
            return Ok(local);
        };
        let Some(snapshot) = &request.snapshot else {
            debug!("fallback permitted but no snapshot supplied");
            return Ok(local);
        };

        info!(
            supervised = request.target_word.is_some(),
            "escalating trace to external recognizer"
        );
        let mut result = fallback
            .recognize(snapshot, request.target_word.as_deref())
            .await?;
        result.provenance = Provenance::External;
        Ok(result)
    }
}
