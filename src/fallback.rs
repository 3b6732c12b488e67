// File: src/fallback.rs
//! Seam for the external image-based recognition collaborator.
//!
//! The engine only consumes this trait; the concrete network client (the
//! hosted vision model) lives with the application, not the core. A scripted
//! stub is provided for tests and offline development.

use crate::core::types::RecognitionResult;
use crate::error::EngineResult;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

/// An image-based recognizer the façade can escalate to.
#[async_trait]
pub trait FallbackRecognizer: Send + Sync {
    /// Decodes an encoded raster snapshot. `target_word` carries the
    /// supervised-check hint when the user was asked to draw a known word.
    async fn recognize(
        &self,
        snapshot: &str,
        target_word: Option<&str>,
    ) -> EngineResult<RecognitionResult>;
}

/// Deterministic stand-in for the external collaborator.
///
/// Returns a fixed outcome and counts invocations, so tests can assert both
/// what the façade returned and whether it escalated at all.
pub struct ScriptedFallback {
    outcome: Result<RecognitionResult, String>,
    calls: AtomicUsize,
}

impl ScriptedFallback {
    pub fn returning(result: RecognitionResult) -> Self {
        Self {
            outcome: Ok(result),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            outcome: Err(message.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FallbackRecognizer for ScriptedFallback {
    async fn recognize(
        &self,
        _snapshot: &str,
        _target_word: Option<&str>,
    ) -> EngineResult<RecognitionResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            Ok(result) => Ok(result.clone()),
            Err(message) => Err(crate::error::EngineError::Fallback(message.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Provenance;

    #[tokio::test]
    async fn scripted_fallback_replays_its_outcome_and_counts_calls() {
        let result = RecognitionResult {
            prediction: "Soon".to_string(),
            confidence: 0.9,
            explanation: "Scripted.".to_string(),
            provenance: Provenance::Local,
        };
        let stub = ScriptedFallback::returning(result.clone());

        assert_eq!(stub.call_count(), 0);
        let replay = stub.recognize("png-bytes", Some("Soon")).await.unwrap();
        assert_eq!(replay, result);
        assert_eq!(stub.call_count(), 1);
    }
}
