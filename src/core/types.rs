// File: src/core/types.rs
use crate::core::glyphs::Primitive;
use serde::{Deserialize, Serialize};

/// Sentinel prediction for anything the engine cannot decode confidently.
pub const UNREADABLE: &str = "UNREADABLE";

/// Where a recognition result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Provenance {
    /// Produced by the local template matcher or the stroke stub.
    #[default]
    Local,
    /// Produced by the external image-recognition collaborator.
    External,
}

/// The engine's single output record.
///
/// Invariants: `confidence` is always within `[0, 1]`, and `prediction` is
/// [`UNREADABLE`] exactly when the confidence fell below the acceptance floor
/// or the input was empty/insufficient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognitionResult {
    pub prediction: String,
    pub confidence: f64,
    pub explanation: String,
    /// The external service reports no provenance; deserializing its JSON
    /// defaults to `Local` and the façade re-tags after the call.
    #[serde(default)]
    pub provenance: Provenance,
}

impl RecognitionResult {
    pub fn unreadable(confidence: f64, explanation: &str) -> Self {
        Self {
            prediction: UNREADABLE.to_string(),
            confidence,
            explanation: explanation.to_string(),
            provenance: Provenance::Local,
        }
    }

    pub fn is_readable(&self) -> bool {
        self.prediction != UNREADABLE
    }
}

/// A single pointer sample from the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// Immutable per-call snapshot of everything the caller has accumulated.
///
/// The engine never holds input state between calls; the UI side owns the
/// token buffer and trace and hands over a fresh bundle per request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecognitionRequest {
    /// Structured input from typed commands or the glyph keyboard.
    pub primitives: Vec<Primitive>,
    /// Raw pointer path from freehand drawing.
    pub trace: Vec<Point>,
    /// Encoded raster snapshot of the drawing, for the external collaborator.
    pub snapshot: Option<String>,
    /// Whether the caller permits escalation to the external collaborator.
    pub allow_fallback: bool,
    /// Supervised-check mode: the word the user was asked to draw.
    pub target_word: Option<String>,
}

impl RecognitionRequest {
    /// Request built from structured input. Structured input is authoritative,
    /// so no fallback permission is taken.
    pub fn from_primitives(primitives: Vec<Primitive>) -> Self {
        Self {
            primitives,
            ..Self::default()
        }
    }

    /// Request built from a freehand trace and its rendered snapshot.
    pub fn from_trace(trace: Vec<Point>, snapshot: Option<String>, allow_fallback: bool) -> Self {
        Self {
            trace,
            snapshot,
            allow_fallback,
            ..Self::default()
        }
    }

    pub fn with_target_word(mut self, word: &str) -> Self {
        self.target_word = Some(word.to_string());
        self
    }
}
