// File: src/core/strokes.rs
use crate::core::types::{Point, RecognitionResult};

/// Traces shorter than this carry too little ink to bother anyone with.
const MIN_TRACE_POINTS: usize = 5;

/// Fixed confidence for any analyzable trace. Kept below the acceptance
/// floor so the façade hands freehand input to the external collaborator.
const FREEHAND_CONFIDENCE: f64 = 0.2;

/// Placeholder classifier for raw pointer traces.
///
/// Deliberately performs no geometric analysis: local freehand recognition is
/// not implemented, and the stub's only job is to report a confidence low
/// enough that dispatch defers to the image-based fallback. Callers that
/// disable the fallback get the honest "unreadable" verdict instead.
pub fn recognize_trace(points: &[Point]) -> RecognitionResult {
    if points.len() < MIN_TRACE_POINTS {
        return RecognitionResult::unreadable(0.0, "Not enough stroke data for local analysis.");
    }

    RecognitionResult::unreadable(
        FREEHAND_CONFIDENCE,
        "Freehand local recognition is not yet reliable; use AI fallback.",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::UNREADABLE;

    fn trace(n: usize) -> Vec<Point> {
        (0..n)
            .map(|i| Point {
                x: i as f32 * 2.0,
                y: (i as f32).sin(),
            })
            .collect()
    }

    #[test]
    fn short_traces_score_zero() {
        for n in 0..5 {
            let result = recognize_trace(&trace(n));
            assert_eq!(result.prediction, UNREADABLE);
            assert_eq!(result.confidence, 0.0);
        }
    }

    #[test]
    fn any_analyzable_trace_scores_exactly_the_stub_confidence() {
        for n in [5, 6, 50, 500] {
            let result = recognize_trace(&trace(n));
            assert_eq!(result.prediction, UNREADABLE);
            assert_eq!(result.confidence, 0.2);
        }
    }
}
