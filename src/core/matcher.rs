// File: src/core/matcher.rs
use crate::core::glyphs::Primitive;
use crate::core::templates::BRIEF_FORMS;
use crate::core::types::{Provenance, RecognitionResult, UNREADABLE};
use tracing::debug;

/// Minimum similarity score for a template match to count as a decode.
/// Fixed policy constant; callers cannot tune it.
const ACCEPT_THRESHOLD: f64 = 0.6;

/// Floor for the score denominator.
const MAX_DISTANCE_FLOOR: usize = 1;

/// Levenshtein distance over primitive sequences: the minimum number of
/// single-token insertions, deletions, and substitutions turning `a` into `b`.
/// Classic DP table, O(|a|·|b|).
pub fn edit_distance(a: &[Primitive], b: &[Primitive]) -> usize {
    let rows = a.len() + 1;
    let cols = b.len() + 1;
    let mut dp = vec![vec![0usize; cols]; rows];

    for (i, row) in dp.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..cols {
        dp[0][j] = j;
    }

    for i in 1..rows {
        for j in 1..cols {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            dp[i][j] = (dp[i - 1][j] + 1)
                .min(dp[i][j - 1] + 1)
                .min(dp[i - 1][j - 1] + cost);
        }
    }

    dp[rows - 1][cols - 1]
}

fn similarity(observed: &[Primitive], template: &[Primitive]) -> f64 {
    let distance = edit_distance(observed, template);
    let max_len = MAX_DISTANCE_FLOOR.max(observed.len()).max(template.len());
    1.0 - distance as f64 / max_len as f64
}

/// Scores an observed primitive sequence against every brief form and picks
/// the best match.
///
/// Space tokens are stripped first; they separate words on the canvas but
/// carry no ink the templates could match. Ties on the best score keep the
/// first-seen entry, so dictionary order is the deterministic tie-break.
pub fn recognize_primitives(tokens: &[Primitive]) -> RecognitionResult {
    let normalized: Vec<Primitive> = tokens
        .iter()
        .copied()
        .filter(|p| *p != Primitive::Space)
        .collect();

    if normalized.is_empty() {
        return RecognitionResult::unreadable(0.0, "No structured input provided.");
    }

    let mut best_word = UNREADABLE;
    let mut best_score = 0.0f64;

    // Strictly-greater comparison: on a tie the earlier dictionary entry wins.
    for template in BRIEF_FORMS {
        let score = similarity(&normalized, template.strokes);
        if score > best_score {
            best_score = score;
            best_word = template.word;
        }
    }

    debug!(
        observed = normalized.len(),
        best_score, best_word, "template scan complete"
    );

    if best_score < ACCEPT_THRESHOLD {
        return RecognitionResult::unreadable(
            best_score,
            "Local template match is too weak for a confident decode.",
        );
    }

    RecognitionResult {
        prediction: best_word.to_string(),
        confidence: best_score,
        explanation: "Matched against local brief form templates.".to_string(),
        provenance: Provenance::Local,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::glyphs::Primitive::*;
    use crate::core::types::UNREADABLE;

    #[test]
    fn distance_of_a_sequence_to_itself_is_zero() {
        let seqs: &[&[Primitive]] = &[&[T], &[R, S], &[M, R, E, D], &[]];
        for s in seqs {
            assert_eq!(edit_distance(s, s), 0);
        }
    }

    #[test]
    fn distance_is_symmetric() {
        let pairs: &[(&[Primitive], &[Primitive])] = &[
            (&[T, N], &[T, M]),
            (&[R, S], &[S]),
            (&[], &[D, E]),
            (&[P, V, F], &[B]),
        ];
        for (a, b) in pairs {
            assert_eq!(edit_distance(a, b), edit_distance(b, a));
        }
    }

    #[test]
    fn distance_satisfies_the_triangle_inequality() {
        let seqs: &[&[Primitive]] = &[&[T, N], &[T, M, S], &[R], &[], &[D, E, A, L]];
        for a in seqs {
            for b in seqs {
                for c in seqs {
                    assert!(
                        edit_distance(a, c) <= edit_distance(a, b) + edit_distance(b, c),
                        "triangle violated for {:?} {:?} {:?}",
                        a,
                        b,
                        c
                    );
                }
            }
        }
    }

    #[test]
    fn known_distances() {
        assert_eq!(edit_distance(&[T, N], &[T, M]), 1);
        assert_eq!(edit_distance(&[R, S], &[S]), 1);
        assert_eq!(edit_distance(&[], &[D, E]), 2);
        assert_eq!(edit_distance(&[P, V, F], &[R, S]), 3);
    }

    #[test]
    fn empty_input_is_unreadable_with_zero_confidence() {
        let result = recognize_primitives(&[]);
        assert_eq!(result.prediction, UNREADABLE);
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn space_only_input_is_treated_as_empty() {
        let result = recognize_primitives(&[Space, Space]);
        assert_eq!(result.prediction, UNREADABLE);
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn exact_match_yields_full_confidence() {
        let result = recognize_primitives(&[E]);
        assert_eq!(result.prediction, "A");
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn tie_on_full_score_keeps_the_earlier_entry() {
        // "Advantage" and "Have" share [R, S]; "Advantage" comes first.
        let result = recognize_primitives(&[R, S]);
        assert_eq!(result.prediction, "Advantage");
        assert_eq!(result.confidence, 1.0);

        // Same for [N, S]: "Send" precedes "Soon", "State", and "Work".
        let result = recognize_primitives(&[N, S]);
        assert_eq!(result.prediction, "Send");
    }

    #[test]
    fn tie_break_is_stable_across_runs() {
        let first = recognize_primitives(&[R, S]);
        for _ in 0..50 {
            assert_eq!(recognize_primitives(&[R, S]), first);
        }
    }

    #[test]
    fn foreign_strokes_fall_below_the_acceptance_floor() {
        // P, V, F appear in no template; every score collapses.
        let result = recognize_primitives(&[P, V, F]);
        assert_eq!(result.prediction, UNREADABLE);
        assert!(result.confidence < 0.6);
    }

    #[test]
    fn weak_match_reports_its_actual_score() {
        // [T, D, V] is distance >= 2 from every one- or two-stroke template,
        // so the best score is at most 1/3 and the real value is preserved.
        let result = recognize_primitives(&[T, D, V]);
        assert_eq!(result.prediction, UNREADABLE);
        assert!(result.confidence > 0.0);
        assert!(result.confidence < 0.6);
    }

    #[test]
    fn spaces_between_strokes_do_not_change_the_match() {
        let with_gap = recognize_primitives(&[R, Space, S]);
        let without = recognize_primitives(&[R, S]);
        assert_eq!(with_gap, without);
    }
}
