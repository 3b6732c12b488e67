// File: src/core/templates.rs
use crate::core::glyphs::Primitive::{self, *};

/// One brief form: a word and its canonical stroke sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateEntry {
    pub word: &'static str,
    pub strokes: &'static [Primitive],
}

const fn entry(word: &'static str, strokes: &'static [Primitive]) -> TemplateEntry {
    TemplateEntry { word, strokes }
}

/// The bundled brief-form dictionary. Order matters: the matcher breaks score
/// ties by keeping the earlier entry, so this list must stay stable. Several
/// words deliberately share a stroke pattern ("You"/"Your", "At"/"For"/"Of");
/// each is scored independently.
pub const BRIEF_FORMS: &[TemplateEntry] = &[
    entry("A", &[E]),
    entry("About", &[A]),
    entry("Acknowledge", &[L]),
    entry("Advantage", &[R, S]),
    entry("After", &[E, S]),
    entry("Am", &[M]),
    entry("Are", &[R]),
    entry("At", &[S]),
    entry("Be", &[L]),
    entry("Can", &[N]),
    entry("Experience", &[R, L]),
    entry("For", &[S]),
    entry("From", &[D]),
    entry("Good", &[M, R]),
    entry("Have", &[R, S]),
    entry("I", &[E]),
    entry("In", &[N]),
    entry("It", &[T]),
    entry("Of", &[S]),
    entry("Opinion", &[R, T]),
    entry("Opportunity", &[E, R]),
    entry("Order", &[L, N]),
    entry("Public", &[L, S]),
    entry("Question", &[E, N]),
    entry("Satisfy", &[S, R]),
    entry("Send", &[N, S]),
    entry("Soon", &[N, S]),
    entry("Speak", &[S, E]),
    entry("State", &[N, S]),
    entry("The", &[S]),
    entry("Think", &[R, E]),
    entry("When", &[B]),
    entry("Where", &[E, S]),
    entry("Which", &[T]),
    entry("Will", &[M, R]),
    entry("Wish", &[R]),
    entry("With", &[L]),
    entry("Won", &[N]),
    entry("Work", &[N, S]),
    entry("World", &[M, R]),
    entry("Worth", &[M]),
    entry("Would", &[L, N]),
    entry("Yesterday", &[D, E]),
    entry("You", &[R]),
    entry("Your", &[R]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dictionary_shape_is_stable() {
        assert_eq!(BRIEF_FORMS.len(), 45);
        assert_eq!(BRIEF_FORMS[0].word, "A");
        assert_eq!(BRIEF_FORMS[44].word, "Your");
        for tpl in BRIEF_FORMS {
            assert!(!tpl.word.is_empty());
            assert!(!tpl.strokes.is_empty());
            assert!(!tpl.strokes.contains(&Space));
        }
    }

    #[test]
    fn tie_break_relevant_duplicates_keep_their_order() {
        let advantage = BRIEF_FORMS.iter().position(|t| t.word == "Advantage");
        let have = BRIEF_FORMS.iter().position(|t| t.word == "Have");
        assert!(advantage < have);

        let a = BRIEF_FORMS.iter().position(|t| t.word == "A");
        let i = BRIEF_FORMS.iter().position(|t| t.word == "I");
        assert!(a < i);
    }
}
