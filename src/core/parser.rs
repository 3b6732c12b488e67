// File: src/core/parser.rs
use crate::core::glyphs::Primitive;

/// Parses a backslash-command string (`"\t \n"`, `"\r \e"`, `"\space"`) into
/// an ordered primitive sequence.
///
/// The grammar is forgiving towards copy-pasted lists: line breaks collapse
/// to spaces, tokens are case-insensitive, trailing commas and semicolons are
/// stripped, and commands with no mapping are silently dropped. Pure and
/// deterministic; an empty or all-unknown input yields an empty sequence, not
/// an error.
pub fn parse(input: &str) -> Vec<Primitive> {
    let cleaned = input.replace(['\r', '\n'], " ");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return vec![];
    }

    cleaned
        .split_whitespace()
        .map(|raw| raw.trim_end_matches([',', ';']).to_lowercase())
        .filter_map(|token| lookup_command(&token))
        .collect()
}

/// Renders a primitive sequence back to its command spelling. Inverse of
/// [`parse`] on canonical input; the glyph keyboard emits these strings.
pub fn render(tokens: &[Primitive]) -> String {
    tokens
        .iter()
        .map(|p| p.command())
        .collect::<Vec<_>>()
        .join(" ")
}

fn lookup_command(token: &str) -> Option<Primitive> {
    match token {
        "\\t" => Some(Primitive::T),
        "\\d" => Some(Primitive::D),
        "\\n" => Some(Primitive::N),
        "\\m" => Some(Primitive::M),
        "\\p" => Some(Primitive::P),
        "\\b" => Some(Primitive::B),
        "\\f" => Some(Primitive::F),
        "\\v" => Some(Primitive::V),
        "\\r" => Some(Primitive::R),
        "\\l" => Some(Primitive::L),
        "\\e" => Some(Primitive::E),
        "\\a" => Some(Primitive::A),
        "\\s" => Some(Primitive::S),
        "\\space" => Some(Primitive::Space),
        _ => None,
    }
}
