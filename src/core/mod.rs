pub mod engine;
pub mod glyphs;
pub mod matcher;
pub mod parser;
pub mod strokes;
pub mod templates;
pub mod types;
