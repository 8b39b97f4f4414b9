// peruse/src/scanner/mod.rs

//! Lexical scanning over a single source text.
//!
//! The [`Cursor`] owns the text and the current position. Its operations are
//! split by concern:
//! 1. `cursor`: construction, prefixes, whitespace, string and numeric literals
//! 2. `identifiers`: words, symbols, keywords and their prefixed and compound forms
//! 3. `expect`: `Result`-returning variants that report where a match failed

pub mod cursor;
mod expect;
mod identifiers;

pub use cursor::Cursor;
pub use identifiers::{is_symbol, is_word};

/// Convenience function to create a cursor over an in-memory script.
pub fn script(origin: impl Into<String>, content: &str) -> Cursor {
    Cursor::new(origin, content)
}
