// peruse/src/scanner/expect.rs

//! Fallible counterparts of the `eat_*` operations.
//!
//! Each `expect_*` method consumes exactly what its `eat_*` twin consumes.
//! On no-match the cursor is untouched and the error carries its location.

use super::cursor::Cursor;
use crate::error::{Expected, Result, ScanError};

impl Cursor {
    fn mismatch(&self, expected: Expected) -> ScanError {
        ScanError::mismatch(self.location(), expected)
    }

    /// Consume `prefix` or fail with [`Expected::Prefix`].
    pub fn expect(&mut self, prefix: &str) -> Result<()> {
        if self.eat(prefix) {
            Ok(())
        } else {
            Err(self.mismatch(Expected::Prefix(prefix.to_string())))
        }
    }

    /// Consume the head `(name` or fail with [`Expected::FixedForm`].
    pub fn expect_fixed_form(&mut self, name: &str) -> Result<()> {
        if self.eat_fixed_form(name) {
            Ok(())
        } else {
            Err(self.mismatch(Expected::FixedForm(name.to_string())))
        }
    }

    /// Like [`Cursor::eat_string_literal`], telling an unterminated literal
    /// apart from a missing one.
    pub fn expect_string_literal(&mut self) -> Result<String> {
        if let Some(content) = self.eat_string_literal() {
            return Ok(content);
        }
        if self.remaining().first() == Some(&'"') {
            Err(ScanError::UnterminatedString {
                location: self.location(),
            })
        } else {
            Err(self.mismatch(Expected::StringLiteral))
        }
    }

    /// Consume a word or fail with [`Expected::Word`].
    pub fn expect_word(&mut self) -> Result<String> {
        self.eat_word().ok_or_else(|| self.mismatch(Expected::Word))
    }

    /// Consume `prefix` and a word, returning the bare and prefixed forms.
    pub fn expect_prefixed_word(&mut self, prefix: &str) -> Result<(String, String)> {
        self.eat_prefixed_word(prefix)
            .ok_or_else(|| self.mismatch(Expected::PrefixedWord(prefix.to_string())))
    }

    /// Consume a `first:second` pair of words.
    pub fn expect_words(&mut self) -> Result<(String, String)> {
        self.eat_words().ok_or_else(|| self.mismatch(Expected::Words))
    }

    /// Consume a symbol or fail with [`Expected::Symbol`].
    pub fn expect_symbol(&mut self) -> Result<String> {
        self.eat_symbol().ok_or_else(|| self.mismatch(Expected::Symbol))
    }

    /// Consume `prefix` and a symbol, returning the bare and prefixed forms.
    pub fn expect_prefixed_symbol(&mut self, prefix: &str) -> Result<(String, String)> {
        self.eat_prefixed_symbol(prefix)
            .ok_or_else(|| self.mismatch(Expected::PrefixedSymbol(prefix.to_string())))
    }

    /// Consume a `first:second` pair of symbols.
    pub fn expect_symbols(&mut self) -> Result<(String, String)> {
        self.eat_symbols().ok_or_else(|| self.mismatch(Expected::Symbols))
    }

    /// Consume a keyword, colon included.
    pub fn expect_keyword(&mut self) -> Result<String> {
        self.eat_keyword().ok_or_else(|| self.mismatch(Expected::Keyword))
    }

    /// Consume an integer literal using the configured formats.
    pub fn expect_integer(&mut self) -> Result<String> {
        self.eat_integer().ok_or_else(|| self.mismatch(Expected::Integer))
    }

    /// Consume a float literal using the configured formats.
    pub fn expect_float(&mut self) -> Result<String> {
        self.eat_float().ok_or_else(|| self.mismatch(Expected::Float))
    }
}
