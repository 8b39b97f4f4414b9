// peruse/src/scanner/identifiers.rs

//! Words, symbols and keywords.
//!
//! All of them start with a letter and run until a space, `)`, newline or
//! the end of input. A code point outside the allowed set before that point
//! rejects the whole unit.
//!
//! - word: letters and digits
//! - symbol: letters, digits and `-`, not ending in `-`
//! - keyword: `:` then a word; unlike words and symbols it only stops at a
//!   space, so `:key)` is not a keyword

use super::cursor::Cursor;
use crate::charclass::{is_digit, is_letter, is_terminator};

fn is_word_char(c: char) -> bool {
    is_letter(c) || is_digit(c)
}

fn is_symbol_char(c: char) -> bool {
    is_word_char(c) || c == '-'
}

/// Whether `value` is a letter followed by letters and digits.
pub fn is_word(value: &str) -> bool {
    let mut chars = value.chars();
    matches!(chars.next(), Some(c) if is_letter(c)) && chars.all(is_word_char)
}

/// Whether `value` is a letter followed by letters, digits and dashes, with
/// no trailing dash.
pub fn is_symbol(value: &str) -> bool {
    let mut chars = value.chars();
    matches!(chars.next(), Some(c) if is_letter(c))
        && chars.all(is_symbol_char)
        && !value.ends_with('-')
}

/// Length of the run before the first `stop` code point, or `None` if a code
/// point outside `body` comes first.
fn run_len(input: &[char], stop: impl Fn(char) -> bool, body: impl Fn(char) -> bool) -> Option<usize> {
    let mut len = 0;
    for &c in input {
        if stop(c) {
            break;
        }
        if !body(c) {
            return None;
        }
        len += 1;
    }
    Some(len)
}

fn word_len(input: &[char]) -> Option<usize> {
    match input.first() {
        Some(&c) if is_letter(c) => run_len(input, is_terminator, is_word_char),
        _ => None,
    }
}

fn symbol_len(input: &[char]) -> Option<usize> {
    let len = match input.first() {
        Some(&c) if is_letter(c) => run_len(input, is_terminator, is_symbol_char)?,
        _ => return None,
    };
    if input[len - 1] == '-' {
        return None;
    }
    Some(len)
}

/// Split `text` on its single `:` into two halves that both satisfy `valid`.
fn split_pair(text: &str, valid: fn(&str) -> bool) -> Option<(String, String)> {
    let mut halves = text.split(':');
    let first = halves.next()?;
    let second = halves.next()?;
    if halves.next().is_some() || !valid(first) || !valid(second) {
        return None;
    }
    Some((first.to_string(), second.to_string()))
}

impl Cursor {
    /// Consume a word such as `lisp2`.
    pub fn eat_word(&mut self) -> Option<String> {
        let len = word_len(self.remaining())?;
        Some(self.take(len))
    }

    /// Consume `prefix` immediately followed by a word.
    ///
    /// Returns the bare word and the word with its prefix. An empty prefix
    /// behaves like [`Cursor::eat_word`].
    pub fn eat_prefixed_word(&mut self, prefix: &str) -> Option<(String, String)> {
        if prefix.is_empty() {
            return self.eat_word().map(|word| (word.clone(), word));
        }
        self.eat_prefixed(prefix, word_len)
    }

    /// Consume two words joined by one `:`, as in `first:second`.
    pub fn eat_words(&mut self) -> Option<(String, String)> {
        self.eat_pair(|c| is_word_char(c) || c == ':', is_word)
    }

    /// Consume a symbol such as `let-values`.
    pub fn eat_symbol(&mut self) -> Option<String> {
        let len = symbol_len(self.remaining())?;
        Some(self.take(len))
    }

    /// Consume `prefix` immediately followed by a symbol.
    ///
    /// Returns the bare symbol and the symbol with its prefix. An empty
    /// prefix behaves like [`Cursor::eat_symbol`].
    pub fn eat_prefixed_symbol(&mut self, prefix: &str) -> Option<(String, String)> {
        if prefix.is_empty() {
            return self.eat_symbol().map(|symbol| (symbol.clone(), symbol));
        }
        self.eat_prefixed(prefix, symbol_len)
    }

    /// Consume two symbols joined by one `:`, as in `lisp-first:lisp-last`.
    pub fn eat_symbols(&mut self) -> Option<(String, String)> {
        self.eat_pair(|c| is_symbol_char(c) || c == ':', is_symbol)
    }

    /// Consume a keyword such as `:any`, colon included.
    pub fn eat_keyword(&mut self) -> Option<String> {
        let body = match self.remaining() {
            [':', first, rest @ ..] if is_letter(*first) => run_len(rest, |c| c == ' ', is_word_char)?,
            _ => return None,
        };
        Some(self.take(2 + body))
    }

    fn eat_prefixed(&mut self, prefix: &str, unit_len: fn(&[char]) -> Option<usize>) -> Option<(String, String)> {
        if !self.begins_with(prefix) {
            return None;
        }
        let offset = prefix.chars().count();
        let len = unit_len(&self.remaining()[offset..])?;
        let full = self.take(offset + len);
        let bare = full.chars().skip(offset).collect();
        Some((bare, full))
    }

    fn eat_pair(&mut self, body: impl Fn(char) -> bool, valid: fn(&str) -> bool) -> Option<(String, String)> {
        let len = run_len(self.remaining(), is_terminator, body)?;
        let text: String = self.remaining()[..len].iter().collect();
        let pair = split_pair(&text, valid)?;
        self.advance(len);
        Some(pair)
    }
}
