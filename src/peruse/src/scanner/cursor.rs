// peruse/src/scanner/cursor.rs

//! The scanning cursor: remaining input plus line and column bookkeeping.

use crate::config::ScanConfig;
use crate::error::Result;
use crate::location::Location;
use log::{debug, trace};
use std::path::Path;

/// Stateful scanner over one source text.
///
/// The cursor keeps the whole text as an immutable code point vector and an
/// offset to the first unconsumed code point. Every `eat_*` operation either
/// consumes a recognized unit and advances the position, or fails and leaves
/// the cursor exactly as it was.
///
/// A cursor has no internal locking. Mutation requires `&mut self`, so
/// callers that share one across threads must wrap it themselves.
#[derive(Debug, Clone)]
pub struct Cursor {
    origin: String,
    input: Vec<char>,
    current: usize,
    line: usize,
    column: usize,
    config: ScanConfig,
}

impl Cursor {
    /// Create a cursor over `content` with the standard numeric formats.
    pub fn new(origin: impl Into<String>, content: &str) -> Self {
        Self::with_config(origin, content, ScanConfig::default())
    }

    /// Create a cursor over `content` with an explicit configuration.
    pub fn with_config(origin: impl Into<String>, content: &str, config: ScanConfig) -> Self {
        Self {
            origin: origin.into(),
            input: content.chars().collect(),
            current: 0,
            line: 1,
            column: 1,
            config,
        }
    }

    /// Read a source file and create a cursor whose origin is the file path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with_config(path, ScanConfig::default())
    }

    /// Read a source file with an explicit configuration.
    pub fn open_with_config(path: impl AsRef<Path>, config: ScanConfig) -> Result<Self> {
        let path = path.as_ref();
        let content = fs_err::read_to_string(path)?;
        debug!("loaded {} bytes from {}", content.len(), path.display());
        Ok(Self::with_config(path.display().to_string(), &content, config))
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Snapshot of the current position.
    pub fn location(&self) -> Location {
        Location::new(self.origin.clone(), self.line, self.column)
    }

    /// The unconsumed code points.
    pub fn remaining(&self) -> &[char] {
        &self.input[self.current..]
    }

    pub fn remaining_text(&self) -> String {
        self.remaining().iter().collect()
    }

    /// Number of unconsumed code points.
    pub fn len(&self) -> usize {
        self.input.len() - self.current
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the remaining input starts with `prefix`.
    ///
    /// An empty prefix never matches.
    pub fn begins_with(&self, prefix: &str) -> bool {
        if prefix.is_empty() {
            return false;
        }
        let mut remaining = self.remaining().iter();
        prefix.chars().all(|c| remaining.next() == Some(&c))
    }

    /// Consume the leading run of whitespace.
    ///
    /// Newlines move to the start of the next line and spaces and tabs move
    /// one column. Other whitespace such as `\r` is consumed without moving
    /// the column.
    pub fn eat_spaces(&mut self) {
        let start = self.current;
        while let Some(&c) = self.input.get(self.current) {
            if !c.is_whitespace() {
                break;
            }
            match c {
                '\n' => {
                    self.line += 1;
                    self.column = 1;
                }
                ' ' | '\t' => self.column += 1,
                _ => {}
            }
            self.current += 1;
        }
        if self.current > start {
            trace!(
                "{}:{}:{}: skipped {} whitespace code points",
                self.origin,
                self.line,
                self.column,
                self.current - start
            );
        }
    }

    /// Consume `prefix` if the remaining input starts with it.
    pub fn eat(&mut self, prefix: &str) -> bool {
        if !self.begins_with(prefix) {
            return false;
        }
        self.advance(prefix.chars().count());
        true
    }

    /// Consume the head `(name` of a parenthesized form.
    ///
    /// The head must be followed by a space, a newline, `)` or the end of
    /// input. That delimiter is left in place.
    pub fn eat_fixed_form(&mut self, name: &str) -> bool {
        let head = format!("({}", name);
        if !self.begins_with(&head) {
            return false;
        }
        let len = head.chars().count();
        match self.remaining().get(len).copied() {
            None | Some(' ') | Some('\n') | Some(')') => {
                self.advance(len);
                true
            }
            Some(_) => false,
        }
    }

    /// Consume a double-quoted string literal and return its content.
    ///
    /// `\"` does not close the literal and is returned as written, backslash
    /// included. Newlines are allowed inside the literal.
    pub fn eat_string_literal(&mut self) -> Option<String> {
        let Some(len) = string_literal_len(self.remaining()) else {
            if self.remaining().first() == Some(&'"') {
                debug!("{}: unterminated string literal", self.location());
            }
            return None;
        };
        let content = self.input[self.current + 1..self.current + len - 1]
            .iter()
            .collect();
        // Replayed like `eat`: after a newline the column counts the last
        // segment and the closing quote.
        self.advance(len);
        Some(content)
    }

    /// Consume an integer literal using the configured integer formats.
    pub fn eat_integer(&mut self) -> Option<String> {
        let len = self.config.integer.scan(self.remaining()).len();
        self.take_match(len)
    }

    /// Consume a float literal using the configured float formats.
    pub fn eat_float(&mut self) -> Option<String> {
        let len = self.config.float.scan(self.remaining()).len();
        self.take_match(len)
    }

    /// Consume `count` code points and return them as text.
    pub(super) fn take(&mut self, count: usize) -> String {
        let text = self.input[self.current..self.current + count].iter().collect();
        self.advance(count);
        text
    }

    /// Like [`Cursor::take`], treating an empty match as no match.
    pub(super) fn take_match(&mut self, count: usize) -> Option<String> {
        if count == 0 {
            None
        } else {
            Some(self.take(count))
        }
    }

    /// Move past `count` code points, replaying them to keep line and
    /// column exact across newlines.
    pub(super) fn advance(&mut self, count: usize) {
        trace!(
            "{}:{}:{}: consumed {} code points",
            self.origin,
            self.line,
            self.column,
            count
        );
        let end = self.current + count;
        for &c in &self.input[self.current..end] {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.current = end;
    }
}

/// Length of the string literal at the start of `input`, quotes included.
fn string_literal_len(input: &[char]) -> Option<usize> {
    if input.first() != Some(&'"') {
        return None;
    }
    let mut i = 1;
    while i < input.len() {
        match input[i] {
            '\\' if input.get(i + 1) == Some(&'"') => i += 2,
            '"' => return Some(i + 1),
            _ => i += 1,
        }
    }
    None
}
