// peruse/src/numeric/mod.rs

//! Numeric literal recognizers.
//!
//! A [`Recognizer`] is a pure classifier over a code point slice: it returns
//! the longest prefix that forms a valid literal of its kind, or an empty
//! slice. An [`Alternation`] tries several recognizers in order and keeps the
//! first non-empty match.
//!
//! Recognition always stops at a space, `)` or newline. Any other code point
//! that does not belong to the literal rejects the whole match, so `12ab` is
//! not the integer `12` followed by `ab`.

mod floats;
mod ints;


use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// The closed set of numeric literal formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recognizer {
    /// One or more digits.
    UnsignedInt,
    /// `+` or `-` followed by one or more digits.
    SignedInt,
    /// Digits with at most one `.`, at least two code points long.
    UnsignedFloat,
    /// `+` or `-` followed by digits with at most one `.`, at least three
    /// code points long.
    SignedFloat,
}

impl Recognizer {
    /// Return the accepted prefix of `input`, empty when rejected.
    pub fn scan<'a>(self, input: &'a [char]) -> &'a [char] {
        let len = match self {
            Recognizer::UnsignedInt => ints::unsigned(input),
            Recognizer::SignedInt => ints::signed(input),
            Recognizer::UnsignedFloat => floats::unsigned(input),
            Recognizer::SignedFloat => floats::signed(input),
        };
        &input[..len]
    }
}

/// An ordered list of recognizers where the first match wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Alternation {
    recognizers: Cow<'static, [Recognizer]>,
}

impl Alternation {
    /// Signed integers, then unsigned integers.
    pub const INTEGER: Alternation = Alternation {
        recognizers: Cow::Borrowed(&[Recognizer::SignedInt, Recognizer::UnsignedInt]),
    };

    /// Signed floats, then unsigned floats.
    pub const FLOAT: Alternation = Alternation {
        recognizers: Cow::Borrowed(&[Recognizer::SignedFloat, Recognizer::UnsignedFloat]),
    };

    /// Build an alternation that tries `recognizers` in order.
    pub fn new(recognizers: Vec<Recognizer>) -> Self {
        Self {
            recognizers: Cow::Owned(recognizers),
        }
    }

    /// The recognizers in the order they are tried.
    pub fn recognizers(&self) -> &[Recognizer] {
        &self.recognizers
    }

    /// Try each recognizer in order and return the first non-empty prefix.
    pub fn scan<'a>(&self, input: &'a [char]) -> &'a [char] {
        self.recognizers
            .iter()
            .map(|recognizer| recognizer.scan(input))
            .find(|accepted| !accepted.is_empty())
            .unwrap_or(&[])
    }
}

impl From<Vec<Recognizer>> for Alternation {
    fn from(recognizers: Vec<Recognizer>) -> Self {
        Self::new(recognizers)
    }
}
