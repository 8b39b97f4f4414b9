// peruse/src/error.rs

//! Error types for the fallible scanning layer.
//!
//! The `eat_*` operations on [`Cursor`](crate::Cursor) report no-match as
//! `false` or `None`. The `expect_*` counterparts turn a no-match into a
//! [`ScanError`] that carries the position where scanning stopped.

use crate::location::Location;
use std::fmt;
use thiserror::Error;

/// Result type alias for peruse operations.
pub type Result<T> = std::result::Result<T, ScanError>;

/// Errors produced while loading or scanning source text.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The requested lexical unit does not start at `location`.
    #[error("{location}: expected {expected}")]
    Mismatch { location: Location, expected: Expected },

    /// A string literal opens at `location` but is never closed.
    #[error("{location}: unterminated string literal")]
    UnterminatedString { location: Location },

    /// The source file could not be read.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Configuration JSON could not be parsed or written.
    #[cfg(feature = "json")]
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl ScanError {
    pub(crate) fn mismatch(location: Location, expected: Expected) -> Self {
        ScanError::Mismatch { location, expected }
    }

    /// Position where scanning stopped, if the error came from a cursor.
    pub fn location(&self) -> Option<&Location> {
        match self {
            ScanError::Mismatch { location, .. } => Some(location),
            ScanError::UnterminatedString { location } => Some(location),
            _ => None,
        }
    }
}

/// The lexical unit an `expect_*` call asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expected {
    Prefix(String),
    FixedForm(String),
    StringLiteral,
    Word,
    PrefixedWord(String),
    Words,
    Symbol,
    PrefixedSymbol(String),
    Symbols,
    Keyword,
    Integer,
    Float,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Prefix(prefix) => write!(f, "`{}`", prefix.escape_debug()),
            Expected::FixedForm(name) => write!(f, "form `({}`", name),
            Expected::StringLiteral => write!(f, "string literal"),
            Expected::Word => write!(f, "word"),
            Expected::PrefixedWord(prefix) => write!(f, "word prefixed with `{}`", prefix),
            Expected::Words => write!(f, "compound word"),
            Expected::Symbol => write!(f, "symbol"),
            Expected::PrefixedSymbol(prefix) => write!(f, "symbol prefixed with `{}`", prefix),
            Expected::Symbols => write!(f, "compound symbol"),
            Expected::Keyword => write!(f, "keyword"),
            Expected::Integer => write!(f, "integer"),
            Expected::Float => write!(f, "float"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatch_message() {
        let err = ScanError::mismatch(Location::new("main.twq", 3, 9), Expected::Keyword);
        assert_eq!(err.to_string(), "main.twq:3:9: expected keyword");
    }

    #[test]
    fn test_prefix_message_escapes_newlines() {
        let err = ScanError::mismatch(Location::new("a", 1, 1), Expected::Prefix("x\ny".into()));
        assert_eq!(err.to_string(), "a:1:1: expected `x\\ny`");
    }

    #[test]
    fn test_unterminated_string_message() {
        let err = ScanError::UnterminatedString {
            location: Location::new("s.twq", 2, 4),
        };
        assert_eq!(err.to_string(), "s.twq:2:4: unterminated string literal");
        assert_eq!(err.location(), Some(&Location::new("s.twq", 2, 4)));
    }

    #[test]
    fn test_io_error_has_no_location() {
        let err = ScanError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert!(err.location().is_none());
    }
}
