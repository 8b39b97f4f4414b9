// peruse/src/location.rs

//! Point-in-time position snapshots used for diagnostics.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An immutable `(origin, line, column)` triple.
///
/// A `Location` is copied out of a [`Cursor`](crate::Cursor) and keeps no
/// link back to it, so it stays valid while the cursor moves on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    origin: String,
    line: usize,
    column: usize,
}

impl Location {
    /// Create a location from its parts.
    pub fn new(origin: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            origin: origin.into(),
            line,
            column,
        }
    }

    /// File path or label of the scanned source.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Line number (1-based).
    pub fn line(&self) -> usize {
        self.line
    }

    /// Column number (1-based, counted in code points).
    pub fn column(&self) -> usize {
        self.column
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.origin, self.line, self.column)
    }
}
