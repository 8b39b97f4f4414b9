// peruse/src/lib.rs

//! A character cursor for scanning Lisp-like source text.
//!
//! This library provides:
//! - A [`Cursor`] that consumes prefixes, whitespace, parenthesized form
//!   heads, string literals, words, symbols, keywords and numbers
//! - Line and column tracking in code points, with [`Location`] snapshots
//! - Configurable numeric formats through [`ScanConfig`] and [`Alternation`]
//! - `expect_*` variants returning [`ScanError`] for callers that want `?`
//!
//! Every `eat_*` operation is atomic: on no-match the cursor is unchanged.
//!
//! # Examples
//!
//! ```
//! let mut cursor = peruse::script("main.twq", "(define answer 42)");
//! assert!(cursor.eat_fixed_form("define"));
//! cursor.eat_spaces();
//! assert_eq!(cursor.eat_symbol().as_deref(), Some("answer"));
//! cursor.eat_spaces();
//! assert_eq!(cursor.eat_integer().as_deref(), Some("42"));
//! assert!(cursor.eat(")"));
//! assert_eq!(cursor.location().to_string(), "main.twq:1:19");
//! ```

mod charclass;
pub mod config;
pub mod error;
pub mod location;
pub mod numeric;
pub mod scanner;

use std::path::Path;

pub use config::ScanConfig;
pub use error::{Expected, Result, ScanError};
pub use location::Location;
pub use numeric::{Alternation, Recognizer};
pub use scanner::{is_symbol, is_word, script, Cursor};

/// Read a source file into a cursor with the standard numeric formats.
///
/// # Examples
///
/// ```no_run
/// fn main() -> Result<(), peruse::ScanError> {
///     let mut cursor = peruse::open("main.twq")?;
///     cursor.eat_spaces();
///     println!("{}", cursor.location());
///     Ok(())
/// }
/// ```
pub fn open<P: AsRef<Path>>(path: P) -> Result<Cursor> {
    Cursor::open(path)
}
