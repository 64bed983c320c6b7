//! Error types for parsing and rendering array literals.
//!
//! The parser is lenient: anything inside the brackets that it
//! cannot classify is kept as a raw fragment. The only way for a literal to be
//! rejected is a missing pair of enclosing brackets, reported as
//! [`Error::MalformedLiteral`].
//!
//! ## Examples
//!
//! ```rust
//! use php_array_sorter::{parse, Error};
//!
//! let result = parse("not-an-array");
//! assert!(matches!(result, Err(Error::MalformedLiteral { .. })));
//!
//! if let Err(err) = result {
//!     // The message names the cause and shows a preview of the input.
//!     assert!(err.to_string().contains("square brackets"));
//! }
//! ```

use thiserror::Error;

/// Longest input preview carried by [`Error::MalformedLiteral`], in characters.
const SNIPPET_LIMIT: usize = 40;

/// Represents all errors raised while sorting an array literal.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The trimmed input is not enclosed in `[` and `]`.
    #[error("Malformed array literal: {reason}\n  near: {snippet}")]
    MalformedLiteral { reason: String, snippet: String },

    /// IO error while writing rendered output
    #[error("IO error: {0}")]
    Io(String),
}

impl Error {
    /// Creates a malformed-literal error for `input`, keeping a short preview
    /// of the offending text.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use php_array_sorter::Error;
    ///
    /// let err = Error::malformed("missing closing bracket", "[1, 2");
    /// assert!(err.to_string().contains("missing closing bracket"));
    /// assert!(err.to_string().contains("[1, 2"));
    /// ```
    pub fn malformed(reason: &str, input: &str) -> Self {
        Error::MalformedLiteral {
            reason: reason.to_string(),
            snippet: snippet(input),
        }
    }

    /// Creates an I/O error for writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns `true` for [`Error::MalformedLiteral`].
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(self, Error::MalformedLiteral { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// First line of the trimmed input, cut to [`SNIPPET_LIMIT`] characters.
fn snippet(input: &str) -> String {
    let first_line = input.trim().lines().next().unwrap_or("");
    let mut chars = first_line.chars();
    let head: String = chars.by_ref().take(SNIPPET_LIMIT).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else if head.is_empty() {
        "<empty input>".to_string()
    } else {
        head
    }
}
