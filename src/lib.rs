//! # php_array_sorter
//!
//! Parse a PHP short-syntax array literal, sort every associative level by
//! key, and write it back with canonical indentation.
//!
//! ## What it does
//!
//! Configuration files written as PHP arrays tend to accumulate keys in
//! whatever order they were added. This crate rewrites such a literal so that
//! keyed arrays list their keys in ascending order, at every depth, which keeps
//! diffs small and predictable. Indexed arrays are never reordered.
//!
//! ## Key Features
//!
//! - **Lenient parsing**: constants, variables and calls such as `env('X')`
//!   are carried through untouched as raw fragments
//! - **Deterministic output**: re-running the pipeline on its own output is a
//!   no-op
//! - **Locale-style key order**: `apple`, `Banana`, `cherry` rather than
//!   code point order (configurable)
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! ```rust
//! use php_array_sorter::sort_literal;
//!
//! let sorted = sort_literal("['z' => ['y' => 1, 'x' => 2], 'a' => 3]").unwrap();
//! assert_eq!(
//!     sorted,
//!     "[\n    'a' => 3,\n    'z' => [\n        'x' => 2,\n        'y' => 1\n    ]\n]"
//! );
//! ```
//!
//! ### Working with the tree
//!
//! The three stages are available on their own:
//!
//! ```rust
//! use php_array_sorter::{parse, render, sort, Value};
//!
//! let value = parse("['k' => SOME_CONST, 'b' => [3, 1, 2]]").unwrap();
//! let value = sort(value);
//!
//! let map = value.as_map().unwrap();
//! assert_eq!(map.get("k"), Some(&Value::Raw("SOME_CONST".to_string())));
//!
//! let text = render(&value, 0);
//! assert!(text.contains("'k' => SOME_CONST"));
//! ```
//!
//! ## Errors
//!
//! The only rejected input is one that is not enclosed in `[` and `]`; see
//! [`Error::MalformedLiteral`]. The accepted grammar is described in
//! [`syntax`].

pub mod collate;
pub mod error;
pub mod macros;
pub mod map;
pub mod options;
pub mod parse;
pub mod render;
mod scan;
pub mod sort;
pub mod syntax;
pub mod value;

pub use error::{Error, Result};
pub use map::ArrayMap;
pub use options::{KeyOrder, Options, QuoteScan};
pub use parse::{parse, parse_with_options, Parser};
pub use render::{render, render_with_options, to_writer, Renderer};
pub use sort::{sort, sort_with_options};
pub use value::{Number, Value};

use tracing::trace;

/// Parses, sorts and renders `text` with the default options.
///
/// # Examples
///
/// ```rust
/// use php_array_sorter::sort_literal;
///
/// assert_eq!(sort_literal("[]").unwrap(), "[]");
/// assert!(sort_literal("not-an-array").is_err());
/// ```
///
/// # Errors
///
/// Returns [`Error::MalformedLiteral`] when `text` is not enclosed in square
/// brackets. Nothing is produced in that case.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn sort_literal(text: &str) -> Result<String> {
    sort_literal_with_options(text, &Options::default())
}

/// Parses, sorts and renders `text` with custom options.
///
/// # Errors
///
/// Returns [`Error::MalformedLiteral`] when `text` is not enclosed in square
/// brackets.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn sort_literal_with_options(text: &str, options: &Options) -> Result<String> {
    let value = parse_with_options(text, options)?;
    trace!("parsed literal");
    let value = sort_with_options(value, options);
    trace!("sorted literal");
    Ok(render_with_options(&value, 0, options))
}

/// Returns `true` when `text` is already in sorted canonical form.
///
/// A single trailing newline is tolerated.
///
/// # Errors
///
/// Returns [`Error::MalformedLiteral`] when `text` is not enclosed in square
/// brackets.
pub fn is_canonical(text: &str, options: &Options) -> Result<bool> {
    let expected = sort_literal_with_options(text, options)?;
    let actual = text
        .strip_suffix('\n')
        .map(|t| t.strip_suffix('\r').unwrap_or(t))
        .unwrap_or(text);
    Ok(actual == expected)
}
