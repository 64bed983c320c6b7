//! Accepted literal syntax
//!
//! This module documents the subset of PHP array syntax understood by the
//! parser and the canonical form written by the renderer.
//!
//! # Overview
//!
//! The input is a single short-syntax array literal. Anything around the
//! outer brackets other than whitespace is rejected:
//!
//! ```text
//! ['b' => 1, 'a' => [3, 2, 1], 'c' => env('C', 'x')]
//! ```
//!
//! The long `array(...)` form is not recognised at the top level; nested
//! inside a literal it is kept as a raw fragment.
//!
//! # Separators
//!
//! | Token | Meaning | Counted when |
//! |-------|---------|--------------|
//! | `,`   | ends an element or a pair | depth zero, outside quotes |
//! | `=>`  | separates key from value  | depth zero, outside quotes |
//! | `[` `(` | open a nested group | outside quotes |
//! | `]` `)` | close a nested group | outside quotes |
//! | `'` `"` | open a string, closed by the same character | outside quotes |
//!
//! A literal containing a `=>` at depth zero is associative; otherwise it is
//! indexed. Empty pieces between commas are ignored, so a trailing comma is
//! allowed. In an associative literal, a piece without `=>` has no key and is
//! dropped.
//!
//! Nested literals deeper than
//! [`MAX_NESTING`](crate::parse::MAX_NESTING) levels are kept verbatim as
//! raw fragments instead of being parsed.
//!
//! By default a backslash does not protect a quote from closing its string:
//! `'it\'s'` closes after `it\`. Enable
//! [`QuoteScan::BackslashEscapes`](crate::QuoteScan::BackslashEscapes) to
//! honour backslash escapes while scanning.
//!
//! # Values
//!
//! | Text | Parsed as |
//! |------|-----------|
//! | `[ ... ]` | nested array |
//! | `'...'` or `"..."` | string, delimiters removed, escapes kept as written |
//! | `-?digits(.digits)?` | number |
//! | `true`, `false` (any case) | boolean |
//! | `null` (any case) | null |
//! | anything else | raw fragment, kept verbatim |
//!
//! Keys go through the same classification and are stored as strings:
//! `1.0 => ...` and `'1' => ...` name the same key.
//!
//! # Canonical output
//!
//! - four spaces per level (configurable through [`Options`](crate::Options))
//! - one entry per line, no trailing comma
//! - keys and strings single-quoted
//! - numbers in plain decimal notation, whole values without a decimal point
//! - `true`, `false` and `null` lowercase
//!
//! ```rust
//! use php_array_sorter::sort_literal;
//!
//! let out = sort_literal("[\"b\" => 1.0, 'a' => [TRUE, Null]]").unwrap();
//! assert_eq!(
//!     out,
//!     "[\n    'a' => [\n        true,\n        null\n    ],\n    'b' => 1\n]"
//! );
//!
//! // Running the output through again changes nothing.
//! assert_eq!(sort_literal(&out).unwrap(), out);
//! ```
//!
//! The one exception is a string holding a single quote under the default
//! scanner. It is written as `\'`, and on the next pass the naive scanner ends
//! the string there. Scan with `QuoteScan::BackslashEscapes` when such strings
//! occur:
//!
//! ```rust
//! use php_array_sorter::{sort_literal, sort_literal_with_options, Options, QuoteScan};
//!
//! let out = sort_literal(r#"["it's", 'b']"#).unwrap();
//! assert_ne!(sort_literal(&out).unwrap(), out);
//!
//! let options = Options::new().with_quote_scan(QuoteScan::BackslashEscapes);
//! let out = sort_literal_with_options(r#"["it's", 'b']"#, &options).unwrap();
//! assert_eq!(sort_literal_with_options(&out, &options).unwrap(), out);
//! ```
