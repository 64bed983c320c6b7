//! Configuration options for parsing, sorting and rendering.
//!
//! The defaults reproduce the canonical behaviour: four-space indentation,
//! locale-style key ordering, and the lenient quote scanner.
//!
//! ## Examples
//!
//! ```rust
//! use php_array_sorter::{sort_literal_with_options, KeyOrder, Options};
//!
//! let options = Options::new()
//!     .with_indent(2)
//!     .with_key_order(KeyOrder::Bytewise);
//!
//! let out = sort_literal_with_options("['b' => 1, 'B' => 2]", &options).unwrap();
//! assert_eq!(out, "[\n  'B' => 2,\n  'b' => 1\n]");
//! ```

/// How keys of an associative array are compared when sorting.
///
/// # Examples
///
/// ```rust
/// use php_array_sorter::KeyOrder;
/// use std::cmp::Ordering;
///
/// assert_eq!(KeyOrder::Locale.compare("b", "B"), Ordering::Less);
/// assert_eq!(KeyOrder::Bytewise.compare("b", "B"), Ordering::Greater);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum KeyOrder {
    /// Root-locale collation: punctuation before digits before letters,
    /// letters case-insensitive with lowercase first on ties.
    #[default]
    Locale,
    /// Plain code point order.
    Bytewise,
}

impl KeyOrder {
    /// Compares two keys under this ordering.
    #[must_use]
    pub fn compare(self, a: &str, b: &str) -> std::cmp::Ordering {
        match self {
            KeyOrder::Locale => crate::collate::locale_cmp(a, b),
            KeyOrder::Bytewise => a.cmp(b),
        }
    }
}

/// How the depth-zero scanner treats quote characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum QuoteScan {
    /// The same quote character always closes the string, even after a
    /// backslash.
    #[default]
    Naive,
    /// A quote preceded by an odd number of backslashes stays inside the
    /// string.
    BackslashEscapes,
}

/// Configuration for the parse → sort → render pipeline.
///
/// # Examples
///
/// ```rust
/// use php_array_sorter::{Options, QuoteScan};
///
/// let options = Options::new();
/// assert_eq!(options.indent, 4);
///
/// let strict = Options::new().with_quote_scan(QuoteScan::BackslashEscapes);
/// assert_eq!(strict.quote_scan, QuoteScan::BackslashEscapes);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Options {
    /// Spaces per nesting level in rendered output.
    pub indent: usize,
    pub key_order: KeyOrder,
    pub quote_scan: QuoteScan,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            indent: 4,
            key_order: KeyOrder::default(),
            quote_scan: QuoteScan::default(),
        }
    }
}

impl Options {
    /// Creates the default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of spaces per indentation level.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use php_array_sorter::Options;
    ///
    /// let options = Options::new().with_indent(2);
    /// assert_eq!(options.indent, 2);
    /// ```
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Sets the key comparison used when sorting associative arrays.
    #[must_use]
    pub fn with_key_order(mut self, key_order: KeyOrder) -> Self {
        self.key_order = key_order;
        self
    }

    /// Sets how quotes are tracked while scanning for separators.
    #[must_use]
    pub fn with_quote_scan(mut self, quote_scan: QuoteScan) -> Self {
        self.quote_scan = quote_scan;
        self
    }

    pub(crate) fn indent_unit(&self) -> String {
        " ".repeat(self.indent)
    }
}
