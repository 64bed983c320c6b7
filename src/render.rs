//! Literal rendering.
//!
//! Non-empty arrays are always written in the multi-line form, one entry per
//! line, indented one level deeper than the closing bracket:
//!
//! ```text
//! [
//!     'name' => 'app',
//!     'hosts' => [
//!         'a',
//!         'b'
//!     ]
//! ]
//! ```
//!
//! Keys are always single-quoted, strings are single-quoted with any
//! unescaped `'` prefixed by a backslash, and raw fragments are copied as-is.
//! Parsing the output and rendering it again produces the same text, except
//! for strings holding a `'` when parsed with the default
//! [`QuoteScan::Naive`](crate::QuoteScan::Naive) scanner.
//!
//! ## Usage
//!
//! ```rust
//! use php_array_sorter::{parse, render};
//!
//! let value = parse("[1, [true, null]]").unwrap();
//! assert_eq!(
//!     render(&value, 0),
//!     "[\n    1,\n    [\n        true,\n        null\n    ]\n]"
//! );
//! ```

use crate::{ArrayMap, Error, Options, Result, Value};
use std::io;

/// Writes values as array literals.
pub struct Renderer {
    output: String,
    indent_unit: String,
}

impl Renderer {
    pub fn new(options: &Options) -> Self {
        Renderer {
            output: String::with_capacity(256),
            indent_unit: options.indent_unit(),
        }
    }

    /// Renders `value` as if its opening bracket sat at `indent_level`.
    ///
    /// The first line is not indented; the caller decides where the value
    /// starts. Nested lines and the closing bracket are indented.
    pub fn render(mut self, value: &Value, indent_level: usize) -> String {
        self.write_value(value, indent_level);
        self.output
    }

    fn write_value(&mut self, value: &Value, level: usize) {
        match value {
            Value::Raw(text) => self.output.push_str(text),
            Value::Null => self.output.push_str("null"),
            Value::Bool(b) => self.output.push_str(if *b { "true" } else { "false" }),
            Value::Number(n) => self.output.push_str(&n.to_string()),
            Value::String(s) => self.write_quoted(s),
            Value::List(items) => self.write_list(items, level),
            Value::Map(map) => self.write_map(map, level),
        }
    }

    fn write_list(&mut self, items: &[Value], level: usize) {
        if items.is_empty() {
            self.output.push_str("[]");
            return;
        }

        self.output.push('[');
        for (i, item) in items.iter().enumerate() {
            self.write_entry_start(i, level + 1);
            self.write_value(item, level + 1);
        }
        self.write_close(level);
    }

    fn write_map(&mut self, map: &ArrayMap, level: usize) {
        if map.is_empty() {
            self.output.push_str("[]");
            return;
        }

        self.output.push('[');
        for (i, (key, value)) in map.iter().enumerate() {
            self.write_entry_start(i, level + 1);
            self.write_quoted(key);
            self.output.push_str(" => ");
            self.write_value(value, level + 1);
        }
        self.write_close(level);
    }

    fn write_entry_start(&mut self, index: usize, level: usize) {
        if index > 0 {
            self.output.push(',');
        }
        self.output.push('\n');
        self.write_indent(level);
    }

    fn write_close(&mut self, level: usize) {
        self.output.push('\n');
        self.write_indent(level);
        self.output.push(']');
    }

    fn write_indent(&mut self, level: usize) {
        for _ in 0..level {
            self.output.push_str(&self.indent_unit);
        }
    }

    /// Single-quotes `text`, escaping each `'` not already preceded by an odd
    /// run of backslashes.
    fn write_quoted(&mut self, text: &str) {
        self.output.push('\'');
        let mut backslashes = 0usize;
        for ch in text.chars() {
            match ch {
                '\\' => backslashes += 1,
                '\'' => {
                    if backslashes % 2 == 0 {
                        self.output.push('\\');
                    }
                    backslashes = 0;
                }
                _ => backslashes = 0,
            }
            self.output.push(ch);
        }
        self.output.push('\'');
    }
}

/// Renders `value` with the default four-space indentation.
#[must_use]
pub fn render(value: &Value, indent_level: usize) -> String {
    render_with_options(value, indent_level, &Options::default())
}

/// Renders `value` with the indentation width from `options`.
#[must_use]
pub fn render_with_options(value: &Value, indent_level: usize, options: &Options) -> String {
    Renderer::new(options).render(value, indent_level)
}

/// Renders `value` at level zero into `writer`.
///
/// # Examples
///
/// ```rust
/// use php_array_sorter::{to_writer, Options, Value};
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &Value::List(vec![]), &Options::default()).unwrap();
/// assert_eq!(buffer, b"[]");
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] when writing fails.
pub fn to_writer<W>(mut writer: W, value: &Value, options: &Options) -> Result<()>
where
    W: io::Write,
{
    let text = render_with_options(value, 0, options);
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))
}
