//! Array literal parsing.
//!
//! The parser only insists on the outer shape: the trimmed text must start
//! with `[` and end with `]`. Inside the brackets it never fails. Each element
//! is classified as a nested array, a quoted string, a number, a boolean or
//! `null`, and anything else is carried through as [`Value::Raw`].
//!
//! ## Usage
//!
//! ```rust
//! use php_array_sorter::{parse, Value};
//!
//! let value = parse("['debug' => true, 'hosts' => ['a', 'b']]").unwrap();
//! let map = value.as_map().unwrap();
//!
//! assert_eq!(map.get("debug"), Some(&Value::Bool(true)));
//! assert!(map.get("hosts").is_some_and(Value::is_list));
//! ```
//!
//! ## Classification
//!
//! Whether a literal is indexed or associative is decided once, by looking
//! for a `=>` at depth zero. `[1, 2]` is a list, `['a' => 1, 2]` is a map
//! with the single key `a`: a piece without an arrow has no key and is
//! dropped.
//!
//! Literals nested more than [`MAX_NESTING`] levels below the outermost one
//! are not descended into; they are kept verbatim as [`Value::Raw`].

use crate::scan::{find_top_level_arrow, split_top_level};
use crate::{ArrayMap, Error, Number, Options, QuoteScan, Result, Value};
use tracing::{debug, trace};

/// Deepest nesting level that is still parsed into a tree.
pub const MAX_NESTING: usize = 128;

/// A configured literal parser.
///
/// Holds no state between calls; one parser can be reused for any number of
/// inputs.
pub struct Parser {
    quote_scan: QuoteScan,
}

impl Parser {
    #[must_use]
    pub fn new(options: &Options) -> Self {
        Parser {
            quote_scan: options.quote_scan,
        }
    }

    /// Parses a complete literal.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedLiteral`] when the trimmed text is not
    /// enclosed in square brackets.
    pub fn parse(&self, text: &str) -> Result<Value> {
        self.parse_at(text, 0)
    }

    fn parse_at(&self, text: &str, depth: usize) -> Result<Value> {
        let trimmed = text.trim();
        if !(trimmed.starts_with('[') && trimmed.ends_with(']')) {
            return Err(Error::malformed(
                "must start and end with square brackets",
                text,
            ));
        }

        let content = trimmed[1..trimmed.len() - 1].trim();
        if content.is_empty() {
            return Ok(Value::List(Vec::new()));
        }

        if find_top_level_arrow(content, self.quote_scan).is_some() {
            debug!(len = content.len(), "classified literal as associative");
            self.parse_associative(content, depth)
        } else {
            debug!(len = content.len(), "classified literal as indexed");
            self.parse_indexed(content, depth)
        }
    }

    fn parse_indexed(&self, content: &str, depth: usize) -> Result<Value> {
        let mut items = Vec::new();
        for piece in split_top_level(content, self.quote_scan) {
            let piece = piece.trim();
            if !piece.is_empty() {
                items.push(self.parse_value_at(piece, depth + 1)?);
            }
        }
        Ok(Value::List(items))
    }

    fn parse_associative(&self, content: &str, depth: usize) -> Result<Value> {
        let mut map = ArrayMap::new();

        for piece in split_top_level(content, self.quote_scan) {
            let pair = piece.trim();
            if pair.is_empty() {
                continue;
            }

            let Some(arrow) = find_top_level_arrow(pair, self.quote_scan) else {
                debug!(entry = pair, "skipping entry without key");
                continue;
            };

            let key = self.parse_key(pair[..arrow].trim(), depth + 1)?;
            let value = self.parse_value_at(pair[arrow + 2..].trim(), depth + 1)?;
            map.insert(key, value);
        }

        Ok(Value::Map(map))
    }

    /// Parses a key and coerces it to the string it is stored under.
    fn parse_key(&self, text: &str, depth: usize) -> Result<String> {
        let key = match self.parse_value_at(text, depth)? {
            Value::String(s) | Value::Raw(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Null => "null".to_string(),
            Value::List(_) | Value::Map(_) => text.to_string(),
        };
        Ok(key)
    }

    /// Classifies one element, key or value.
    pub fn parse_value(&self, text: &str) -> Result<Value> {
        self.parse_value_at(text, 0)
    }

    fn parse_value_at(&self, text: &str, depth: usize) -> Result<Value> {
        let text = text.trim();

        if text.starts_with('[') && text.ends_with(']') {
            if depth > MAX_NESTING {
                debug!(depth, "nesting limit reached, keeping literal as raw");
                return Ok(Value::Raw(text.to_string()));
            }
            return self.parse_at(text, depth);
        }

        if let Some(inner) = strip_quotes(text) {
            return Ok(Value::String(inner.to_string()));
        }

        if let Some(number) = Number::parse_literal(text) {
            return Ok(Value::Number(number));
        }

        if text.eq_ignore_ascii_case("true") {
            return Ok(Value::Bool(true));
        }
        if text.eq_ignore_ascii_case("false") {
            return Ok(Value::Bool(false));
        }
        if text.eq_ignore_ascii_case("null") {
            return Ok(Value::Null);
        }

        trace!(fragment = text, "keeping raw fragment");
        Ok(Value::Raw(text.to_string()))
    }
}

impl Default for Parser {
    fn default() -> Self {
        Parser::new(&Options::default())
    }
}

/// Text between a matching pair of outer quotes.
fn strip_quotes(text: &str) -> Option<&str> {
    ['\'', '"'].into_iter().find_map(|quote| {
        text.strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
    })
}

/// Parses an array literal with the default options.
///
/// # Examples
///
/// ```rust
/// use php_array_sorter::{parse, Value};
///
/// assert_eq!(parse("[]").unwrap(), Value::List(vec![]));
/// assert!(parse("not-an-array").is_err());
/// ```
///
/// # Errors
///
/// Returns [`Error::MalformedLiteral`] when the trimmed input is not enclosed
/// in square brackets.
pub fn parse(text: &str) -> Result<Value> {
    parse_with_options(text, &Options::default())
}

/// Parses an array literal with custom options.
///
/// # Errors
///
/// Returns [`Error::MalformedLiteral`] when the trimmed input is not enclosed
/// in square brackets.
pub fn parse_with_options(text: &str, options: &Options) -> Result<Value> {
    Parser::new(options).parse(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(text: &str) -> Value {
        Value::Raw(text.to_string())
    }

    fn keys(value: &Value) -> Vec<&str> {
        value
            .as_map()
            .map(|m| m.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_missing_brackets() {
        for text in ["not-an-array", "", "[1, 2", "1, 2]", "{1}", "(1)"] {
            let err = parse(text).unwrap_err();
            assert!(err.is_malformed(), "{text:?}");
        }
    }

    #[test]
    fn test_empty_literal_is_list() {
        assert_eq!(parse("[]").unwrap(), Value::List(vec![]));
        assert_eq!(parse("  [ \n\t ]  ").unwrap(), Value::List(vec![]));
    }

    #[test]
    fn test_indexed_literal() {
        assert_eq!(
            parse("[3, 1, 2]").unwrap(),
            Value::List(vec![Value::from(3), Value::from(1), Value::from(2)])
        );
    }

    #[test]
    fn test_trailing_and_repeated_commas_add_nothing() {
        assert_eq!(
            parse("[1, , 2,]").unwrap(),
            Value::List(vec![Value::from(1), Value::from(2)])
        );
    }

    #[test]
    fn test_scalar_classification() {
        let value = parse(r#"['a', "b", -1.5, 2.0, TRUE, False, NULL, ''] "#).unwrap();
        assert_eq!(
            value,
            Value::List(vec![
                Value::from("a"),
                Value::from("b"),
                Value::Number(Number::Float(-1.5)),
                Value::Number(Number::Integer(2)),
                Value::Bool(true),
                Value::Bool(false),
                Value::Null,
                Value::from(""),
            ])
        );
    }

    #[test]
    fn test_raw_fragments() {
        let value = parse("[SOME_CONST, $var, foo(1, 2), Foo::BAR, 1e5, -x]").unwrap();
        assert_eq!(
            value,
            Value::List(vec![
                raw("SOME_CONST"),
                raw("$var"),
                raw("foo(1, 2)"),
                raw("Foo::BAR"),
                raw("1e5"),
                raw("-x"),
            ])
        );
    }

    #[test]
    fn test_lone_quote_is_raw() {
        assert_eq!(parse_value_default("'"), raw("'"));
    }

    fn parse_value_default(text: &str) -> Value {
        Parser::default().parse_value(text).unwrap()
    }

    #[test]
    fn test_strings_are_not_unescaped() {
        assert_eq!(parse_value_default(r#""a\"b""#), Value::from(r#"a\"b"#));
        assert_eq!(parse_value_default(r"'a\nb'"), Value::from(r"a\nb"));
    }

    #[test]
    fn test_associative_literal() {
        let value = parse("['b' => 1, \"a\" => [2], 3 => null]").unwrap();
        assert_eq!(keys(&value), vec!["b", "a", "3"]);
        let map = value.as_map().unwrap();
        assert_eq!(map.get("a"), Some(&Value::List(vec![Value::from(2)])));
        assert_eq!(map.get("3"), Some(&Value::Null));
    }

    #[test]
    fn test_key_coercion() {
        let value = parse("[1.0 => 'a', 2.5 => 'b', true => 'c', null => 'd', FOO => 'e']").unwrap();
        assert_eq!(keys(&value), vec!["1", "2.5", "true", "null", "FOO"]);
    }

    #[test]
    fn test_duplicate_keys_last_value_wins() {
        let value = parse("['a' => 1, 'b' => 2, 'a' => 3]").unwrap();
        assert_eq!(keys(&value), vec!["a", "b"]);
        assert_eq!(value.as_map().unwrap().get("a"), Some(&Value::from(3)));
    }

    #[test]
    fn test_entries_without_key_are_dropped() {
        let value = parse("['x', 'a' => 1, 'y', 5 => 'z', 'w']").unwrap();
        assert_eq!(keys(&value), vec!["a", "5"]);
        assert_eq!(value.as_map().unwrap().get("5"), Some(&Value::from("z")));
    }

    #[test]
    fn test_deep_nesting_is_kept_raw_past_limit() {
        let text = format!("{}{}", "[".repeat(1000), "]".repeat(1000));
        let mut value = parse(&text).unwrap();

        let mut levels = 0;
        while let Value::List(mut items) = value {
            assert_eq!(items.len(), 1);
            value = items.remove(0);
            levels += 1;
        }
        assert_eq!(levels, MAX_NESTING + 1);

        let rest = 1000 - levels;
        assert_eq!(
            value,
            raw(&format!("{}{}", "[".repeat(rest), "]".repeat(rest)))
        );
    }

    #[test]
    fn test_nesting_within_limit_is_parsed() {
        let text = format!("{}1{}", "[".repeat(MAX_NESTING + 1), "]".repeat(MAX_NESTING + 1));
        let mut value = parse(&text).unwrap();
        while let Value::List(mut items) = value {
            value = items.remove(0);
        }
        assert_eq!(value, Value::from(1));
    }

    #[test]
    fn test_nested_arrow_does_not_make_outer_map() {
        let value = parse("[['a' => 1], ['b' => 2]]").unwrap();
        let items = value.as_list().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(keys(&items[0]), vec!["a"]);
        assert_eq!(keys(&items[1]), vec!["b"]);
    }

    #[test]
    fn test_arrow_inside_string_is_ignored() {
        let value = parse("['x => y', 'z']").unwrap();
        assert_eq!(
            value,
            Value::List(vec![Value::from("x => y"), Value::from("z")])
        );

        let value = parse("['k=>v' => 1]").unwrap();
        assert_eq!(keys(&value), vec!["k=>v"]);
    }

    #[test]
    fn test_empty_value_is_empty_raw() {
        let value = parse("['a' => ]").unwrap();
        assert_eq!(value.as_map().unwrap().get("a"), Some(&raw("")));
    }

    #[test]
    fn test_multiline_input() {
        let text = "[\n    'name' => 'app',\n    'env' => env('APP_ENV', 'prod'),\n]\n";
        let value = parse(text).unwrap();
        assert_eq!(keys(&value), vec!["name", "env"]);
        assert_eq!(
            value.as_map().unwrap().get("env"),
            Some(&raw("env('APP_ENV', 'prod')"))
        );
    }

    #[test]
    fn test_naive_quotes_swallow_following_elements() {
        let value = parse(r"['it\'s', 'b']").unwrap();
        assert_eq!(value, Value::List(vec![Value::from(r"it\'s', 'b")]));
    }

    #[test]
    fn test_escape_aware_quotes() {
        let options = Options::new().with_quote_scan(QuoteScan::BackslashEscapes);
        let value = parse_with_options(r"['it\'s', 'b']", &options).unwrap();
        assert_eq!(
            value,
            Value::List(vec![Value::from(r"it\'s"), Value::from("b")])
        );
    }
}
