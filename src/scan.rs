//! Depth-zero scanning.
//!
//! Separators inside a literal only count when they sit outside every
//! nested `[...]` / `(...)` group and outside every quoted string. Both the
//! list/map classification and the element split rely on the same walk.

use crate::QuoteScan;

/// Walk state: nesting depth and the quote that opened the current string.
struct Walker {
    mode: QuoteScan,
    depth: i64,
    quote: Option<char>,
    backslashes: usize,
}

impl Walker {
    fn new(mode: QuoteScan) -> Self {
        Walker {
            mode,
            depth: 0,
            quote: None,
            backslashes: 0,
        }
    }

    /// Feeds one character. Returns `true` when it lies at depth zero,
    /// outside any string, and is neither a quote nor a bracket.
    fn step(&mut self, c: char) -> bool {
        match self.quote {
            Some(open) => {
                let escaped = self.mode == QuoteScan::BackslashEscapes && self.backslashes % 2 == 1;
                if c == open && !escaped {
                    self.quote = None;
                }
                if c == '\\' {
                    self.backslashes += 1;
                } else {
                    self.backslashes = 0;
                }
                false
            }
            None => match c {
                '\'' | '"' => {
                    self.quote = Some(c);
                    self.backslashes = 0;
                    false
                }
                '[' | '(' => {
                    self.depth += 1;
                    false
                }
                ']' | ')' => {
                    self.depth -= 1;
                    false
                }
                _ => self.depth == 0,
            },
        }
    }
}

/// Splits `text` at every depth-zero comma. Pieces are returned untrimmed and
/// may be empty.
pub(crate) fn split_top_level(text: &str, mode: QuoteScan) -> Vec<&str> {
    let mut walker = Walker::new(mode);
    let mut pieces = Vec::new();
    let mut start = 0;

    for (i, c) in text.char_indices() {
        if walker.step(c) && c == ',' {
            pieces.push(&text[start..i]);
            start = i + 1;
        }
    }
    pieces.push(&text[start..]);
    pieces
}

/// Byte offset of the first depth-zero `=>`, if any.
pub(crate) fn find_top_level_arrow(text: &str, mode: QuoteScan) -> Option<usize> {
    let mut walker = Walker::new(mode);
    let bytes = text.as_bytes();

    text.char_indices()
        .find(|&(i, c)| walker.step(c) && c == '=' && bytes.get(i + 1) == Some(&b'>'))
        .map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAIVE: QuoteScan = QuoteScan::Naive;
    const ESCAPES: QuoteScan = QuoteScan::BackslashEscapes;

    #[test]
    fn test_split_simple() {
        assert_eq!(split_top_level("1, 2,3", NAIVE), vec!["1", " 2", "3"]);
    }

    #[test]
    fn test_split_keeps_empty_pieces() {
        assert_eq!(split_top_level("1,", NAIVE), vec!["1", ""]);
        assert_eq!(split_top_level("", NAIVE), vec![""]);
    }

    #[test]
    fn test_split_ignores_nested_commas() {
        assert_eq!(
            split_top_level("[1, 2], foo(a, b), 3", NAIVE),
            vec!["[1, 2]", " foo(a, b)", " 3"]
        );
    }

    #[test]
    fn test_split_ignores_quoted_commas() {
        assert_eq!(
            split_top_level(r#"'a,b', "c,d", 'e"f'"#, NAIVE),
            vec!["'a,b'", r#" "c,d""#, r#" 'e"f'"#]
        );
    }

    #[test]
    fn test_naive_scan_closes_on_escaped_quote() {
        // The backslash does not protect the quote, so the comma after `b`
        // is read as inside a string that opened at `'c`.
        assert_eq!(
            split_top_level(r"'a\'b', 'c'", NAIVE),
            vec![r"'a\'b', 'c'"]
        );
    }

    #[test]
    fn test_escape_aware_scan() {
        assert_eq!(
            split_top_level(r"'a\'b', 'c'", ESCAPES),
            vec![r"'a\'b'", " 'c'"]
        );
        assert_eq!(
            split_top_level(r"'a\\', 'c'", ESCAPES),
            vec![r"'a\\'", " 'c'"]
        );
    }

    #[test]
    fn test_find_arrow() {
        assert_eq!(find_top_level_arrow("'a' => 1", NAIVE), Some(4));
        assert_eq!(find_top_level_arrow("1, 2", NAIVE), None);
    }

    #[test]
    fn test_find_arrow_skips_nested_and_quoted() {
        assert_eq!(find_top_level_arrow("['a' => 1], 2", NAIVE), None);
        assert_eq!(find_top_level_arrow("'x => y', fn($a) => 1", NAIVE), Some(17));
        assert_eq!(find_top_level_arrow("'=>'", NAIVE), None);
    }

    #[test]
    fn test_unbalanced_close_goes_negative() {
        assert_eq!(split_top_level("a), b, c", NAIVE), vec!["a), b, c"]);
    }

    #[test]
    fn test_multibyte_text() {
        assert_eq!(split_top_level("'é', ü", NAIVE), vec!["'é'", " ü"]);
        assert_eq!(find_top_level_arrow("'ключ' => 1", NAIVE), Some(11));
    }
}
