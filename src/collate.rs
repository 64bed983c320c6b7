//! Key collation.
//!
//! [`locale_cmp`] approximates the root-locale collation that editors and
//! browsers use for `localeCompare`. Both keys are brought into canonical
//! decomposition (NFD) and compared in three passes:
//!
//! 1. base characters, by class (whitespace, punctuation, symbols, digits,
//!    letters) and then case-insensitively within the class;
//! 2. accents, so `ano` < `año` < `anos`;
//! 3. case, lowercase first.
//!
//! Control characters other than whitespace are ignored in all three passes.
//! A final code point comparison makes the order total, so distinct keys
//! never compare equal.
//!
//! Letters without a canonical decomposition (`ß`, `æ`, `ø`) are not
//! expanded; they sort by their lowercase code point after `z`.

use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// ASCII punctuation and symbols in root-collation order.
const PUNCTUATION_ORDER: &str = "_-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Class {
    Space,
    Punctuation,
    Symbol,
    Digit,
    Letter,
}

/// Primary weight of a base character: its class, then its position in the class.
fn primary(c: char) -> (Class, u32) {
    if c.is_whitespace() {
        (Class::Space, c as u32)
    } else if let Some(index) = PUNCTUATION_ORDER.find(c) {
        (Class::Punctuation, index as u32)
    } else if let Some(digit) = c.to_digit(10) {
        (Class::Digit, digit)
    } else if c.is_numeric() {
        (Class::Digit, 10 + c as u32)
    } else if c.is_alphabetic() {
        (Class::Letter, fold_case(c) as u32)
    } else {
        (Class::Symbol, c as u32)
    }
}

fn fold_case(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Weights of one key, one entry per collation element at each level.
#[derive(Default)]
struct SortKey {
    primary: Vec<(Class, u32)>,
    /// `0` for a base character, `1 + code point` for a combining mark.
    secondary: Vec<u32>,
    /// Lowercase (and uncased) characters before uppercase ones.
    tertiary: Vec<u8>,
}

impl SortKey {
    fn new(text: &str) -> Self {
        let mut key = SortKey::default();
        for c in text.nfd() {
            if is_combining_mark(c) {
                key.secondary.push(1 + c as u32);
            } else if !c.is_control() || c.is_whitespace() {
                key.primary.push(primary(c));
                key.secondary.push(0);
                key.tertiary.push(u8::from(c.is_uppercase()));
            }
        }
        key
    }
}

/// Compares two keys with the locale-style ordering.
///
/// # Examples
///
/// ```rust
/// use php_array_sorter::collate::locale_cmp;
/// use std::cmp::Ordering;
///
/// assert_eq!(locale_cmp("apple", "Banana"), Ordering::Less);
/// assert_eq!(locale_cmp("10", "9"), Ordering::Less);
/// assert_eq!(locale_cmp("a", "A"), Ordering::Less);
/// assert_eq!(locale_cmp("año", "azul"), Ordering::Less);
/// ```
#[must_use]
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let (ka, kb) = (SortKey::new(a), SortKey::new(b));
    ka.primary
        .cmp(&kb.primary)
        .then_with(|| ka.secondary.cmp(&kb.secondary))
        .then_with(|| ka.tertiary.cmp(&kb.tertiary))
        .then_with(|| a.cmp(b))
}
