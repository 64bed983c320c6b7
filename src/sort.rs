//! Recursive key sorting.
//!
//! Only associative arrays are reordered. Indexed arrays keep their element
//! order, but their elements are still visited so that maps nested inside a
//! list get sorted too. Scalars and raw fragments are left alone.

use crate::{KeyOrder, Options, Value};

impl Value {
    /// Sorts every associative level of this value in place.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use php_array_sorter::{parse, KeyOrder};
    ///
    /// let mut value = parse("[['b' => 1, 'a' => 2], 3]").unwrap();
    /// value.sort_keys(KeyOrder::Locale);
    ///
    /// let inner = value.as_list().unwrap()[0].as_map().unwrap();
    /// assert_eq!(inner.keys().next().map(String::as_str), Some("a"));
    /// ```
    pub fn sort_keys(&mut self, order: KeyOrder) {
        match self {
            Value::List(items) => {
                for item in items {
                    item.sort_keys(order);
                }
            }
            Value::Map(map) => {
                map.sort_keys(order);
                for value in map.values_mut() {
                    value.sort_keys(order);
                }
            }
            Value::Null
            | Value::Bool(_)
            | Value::Number(_)
            | Value::String(_)
            | Value::Raw(_) => {}
        }
    }
}

/// Sorts `value` with the default locale-style key order.
///
/// # Examples
///
/// ```rust
/// use php_array_sorter::{parse, render, sort};
///
/// let sorted = sort(parse("['b' => 1, 'a' => 2]").unwrap());
/// assert_eq!(render(&sorted, 0), "[\n    'a' => 2,\n    'b' => 1\n]");
/// ```
#[must_use]
pub fn sort(value: Value) -> Value {
    sort_with_options(value, &Options::default())
}

/// Sorts `value` with the key order from `options`.
#[must_use]
pub fn sort_with_options(mut value: Value, options: &Options) -> Value {
    value.sort_keys(options.key_order);
    value
}
