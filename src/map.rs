//! Ordered map type for associative arrays.
//!
//! [`ArrayMap`] wraps an [`IndexMap`] so that a freshly parsed map iterates in
//! source order and a sorted map iterates in key order. Re-inserting an
//! existing key keeps its original position and replaces the value, the same
//! way PHP treats a duplicated key in a literal.
//!
//! ## Examples
//!
//! ```rust
//! use php_array_sorter::{ArrayMap, KeyOrder, Value};
//!
//! let mut map = ArrayMap::new();
//! map.insert("name".to_string(), Value::from("app"));
//! map.insert("env".to_string(), Value::from("prod"));
//!
//! map.sort_keys(KeyOrder::Locale);
//! let keys: Vec<_> = map.keys().cloned().collect();
//! assert_eq!(keys, vec!["env", "name"]);
//! ```

use crate::{KeyOrder, Value};
use indexmap::IndexMap;

/// An insertion-ordered map of string keys to values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArrayMap(IndexMap<String, Value>);

impl ArrayMap {
    #[must_use]
    pub fn new() -> Self {
        ArrayMap(IndexMap::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        ArrayMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the key is already present its position is kept, the value is
    /// replaced and the old value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use php_array_sorter::{ArrayMap, Value};
    ///
    /// let mut map = ArrayMap::new();
    /// map.insert("a".to_string(), Value::from(1));
    /// map.insert("b".to_string(), Value::from(2));
    /// assert_eq!(map.insert("a".to_string(), Value::from(3)), Some(Value::from(1)));
    ///
    /// let keys: Vec<_> = map.keys().cloned().collect();
    /// assert_eq!(keys, vec!["a", "b"]);
    /// ```
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Reorders the entries by key. Values are not touched.
    pub fn sort_keys(&mut self, order: KeyOrder) {
        self.0.sort_by(|a, _, b, _| order.compare(a, b));
    }

    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }

    pub fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.0.values()
    }

    pub fn values_mut(&mut self) -> indexmap::map::ValuesMut<'_, String, Value> {
        self.0.values_mut()
    }

    /// Returns an iterator over the entries, in map order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }
}

impl IntoIterator for ArrayMap {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ArrayMap {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Value)> for ArrayMap {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        ArrayMap(IndexMap::from_iter(iter))
    }
}
