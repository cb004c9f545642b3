//! Ordered map type for UP blocks.
//!
//! [`Block`] wraps an [`IndexMap`] so that keys iterate in the order they
//! were first written. Assigning an existing key replaces its value where
//! it already sits; the key is not moved to the end.
//!
//! ## Examples
//!
//! ```rust
//! use uplang::{Block, Value};
//!
//! let mut block = Block::new();
//! block.insert("host".to_string(), Value::from("localhost"));
//! block.insert("port".to_string(), Value::from("8080"));
//! block.insert("host".to_string(), Value::from("example.com"));
//!
//! let keys: Vec<_> = block.keys().cloned().collect();
//! assert_eq!(keys, vec!["host", "port"]);
//! assert_eq!(block.get("host").and_then(|v| v.as_str()), Some("example.com"));
//! ```

use crate::Value;
use indexmap::IndexMap;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// An insertion-ordered map of keys to UP values.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Block(IndexMap<String, Value>);

impl Block {
    /// Creates an empty `Block`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uplang::Block;
    ///
    /// let block = Block::new();
    /// assert!(block.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Block(IndexMap::new())
    }

    /// Creates an empty `Block` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Block(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the block.
    ///
    /// If the key was already present its value is replaced in place, its
    /// position is kept, and the old value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uplang::{Block, Value};
    ///
    /// let mut block = Block::new();
    /// assert!(block.insert("a".to_string(), Value::from("1")).is_none());
    /// block.insert("b".to_string(), Value::from("2"));
    /// assert_eq!(block.insert("a".to_string(), Value::from("3")), Some(Value::from("1")));
    /// assert_eq!(block.get_index(0), Some((&"a".to_string(), &Value::from("3"))));
    /// ```
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns the entry at `index` in iteration order.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<(&String, &Value)> {
        self.0.get_index(index)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of entries in the block.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the block contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the block, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the block, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }
}

impl IntoIterator for Block {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Block {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Value)> for Block {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Block(IndexMap::from_iter(iter))
    }
}

impl Serialize for Block {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self.iter() {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Block {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BlockVisitor;

        impl<'de> Visitor<'de> for BlockVisitor {
            type Value = Block;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of UP values")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut block = Block::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry()? {
                    block.insert(key, value);
                }
                Ok(block)
            }
        }

        deserializer.deserialize_map(BlockVisitor)
    }
}
