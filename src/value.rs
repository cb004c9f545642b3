//! Value representation for parsed UP data.
//!
//! Every value in a UP document is one of exactly three shapes, modelled by
//! the exhaustive [`Value`] enum:
//!
//! - [`Value::Scalar`]: text. Type annotations are never applied, so `30`
//!   stays the string `"30"`.
//! - [`Value::Block`]: a nested, insertion-ordered [`Block`] of key/value pairs.
//! - [`Value::List`]: an ordered sequence of values.
//!
//! ## Extracting Values
//!
//! ```rust
//! use uplang::{parse, Value};
//!
//! let doc = parse("server {\n  port 8080\n}").unwrap();
//!
//! match &doc.nodes()[0].value {
//!     Value::Block(block) => {
//!         assert_eq!(block.get("port").and_then(|v| v.as_str()), Some("8080"));
//!     }
//!     other => panic!("expected a block, found {:?}", other),
//! }
//! ```

use crate::Block;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A parsed UP value.
///
/// # Examples
///
/// ```rust
/// use uplang::Value;
///
/// let scalar = Value::from("hello");
/// let list = Value::from(vec![Value::from("a"), Value::from("b")]);
///
/// assert!(scalar.is_scalar());
/// assert!(list.is_list());
/// assert_eq!(list.as_list().map(|l| l.len()), Some(2));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    Scalar(String),
    Block(Block),
    List(Vec<Value>),
}

impl Value {
    /// Returns `true` if the value is a scalar.
    #[inline]
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(self, Value::Scalar(_))
    }

    /// Returns `true` if the value is a block.
    #[inline]
    #[must_use]
    pub const fn is_block(&self) -> bool {
        matches!(self, Value::Block(_))
    }

    /// Returns `true` if the value is a list.
    #[inline]
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    /// If the value is a scalar, returns its text. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uplang::{Block, Value};
    ///
    /// assert_eq!(Value::from("hello").as_str(), Some("hello"));
    /// assert_eq!(Value::from(Block::new()).as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is a block, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_block(&self) -> Option<&Block> {
        match self {
            Value::Block(block) => Some(block),
            _ => None,
        }
    }

    /// If the value is a list, returns its elements. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Scalar(s) => serializer.serialize_str(s),
            Value::Block(block) => block.serialize(serializer),
            Value::List(items) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for element in items {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        // UP has no typed scalars, so every primitive lands as its text.
        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string, sequence or map")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(Value::Scalar(value.to_string()))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Value::Scalar(value.to_string()))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                Ok(Value::Scalar(value.to_string()))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(Value::Scalar(value.to_string()))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Value::Scalar(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Value::Scalar(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Scalar(String::new()))
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Scalar(String::new()))
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut vec = Vec::new();
                while let Some(elem) = seq.next_element()? {
                    vec.push(elem);
                }
                Ok(Value::List(vec))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut block = Block::new();
                while let Some((key, value)) = map.next_entry()? {
                    block.insert(key, value);
                }
                Ok(Value::Block(block))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Scalar(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Scalar(value.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::List(value)
    }
}

impl From<Block> for Value {
    fn from(value: Block) -> Self {
        Value::Block(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicates() {
        let scalar = Value::from("x");
        assert!(scalar.is_scalar());
        assert!(!scalar.is_block());
        assert!(!scalar.is_list());

        let block = Value::from(Block::new());
        assert!(block.is_block());
        assert!(block.as_block().is_some());
        assert_eq!(block.as_list(), None);

        let list = Value::from(Vec::new());
        assert!(list.is_list());
        assert_eq!(list.as_list(), Some(&[][..]));
    }

    #[test]
    fn test_serialize_to_json() {
        let mut block = Block::new();
        block.insert("name".to_string(), Value::from("web"));
        block.insert(
            "ports".to_string(),
            Value::from(vec![Value::from("80"), Value::from("443")]),
        );

        let json = serde_json::to_string(&Value::Block(block)).unwrap();
        assert_eq!(json, r#"{"name":"web","ports":["80","443"]}"#);
    }

    #[test]
    fn test_deserialize_primitives_as_text() {
        let value: Value =
            serde_json::from_str(r#"{"port": 8080, "tls": true, "tags": ["a", null]}"#).unwrap();

        let block = value.as_block().unwrap();
        assert_eq!(block.get("port"), Some(&Value::from("8080")));
        assert_eq!(block.get("tls"), Some(&Value::from("true")));
        assert_eq!(
            block.get("tags"),
            Some(&Value::from(vec![Value::from("a"), Value::from("")]))
        );
    }
}
