//! Parsed UP documents.
//!
//! A [`Document`] is the ordered sequence of top-level [`Node`]s produced by
//! one parse call. Top-level keys are not deduplicated: a key written twice
//! yields two nodes, in source order.

use crate::Value;
use serde::Serialize;

/// A key/value pair with an optional type annotation.
///
/// The annotation is the text after the first `!` in the key token. It is
/// kept as written and never applied to the value; `Some("")` (a key
/// ending in `!`) is distinct from `None`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Node {
    pub key: String,
    pub value: Value,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_annotation: Option<String>,
}

impl Node {
    #[must_use]
    pub fn new(key: impl Into<String>, value: Value, type_annotation: Option<&str>) -> Self {
        Node {
            key: key.into(),
            value,
            type_annotation: type_annotation.map(str::to_string),
        }
    }
}

/// The result of parsing a UP document.
///
/// # Examples
///
/// ```rust
/// use uplang::parse;
///
/// let doc = parse("name John Doe\nage!int 30").unwrap();
///
/// assert_eq!(doc.len(), 2);
/// let age = doc.get("age").unwrap();
/// assert_eq!(age.type_annotation.as_deref(), Some("int"));
/// assert_eq!(age.value.as_str(), Some("30"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Document {
    pub(crate) fn from_nodes(nodes: Vec<Node>) -> Self {
        Document { nodes }
    }

    /// Returns `true` if the document has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// The top-level nodes, in source order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    /// Returns the first top-level node with the given key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.nodes.iter().find(|node| node.key == key)
    }

    /// Returns every top-level node with the given key, in source order.
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a Node> + 'a {
        self.nodes.iter().filter(move |node| node.key == key)
    }

    #[must_use]
    pub fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }
}

impl IntoIterator for Document {
    type Item = Node;
    type IntoIter = std::vec::IntoIter<Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
