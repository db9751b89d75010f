//! Inspector tree nodes and the recursive entry renderer

use super::category::{classify, Category, StyleClass};
use super::label::format_label;
use crate::value::Value;
use std::fmt;

/// Dot-joined path identifying a node from the root marker
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodePath(String);

impl NodePath {
    pub fn root(marker: &str) -> Self {
        NodePath(marker.to_string())
    }

    /// Path of the child reached through `key`
    pub fn child(&self, key: &str) -> Self {
        NodePath(format!("{}.{}", self.0, key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodePath {
    fn from(s: &str) -> Self {
        NodePath(s.to_string())
    }
}

/// Decoration drawn before a color label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Swatch {
    /// The raw CSS color text, unvalidated
    pub css: String,
}

/// One visual node of the inspector tree
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NodePath,
    /// Property key; `None` for the keyless root leaf
    pub key: Option<String>,
    pub category: Category,
    pub label: String,
    pub style: StyleClass,
    pub swatch: Option<Swatch>,
    pub children: Vec<Node>,
}

impl Node {
    fn new(id: NodePath, key: Option<String>, value: &Value) -> Self {
        let category = classify(value);
        let label = format_label(value, category);
        let swatch = match (category, value) {
            (Category::Color, Value::String(css)) => Some(Swatch { css: css.clone() }),
            _ => None,
        };
        Node {
            id,
            key,
            category,
            label,
            style: StyleClass::from(category),
            swatch,
            children: Vec::new(),
        }
    }

    /// Leaf node for a value shown without a key. Only the token is drawn, no swatch.
    pub(crate) fn root_leaf(id: NodePath, value: &Value) -> Self {
        Node {
            swatch: None,
            ..Node::new(id, None, value)
        }
    }

    /// `key: label`, or just the label for a keyless node
    pub fn display_label(&self) -> String {
        match &self.key {
            Some(key) => format!("{}: {}", key, self.label),
            None => self.label.clone(),
        }
    }

    pub fn is_expandable(&self) -> bool {
        !self.children.is_empty()
    }

    /// Depth-first search for a node by path
    pub fn find(&self, id: &NodePath) -> Option<&Node> {
        if &self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }
}

/// Render one node per entry, recursing into objects, arrays and functions.
///
/// `depth_left` caps recursion; at zero, composite values become leaves.
pub fn render_entries(
    entries: &[(String, &Value)],
    parent: &NodePath,
    depth_left: Option<usize>,
) -> Vec<Node> {
    entries
        .iter()
        .map(|(key, value)| render_entry(key, value, parent, depth_left))
        .collect()
}

fn render_entry(key: &str, value: &Value, parent: &NodePath, depth_left: Option<usize>) -> Node {
    let id = parent.child(key);
    let mut node = Node::new(id, Some(key.to_string()), value);

    let can_descend = depth_left.map_or(true, |d| d > 0);
    if value.is_composite() && can_descend {
        let entries = value.entries();
        node.children = render_entries(&entries, &node.id, depth_left.map(|d| d - 1));
    }

    node
}
