//! Value inspection: from a [`Value`] to a tree of labelled nodes
//!
//! The pipeline for each node is classify → label → style class:
//!
//! - [`category`]: [`classify`] maps a value to a [`Category`]; [`StyleClass`] coarsens it
//!   for coloring
//! - [`label`]: [`format_label`] derives the short display text
//! - [`node`]: [`render_entries`] builds [`Node`]s recursively, one per own entry
//!
//! [`inspect`] is the root: it computes the [`ExpansionSet`] from caller-supplied
//! sub-paths, picks the palette, and renders the root value. The result is an
//! [`InspectorView`] that the terminal tree widget consumes.

pub mod category;
pub mod label;
pub mod node;

pub use category::{classify, Category, StyleClass};
pub use label::format_label;
pub use node::{render_entries, Node, NodePath, Swatch};

use crate::value::Value;
use rustc_hash::FxHashSet;
use std::fmt;
use std::str::FromStr;

/// Marker naming the synthetic node above the caller's data
pub const DEFAULT_ROOT_MARKER: &str = "$ROOT";

/// Light or dark palette selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaletteMode {
    #[default]
    Light,
    Dark,
}

impl PaletteMode {
    pub fn toggled(self) -> Self {
        match self {
            PaletteMode::Light => PaletteMode::Dark,
            PaletteMode::Dark => PaletteMode::Light,
        }
    }

    /// Anything other than `"dark"` reads as light
    pub fn from_signal(signal: &str) -> Self {
        if signal == "dark" {
            PaletteMode::Dark
        } else {
            PaletteMode::Light
        }
    }
}

impl fmt::Display for PaletteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteMode::Light => f.write_str("light"),
            PaletteMode::Dark => f.write_str("dark"),
        }
    }
}

impl FromStr for PaletteMode {
    type Err = crate::error::ObjscopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(PaletteMode::Light),
            "dark" => Ok(PaletteMode::Dark),
            _ => Err(crate::error::ObjscopeError::InvalidTheme(s.to_string())),
        }
    }
}

/// Options recognised by [`inspect`]
#[derive(Debug, Clone, PartialEq)]
pub struct InspectOptions {
    /// Dot-separated sub-paths, relative to the root marker, to open initially
    pub expand_paths: Option<Vec<String>>,
    pub palette_mode: PaletteMode,
    pub root_marker: String,
    /// Composite values nested deeper than this render as leaves
    pub max_depth: Option<usize>,
}

impl Default for InspectOptions {
    fn default() -> Self {
        InspectOptions {
            expand_paths: None,
            palette_mode: PaletteMode::default(),
            root_marker: DEFAULT_ROOT_MARKER.to_string(),
            max_depth: None,
        }
    }
}

/// Node paths that render open on first display
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExpansionSet {
    paths: Vec<NodePath>,
    lookup: FxHashSet<NodePath>,
}

impl ExpansionSet {
    /// Prefix each sub-path with the root marker. `None` yields an empty set.
    pub fn from_sub_paths(root_marker: &str, sub_paths: Option<&[String]>) -> Self {
        let root = NodePath::root(root_marker);
        let paths: Vec<NodePath> = sub_paths
            .unwrap_or_default()
            .iter()
            .map(|sub_path| root.child(sub_path))
            .collect();
        let lookup = paths.iter().cloned().collect();
        ExpansionSet { paths, lookup }
    }

    pub fn contains(&self, path: &NodePath) -> bool {
        self.lookup.contains(path)
    }

    pub fn paths(&self) -> &[NodePath] {
        &self.paths
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Concatenation of all paths; the tree widget resets when this changes
    pub fn remount_key(&self) -> String {
        self.paths.iter().map(NodePath::as_str).collect()
    }
}

/// Everything the tree widget needs to draw an inspected value
#[derive(Debug, Clone, PartialEq)]
pub struct InspectorView {
    pub root: NodePath,
    pub nodes: Vec<Node>,
    pub default_expanded: ExpansionSet,
    pub remount_key: String,
    pub palette_mode: PaletteMode,
}

impl InspectorView {
    /// Look up a node anywhere in the tree
    pub fn find(&self, id: &NodePath) -> Option<&Node> {
        self.nodes.iter().find_map(|node| node.find(id))
    }

    /// Total number of nodes in the tree
    pub fn node_count(&self) -> usize {
        fn count(nodes: &[Node]) -> usize {
            nodes.iter().map(|n| 1 + count(&n.children)).sum()
        }
        count(&self.nodes)
    }
}

/// Build the inspector tree for `data`.
///
/// Object and array roots expand into their entries under the root marker; any other
/// root, functions included, becomes a single keyless leaf at the marker.
pub fn inspect(data: &Value, options: &InspectOptions) -> InspectorView {
    let root = NodePath::root(&options.root_marker);
    let default_expanded =
        ExpansionSet::from_sub_paths(&options.root_marker, options.expand_paths.as_deref());
    let remount_key = default_expanded.remount_key();

    let nodes = if matches!(data, Value::Object(_) | Value::Array(_)) {
        render_entries(&data.entries(), &root, options.max_depth)
    } else {
        vec![Node::root_leaf(root.clone(), data)]
    };

    log::debug!(
        "inspected {} value into {} top-level node(s), {} default-expanded",
        classify(data),
        nodes.len(),
        default_expanded.paths().len()
    );

    InspectorView {
        root,
        nodes,
        default_expanded,
        remount_key,
        palette_mode: options.palette_mode,
    }
}
