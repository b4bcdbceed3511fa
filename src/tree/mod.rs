//! Hierarchy construction from flat, slash-delimited path listings.

mod build;

use indexmap::IndexMap;

pub use build::build_hierarchy;

/// One level of the directory hierarchy.
///
/// Children are kept in the order their segment was first seen, which is
/// also the order they render in. A node with no children is a leaf within
/// the depth bound, whether or not the original path continued past it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    children: IndexMap<String, Node>,
}

impl Node {
    /// Create an empty node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether there are no direct children; pairs with [`Node::len`].
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Whether this node has nothing beneath it.
    pub fn is_leaf(&self) -> bool {
        self.is_empty()
    }

    /// Look up a direct child by segment name.
    pub fn get(&self, name: &str) -> Option<&Node> {
        self.children.get(name)
    }

    /// Direct children in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &Node)> {
        self.children
            .iter()
            .map(|(name, child)| (name.as_str(), child))
    }

    /// Total number of nodes beneath this one (excluding itself).
    pub fn count(&self) -> usize {
        self.children.values().map(|child| 1 + child.count()).sum()
    }

    /// Return the child keyed by `name`, inserting an empty one if absent.
    pub(crate) fn child_or_insert(&mut self, name: &str) -> &mut Node {
        self.children.entry(name.to_owned()).or_default()
    }
}
