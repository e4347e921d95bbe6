//! Core node types for the rose tree encoding

use derive_more::Display;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The type/kind of a node in the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NodeKind {
    /// A container node - can have children, possibly none
    #[display(fmt = "Container")]
    Container,
    /// A leaf node - cannot have children
    #[display(fmt = "Leaf")]
    Leaf,
}

impl NodeKind {
    /// Returns true if this is a container node
    pub const fn is_container(self) -> bool {
        matches!(self, NodeKind::Container)
    }

    /// Returns true if this is a leaf node
    pub const fn is_leaf(self) -> bool {
        matches!(self, NodeKind::Leaf)
    }
}

/// A rose tree node owning its children
///
/// Generic over the data type `D` stored at every node. Containers and leaves
/// are distinguished by [`NodeKind`] rather than by whether `children` is
/// empty, so an empty container stays a branch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Node<D> {
    /// Whether this is a container or leaf node
    pub kind: NodeKind,
    /// User-defined data associated with this node
    pub data: D,
    /// Ordered children (always empty for leaves)
    pub children: Vec<Node<D>>,
}

impl<D> Node<D> {
    /// Create a new container node
    pub fn container(data: D, children: Vec<Node<D>>) -> Self {
        Self {
            kind: NodeKind::Container,
            data,
            children,
        }
    }

    /// Create a new leaf node
    pub fn leaf(data: D) -> Self {
        Self {
            kind: NodeKind::Leaf,
            data,
            children: Vec::new(),
        }
    }

    /// Returns true if this is a container node
    pub fn is_container(&self) -> bool {
        self.kind.is_container()
    }

    /// Returns true if this is a leaf node
    pub fn is_leaf(&self) -> bool {
        self.kind.is_leaf()
    }

    /// Count this node and all of its descendants
    pub fn node_count(&self) -> usize {
        self.walk().count()
    }

    /// Walk this subtree in pre-order
    pub fn walk(&self) -> Walk<'_, D> {
        Walk { stack: vec![self] }
    }
}

/// Renders as `data[child, child]`, with leaves as bare `data`
impl<D: fmt::Display> fmt::Display for Node<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.data)?;
        if self.is_leaf() {
            return Ok(());
        }
        write!(f, "[")?;
        for (i, child) in self.children.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", child)?;
        }
        write!(f, "]")
    }
}

/// Pre-order iterator over a rose tree
pub struct Walk<'a, D> {
    stack: Vec<&'a Node<D>>,
}

impl<'a, D> Iterator for Walk<'a, D> {
    type Item = &'a Node<D>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;

        // Add children in reverse order so they're popped in correct order
        self.stack.extend(current.children.iter().rev());

        Some(current)
    }
}
