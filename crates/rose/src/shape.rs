//! Zipper capabilities for the rose tree and s-expression encodings

use std::fmt;
use std::marker::PhantomData;

use zipper::{TreeShape, Zipper};

use crate::node::{Node, NodeKind};
use crate::sexp::Sexp;

/// Walks [`Node`] trees; containers are branches, leaves are not
pub struct RoseShape<D> {
    _data: PhantomData<fn() -> D>,
}

impl<D> RoseShape<D> {
    pub const fn new() -> Self {
        Self { _data: PhantomData }
    }
}

impl<D> Default for RoseShape<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> fmt::Debug for RoseShape<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RoseShape")
    }
}

impl<D: Clone> TreeShape for RoseShape<D> {
    type Node = Node<D>;

    fn is_branch(&self, node: &Node<D>) -> bool {
        node.is_container()
    }

    fn children(&self, node: &Node<D>) -> Vec<Node<D>> {
        node.children.clone()
    }

    fn make_node(&self, node: &Node<D>, children: Vec<Node<D>>) -> Node<D> {
        Node {
            kind: NodeKind::Container,
            data: node.data.clone(),
            children,
        }
    }
}

impl<D: Clone> Node<D> {
    /// A zipper focused on this node as the root
    pub fn zipper(self) -> Zipper<RoseShape<D>> {
        Zipper::new(RoseShape::new(), self)
    }
}

/// Walks [`Sexp`] values; every list is a branch, atoms are leaves
#[derive(Debug, Clone, Copy, Default)]
pub struct SexpShape;

impl TreeShape for SexpShape {
    type Node = Sexp;

    fn is_branch(&self, node: &Sexp) -> bool {
        matches!(node, Sexp::List(_))
    }

    fn children(&self, node: &Sexp) -> Vec<Sexp> {
        match node {
            Sexp::List(items) => items.clone(),
            Sexp::Atom(_) => Vec::new(),
        }
    }

    fn make_node(&self, _node: &Sexp, children: Vec<Sexp>) -> Sexp {
        Sexp::List(children)
    }
}

impl Sexp {
    /// A zipper focused on this expression as the root
    pub fn zipper(self) -> Zipper<SexpShape> {
        Zipper::new(SexpShape, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rose_shape_round_trips_children() {
        let shape = RoseShape::new();
        let node = Node::container("p", vec![Node::leaf("a")]);
        let rebuilt = shape.make_node(&node, vec![Node::leaf("b"), Node::leaf("c")]);

        assert!(shape.is_branch(&rebuilt));
        assert_eq!(rebuilt.data, "p");
        assert_eq!(shape.children(&rebuilt), vec![Node::leaf("b"), Node::leaf("c")]);
        assert!(!shape.is_branch(&Node::leaf("x")));
    }

    #[test]
    fn test_empty_container_is_a_branch() {
        let shape = RoseShape::new();
        assert!(shape.is_branch(&Node::<u8>::container(0, vec![])));
    }

    #[test]
    fn test_sexp_shape() {
        let list = Sexp::List(vec![Sexp::atom("a"), Sexp::List(vec![])]);
        assert!(SexpShape.is_branch(&list));
        assert!(!SexpShape.is_branch(&Sexp::atom("a")));
        assert_eq!(SexpShape.children(&list).len(), 2);
        assert_eq!(SexpShape.make_node(&list, vec![]), Sexp::List(vec![]));
    }
}
