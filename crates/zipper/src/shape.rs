//! Capability descriptor: how the zipper sees a tree
//!
//! The zipper never inspects nodes directly. Everything it knows about a tree
//! comes from the three operations on [`TreeShape`], so any encoding (rose
//! trees, s-expressions, DOM-like values) can be walked once it provides them.

use std::fmt;

/// The three capabilities a tree encoding supplies to the zipper
///
/// Implementations must be consistent with each other: whenever
/// `is_branch(n)` holds, `is_branch(make_node(n, cs))` holds too and
/// `children(make_node(n, cs)) == cs`. The zipper relies on this and never
/// checks it; a shape that breaks the contract silently yields wrong trees.
///
/// # Example
///
/// ```
/// use zipper::{TreeShape, Zipper};
///
/// #[derive(Clone, Debug, PartialEq)]
/// enum Expr {
///     Num(i64),
///     Call(Vec<Expr>),
/// }
///
/// struct ExprShape;
///
/// impl TreeShape for ExprShape {
///     type Node = Expr;
///
///     fn is_branch(&self, node: &Expr) -> bool {
///         matches!(node, Expr::Call(_))
///     }
///
///     fn children(&self, node: &Expr) -> Vec<Expr> {
///         match node {
///             Expr::Call(args) => args.clone(),
///             Expr::Num(_) => Vec::new(),
///         }
///     }
///
///     fn make_node(&self, _node: &Expr, children: Vec<Expr>) -> Expr {
///         Expr::Call(children)
///     }
/// }
///
/// let tree = Expr::Call(vec![Expr::Num(1), Expr::Num(2)]);
/// let z = Zipper::new(ExprShape, tree).down().unwrap().right().unwrap();
/// assert_eq!(z.focus(), &Expr::Num(2));
/// ```
pub trait TreeShape {
    /// The value type of every node in the tree
    type Node: Clone;

    /// Whether `node` is a branch (may have children)
    fn is_branch(&self, node: &Self::Node) -> bool;

    /// The ordered children of a branch
    ///
    /// Only called on nodes for which [`is_branch`](Self::is_branch) holds.
    fn children(&self, node: &Self::Node) -> Vec<Self::Node>;

    /// Rebuild a node of the same kind as `node` with a new child list
    ///
    /// Only called on nodes for which [`is_branch`](Self::is_branch) holds.
    fn make_node(&self, node: &Self::Node, children: Vec<Self::Node>) -> Self::Node;
}

impl<S: TreeShape + ?Sized> TreeShape for &S {
    type Node = S::Node;

    fn is_branch(&self, node: &Self::Node) -> bool {
        (**self).is_branch(node)
    }

    fn children(&self, node: &Self::Node) -> Vec<Self::Node> {
        (**self).children(node)
    }

    fn make_node(&self, node: &Self::Node, children: Vec<Self::Node>) -> Self::Node {
        (**self).make_node(node, children)
    }
}

/// A [`TreeShape`] assembled from three closures
///
/// This is the form to reach for when the encoding is ad hoc and writing a
/// dedicated type would be overkill. See [`zipper`](crate::zipper).
pub struct FnShape<N, B, C, M> {
    is_branch: B,
    children: C,
    make_node: M,
    _node: std::marker::PhantomData<fn(N) -> N>,
}

impl<N, B, C, M> FnShape<N, B, C, M>
where
    N: Clone,
    B: Fn(&N) -> bool,
    C: Fn(&N) -> Vec<N>,
    M: Fn(&N, Vec<N>) -> N,
{
    /// Bundle the three capability functions
    pub fn new(is_branch: B, children: C, make_node: M) -> Self {
        Self {
            is_branch,
            children,
            make_node,
            _node: std::marker::PhantomData,
        }
    }
}

impl<N, B, C, M> TreeShape for FnShape<N, B, C, M>
where
    N: Clone,
    B: Fn(&N) -> bool,
    C: Fn(&N) -> Vec<N>,
    M: Fn(&N, Vec<N>) -> N,
{
    type Node = N;

    fn is_branch(&self, node: &N) -> bool {
        (self.is_branch)(node)
    }

    fn children(&self, node: &N) -> Vec<N> {
        (self.children)(node)
    }

    fn make_node(&self, node: &N, children: Vec<N>) -> N {
        (self.make_node)(node, children)
    }
}

impl<N, B, C, M> fmt::Debug for FnShape<N, B, C, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnShape").finish_non_exhaustive()
    }
}
