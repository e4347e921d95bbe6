//! Lazy pre-order enumeration driven by [`Zipper::next`]

use std::fmt;
use std::iter::FusedIterator;

use crate::shape::TreeShape;
use crate::zipper::Zipper;

/// Yields nodes in pre-order depth-first order, starting at a cursor's focus
///
/// The iterator holds nothing but the cursor itself, so stopping early needs
/// no cleanup and a walk can be parked with [`into_zipper`](Self::into_zipper)
/// and resumed later from exactly the node it would have yielded next.
pub struct DepthFirst<S: TreeShape> {
    cursor: Option<Zipper<S>>,
}

impl<S: TreeShape> DepthFirst<S> {
    pub(crate) fn new(cursor: Zipper<S>) -> Self {
        Self {
            cursor: Some(cursor),
        }
    }

    /// The cursor for the node the next call to `next` would yield
    ///
    /// Returns `None` once the walk is exhausted.
    pub fn into_zipper(self) -> Option<Zipper<S>> {
        self.cursor.filter(|cursor| !cursor.is_end())
    }
}

impl<S: TreeShape> Iterator for DepthFirst<S> {
    type Item = S::Node;

    fn next(&mut self) -> Option<Self::Item> {
        let cursor = self.cursor.take()?;
        if cursor.is_end() {
            return None;
        }
        let node = cursor.focus().clone();
        self.cursor = Some(cursor.next());
        Some(node)
    }
}

impl<S: TreeShape> FusedIterator for DepthFirst<S> {}

impl<S: TreeShape> Clone for DepthFirst<S> {
    fn clone(&self) -> Self {
        Self {
            cursor: self.cursor.clone(),
        }
    }
}

impl<S: TreeShape> fmt::Debug for DepthFirst<S>
where
    S::Node: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DepthFirst")
            .field("cursor", &self.cursor)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::{zipper, DepthFirst, TreeShape};

    fn heap_tree(root: u32) -> DepthFirst<impl TreeShape<Node = u32>> {
        // Every node n < 4 has children 2n+1 and 2n+2.
        let z = zipper(
            |n: &u32| *n < 4,
            |n: &u32| vec![2 * n + 1, 2 * n + 2],
            |n: &u32, _cs: Vec<u32>| *n,
            root,
        );
        z.into_iter()
    }

    #[test]
    fn test_preorder_from_root() {
        let walked: Vec<_> = heap_tree(0).collect();
        assert_eq!(walked, vec![0, 1, 3, 7, 8, 4, 2, 5, 6]);
    }

    #[test]
    fn test_fused_after_exhaustion() {
        let mut it = heap_tree(0);
        for _ in 0..9 {
            assert!(it.next().is_some());
        }
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_early_termination_and_resume() {
        let mut it = heap_tree(0);
        let head: Vec<_> = it.by_ref().take(4).collect();
        assert_eq!(head, vec![0, 1, 3, 7]);

        let parked = it.into_zipper().unwrap();
        assert_eq!(*parked.focus(), 8);
        let rest: Vec<_> = parked.into_iter().collect();
        assert_eq!(rest, vec![8, 4, 2, 5, 6]);
    }

    #[test]
    fn test_exhausted_walk_has_no_zipper() {
        let mut it = heap_tree(0);
        it.by_ref().for_each(drop);
        assert!(it.into_zipper().is_none());
    }
}
