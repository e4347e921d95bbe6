//! The context chain: everything needed to climb back out of a subtree
//!
//! Each frame records the siblings around the focus and a link to the parent
//! node it was opened from. Frames are reference counted so that cursor
//! snapshots share their ancestor suffixes; a frame is copied only when a
//! shared cursor writes to it.

use std::mem;
use std::sync::Arc;

/// One open level of the tree below the root
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Context<N> {
    /// Left siblings in document order, so the nearest one is last
    pub(crate) left: Vec<N>,
    /// Right siblings in reverse document order, so the nearest one is last
    pub(crate) right: Vec<N>,
    /// `None` only for the root-level frame
    pub(crate) up: Option<Parent<N>>,
    /// Set once the focus or anything beneath this level has changed
    pub(crate) dirty: bool,
}

/// The link from a frame to the level above it
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Parent<N> {
    /// The parent node as it was when this level was opened
    pub(crate) node: N,
    /// The parent's own frame
    pub(crate) context: Arc<Context<N>>,
}

/// Where a cursor sits: inside the tree, or past the end of a depth-first walk
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Location<N> {
    At(Arc<Context<N>>),
    End,
}

impl<N> Context<N> {
    /// The frame a fresh cursor starts with
    pub(crate) fn top() -> Self {
        Self {
            left: Vec::new(),
            right: Vec::new(),
            up: None,
            dirty: false,
        }
    }

    /// The frame opened when descending into `parent`, focused on its first child
    ///
    /// `rest` holds the remaining children in reverse document order.
    pub(crate) fn below(parent: N, enclosing: Arc<Context<N>>, rest: Vec<N>) -> Self {
        Self {
            left: Vec::new(),
            right: rest,
            up: Some(Parent {
                node: parent,
                context: enclosing,
            }),
            dirty: false,
        }
    }

    /// Take the frame apart into `(left, right, up, dirty)`
    pub(crate) fn into_parts(mut self) -> (Vec<N>, Vec<N>, Option<Parent<N>>, bool) {
        (
            mem::take(&mut self.left),
            mem::take(&mut self.right),
            self.up.take(),
            self.dirty,
        )
    }

    pub(crate) fn is_top(&self) -> bool {
        self.up.is_none()
    }

    /// Left siblings, nearest first
    pub(crate) fn lefts(&self) -> impl Iterator<Item = &N> + '_ {
        self.left.iter().rev()
    }

    /// Right siblings in document order
    pub(crate) fn rights(&self) -> impl Iterator<Item = &N> + '_ {
        self.right.iter().rev()
    }

    /// Ancestors of the focus, nearest first
    pub(crate) fn ancestors(&self) -> Ancestors<'_, N> {
        Ancestors {
            current: self.up.as_ref(),
        }
    }
}

// Unlinks the chain one frame at a time, stopping at the first frame still
// held by another cursor. The default drop would recurse once per level.
impl<N> Drop for Context<N> {
    fn drop(&mut self) {
        let mut next = self.up.take();
        while let Some(parent) = next {
            next = match Arc::try_unwrap(parent.context) {
                Ok(mut frame) => frame.up.take(),
                Err(_) => None,
            };
        }
    }
}

/// Reassemble a full child list from the two sibling stacks and the focus
pub(crate) fn splice<N>(mut left: Vec<N>, focus: N, right: Vec<N>) -> Vec<N> {
    left.reserve(right.len() + 1);
    left.push(focus);
    left.extend(right.into_iter().rev());
    left
}

/// Walks `Parent` links from a frame towards the root
pub(crate) struct Ancestors<'a, N> {
    current: Option<&'a Parent<N>>,
}

impl<'a, N> Iterator for Ancestors<'a, N> {
    type Item = &'a N;

    fn next(&mut self) -> Option<Self::Item> {
        let parent = self.current?;
        self.current = parent.context.up.as_ref();
        Some(&parent.node)
    }
}
