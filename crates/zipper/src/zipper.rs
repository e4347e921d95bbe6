//! The cursor: a focus node plus the context needed to rebuild around it

use std::fmt;
use std::sync::Arc;

use log::{debug, trace};

use crate::context::{splice, Context, Location, Parent};
use crate::error::{Result, ZipperError};
use crate::iter::DepthFirst;
use crate::shape::{FnShape, TreeShape};

/// An immutable-update cursor over a tree described by a [`TreeShape`]
///
/// Every move consumes the cursor and returns a new one. Cloning is cheap
/// (the shape and the context chain are reference counted), and a clone is an
/// independent snapshot: nothing done through one cursor is visible through
/// another.
///
/// Edits are lazy. Changing the focus only marks the current level dirty;
/// ancestors are rebuilt with [`TreeShape::make_node`] when the cursor climbs
/// back past them, once per dirty level no matter how many edits happened
/// below it.
///
/// # Example
///
/// ```
/// use zipper::zipper;
///
/// // Nested vectors: a node is a branch when it has a non-empty tail.
/// let tree = vec![vec![1], vec![2], vec![3]];
/// let z = zipper(
///     |n: &Vec<Vec<i32>>| n.len() > 1,
///     |n: &Vec<Vec<i32>>| n.iter().map(|c| vec![c.clone()]).collect(),
///     |_: &Vec<Vec<i32>>, cs: Vec<Vec<Vec<i32>>>| cs.concat(),
///     tree,
/// );
///
/// let edited = z
///     .down()
///     .and_then(|z| z.right())
///     .map(|z| z.replace(vec![vec![20]]))
///     .map(|z| z.root());
///
/// assert_eq!(edited, Some(vec![vec![1], vec![20], vec![3]]));
/// ```
pub struct Zipper<S: TreeShape> {
    shape: Arc<S>,
    focus: S::Node,
    location: Location<S::Node>,
}

/// Build a cursor from three capability closures and a root node
pub fn zipper<N, B, C, M>(
    is_branch: B,
    children: C,
    make_node: M,
    root: N,
) -> Zipper<FnShape<N, B, C, M>>
where
    N: Clone,
    B: Fn(&N) -> bool,
    C: Fn(&N) -> Vec<N>,
    M: Fn(&N, Vec<N>) -> N,
{
    Zipper::new(FnShape::new(is_branch, children, make_node), root)
}

impl<S: TreeShape> Zipper<S> {
    /// Create a cursor focused on `root`
    pub fn new(shape: S, root: S::Node) -> Self {
        Self::from_arc(Arc::new(shape), root)
    }

    /// Create a cursor over a shape that is already shared
    pub fn from_arc(shape: Arc<S>, root: S::Node) -> Self {
        Self::at(shape, root, Arc::new(Context::top()))
    }

    fn at(shape: Arc<S>, focus: S::Node, context: Arc<Context<S::Node>>) -> Self {
        Self {
            shape,
            focus,
            location: Location::At(context),
        }
    }

    /// Take the cursor apart, or hand it back untouched if it is at the end marker
    fn split(self) -> std::result::Result<(Arc<S>, S::Node, Arc<Context<S::Node>>), Self> {
        match self.location {
            Location::At(context) => Ok((self.shape, self.focus, context)),
            Location::End => Err(self),
        }
    }

    fn context(&self) -> Option<&Context<S::Node>> {
        match &self.location {
            Location::At(context) => Some(context),
            Location::End => None,
        }
    }

    // Inspection

    /// The shape this cursor was built with
    pub fn shape(&self) -> &S {
        &self.shape
    }

    /// The node under the cursor
    ///
    /// At the end marker this is the fully rebuilt root; check
    /// [`is_end`](Self::is_end) first if that distinction matters.
    pub fn focus(&self) -> &S::Node {
        &self.focus
    }

    /// Consume the cursor, keeping only its focus
    pub fn into_focus(self) -> S::Node {
        self.focus
    }

    /// Ancestors of the focus, root first, excluding the focus itself
    ///
    /// These are the parents as they were when the cursor descended, not
    /// rebuilt versions. Climb first to see edits reflected in ancestors.
    pub fn path(&self) -> Vec<&S::Node> {
        let mut path: Vec<_> = self
            .context()
            .map(|context| context.ancestors().collect())
            .unwrap_or_default();
        path.reverse();
        path
    }

    /// Left siblings of the focus, nearest first
    pub fn lefts(&self) -> impl Iterator<Item = &S::Node> + '_ {
        self.context().into_iter().flat_map(Context::lefts)
    }

    /// Right siblings of the focus, in document order
    pub fn rights(&self) -> impl Iterator<Item = &S::Node> + '_ {
        self.context().into_iter().flat_map(Context::rights)
    }

    /// Number of levels between the root and the focus
    pub fn depth(&self) -> usize {
        self.context()
            .map(|context| context.ancestors().count())
            .unwrap_or(0)
    }

    /// Whether the focus is a branch according to the shape
    pub fn is_branch(&self) -> bool {
        self.shape.is_branch(&self.focus)
    }

    /// Children of the focus, or `None` if it is a leaf
    pub fn children(&self) -> Option<Vec<S::Node>> {
        self.is_branch().then(|| self.shape.children(&self.focus))
    }

    /// Whether the cursor is at the root level (or at the end marker)
    pub fn is_top(&self) -> bool {
        self.context().map_or(true, Context::is_top)
    }

    /// Whether a depth-first walk has run past the last node
    pub fn is_end(&self) -> bool {
        matches!(self.location, Location::End)
    }

    /// Whether the focus has a sibling to its left
    pub fn has_left(&self) -> bool {
        self.context().is_some_and(|context| !context.left.is_empty())
    }

    /// Whether the focus has a sibling to its right
    pub fn has_right(&self) -> bool {
        self.context().is_some_and(|context| !context.right.is_empty())
    }

    /// Whether the parent must be rebuilt when the cursor climbs out of this level
    pub fn is_dirty(&self) -> bool {
        self.context().is_some_and(|context| context.dirty)
    }

    // Navigation

    fn try_down(self) -> std::result::Result<Self, Self> {
        if self.is_end() || !self.is_branch() {
            return Err(self);
        }
        let mut rest = self.shape.children(&self.focus);
        rest.reverse();
        let Some(first) = rest.pop() else {
            return Err(self);
        };
        let (shape, focus, context) = self.split()?;
        let below = Context::below(focus, context, rest);
        Ok(Self::at(shape, first, Arc::new(below)))
    }

    fn try_up(self) -> std::result::Result<Self, Self> {
        if self.is_top() {
            return Err(self);
        }
        let (shape, focus, context) = self.split()?;
        let (left, right, up, dirty) = Arc::unwrap_or_clone(context).into_parts();
        let Some(Parent { node, context }) = up else {
            let context = Context {
                left,
                right,
                up: None,
                dirty,
            };
            return Err(Self::at(shape, focus, Arc::new(context)));
        };

        if !dirty {
            trace!("restoring parent without rebuild");
            return Ok(Self::at(shape, node, context));
        }

        let children = splice(left, focus, right);
        trace!("rebuilding parent with {} children", children.len());
        let rebuilt = shape.make_node(&node, children);
        Ok(Self::at(shape, rebuilt, mark_dirty(context)))
    }

    fn try_left(self) -> std::result::Result<Self, Self> {
        if !self.has_left() {
            return Err(self);
        }
        let (shape, focus, mut context) = self.split()?;
        let frame = Arc::make_mut(&mut context);
        let Some(sibling) = frame.left.pop() else {
            return Err(Self::at(shape, focus, context));
        };
        frame.right.push(focus);
        Ok(Self::at(shape, sibling, context))
    }

    fn try_right(self) -> std::result::Result<Self, Self> {
        if !self.has_right() {
            return Err(self);
        }
        let (shape, focus, mut context) = self.split()?;
        let frame = Arc::make_mut(&mut context);
        let Some(sibling) = frame.right.pop() else {
            return Err(Self::at(shape, focus, context));
        };
        frame.left.push(focus);
        Ok(Self::at(shape, sibling, context))
    }

    /// Move to the first child of the focus
    ///
    /// Returns `None` on a leaf or on a branch with no children.
    pub fn down(self) -> Option<Self> {
        self.try_down().ok()
    }

    /// Move to the parent, rebuilding it if anything below changed
    ///
    /// Returns `None` at the root level.
    pub fn up(self) -> Option<Self> {
        self.try_up().ok()
    }

    /// Move to the nearest left sibling
    pub fn left(self) -> Option<Self> {
        self.try_left().ok()
    }

    /// Move to the nearest right sibling
    pub fn right(self) -> Option<Self> {
        self.try_right().ok()
    }

    /// Move to the first sibling, or stay put if already there
    pub fn leftmost(self) -> Self {
        if !self.has_left() {
            return self;
        }
        let (shape, focus, mut context) = match self.split() {
            Ok(parts) => parts,
            Err(end) => return end,
        };
        let frame = Arc::make_mut(&mut context);
        // [l0, l1, .., lk] becomes [lk, .., l1] plus the new focus l0
        let mut passed = std::mem::take(&mut frame.left);
        passed.reverse();
        let Some(first) = passed.pop() else {
            return Self::at(shape, focus, context);
        };
        frame.right.push(focus);
        frame.right.append(&mut passed);
        Self::at(shape, first, context)
    }

    /// Move to the last sibling, or stay put if already there
    pub fn rightmost(self) -> Self {
        if !self.has_right() {
            return self;
        }
        let (shape, focus, mut context) = match self.split() {
            Ok(parts) => parts,
            Err(end) => return end,
        };
        let frame = Arc::make_mut(&mut context);
        let mut passed = std::mem::take(&mut frame.right);
        passed.reverse();
        let Some(last) = passed.pop() else {
            return Self::at(shape, focus, context);
        };
        frame.left.push(focus);
        frame.left.append(&mut passed);
        Self::at(shape, last, context)
    }

    /// Climb to the root level, rebuilding every dirty ancestor on the way
    pub fn head(self) -> Self {
        let mut z = self;
        loop {
            z = match z.try_up() {
                Ok(parent) => parent,
                Err(top) => return top.leftmost(),
            };
        }
    }

    /// The whole tree with every edit applied
    pub fn root(self) -> S::Node {
        self.head().into_focus()
    }

    /// Descend to the last node of the focus's subtree in depth-first order
    fn last_descendant(self) -> Self {
        let mut z = self;
        loop {
            z = match z.try_down() {
                Ok(child) => child.rightmost(),
                Err(leaf) => return leaf,
            };
        }
    }

    // Depth-first walk

    /// The next node in pre-order depth-first order
    ///
    /// After the last node the result is at the end marker (see
    /// [`is_end`](Self::is_end)), focused on the rebuilt root. Calling `next`
    /// on the end marker returns it unchanged.
    pub fn next(self) -> Self {
        if self.is_end() {
            return self;
        }
        let z = match self.try_down() {
            Ok(child) => return child,
            Err(z) => z,
        };
        let mut z = match z.try_right() {
            Ok(sibling) => return sibling,
            Err(z) => z,
        };
        loop {
            z = match z.try_up() {
                Ok(parent) => match parent.try_right() {
                    Ok(sibling) => return sibling,
                    Err(parent) => parent,
                },
                Err(top) => {
                    debug!("depth-first walk reached the end");
                    return Self {
                        location: Location::End,
                        ..top
                    };
                }
            };
        }
    }

    /// The previous node in pre-order depth-first order
    ///
    /// Returns `None` at the root and at the end marker.
    pub fn prev(self) -> Option<Self> {
        match self.try_left() {
            Ok(sibling) => Some(sibling.last_descendant()),
            Err(z) => z.up(),
        }
    }

    /// A lazy pre-order walk starting at the focus
    ///
    /// The walk continues past the focus's own subtree to the end of the
    /// whole tree, exactly as repeated [`next`](Self::next) does.
    pub fn iter(&self) -> DepthFirst<S> {
        DepthFirst::new(self.clone())
    }

    // Edits

    /// Replace the focus with `f(focus)`
    pub fn edit<F>(self, f: F) -> Self
    where
        F: FnOnce(&S::Node) -> S::Node,
    {
        let node = f(&self.focus);
        self.replace(node)
    }

    /// Replace the focus with `f(focus, args)`
    pub fn edit_with<A, F>(self, f: F, args: A) -> Self
    where
        F: FnOnce(&S::Node, A) -> S::Node,
    {
        let node = f(&self.focus, args);
        self.replace(node)
    }

    /// Replace the focus with `node`
    pub fn replace(self, node: S::Node) -> Self {
        let location = match self.location {
            Location::At(context) => Location::At(mark_dirty(context)),
            Location::End => Location::End,
        };
        Self {
            shape: self.shape,
            focus: node,
            location,
        }
    }

    /// Insert `node` as the nearest left sibling, without moving
    pub fn insert_left(self, node: S::Node) -> Result<Self> {
        self.insert_sibling(node, |frame, node| frame.left.push(node))
    }

    /// Insert `node` as the nearest right sibling, without moving
    pub fn insert_right(self, node: S::Node) -> Result<Self> {
        self.insert_sibling(node, |frame, node| frame.right.push(node))
    }

    fn insert_sibling<F>(self, node: S::Node, insert: F) -> Result<Self>
    where
        F: FnOnce(&mut Context<S::Node>, S::Node),
    {
        if self.is_top() {
            return Err(ZipperError::InsertAtTop);
        }
        let (shape, focus, mut context) = self.split().map_err(|_| ZipperError::InsertAtTop)?;
        let frame = Arc::make_mut(&mut context);
        insert(frame, node);
        frame.dirty = true;
        debug!("inserted sibling at depth {}", frame.ancestors().count());
        Ok(Self::at(shape, focus, context))
    }

    /// Make `node` the first child of the focus, without moving
    pub fn insert_child(self, node: S::Node) -> Result<Self> {
        let mut children = self.children().ok_or(ZipperError::NotABranch)?;
        children.insert(0, node);
        let rebuilt = self.shape.make_node(&self.focus, children);
        debug!("inserted first child at depth {}", self.depth());
        Ok(self.replace(rebuilt))
    }

    /// Make `node` the last child of the focus, without moving
    pub fn append_child(self, node: S::Node) -> Result<Self> {
        let mut children = self.children().ok_or(ZipperError::NotABranch)?;
        children.push(node);
        let rebuilt = self.shape.make_node(&self.focus, children);
        debug!("appended child at depth {}", self.depth());
        Ok(self.replace(rebuilt))
    }

    /// Remove the focus
    ///
    /// The cursor lands on the node that preceded the removed one in a
    /// depth-first walk. When the removed node was the first child, that is
    /// the parent, rebuilt without it.
    ///
    /// # Errors
    /// Returns [`ZipperError::RemoveAtTop`] at the root level and at the end
    /// marker.
    pub fn remove(self) -> Result<Self> {
        if self.is_top() {
            return Err(ZipperError::RemoveAtTop);
        }
        let (shape, _removed, context) = self.split().map_err(|_| ZipperError::RemoveAtTop)?;
        let (mut left, right, up, _) = Arc::unwrap_or_clone(context).into_parts();
        let Some(Parent { node, context }) = up else {
            return Err(ZipperError::RemoveAtTop);
        };

        match left.pop() {
            None => {
                let children: Vec<_> = right.into_iter().rev().collect();
                debug!(
                    "removed first child, collapsing into parent with {} children",
                    children.len()
                );
                let rebuilt = shape.make_node(&node, children);
                Ok(Self::at(shape, rebuilt, mark_dirty(context)))
            }
            Some(sibling) => {
                debug!("removed node, moving to the end of its left sibling");
                let frame = Context {
                    left,
                    right,
                    up: Some(Parent { node, context }),
                    dirty: true,
                };
                Ok(Self::at(shape, sibling, Arc::new(frame)).last_descendant())
            }
        }
    }
}

/// Flag a frame for rebuild, copying it first if another cursor shares it
fn mark_dirty<N: Clone>(mut context: Arc<Context<N>>) -> Arc<Context<N>> {
    if !context.dirty {
        Arc::make_mut(&mut context).dirty = true;
    }
    context
}

impl<S: TreeShape> Clone for Zipper<S> {
    fn clone(&self) -> Self {
        Self {
            shape: Arc::clone(&self.shape),
            focus: self.focus.clone(),
            location: self.location.clone(),
        }
    }
}

impl<S: TreeShape> PartialEq for Zipper<S>
where
    S::Node: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.focus == other.focus && self.location == other.location
    }
}

impl<S: TreeShape> fmt::Debug for Zipper<S>
where
    S::Node: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Zipper")
            .field("focus", &self.focus)
            .field("depth", &self.depth())
            .field("dirty", &self.is_dirty())
            .field("end", &self.is_end())
            .finish()
    }
}

impl<S: TreeShape> IntoIterator for Zipper<S> {
    type Item = S::Node;
    type IntoIter = DepthFirst<S>;

    fn into_iter(self) -> Self::IntoIter {
        DepthFirst::new(self)
    }
}
