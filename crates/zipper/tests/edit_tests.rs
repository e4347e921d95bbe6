use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use pretty_assertions::assert_eq;
use rose::{rose, Node, RoseShape};
use zipper::{TreeShape, Zipper, ZipperError};

const SCENARIO: &str = "(42 (1337 foo bar) (2112 (90125 baz qux quux) quuz) corge)";

fn scenario() -> Node<String> {
    rose(SCENARIO).unwrap()
}

fn leaf(text: &str) -> Node<String> {
    Node::leaf(text.to_string())
}

/// Rose shape that counts every rebuild
#[derive(Default)]
struct Counting {
    inner: RoseShape<String>,
    rebuilds: AtomicUsize,
}

impl Counting {
    fn rebuilds(&self) -> usize {
        self.rebuilds.load(Ordering::SeqCst)
    }
}

impl TreeShape for Counting {
    type Node = Node<String>;

    fn is_branch(&self, node: &Self::Node) -> bool {
        self.inner.is_branch(node)
    }

    fn children(&self, node: &Self::Node) -> Vec<Self::Node> {
        self.inner.children(node)
    }

    fn make_node(&self, node: &Self::Node, children: Vec<Self::Node>) -> Self::Node {
        self.rebuilds.fetch_add(1, Ordering::SeqCst);
        self.inner.make_node(node, children)
    }
}

fn counting() -> (Arc<Counting>, Zipper<Counting>) {
    let shape = Arc::new(Counting::default());
    let z = Zipper::from_arc(Arc::clone(&shape), scenario());
    (shape, z)
}

#[test]
fn test_remove_leftmost_child_collapses_into_parent() {
    let z = scenario().zipper().down().unwrap().down().unwrap();
    assert_eq!(z.focus().data, "foo");

    let z = z.remove().unwrap();
    assert_eq!(z.focus().to_string(), "1337[bar]");
    assert_eq!(z.depth(), 1);
    assert_eq!(
        z.root().to_string(),
        "42[1337[bar], 2112[90125[baz, qux, quux], quuz], corge]"
    );
}

#[test]
fn test_remove_leftmost_top_level_child() {
    let z = scenario().zipper().down().unwrap();
    assert_eq!(z.focus().data, "1337");

    let z = z.remove().unwrap();
    assert!(z.is_top());
    assert_eq!(
        z.focus().to_string(),
        "42[2112[90125[baz, qux, quux], quuz], corge]"
    );
    assert_eq!(
        z.root().to_string(),
        "42[2112[90125[baz, qux, quux], quuz], corge]"
    );
}

#[test]
fn test_remove_rightmost_top_level_child() {
    let z = scenario().zipper().down().unwrap().rightmost();
    assert_eq!(z.focus().data, "corge");

    let z = z.remove().unwrap();
    // Lands on the last node of 2112's subtree, which preceded corge
    assert_eq!(z.focus().data, "quuz");
    assert_eq!(
        z.root().to_string(),
        "42[1337[foo, bar], 2112[90125[baz, qux, quux], quuz]]"
    );
}

#[test]
fn test_remove_matches_prev() {
    let z = scenario()
        .zipper()
        .down()
        .and_then(|z| z.right())
        .and_then(|z| z.down())
        .and_then(|z| z.right())
        .unwrap();
    assert_eq!(z.focus().data, "quuz");

    let expected = z.clone().prev().unwrap();
    let removed = z.remove().unwrap();
    assert_eq!(removed.focus(), expected.focus());
    assert_eq!(removed.focus().data, "quux");
}

#[test]
fn test_remove_root_is_an_error() {
    let err = scenario().zipper().remove().unwrap_err();
    assert_eq!(err, ZipperError::RemoveAtTop);
    assert_eq!(err.to_string(), "cannot remove the root of the tree");
}

#[test]
fn test_remove_every_child_leaves_empty_container() {
    let mut z = rose("(root a b c)").unwrap().zipper().down().unwrap();
    for _ in 0..3 {
        z = z.remove().unwrap();
        z = match z.clone().down() {
            Some(child) => child,
            None => break,
        };
    }
    assert!(z.is_top());
    let root = z.root();
    assert!(root.is_container());
    assert!(root.children.is_empty());
}

#[test]
fn test_edit_leaf_changes_one_value() {
    let z = scenario()
        .zipper()
        .down()
        .and_then(|z| z.right())
        .and_then(|z| z.down())
        .and_then(|z| z.down())
        .unwrap();
    let root = z
        .edit(|n| Node::leaf(format!("{}!", n.data)))
        .root();

    insta::assert_snapshot!(
        root.to_string(),
        @"42[1337[foo, bar], 2112[90125[baz!, qux, quux], quuz], corge]"
    );
}

#[test]
fn test_edit_at_root_replaces_tree() {
    let z = scenario().zipper().edit(|_| leaf("gone"));
    assert!(z.is_dirty());
    assert_eq!(z.root(), leaf("gone"));
}

#[test]
fn test_single_edit_rebuilds_each_ancestor_once() {
    let (shape, z) = counting();
    let z = z
        .down()
        .and_then(|z| z.right())
        .and_then(|z| z.down())
        .and_then(|z| z.down())
        .unwrap()
        .replace(leaf("BAZ"));
    assert_eq!(shape.rebuilds(), 0);

    let root = z.root();
    assert_eq!(shape.rebuilds(), 3);
    assert_eq!(
        root.to_string(),
        "42[1337[foo, bar], 2112[90125[BAZ, qux, quux], quuz], corge]"
    );
}

#[test]
fn test_sibling_edits_share_rebuilds() {
    let (shape, z) = counting();
    let root = z
        .down()
        .and_then(|z| z.right())
        .and_then(|z| z.down())
        .and_then(|z| z.down())
        .unwrap()
        .replace(leaf("BAZ"))
        .right()
        .unwrap()
        .replace(leaf("QUX"))
        .right()
        .unwrap()
        .replace(leaf("QUUX"))
        .root();

    assert_eq!(shape.rebuilds(), 3);
    assert_eq!(
        root.to_string(),
        "42[1337[foo, bar], 2112[90125[BAZ, QUX, QUUX], quuz], corge]"
    );
}

#[test]
fn test_walk_without_edits_never_rebuilds() {
    let (shape, z) = counting();
    let mut z = z;
    while !z.is_end() {
        z = z.next();
    }
    assert_eq!(shape.rebuilds(), 0);
    assert_eq!(z.into_focus(), scenario());
}

#[test]
fn test_walk_rebuilds_only_dirty_levels() {
    let (shape, z) = counting();
    // Edit foo, then let next() carry the cursor out through 1337 and 42
    let mut z = z.down().unwrap().down().unwrap().replace(leaf("FOO"));
    while !z.is_end() {
        z = z.next();
    }
    assert_eq!(shape.rebuilds(), 2);
    assert_eq!(
        z.into_focus().to_string(),
        "42[1337[FOO, bar], 2112[90125[baz, qux, quux], quuz], corge]"
    );
}

#[test]
fn test_insert_siblings_and_children() {
    let z = scenario()
        .zipper()
        .down()
        .unwrap()
        .insert_left(leaf("first"))
        .unwrap()
        .insert_right(leaf("second"))
        .unwrap()
        .append_child(leaf("baz"))
        .unwrap()
        .insert_child(leaf("zero"))
        .unwrap();

    assert_eq!(z.focus().to_string(), "1337[zero, foo, bar, baz]");
    assert_eq!(
        z.root().to_string(),
        "42[first, 1337[zero, foo, bar, baz], second, 2112[90125[baz, qux, quux], quuz], corge]"
    );
}

#[test]
fn test_insert_errors() {
    let top = scenario().zipper();
    assert_eq!(
        top.clone().insert_right(leaf("x")).unwrap_err(),
        ZipperError::InsertAtTop
    );

    let corge = top.down().unwrap().rightmost();
    assert_eq!(
        corge.insert_child(leaf("x")).unwrap_err(),
        ZipperError::NotABranch
    );
}

#[test]
fn test_retained_snapshot_survives_edits() {
    let z = scenario().zipper().down().unwrap();
    let snapshot = z.clone();

    let edited = z.replace(leaf("x")).remove().unwrap().root();

    assert_eq!(
        edited.to_string(),
        "42[2112[90125[baz, qux, quux], quuz], corge]"
    );
    assert_eq!(snapshot.focus().data, "1337");
    assert_eq!(snapshot.root(), scenario());
}
