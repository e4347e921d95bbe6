//! Walks, edits and prunes a small tree, logging each step
//!
//! Usage:
//!   RUST_LOG=trace cargo run -p zipper --example walk
//!
//! Set `RUST_LOG=trace` to see which ascents rebuild a parent and which
//! simply restore it.

use anyhow::{anyhow, Result};
use log::info;
use rose::{rose, Node};

fn main() -> Result<()> {
    env_logger::init();

    let tree = rose("(42 (1337 foo bar) (2112 (90125 baz qux quux) quuz) corge)")?;
    println!("Tree: {}", tree);
    println!();

    // Pre-order walk, printed as an indented outline
    let mut z = tree.clone().zipper();
    while !z.is_end() {
        println!("{:indent$}{}", "", z.focus().data, indent = z.depth() * 2);
        z = z.next();
    }
    println!();

    // Edit a deep leaf and climb back out
    let z = tree
        .clone()
        .zipper()
        .down()
        .and_then(|z| z.right())
        .and_then(|z| z.down())
        .and_then(|z| z.down())
        .ok_or_else(|| anyhow!("tree is missing the 90125 subtree"))?;
    let path: Vec<_> = z.path().into_iter().map(|n| n.data.as_str()).collect();
    info!("editing {} under {:?}", z.focus().data, path);
    let edited = z.edit(|n| Node::leaf(n.data.to_uppercase())).root();
    println!("Edited: {}", edited);

    // Remove every leaf named with a "q"
    let mut z = tree.zipper();
    while !z.is_end() {
        z = if z.focus().is_leaf() && z.focus().data.starts_with('q') {
            info!("removing {}", z.focus().data);
            z.remove()?.next()
        } else {
            z.next()
        };
    }
    println!("Pruned: {}", z.into_focus());

    Ok(())
}
