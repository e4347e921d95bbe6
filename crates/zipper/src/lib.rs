//! Zipper - an immutable-update cursor over any rooted tree
//!
//! A [`Zipper`] focuses on one node of a tree and remembers how to get back
//! out: the siblings around the focus and the chain of parents above it. Local
//! moves and edits are cheap, and ancestors are rebuilt lazily, only when the
//! cursor climbs back past a level that actually changed.
//!
//! The zipper never assumes a node representation. Callers describe their
//! tree through [`TreeShape`] (or three closures via [`zipper()`]):
//!
//! - `is_branch` - can this node have children?
//! - `children` - the ordered children of a branch
//! - `make_node` - rebuild a branch around a new child list
//!
//! # Example
//!
//! ```
//! use zipper::zipper;
//!
//! // Strings as trees: a string longer than one char is a branch of its chars.
//! let z = zipper(
//!     |s: &String| s.chars().count() > 1,
//!     |s: &String| s.chars().map(String::from).collect(),
//!     |_: &String, cs: Vec<String>| cs.concat(),
//!     "abc".to_string(),
//! );
//!
//! let walked: Vec<String> = z.iter().collect();
//! assert_eq!(walked, vec!["abc", "a", "b", "c"]);
//!
//! let shouted = z.down().unwrap().edit(|s| s.to_uppercase()).root();
//! assert_eq!(shouted, "Abc");
//! ```

mod context;
mod error;
mod iter;
mod shape;
mod zipper;

pub use error::{Result, ZipperError};
pub use iter::DepthFirst;
pub use shape::{FnShape, TreeShape};
pub use zipper::{zipper, Zipper};
