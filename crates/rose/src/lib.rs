//! Rose tree and s-expression encodings for the zipper
//!
//! Neither encoding is special to the zipper; each simply implements
//! [`zipper::TreeShape`]. They exist so that trees can be written down
//! quickly in tests, demos and small tools.
//!
//! # Example
//!
//! ```
//! use rose::rose;
//!
//! let tree = rose("(42 (1337 foo bar) corge)").unwrap();
//! let z = tree.zipper().down().unwrap().down().unwrap();
//! assert_eq!(z.focus().data, "foo");
//!
//! let edited = z.edit(|n| rose::Node::leaf(n.data.to_uppercase())).root();
//! assert_eq!(edited.to_string(), "42[1337[FOO, bar], corge]");
//! ```

mod node;
mod sexp;
mod shape;

pub use node::{Node, NodeKind, Walk};
pub use sexp::{rose, Sexp};
pub use shape::{RoseShape, SexpShape};

/// Re-export common types for convenience
pub mod prelude {
    pub use super::{rose, Node, NodeKind, RoseShape, Sexp, SexpShape};
    pub use zipper::{TreeShape, Zipper};
}
