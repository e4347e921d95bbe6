use derive_more::Display;

/// Precondition violations raised by structural edits
///
/// Moves that run off the edge of the tree are not errors; they return
/// `None`. Only edits that cannot be expressed at the current position fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ZipperError {
    /// `remove` was called with no enclosing context (at the root, or at the end marker)
    #[display(fmt = "cannot remove the root of the tree")]
    RemoveAtTop,

    /// A sibling insertion was attempted at the root-level context
    #[display(fmt = "cannot insert a sibling at the root of the tree")]
    InsertAtTop,

    /// A child insertion was attempted on a leaf
    #[display(fmt = "cannot insert a child into a leaf")]
    NotABranch,
}

impl std::error::Error for ZipperError {}

/// Result type alias for zipper edits
pub type Result<T> = std::result::Result<T, ZipperError>;
