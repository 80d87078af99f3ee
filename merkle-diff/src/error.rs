use thiserror::Error;

/// Alias for `core::result::Result<T, Error>`.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors from building, checking, or comparing Merkle trees.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum Error {
    /// The builder was handed something it cannot turn into a tree.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The two trees being compared do not have the same shape.
    #[error("shape mismatch: left tree has {left_leaves} leaves, right tree has {right_leaves}")]
    ShapeMismatch {
        /// Leaf count of the left-hand tree.
        left_leaves: usize,
        /// Leaf count of the right-hand tree.
        right_leaves: usize,
    },
    /// A stored hash or payload disagrees with its recomputation.
    #[error("corrupted tree: {0}")]
    CorruptedTree(String),
}
