//! Balanced binary Merkle tree over an ordered sequence of data blocks.
//!
//! Leaves hash the raw blocks; every internal node hashes the hex text of
//! its two children's hashes:
//!
//! `leaf = H(block)`
//! `node = H(hex(left) || hex(right))`
//!
//! The input is padded with copies of its last block up to the next power of
//! two, so every tree is perfect and two trees built from equally long
//! inputs always have the same shape. Comparing two such trees walks them in
//! lock-step and reports the leaf blocks whose hashes differ.

#![warn(missing_docs)]

mod builder;
mod compare;
mod error;
mod hash;
mod node;
mod tree;
#[cfg(feature = "visualize")]
mod visualize;

#[cfg(test)]
mod tests;

pub use builder::build;
pub use compare::{
    diff, find_mismatches, is_equal, DiffStats, LeafMismatch, MismatchSearch, TreeDiff,
};
pub use error::{Error, Result};
pub use hash::{
    Blake3Hasher, CryptoHash, Sha256Hasher, TreeHasher, HASH_HEX_LENGTH, HASH_LENGTH,
};
pub use node::{InternalNode, Leaf, Node};
pub use tree::{Leaves, MerkleTree};
