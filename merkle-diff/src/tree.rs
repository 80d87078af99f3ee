use crate::{
    builder::build_with_hasher,
    hash::{combine_hashes, leaf_hash, CryptoHash, Sha256Hasher, TreeHasher},
    node::{Leaf, Node},
    Error, Result,
};

/// A perfect binary Merkle tree built from an ordered sequence of blocks.
///
/// The leaf count is always a power of two: the input is padded with copies
/// of its last block. The tree is immutable; build a new one to reflect new
/// data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerkleTree {
    root: Node,
    block_count: usize,
    leaf_count: usize,
}

impl MerkleTree {
    /// Build a tree over `blocks` using SHA-256.
    pub fn build<B: AsRef<[u8]>>(blocks: &[B]) -> Result<Self> {
        build_with_hasher::<Sha256Hasher, B>(blocks)
    }

    /// Build a tree over `blocks` using the digest `H`.
    ///
    /// Two trees are only meaningfully comparable when built with the same
    /// hasher.
    pub fn build_with<H: TreeHasher, B: AsRef<[u8]>>(blocks: &[B]) -> Result<Self> {
        build_with_hasher::<H, B>(blocks)
    }

    pub(crate) fn from_parts(root: Node, block_count: usize, leaf_count: usize) -> Self {
        Self {
            root,
            block_count,
            leaf_count,
        }
    }

    /// Root node.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Root hash.
    pub fn root_hash(&self) -> CryptoHash {
        self.root.hash()
    }

    /// Root hash as 64 lowercase hex characters.
    pub fn root_hash_hex(&self) -> String {
        self.root.hash_hex()
    }

    /// Number of blocks the tree was built from, before padding.
    pub fn block_count(&self) -> usize {
        self.block_count
    }

    /// Number of leaves, padding included. Always a power of two.
    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// Number of padding leaves appended after the original blocks.
    pub fn padding_count(&self) -> usize {
        self.leaf_count - self.block_count
    }

    /// Distance from the root to every leaf.
    pub fn depth(&self) -> u32 {
        self.leaf_count.trailing_zeros()
    }

    /// Total number of nodes, leaves and internal nodes together.
    pub fn node_count(&self) -> usize {
        2 * self.leaf_count - 1
    }

    /// Leaves in order, padding included.
    pub fn leaves(&self) -> Leaves<'_> {
        Leaves {
            stack: vec![&self.root],
        }
    }

    /// Recompute every hash and payload with `H` and check them against the
    /// stored values.
    ///
    /// Also checks that the tree is perfect and that the leaf count matches.
    /// Returns [`Error::CorruptedTree`] on the first disagreement.
    pub fn verify<H: TreeHasher>(&self) -> Result<()> {
        let mut leaves_seen = 0usize;
        verify_node::<H>(&self.root, 0, self.depth(), &mut leaves_seen)?;
        if leaves_seen != self.leaf_count {
            return Err(Error::CorruptedTree(format!(
                "expected {} leaves, found {}",
                self.leaf_count, leaves_seen
            )));
        }
        Ok(())
    }
}

fn verify_node<H: TreeHasher>(
    node: &Node,
    level: u32,
    depth: u32,
    leaves_seen: &mut usize,
) -> Result<()> {
    match node {
        Node::Leaf(leaf) => {
            if level != depth {
                return Err(Error::CorruptedTree(format!(
                    "leaf {} at level {}, expected level {}",
                    leaves_seen, level, depth
                )));
            }
            let expected = leaf_hash::<H>(leaf.block());
            if expected != leaf.hash() {
                return Err(Error::CorruptedTree(format!(
                    "leaf {} hash mismatch: stored {}, computed {}",
                    leaves_seen,
                    hex::encode(leaf.hash()),
                    hex::encode(expected)
                )));
            }
            *leaves_seen += 1;
        }
        Node::Internal(inner) => {
            if level >= depth {
                return Err(Error::CorruptedTree(format!(
                    "internal node below leaf level {}",
                    depth
                )));
            }
            verify_node::<H>(inner.left(), level + 1, depth, leaves_seen)?;
            verify_node::<H>(inner.right(), level + 1, depth, leaves_seen)?;

            let expected = combine_hashes::<H>(&inner.left().hash(), &inner.right().hash());
            if expected != inner.hash() {
                return Err(Error::CorruptedTree(format!(
                    "internal node at level {} hash mismatch: stored {}, computed {}",
                    level,
                    hex::encode(inner.hash()),
                    hex::encode(expected)
                )));
            }
            let left_payload = inner.left().payload();
            let right_payload = inner.right().payload();
            let payload = inner.payload();
            if payload.len() != left_payload.len() + right_payload.len()
                || !payload.starts_with(left_payload)
                || !payload.ends_with(right_payload)
            {
                return Err(Error::CorruptedTree(format!(
                    "internal node at level {} payload is not the concatenation of its children",
                    level
                )));
            }
        }
    }
    Ok(())
}

/// In-order iterator over the leaves of a [`MerkleTree`].
#[derive(Debug, Clone)]
pub struct Leaves<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Leaves<'a> {
    type Item = &'a Leaf;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            match node {
                Node::Leaf(leaf) => return Some(leaf),
                Node::Internal(inner) => {
                    self.stack.push(inner.right());
                    self.stack.push(inner.left());
                }
            }
        }
        None
    }
}
