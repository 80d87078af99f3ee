//! Bottom-up construction of a perfect Merkle tree from data blocks.

use log::{debug, trace};

use crate::{
    hash::{Sha256Hasher, TreeHasher},
    node::{InternalNode, Leaf, Node},
    tree::MerkleTree,
    Error, Result,
};

/// Build a tree over `blocks` with the default SHA-256 hasher.
///
/// Shorthand for [`MerkleTree::build`].
pub fn build<B: AsRef<[u8]>>(blocks: &[B]) -> Result<MerkleTree> {
    build_with_hasher::<Sha256Hasher, B>(blocks)
}

/// Build a tree over `blocks`, hashing every node with `H`.
///
/// The last block is copied until the leaf count reaches the next power of
/// two. Fails with [`Error::InvalidInput`] when `blocks` is empty.
pub(crate) fn build_with_hasher<H: TreeHasher, B: AsRef<[u8]>>(blocks: &[B]) -> Result<MerkleTree> {
    let Some(last) = blocks.last() else {
        return Err(Error::InvalidInput(
            "cannot build a tree from zero blocks".to_string(),
        ));
    };

    let block_count = blocks.len();
    let leaf_count = block_count.next_power_of_two();
    if leaf_count > block_count {
        trace!(
            "padding {} blocks with {} copies of the last block",
            block_count,
            leaf_count - block_count
        );
    }

    // Each padding leaf is hashed on its own, like any other block.
    let mut leaves: Vec<Node> = Vec::with_capacity(leaf_count);
    leaves.extend(
        blocks
            .iter()
            .map(|block| Node::Leaf(Leaf::new::<H>(block.as_ref().to_vec()))),
    );
    leaves.extend(
        (block_count..leaf_count).map(|_| Node::Leaf(Leaf::new::<H>(last.as_ref().to_vec()))),
    );

    let root = combine::<H>(leaves);
    let tree = MerkleTree::from_parts(root, block_count, leaf_count);
    debug!(
        "built merkle tree: {} blocks, {} leaves, depth {}, root {}",
        tree.block_count(),
        tree.leaf_count(),
        tree.depth(),
        &tree.root_hash_hex()[..8]
    );
    Ok(tree)
}

/// Recursively pair up a run of nodes into a single subtree.
///
/// `nodes` is never empty and, since the run is always padded to a power of
/// two, both halves of every split have equal length.
fn combine<H: TreeHasher>(mut nodes: Vec<Node>) -> Node {
    match nodes.len() {
        1 => nodes.remove(0),
        2 => {
            let right = nodes.remove(1);
            let left = nodes.remove(0);
            Node::Internal(InternalNode::new::<H>(left, right))
        }
        len => {
            let right_half = nodes.split_off(len / 2);
            let left = combine::<H>(nodes);
            let right = combine::<H>(right_half);
            Node::Internal(InternalNode::new::<H>(left, right))
        }
    }
}
