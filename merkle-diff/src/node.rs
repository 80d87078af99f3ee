use crate::hash::{combine_hashes, leaf_hash, CryptoHash, TreeHasher};

/// A node of a built tree.
///
/// Nodes are only produced by the builder and are never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Terminal node holding one data block.
    Leaf(Leaf),
    /// Node combining two owned subtrees.
    Internal(InternalNode),
}

/// A data block together with its hash.
#[cfg_attr(not(feature = "visualize"), derive(Debug))]
#[derive(Clone, PartialEq, Eq)]
pub struct Leaf {
    block: Vec<u8>,
    hash: CryptoHash,
}

/// Two owned subtrees, their concatenated payload, and the combined hash.
#[cfg_attr(not(feature = "visualize"), derive(Debug))]
#[derive(Clone, PartialEq, Eq)]
pub struct InternalNode {
    left: Box<Node>,
    right: Box<Node>,
    payload: Vec<u8>,
    hash: CryptoHash,
}

impl Leaf {
    pub(crate) fn new<H: TreeHasher>(block: Vec<u8>) -> Self {
        let hash = leaf_hash::<H>(&block);
        Leaf { block, hash }
    }

    /// The original data block.
    pub fn block(&self) -> &[u8] {
        &self.block
    }

    /// `H(block)`.
    pub fn hash(&self) -> CryptoHash {
        self.hash
    }
}

impl InternalNode {
    /// Join two subtrees. Takes ownership of both.
    pub(crate) fn new<H: TreeHasher>(left: Node, right: Node) -> Self {
        let hash = combine_hashes::<H>(&left.hash(), &right.hash());
        let mut payload = Vec::with_capacity(left.payload().len() + right.payload().len());
        payload.extend_from_slice(left.payload());
        payload.extend_from_slice(right.payload());
        InternalNode {
            left: Box::new(left),
            right: Box::new(right),
            payload,
            hash,
        }
    }

    /// Left subtree.
    pub fn left(&self) -> &Node {
        &self.left
    }

    /// Right subtree.
    pub fn right(&self) -> &Node {
        &self.right
    }

    /// Concatenation of every block below this node, in leaf order.
    ///
    /// Kept for diagnostics only; it plays no part in hashing.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// `H(hex(left) || hex(right))`.
    pub fn hash(&self) -> CryptoHash {
        self.hash
    }

    #[cfg(test)]
    pub(crate) fn with_payload(mut self, payload: Vec<u8>) -> Self {
        self.payload = payload;
        self
    }
}

impl Node {
    /// Hash of this node.
    pub fn hash(&self) -> CryptoHash {
        match self {
            Node::Leaf(leaf) => leaf.hash,
            Node::Internal(node) => node.hash,
        }
    }

    /// Hash of this node as 64 lowercase hex characters.
    pub fn hash_hex(&self) -> String {
        hex::encode(self.hash())
    }

    /// The block of a leaf, or the concatenated blocks below an internal
    /// node.
    pub fn payload(&self) -> &[u8] {
        match self {
            Node::Leaf(leaf) => &leaf.block,
            Node::Internal(node) => &node.payload,
        }
    }

    /// Whether this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }
}
