//! Lock-step comparison of two trees of the same shape.
//!
//! Both trees must have the same leaf count. Since every tree is padded to a
//! power of two, equal leaf counts imply identical shapes, and the walk can
//! always pair a node of one tree with the node at the same position in the
//! other.

use log::debug;

use crate::{node::Node, tree::MerkleTree, Error, Result};

/// How [`diff`] walks the two trees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MismatchSearch {
    /// Visit every leaf pair.
    #[default]
    Full,
    /// Skip subtrees whose combined hashes are equal.
    ///
    /// Produces the same mismatch list as [`MismatchSearch::Full`].
    Pruned,
}

/// One pair of leaves whose hashes differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeafMismatch<'a> {
    /// Position of the leaf in the padded sequence. Positions at or past the
    /// tree's block count are padding.
    pub index: usize,
    /// Block from the left-hand tree.
    pub left: &'a [u8],
    /// Block from the right-hand tree.
    pub right: &'a [u8],
}

/// Counters collected while walking two trees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffStats {
    /// Leaf pairs whose hashes were compared.
    pub leaf_pairs_visited: usize,
    /// Subtree pairs skipped because their hashes matched.
    pub subtrees_pruned: usize,
}

/// Result of [`diff`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeDiff<'a> {
    /// Mismatching leaf pairs, left to right.
    pub mismatches: Vec<LeafMismatch<'a>>,
    /// Walk statistics.
    pub stats: DiffStats,
}

impl<'a> TreeDiff<'a> {
    /// Whether the trees hold identical leaves.
    pub fn is_empty(&self) -> bool {
        self.mismatches.is_empty()
    }

    /// Number of mismatching leaf pairs.
    pub fn len(&self) -> usize {
        self.mismatches.len()
    }

    /// The mismatches as `(left, right)` block pairs.
    pub fn pairs(&self) -> Vec<(&'a [u8], &'a [u8])> {
        self.mismatches.iter().map(|m| (m.left, m.right)).collect()
    }
}

fn check_shape(a: &MerkleTree, b: &MerkleTree) -> Result<()> {
    if a.leaf_count() != b.leaf_count() {
        return Err(Error::ShapeMismatch {
            left_leaves: a.leaf_count(),
            right_leaves: b.leaf_count(),
        });
    }
    Ok(())
}

/// Whether two trees are equal: same root hash and, recursively, equal
/// children.
///
/// Fails with [`Error::ShapeMismatch`] when the trees have different leaf
/// counts.
pub fn is_equal(a: &MerkleTree, b: &MerkleTree) -> Result<bool> {
    check_shape(a, b)?;
    nodes_equal(a.root(), b.root(), a.leaf_count(), b.leaf_count())
}

fn nodes_equal(a: &Node, b: &Node, left_leaves: usize, right_leaves: usize) -> Result<bool> {
    match (a, b) {
        (Node::Leaf(a), Node::Leaf(b)) => Ok(a.hash() == b.hash()),
        (Node::Internal(a), Node::Internal(b)) => Ok(a.hash() == b.hash()
            && nodes_equal(a.left(), b.left(), left_leaves, right_leaves)?
            && nodes_equal(a.right(), b.right(), left_leaves, right_leaves)?),
        _ => Err(Error::ShapeMismatch {
            left_leaves,
            right_leaves,
        }),
    }
}

/// Leaf blocks whose hashes differ between `a` and `b`, as `(a, b)` pairs in
/// left-to-right leaf order.
///
/// Every leaf pair is visited. Padding leaves are compared like any other,
/// so a differing last block may be reported more than once.
pub fn find_mismatches<'a>(
    a: &'a MerkleTree,
    b: &'a MerkleTree,
) -> Result<Vec<(&'a [u8], &'a [u8])>> {
    Ok(diff(a, b, MismatchSearch::Full)?.pairs())
}

/// Compare two trees and report every mismatching leaf pair with its
/// position, plus walk statistics.
pub fn diff<'a>(
    a: &'a MerkleTree,
    b: &'a MerkleTree,
    search: MismatchSearch,
) -> Result<TreeDiff<'a>> {
    check_shape(a, b)?;

    let mut walker = Walker {
        search,
        left_leaves: a.leaf_count(),
        right_leaves: b.leaf_count(),
        result: TreeDiff::default(),
    };
    walker.walk(a.root(), b.root(), 0, a.leaf_count())?;

    let result = walker.result;
    debug!(
        "diff ({:?}): {} mismatches, {} leaf pairs visited, {} subtrees pruned",
        search,
        result.mismatches.len(),
        result.stats.leaf_pairs_visited,
        result.stats.subtrees_pruned
    );
    Ok(result)
}

struct Walker<'a> {
    search: MismatchSearch,
    left_leaves: usize,
    right_leaves: usize,
    result: TreeDiff<'a>,
}

impl<'a> Walker<'a> {
    /// `first_leaf` is the position of the leftmost leaf under `a`/`b`, and
    /// `width` the number of leaves under them.
    fn walk(&mut self, a: &'a Node, b: &'a Node, first_leaf: usize, width: usize) -> Result<()> {
        match (a, b) {
            (Node::Leaf(a), Node::Leaf(b)) => {
                self.result.stats.leaf_pairs_visited += 1;
                if a.hash() != b.hash() {
                    self.result.mismatches.push(LeafMismatch {
                        index: first_leaf,
                        left: a.block(),
                        right: b.block(),
                    });
                }
            }
            (Node::Internal(a), Node::Internal(b)) => {
                if self.search == MismatchSearch::Pruned && a.hash() == b.hash() {
                    self.result.stats.subtrees_pruned += 1;
                    return Ok(());
                }
                let half = width / 2;
                self.walk(a.left(), b.left(), first_leaf, half)?;
                self.walk(a.right(), b.right(), first_leaf + half, half)?;
            }
            _ => {
                return Err(Error::ShapeMismatch {
                    left_leaves: self.left_leaves,
                    right_leaves: self.right_leaves,
                });
            }
        }
        Ok(())
    }
}
