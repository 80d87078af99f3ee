use core::fmt;
use std::io::{Result, Write};

use merkle_diff_visualize::{to_hex, DebugBytes, Drawer, Visualize};

use crate::{
    compare::{LeafMismatch, TreeDiff},
    node::{InternalNode, Leaf, Node},
    tree::MerkleTree,
};

impl fmt::Debug for Leaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Leaf")
            .field("block", &DebugBytes(self.block().to_vec()))
            .field("hash", &hex::encode(self.hash()))
            .finish()
    }
}

impl fmt::Debug for InternalNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InternalNode")
            .field("left", self.left())
            .field("right", self.right())
            .field("payload", &DebugBytes(self.payload().to_vec()))
            .field("hash", &hex::encode(self.hash()))
            .finish()
    }
}

impl Visualize for Leaf {
    fn visualize<W: Write>(&self, mut drawer: Drawer<W>) -> Result<Drawer<W>> {
        drawer.write(format!("leaf {}: ", to_hex(&self.hash())).as_bytes())?;
        self.block().visualize(drawer)
    }
}

impl Visualize for Node {
    fn visualize<W: Write>(&self, mut drawer: Drawer<W>) -> Result<Drawer<W>> {
        match self {
            Node::Leaf(leaf) => leaf.visualize(drawer),
            Node::Internal(inner) => {
                drawer.write(format!("node {}", to_hex(&inner.hash())).as_bytes())?;
                drawer.down();
                for child in [inner.left(), inner.right()] {
                    drawer.newline()?;
                    drawer = child.visualize(drawer)?;
                }
                drawer.up();
                Ok(drawer)
            }
        }
    }
}

impl Visualize for MerkleTree {
    fn visualize<W: Write>(&self, mut drawer: Drawer<W>) -> Result<Drawer<W>> {
        drawer.write(
            format!(
                "merkle tree: {} blocks, {} leaves, depth {}",
                self.block_count(),
                self.leaf_count(),
                self.depth()
            )
            .as_bytes(),
        )?;
        drawer.newline()?;
        self.root().visualize(drawer)
    }
}

impl Visualize for LeafMismatch<'_> {
    fn visualize<W: Write>(&self, mut drawer: Drawer<W>) -> Result<Drawer<W>> {
        drawer.write(format!("#{}: ", self.index).as_bytes())?;
        drawer = self.left.visualize(drawer)?;
        drawer.write(b" <> ")?;
        self.right.visualize(drawer)
    }
}

impl Visualize for TreeDiff<'_> {
    fn visualize<W: Write>(&self, mut drawer: Drawer<W>) -> Result<Drawer<W>> {
        drawer.write(
            format!(
                "diff: {} mismatches ({} leaf pairs visited, {} subtrees pruned)",
                self.mismatches.len(),
                self.stats.leaf_pairs_visited,
                self.stats.subtrees_pruned
            )
            .as_bytes(),
        )?;
        drawer.down();
        for mismatch in &self.mismatches {
            drawer.newline()?;
            drawer = mismatch.visualize(drawer)?;
        }
        drawer.up();
        Ok(drawer)
    }
}
