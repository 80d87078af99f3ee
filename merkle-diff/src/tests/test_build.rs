use assert_matches::assert_matches;

use super::{blocks, sha256, sha256_pair};
use crate::{
    build, Blake3Hasher, Error, InternalNode, Leaf, MerkleTree, Node, Sha256Hasher,
    HASH_HEX_LENGTH,
};

#[test]
fn test_empty_input_is_rejected() {
    let empty: [&[u8]; 0] = [];
    assert_matches!(build(&empty), Err(Error::InvalidInput(_)));
    assert_matches!(
        MerkleTree::build_with::<Blake3Hasher, _>(&empty),
        Err(Error::InvalidInput(_))
    );
}

#[test]
fn test_single_block_is_a_single_leaf() {
    let tree = build(&["x"]).expect("build");
    assert_eq!(tree.leaf_count(), 1);
    assert_eq!(tree.block_count(), 1);
    assert_eq!(tree.padding_count(), 0);
    assert_eq!(tree.depth(), 0);
    assert_eq!(tree.node_count(), 1);

    let Node::Leaf(leaf) = tree.root() else {
        panic!("root of a one-block tree must be a leaf");
    };
    assert_eq!(leaf.block(), b"x");
    assert_eq!(leaf.hash(), sha256(b"x"));
}

#[test]
fn test_leaf_hash_matches_known_sha256_vector() {
    let tree = build(&["abc"]).expect("build");
    assert_eq!(
        tree.root_hash_hex(),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn test_two_blocks_combine_hex_text_of_children() {
    let tree = build(&["left", "right"]).expect("build");
    assert_eq!(tree.leaf_count(), 2);
    assert_eq!(tree.depth(), 1);

    let Node::Internal(root) = tree.root() else {
        panic!("root of a two-block tree must be internal");
    };
    assert!(root.left().is_leaf());
    assert!(root.right().is_leaf());

    let expected = sha256_pair(&sha256(b"left"), &sha256(b"right"));
    assert_eq!(root.hash(), expected);
    // Combining raw digest bytes would give a different hash.
    let mut raw = sha256(b"left").to_vec();
    raw.extend_from_slice(&sha256(b"right"));
    assert_ne!(root.hash(), sha256(&raw));
}

#[test]
fn test_three_blocks_are_padded_to_four() {
    let tree = build(&["first", "second", "third"]).expect("build");
    assert_eq!(tree.block_count(), 3);
    assert_eq!(tree.leaf_count(), 4);
    assert_eq!(tree.padding_count(), 1);
    assert_eq!(tree.depth(), 2);
    assert_eq!(tree.node_count(), 7);

    let leaves: Vec<&[u8]> = tree.leaves().map(|leaf| leaf.block()).collect();
    assert_eq!(
        leaves,
        vec![
            b"first".as_slice(),
            b"second".as_slice(),
            b"third".as_slice(),
            b"third".as_slice()
        ]
    );

    let Node::Internal(root) = tree.root() else {
        panic!("root must be internal");
    };
    let (Node::Internal(left), Node::Internal(right)) = (root.left(), root.right()) else {
        panic!("both children of a four-leaf root must be internal");
    };
    assert_eq!(right.left().hash(), right.right().hash());

    let h_left = sha256_pair(&sha256(b"first"), &sha256(b"second"));
    let h_right = sha256_pair(&sha256(b"third"), &sha256(b"third"));
    assert_eq!(left.hash(), h_left);
    assert_eq!(right.hash(), h_right);
    assert_eq!(tree.root_hash(), sha256_pair(&h_left, &h_right));
}

#[test]
fn test_six_blocks_give_a_perfect_tree_of_eight() {
    let input = blocks(&["a", "b", "c", "d", "e", "f"]);
    let tree = build(&input).expect("build");
    assert_eq!(tree.leaf_count(), 8);
    assert_eq!(tree.depth(), 3);
    assert_eq!(tree.padding_count(), 2);

    fn leaf_depths(node: &Node, depth: u32, out: &mut Vec<u32>) {
        match node {
            Node::Leaf(_) => out.push(depth),
            Node::Internal(inner) => {
                leaf_depths(inner.left(), depth + 1, out);
                leaf_depths(inner.right(), depth + 1, out);
            }
        }
    }
    let mut depths = Vec::new();
    leaf_depths(tree.root(), 0, &mut depths);
    assert_eq!(depths, vec![3; 8]);

    let last_three: Vec<&[u8]> = tree.leaves().skip(5).map(|leaf| leaf.block()).collect();
    assert_eq!(last_three, vec![b"f".as_slice(); 3]);
    tree.verify::<Sha256Hasher>().expect("tree should verify");
}

#[test]
fn test_payload_is_concatenation_of_blocks() {
    let tree = build(&["a", "b", "c"]).expect("build");
    assert_eq!(tree.root().payload(), b"abcc");

    let Node::Internal(root) = tree.root() else {
        panic!("root must be internal");
    };
    assert_eq!(root.left().payload(), b"ab");
    assert_eq!(root.right().payload(), b"cc");
}

#[test]
fn test_build_is_deterministic() {
    let input = blocks(&["one", "two", "three", "four", "five"]);
    let first = build(&input).expect("build");
    let second = MerkleTree::build(&input).expect("build");
    assert_eq!(first, second);
    assert_eq!(first.root_hash(), second.root_hash());
}

#[test]
fn test_every_hash_is_64_lowercase_hex_chars() {
    let tree = build(&blocks(&["a", "b", "c", "d", "e"])).expect("build");

    fn check(node: &Node) {
        let rendered = node.hash_hex();
        assert_eq!(rendered.len(), HASH_HEX_LENGTH);
        assert!(rendered
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
        if let Node::Internal(inner) = node {
            check(inner.left());
            check(inner.right());
        }
    }
    check(tree.root());
}

#[test]
fn test_blake3_hasher_builds_a_different_tree() {
    let input = blocks(&["first", "second", "third"]);
    let sha_tree = build(&input).expect("build");
    let blake_tree = MerkleTree::build_with::<Blake3Hasher, _>(&input).expect("build");

    assert_eq!(sha_tree.leaf_count(), blake_tree.leaf_count());
    assert_ne!(sha_tree.root_hash(), blake_tree.root_hash());

    let first_leaf = blake_tree.leaves().next().expect("has leaves");
    assert_eq!(first_leaf.hash(), *blake3::hash(b"first").as_bytes());

    blake_tree
        .verify::<Blake3Hasher>()
        .expect("blake3 tree verifies with blake3");
    assert_matches!(
        blake_tree.verify::<Sha256Hasher>(),
        Err(Error::CorruptedTree(_))
    );
}

#[test]
fn test_empty_blocks_are_valid_input() {
    let tree = build(&["", ""]).expect("build");
    assert_eq!(tree.leaf_count(), 2);
    assert_eq!(tree.root().payload(), b"");
    tree.verify::<Sha256Hasher>().expect("verify");
}

fn sha_leaf(block: &str) -> Node {
    Node::Leaf(Leaf::new::<Sha256Hasher>(block.as_bytes().to_vec()))
}

#[test]
fn test_verify_rejects_wrong_leaf_count() {
    let root = build(&["a", "b"]).expect("build").root().clone();
    let tree = MerkleTree::from_parts(root, 2, 6);
    assert_matches!(
        tree.verify::<Sha256Hasher>(),
        Err(Error::CorruptedTree(msg)) if msg == "expected 6 leaves, found 2"
    );
}

#[test]
fn test_verify_rejects_leaf_above_leaf_level() {
    let root = build(&["a", "b", "c", "d"]).expect("build").root().clone();
    let tree = MerkleTree::from_parts(root, 4, 8);
    assert_matches!(
        tree.verify::<Sha256Hasher>(),
        Err(Error::CorruptedTree(msg)) if msg == "leaf 0 at level 2, expected level 3"
    );
}

#[test]
fn test_verify_rejects_internal_node_below_leaf_level() {
    let root = build(&["a", "b", "c", "d"]).expect("build").root().clone();
    let tree = MerkleTree::from_parts(root, 2, 2);
    assert_matches!(
        tree.verify::<Sha256Hasher>(),
        Err(Error::CorruptedTree(msg)) if msg == "internal node below leaf level 1"
    );
}

#[test]
fn test_verify_rejects_payload_that_is_not_the_concatenation() {
    let inner = InternalNode::new::<Sha256Hasher>(sha_leaf("a"), sha_leaf("b"))
        .with_payload(b"ba".to_vec());
    let tree = MerkleTree::from_parts(Node::Internal(inner), 2, 2);
    assert_matches!(
        tree.verify::<Sha256Hasher>(),
        Err(Error::CorruptedTree(msg)) if msg.contains("not the concatenation of its children")
    );
}

#[test]
fn test_verify_rejects_internal_hash_from_another_digest() {
    let inner = InternalNode::new::<Blake3Hasher>(sha_leaf("a"), sha_leaf("b"));
    let tree = MerkleTree::from_parts(Node::Internal(inner), 2, 2);
    assert_matches!(
        tree.verify::<Sha256Hasher>(),
        Err(Error::CorruptedTree(msg)) if msg.starts_with("internal node at level 0 hash mismatch")
    );
}

#[test]
fn test_verify_accepts_hand_assembled_tree() {
    let inner = InternalNode::new::<Sha256Hasher>(sha_leaf("a"), sha_leaf("b"));
    let tree = MerkleTree::from_parts(Node::Internal(inner), 2, 2);
    tree.verify::<Sha256Hasher>().expect("verify");
    assert_eq!(tree, build(&["a", "b"]).expect("build"));
}
