use sha2::{Digest, Sha256};

/// Length in bytes of every node hash.
pub const HASH_LENGTH: usize = 32;

/// Length of a node hash rendered as lowercase hex.
pub const HASH_HEX_LENGTH: usize = HASH_LENGTH * 2;

/// A node hash.
pub type CryptoHash = [u8; HASH_LENGTH];

/// Digest function used for both leaves and internal nodes.
///
/// Implementations must start every call from a fresh state; nothing may
/// carry over from one digest to the next.
pub trait TreeHasher {
    /// Hash an arbitrary byte string.
    fn digest(data: &[u8]) -> CryptoHash;
}

/// SHA-256, the default digest.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Hasher;

impl TreeHasher for Sha256Hasher {
    fn digest(data: &[u8]) -> CryptoHash {
        let mut hasher = Sha256::new();
        hasher.update(data);
        hasher.finalize().into()
    }
}

/// Blake3 in its default 32-byte output mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct Blake3Hasher;

impl TreeHasher for Blake3Hasher {
    fn digest(data: &[u8]) -> CryptoHash {
        *blake3::hash(data).as_bytes()
    }
}

/// Leaf hash: `H(block)`.
pub(crate) fn leaf_hash<H: TreeHasher>(block: &[u8]) -> CryptoHash {
    H::digest(block)
}

/// Internal node hash: `H(hex(left) || hex(right))`.
///
/// The children are combined as their hex text, 128 ASCII bytes in total,
/// not as raw digest bytes.
pub(crate) fn combine_hashes<H: TreeHasher>(left: &CryptoHash, right: &CryptoHash) -> CryptoHash {
    let text = [hex::encode(left), hex::encode(right)].concat();
    H::digest(text.as_bytes())
}
