mod test_build;

use sha2::{Digest, Sha256};

use crate::CryptoHash;

/// Owned byte blocks from string literals.
fn blocks(items: &[&str]) -> Vec<Vec<u8>> {
    items.iter().map(|s| s.as_bytes().to_vec()).collect()
}

/// SHA-256 computed independently of the crate's hasher plumbing.
fn sha256(data: &[u8]) -> CryptoHash {
    Sha256::digest(data).into()
}

/// Expected internal node hash for two child hashes.
fn sha256_pair(left: &CryptoHash, right: &CryptoHash) -> CryptoHash {
    sha256(format!("{}{}", hex::encode(left), hex::encode(right)).as_bytes())
}
