//! Digest functions used for leaf and internal node hashes.
//!
//! Hashes are always computed over raw bytes. Hex is only used for display.

use sha2::{Digest, Sha256};

/// The length of a node hash (in bytes).
pub const HASH_LENGTH: usize = 32;

/// The length of a node hash rendered as lowercase hex.
pub(crate) const HASH_HEX_LENGTH: usize = HASH_LENGTH * 2;

/// Shown hex prefix/suffix length when a hash is shortened for `Debug`.
const SHORT_HEX_LEN: usize = 8;

/// A cryptographic hash digest.
pub type CryptoHash = [u8; HASH_LENGTH];

/// A fixed 256-bit digest applied to every node of a tree.
///
/// Implementors only provide [`hash`](TreeHasher::hash); internal nodes are
/// hashed over the byte concatenation of both child hashes.
pub trait TreeHasher {
    /// Hash an arbitrary byte string.
    fn hash(data: &[u8]) -> CryptoHash;

    /// Hash two child hashes into their parent: `H(left || right)`.
    fn hash_pair(left: &CryptoHash, right: &CryptoHash) -> CryptoHash {
        let mut buf = [0u8; HASH_LENGTH * 2];
        buf[..HASH_LENGTH].copy_from_slice(left);
        buf[HASH_LENGTH..].copy_from_slice(right);
        Self::hash(&buf)
    }
}

/// SHA-256, the default digest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sha256Hasher;

impl TreeHasher for Sha256Hasher {
    fn hash(data: &[u8]) -> CryptoHash {
        Sha256::digest(data).into()
    }
}

/// Blake3 with its default 32-byte output.
#[cfg(feature = "blake3")]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Blake3Hasher;

#[cfg(feature = "blake3")]
impl TreeHasher for Blake3Hasher {
    fn hash(data: &[u8]) -> CryptoHash {
        *blake3::hash(data).as_bytes()
    }

    fn hash_pair(left: &CryptoHash, right: &CryptoHash) -> CryptoHash {
        let mut hasher = blake3::Hasher::new();
        hasher.update(left);
        hasher.update(right);
        *hasher.finalize().as_bytes()
    }
}

/// Lowercase hex of a full hash.
pub fn hash_string(hash: &CryptoHash) -> String {
    hex::encode(hash)
}

/// Shortened hex for logs and `Debug` output, `aaaaaaaa..zzzzzzzz`.
pub(crate) fn to_short_hex(hash: &CryptoHash) -> String {
    let encoded = hex::encode(hash);
    let remaining = encoded.len().saturating_sub(SHORT_HEX_LEN);
    format!("{}..{}", &encoded[..SHORT_HEX_LEN], &encoded[remaining..])
}
