//! Audit path verification.
//!
//! Pure functions, no tree required: the root is recomputed from the block
//! and the sibling hashes, then compared byte for byte.

use crate::{hash::TreeHasher, AuditPath, CryptoHash, Side};

impl<H: TreeHasher> AuditPath<H> {
    /// Recompute the root hash implied by `data` and this path.
    pub fn compute_root(&self, data: impl AsRef<[u8]>) -> CryptoHash {
        self.iter()
            .fold(H::hash(data.as_ref()), |current, entry| match entry.side {
                Side::Left => H::hash_pair(&entry.hash, &current),
                Side::Right => H::hash_pair(&current, &entry.hash),
            })
    }

    /// Check that `data` is a leaf of the tree whose root hash is
    /// `root_hash`.
    ///
    /// Any mismatch (wrong root, tampered sibling, wrong side) yields
    /// `false`; invalid proofs are not errors.
    pub fn is_valid(&self, data: impl AsRef<[u8]>, root_hash: &[u8]) -> bool {
        self.compute_root(data).as_slice() == root_hash
    }
}

/// Verify a possibly absent audit path.
///
/// `None` means "no proof" and is always invalid, unlike an empty path which
/// proves a single-leaf tree.
pub fn verify_audit_path<H: TreeHasher>(
    data: impl AsRef<[u8]>,
    audit_path: Option<&AuditPath<H>>,
    root_hash: &[u8],
) -> bool {
    match audit_path {
        Some(path) => path.is_valid(data, root_hash),
        None => false,
    }
}
