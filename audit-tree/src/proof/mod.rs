//! Audit path (inclusion proof) extraction.
//!
//! An `AuditPath` lists, from leaf to root, the hash of the sibling at each
//! level together with the side that sibling sits on. Recombining the block
//! hash with each sibling in order reproduces the root hash.

use std::marker::PhantomData;

use crate::{
    hash::{hash_string, TreeHasher},
    AuditTreeError, CryptoHash, MerkleTree, Result, Sha256Hasher,
};


/// Side a sibling occupies relative to the node being recombined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The sibling is the left operand: `H(sibling || current)`.
    Left,
    /// The sibling is the right operand: `H(current || sibling)`.
    Right,
}

/// One level of an audit path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuditPathEntry {
    /// Hash of the sibling subtree.
    pub hash: CryptoHash,
    /// Side of the sibling.
    pub side: Side,
}

impl AuditPathEntry {
    /// Create an entry.
    pub fn new(hash: CryptoHash, side: Side) -> Self {
        AuditPathEntry { hash, side }
    }
}

/// Sibling hashes needed to recompute a root hash from one block.
///
/// An empty path is a valid proof for a single-leaf tree, which is distinct
/// from having no path at all (see [`verify_audit_path`](crate::verify_audit_path)).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditPath<H: TreeHasher = Sha256Hasher> {
    entries: Vec<AuditPathEntry>,
    _hasher: PhantomData<fn() -> H>,
}

impl<H: TreeHasher> Default for AuditPath<H> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<H: TreeHasher> AuditPath<H> {
    /// Assemble a path from leaf-to-root entries.
    pub fn new(entries: Vec<AuditPathEntry>) -> Self {
        AuditPath {
            entries,
            _hasher: PhantomData,
        }
    }

    /// The entries in leaf-to-root order.
    pub fn entries(&self) -> &[AuditPathEntry] {
        &self.entries
    }

    /// Number of levels between the leaf and the root.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` for the path of a leaf that is itself the root.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate the entries in leaf-to-root order.
    pub fn iter(&self) -> std::slice::Iter<'_, AuditPathEntry> {
        self.entries.iter()
    }

    /// Consume the path and return its entries.
    pub fn into_entries(self) -> Vec<AuditPathEntry> {
        self.entries
    }
}

impl<H: TreeHasher> IntoIterator for AuditPath<H> {
    type IntoIter = std::vec::IntoIter<AuditPathEntry>;
    type Item = AuditPathEntry;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, H: TreeHasher> IntoIterator for &'a AuditPath<H> {
    type IntoIter = std::slice::Iter<'a, AuditPathEntry>;
    type Item = &'a AuditPathEntry;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<H: TreeHasher> MerkleTree<H> {
    /// Build the audit path for the first leaf (depth first, left before
    /// right) whose hash equals `H(data)`.
    ///
    /// Returns an empty path when that leaf is the root, and
    /// [`AuditTreeError::LeafNotFound`] when no leaf matches.
    pub fn get_audit_path(&self, data: impl AsRef<[u8]>) -> Result<AuditPath<H>> {
        let target = H::hash(data.as_ref());
        let Some(mut current) = self.find_leaf(&target) else {
            tracing::debug!(hash = %hash_string(&target), "audit path requested for unknown leaf");
            return Err(AuditTreeError::LeafNotFound {
                hash: hash_string(&target),
            });
        };

        let mut entries = Vec::with_capacity(self.height());
        while let Some(parent) = self.get(current).parent() {
            // parents always have both children
            let Some((left, right)) = self.get(parent).children else {
                break;
            };
            if left == current {
                entries.push(AuditPathEntry::new(self.get(right).hash, Side::Right));
            } else {
                entries.push(AuditPathEntry::new(self.get(left).hash, Side::Left));
            }
            current = parent;
        }

        tracing::trace!(levels = entries.len(), "extracted audit path");
        Ok(AuditPath::new(entries))
    }
}
