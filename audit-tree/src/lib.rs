//! Balanced binary Merkle hash tree with audit paths.
//!
//! A tree is built once from an ordered sequence of opaque blocks and is
//! read-only afterwards. The shape is a pure function of the number of
//! blocks: for `n > 1` the left subtree always holds the largest power of two
//! strictly less than `n` leaves and the right subtree holds the rest.
//!
//! ```text
//! leaf hash     = H(block)
//! internal hash = H(left.hash || right.hash)
//! empty tree    = H("")
//! ```
//!
//! # Core types
//!
//! - [`MerkleTree`] — the built tree (build, root hash, audit paths, render).
//! - [`AuditPath`] — leaf-to-root sibling hashes proving inclusion of a block.
//! - [`Side`] — which side a sibling occupies when recombining hashes.
//! - [`TreeHasher`] — the digest used for every node, [`Sha256Hasher`] by
//!   default.

#![warn(missing_docs)]

mod error;
pub mod hash;
mod node;
pub(crate) mod proof;
mod render;
mod tree;
mod verify;


pub use error::{AuditTreeError, Result};
#[cfg(feature = "blake3")]
pub use hash::Blake3Hasher;
pub use hash::{CryptoHash, Sha256Hasher, TreeHasher, HASH_LENGTH};
pub use node::{Node, NodeId};
pub use proof::{AuditPath, AuditPathEntry, Side};
pub use render::DEFAULT_NODE_WIDTH;
pub use tree::MerkleTree;
pub use verify::verify_audit_path;
