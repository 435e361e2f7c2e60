use thiserror::Error;

/// Alias for `core::result::Result<T, AuditTreeError>`.
pub type Result<T> = core::result::Result<T, AuditTreeError>;

/// Errors from audit tree queries.
///
/// A failed query leaves the tree untouched and usable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AuditTreeError {
    /// No leaf of the tree carries the hash of the requested block.
    #[error("failed to find leaf node with hash {hash}")]
    LeafNotFound {
        /// Lowercase hex of the hash that was searched for.
        hash: String,
    },
}
