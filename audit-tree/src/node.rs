use crate::CryptoHash;

/// Index of a node inside the arena of its [`MerkleTree`](crate::MerkleTree).
pub type NodeId = usize;

/// An element of the tree arena.
///
/// Children are owned edges expressed as arena indices; the parent is a
/// non-owning back reference used only for upward walks. Every node has
/// either no children (a leaf) or exactly two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub(crate) hash: CryptoHash,
    pub(crate) children: Option<(NodeId, NodeId)>,
    pub(crate) parent: Option<NodeId>,
}

impl Node {
    pub(crate) fn leaf(hash: CryptoHash) -> Self {
        Node {
            hash,
            children: None,
            parent: None,
        }
    }

    pub(crate) fn internal(hash: CryptoHash, left: NodeId, right: NodeId) -> Self {
        Node {
            hash,
            children: Some((left, right)),
            parent: None,
        }
    }

    /// The node hash.
    pub fn hash(&self) -> &CryptoHash {
        &self.hash
    }

    /// `true` if the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Left child id.
    pub fn left(&self) -> Option<NodeId> {
        self.children.map(|(left, _)| left)
    }

    /// Right child id.
    pub fn right(&self) -> Option<NodeId> {
        self.children.map(|(_, right)| right)
    }

    /// Parent id, `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }
}
