use std::{fmt, marker::PhantomData};

use crate::{
    hash::{to_short_hex, TreeHasher},
    CryptoHash, Node, NodeId, Sha256Hasher,
};

/// A balanced binary Merkle hash tree.
///
/// Nodes live in an arena addressed by [`NodeId`]; the arena is filled in
/// post-order, so leaves appear left to right and the root is the last
/// entry. The tree is immutable once built.
///
/// The shape is fixed by the number of blocks alone: for `n > 1` blocks the
/// left subtree receives the largest power of two strictly less than `n` and
/// the right subtree receives the remainder.
///
/// ```text
///   n = 3          n = 4               n = 7
///     *              *                   *
///    / \           /   \             /       \
///   *   c         *     *           *         *
///  / \           / \   / \        /   \      / \
/// a   b         a   b c   d      *     *    *   g
///                               / \   / \  / \
///                              a   b c   d e   f
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct MerkleTree<H: TreeHasher = Sha256Hasher> {
    nodes: Vec<Node>,
    root: NodeId,
    leaf_count: usize,
    _hasher: PhantomData<fn() -> H>,
}

impl<H: TreeHasher> MerkleTree<H> {
    /// Build a tree over an ordered sequence of blocks.
    ///
    /// Zero blocks yield a single node whose hash is `H("")`; one block
    /// yields a single leaf.
    pub fn build<I>(blocks: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        let blocks: Vec<I::Item> = blocks.into_iter().collect();
        let leaf_count = blocks.len();

        let mut nodes = Vec::with_capacity((2 * leaf_count).max(1));
        let root = if blocks.is_empty() {
            nodes.push(Node::leaf(H::hash(&[])));
            0
        } else {
            Self::build_subtree(&mut nodes, &blocks)
        };

        let tree = MerkleTree {
            nodes,
            root,
            leaf_count,
            _hasher: PhantomData,
        };
        tracing::trace!(
            leaf_count,
            root_hash = %to_short_hex(tree.root_hash()),
            "built merkle tree"
        );
        tree
    }

    fn build_subtree<B: AsRef<[u8]>>(nodes: &mut Vec<Node>, blocks: &[B]) -> NodeId {
        if let [block] = blocks {
            nodes.push(Node::leaf(H::hash(block.as_ref())));
            return nodes.len() - 1;
        }

        let k = split_point(blocks.len());
        let left = Self::build_subtree(nodes, &blocks[..k]);
        let right = Self::build_subtree(nodes, &blocks[k..]);
        let hash = H::hash_pair(&nodes[left].hash, &nodes[right].hash);

        let id = nodes.len();
        nodes.push(Node::internal(hash, left, right));
        nodes[left].parent = Some(id);
        nodes[right].parent = Some(id);
        id
    }

    /// The root hash summarizing the whole committed sequence.
    pub fn root_hash(&self) -> &CryptoHash {
        &self.nodes[self.root].hash
    }

    /// The root node.
    pub fn root(&self) -> &Node {
        &self.nodes[self.root]
    }

    /// Id of the root node.
    pub fn root_id(&self) -> NodeId {
        self.root
    }

    /// Look up a node by id.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Number of blocks the tree was built from (0 for the empty tree).
    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// Total number of nodes, leaves included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges on the leftmost path, which is the deepest one.
    pub fn height(&self) -> usize {
        self.left_depth(self.root)
    }

    /// Leaf hashes in block order.
    pub fn leaf_hashes(&self) -> impl Iterator<Item = &CryptoHash> + '_ {
        self.nodes
            .iter()
            .filter(|node| node.is_leaf())
            .map(|node| &node.hash)
    }

    /// Number of left edges from `id` down to its leftmost leaf.
    pub(crate) fn left_depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut current = &self.nodes[id];
        while let Some(left) = current.left() {
            depth += 1;
            current = &self.nodes[left];
        }
        depth
    }

    pub(crate) fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    /// `true` if `id` is the right child of its parent.
    pub(crate) fn is_right_child(&self, id: NodeId) -> bool {
        self.nodes[id]
            .parent
            .and_then(|parent| self.nodes[parent].right())
            == Some(id)
    }

    /// First leaf carrying `hash`, searching depth first, left before right.
    pub(crate) fn find_leaf(&self, hash: &CryptoHash) -> Option<NodeId> {
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            let node = &self.nodes[id];
            match node.children {
                None if &node.hash == hash => return Some(id),
                None => {}
                Some((left, right)) => {
                    stack.push(right);
                    stack.push(left);
                }
            }
        }
        None
    }
}

impl<H: TreeHasher> fmt::Debug for MerkleTree<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MerkleTree")
            .field("root_hash", &to_short_hex(self.root_hash()))
            .field("leaf_count", &self.leaf_count)
            .field("node_count", &self.nodes.len())
            .finish()
    }
}

/// Size of the left subtree for `n > 1` leaves: the largest power of two
/// strictly less than `n`.
pub(crate) fn split_point(n: usize) -> usize {
    debug_assert!(n > 1);
    1 << (usize::BITS - 1 - (n - 1).leading_zeros())
}
