//! ASCII art rendering of a tree.
//!
//! Each node is drawn as the first `node_width` hex characters of its hash,
//! parents are joined to their children by `/` and `\` diagonals. The
//! layout is computed on a character canvas sized for the deepest (leftmost)
//! path and trimmed to the used bounding box afterwards.

use std::fmt;

use crate::{
    hash::{hash_string, TreeHasher, HASH_HEX_LENGTH},
    MerkleTree, NodeId,
};

mod tests;

/// Node width used by the `Display` implementation of [`MerkleTree`].
pub const DEFAULT_NODE_WIDTH: usize = 6;

impl<H: TreeHasher> MerkleTree<H> {
    /// Render the tree as lines of ASCII text, without trailing spaces.
    ///
    /// `node_width` is the number of leading hex characters shown per node
    /// and is capped at the hex length of a hash. A width of 0 yields no
    /// lines.
    pub fn pretty(&self, node_width: usize) -> Vec<String> {
        let node_width = node_width.min(HASH_HEX_LENGTH);
        if node_width == 0 {
            return Vec::new();
        }
        if self.root().is_leaf() {
            return vec![self.label(self.root_id(), node_width)];
        }

        let mut canvas = Canvas::new(self.height(), node_width);
        let start = canvas.width as isize / 2 - canvas.offset + 1;
        canvas.draw(self, self.root_id(), 0, start);
        canvas.into_lines()
    }

    /// [`pretty`](Self::pretty) joined with newlines.
    pub fn pretty_string(&self, node_width: usize) -> String {
        self.pretty(node_width).join("\n")
    }

    fn label(&self, id: NodeId, node_width: usize) -> String {
        let mut label = hash_string(self.get(id).hash());
        label.truncate(node_width);
        label
    }
}

impl<H: TreeHasher> fmt::Display for MerkleTree<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pretty_string(DEFAULT_NODE_WIDTH))
    }
}

/// Drawing surface for one rendering.
///
/// Coordinates are `(row, column)` and signed, the bounding box of what was
/// drawn is tracked so the surface can be cropped at the end.
struct Canvas {
    cells: Vec<Vec<u8>>,
    width: usize,
    node_width: usize,
    /// `ceil(node_width / 2)`
    offset: isize,
    /// Diagonal length below a node, indexed by the left depth of its right
    /// child.
    ///
    /// ```text
    ///                   *             **            ***            ****
    ///                  / \           / \            / \            / \
    ///                 *   *         /   \          /   \          /   \
    ///                              **   **       ***   ***       /     \
    ///                                                          ****   ****
    ///
    /// node_width =       1             2              3              4
    ///     offset =       1             1              2              2
    ///   branches = {1,3,7,15...} {2,4,9,19...} {2,5,11,23...} {3,6,13,27...}
    /// ```
    branches: Vec<usize>,
    max_row: usize,
    min_col: usize,
    max_col: usize,
}

impl Canvas {
    /// Allocate a blank canvas large enough for a tree whose leftmost path
    /// has `depth` edges.
    ///
    /// For depth `d` the canvas is `1 + sum(branches[i] + 1)` rows high.
    fn new(depth: usize, node_width: usize) -> Self {
        let offset = node_width.div_ceil(2);

        let mut branches = Vec::with_capacity(depth);
        let mut length = node_width / 2 + 1;
        for i in 0..depth {
            if i == 0 {
                branches.push(length);
                continue;
            }
            let branch = length + i + offset;
            branches.push(branch);
            length += branch;
        }

        let mut height = 1;
        let mut width = node_width;
        for (i, branch) in branches.iter().enumerate() {
            if i == 0 {
                width = offset * 2 - 1;
            }
            height += branch + 1;
            width += (branch + 1) * 2;
        }

        Canvas {
            cells: vec![vec![b' '; width]; height],
            width,
            node_width,
            offset: offset as isize,
            branches,
            max_row: 0,
            min_col: width - 1,
            max_col: 0,
        }
    }

    fn put(&mut self, row: isize, col: isize, byte: u8) {
        debug_assert!(
            self.contains(row, col),
            "cell ({row}, {col}) outside {}x{} canvas",
            self.cells.len(),
            self.width
        );
        let (Ok(row), Ok(col)) = (usize::try_from(row), usize::try_from(col)) else {
            return;
        };
        if let Some(cell) = self.cells.get_mut(row).and_then(|line| line.get_mut(col)) {
            *cell = byte;
        }
    }

    fn contains(&self, row: isize, col: isize) -> bool {
        (0..self.cells.len() as isize).contains(&row) && (0..self.width as isize).contains(&col)
    }

    fn draw<H: TreeHasher>(&mut self, tree: &MerkleTree<H>, id: NodeId, row: isize, col: isize) {
        let label = tree.label(id, self.node_width);
        for (i, byte) in label.bytes().enumerate() {
            self.put(row, col + i as isize, byte);
        }

        let node = tree.get(id);
        let is_right = tree.is_right_child(id);
        if node.parent().is_some() {
            if is_right {
                let right_edge = (col + self.node_width as isize - 1).max(0) as usize;
                self.max_col = self.max_col.max(right_edge);
            } else {
                self.max_row = self.max_row.max(row.max(0) as usize);
                self.min_col = self.min_col.min(col.max(0) as usize);
            }
        }

        let Some((left, right)) = node.children else {
            return;
        };

        let length = self.branches[tree.left_depth(right)] as isize;
        // keeps odd and even widths aligned under a right parent
        let shift = if is_right {
            ((self.node_width + 1) % 2) as isize
        } else {
            0
        };

        let mut left_row = row + 1;
        let mut left_col = col + self.offset - 2 + shift;
        while left_row <= row + length {
            self.put(left_row, left_col, b'/');
            left_row += 1;
            left_col -= 1;
        }
        self.draw(tree, left, left_row, left_col - self.offset + 1);

        let mut right_row = row + 1;
        let mut right_col = col + self.offset + shift;
        while right_row <= row + length {
            self.put(right_row, right_col, b'\\');
            right_row += 1;
            right_col += 1;
        }
        self.draw(
            tree,
            right,
            right_row,
            right_col - (self.node_width / 2) as isize,
        );
    }

    /// Crop to the drawn bounding box and strip trailing spaces.
    fn into_lines(self) -> Vec<String> {
        let Canvas {
            cells,
            max_row,
            min_col,
            max_col,
            ..
        } = self;
        cells
            .into_iter()
            .take(max_row + 1)
            .map(|row| {
                let end = (max_col + 1).min(row.len());
                let cropped = row.get(min_col..end).unwrap_or_default();
                String::from_utf8_lossy(cropped).trim_end_matches(' ').to_owned()
            })
            .collect()
    }
}
