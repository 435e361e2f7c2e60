#[cfg(test)]
mod render_tests {
    use pretty_assertions::assert_eq;

    use crate::{CryptoHash, MerkleTree, Sha256Hasher, TreeHasher, DEFAULT_NODE_WIDTH};

    fn h(data: &[u8]) -> CryptoHash {
        Sha256Hasher::hash(data)
    }

    fn h2(left: &CryptoHash, right: &CryptoHash) -> CryptoHash {
        Sha256Hasher::hash_pair(left, right)
    }

    /// First `width` hex characters of a hash.
    fn label(hash: &CryptoHash, width: usize) -> String {
        hex::encode(hash)[..width].to_string()
    }

    fn tree(blocks: &[&str]) -> MerkleTree {
        MerkleTree::build(blocks)
    }

    #[test]
    fn test_zero_width_renders_nothing() {
        assert!(tree(&["a"]).pretty(0).is_empty());
        assert_eq!(tree(&["a", "b"]).pretty_string(0), "");
    }

    #[test]
    fn test_single_leaf_width_1() {
        assert_eq!(tree(&["a"]).pretty(1), vec![label(&h(b"a"), 1)]);
    }

    #[test]
    fn test_single_leaf_wide_label() {
        let tree = tree(&["a"]);
        assert_eq!(tree.pretty(6), vec![label(&h(b"a"), 6)]);
        assert_eq!(tree.pretty(500), vec![hex::encode(h(b"a"))]);
    }

    #[test]
    fn test_two_leaves_width_2() {
        let (a, b) = (h(b"a"), h(b"b"));
        let ab = h2(&a, &b);
        let expected = vec![
            format!("   {}", label(&ab, 2)),
            "  / \\".to_string(),
            " /   \\".to_string(),
            format!("{}   {}", label(&a, 2), label(&b, 2)),
        ];
        assert_eq!(tree(&["a", "b"]).pretty(2), expected);
    }

    #[test]
    fn test_three_leaves_width_3() {
        let (a, b, c) = (h(b"a"), h(b"b"), h(b"c"));
        let ab = h2(&a, &b);
        let abc = h2(&ab, &c);
        let expected = vec![
            format!("      {}", label(&abc, 3)),
            "      / \\".to_string(),
            "     /   \\".to_string(),
            format!("   {}   {}", label(&ab, 3), label(&c, 3)),
            "   / \\".to_string(),
            "  /   \\".to_string(),
            format!("{}   {}", label(&a, 3), label(&b, 3)),
        ];
        assert_eq!(tree(&["a", "b", "c"]).pretty(3), expected);
    }

    #[test]
    fn test_four_leaves_width_4() {
        let (a, b, c, d) = (h(b"a"), h(b"b"), h(b"c"), h(b"d"));
        let ab = h2(&a, &b);
        let cd = h2(&c, &d);
        let abcd = h2(&ab, &cd);
        let expected = vec![
            format!("           {}", label(&abcd, 4)),
            "           / \\".to_string(),
            "          /   \\".to_string(),
            "         /     \\".to_string(),
            "        /       \\".to_string(),
            "       /         \\".to_string(),
            "      /           \\".to_string(),
            format!("    {}         {}", label(&ab, 4), label(&cd, 4)),
            "    / \\           / \\".to_string(),
            "   /   \\         /   \\".to_string(),
            "  /     \\       /     \\".to_string(),
            format!(
                "{}   {}   {}   {}",
                label(&a, 4),
                label(&b, 4),
                label(&c, 4),
                label(&d, 4)
            ),
        ];
        assert_eq!(tree(&["a", "b", "c", "d"]).pretty(4), expected);
    }

    #[test]
    fn test_seven_leaves_width_2() {
        let leaf: Vec<CryptoHash> = ["a", "b", "c", "d", "e", "f", "g"]
            .iter()
            .map(|block| h(block.as_bytes()))
            .collect();
        let ab = h2(&leaf[0], &leaf[1]);
        let cd = h2(&leaf[2], &leaf[3]);
        let ef = h2(&leaf[4], &leaf[5]);
        let abcd = h2(&ab, &cd);
        let efg = h2(&ef, &leaf[6]);
        let abcdefg = h2(&abcd, &efg);
        let l = |hash: &CryptoHash| label(hash, 2);

        let expected = vec![
            format!("                  {}", l(&abcdefg)),
            "                 / \\".to_string(),
            "                /   \\".to_string(),
            "               /     \\".to_string(),
            "              /       \\".to_string(),
            "             /         \\".to_string(),
            "            /           \\".to_string(),
            "           /             \\".to_string(),
            "          /               \\".to_string(),
            "         /                 \\".to_string(),
            format!("        {}                 {}", l(&abcd), l(&efg)),
            "       / \\                 / \\".to_string(),
            "      /   \\               /   \\".to_string(),
            format!("     /     \\             {}   {}", l(&ef), l(&leaf[6])),
            "    /       \\           / \\".to_string(),
            format!("   {}       {}         /   \\", l(&ab), l(&cd)),
            format!("  / \\       / \\       {}   {}", l(&leaf[4]), l(&leaf[5])),
            " /   \\     /   \\".to_string(),
            format!(
                "{}   {}   {}   {}",
                l(&leaf[0]),
                l(&leaf[1]),
                l(&leaf[2]),
                l(&leaf[3])
            ),
        ];
        assert_eq!(
            tree(&["a", "b", "c", "d", "e", "f", "g"]).pretty(2),
            expected
        );
    }

    #[test]
    fn test_five_leaves_width_1() {
        let leaf: Vec<CryptoHash> = ["a", "b", "c", "d", "e"]
            .iter()
            .map(|block| h(block.as_bytes()))
            .collect();
        let ab = h2(&leaf[0], &leaf[1]);
        let cd = h2(&leaf[2], &leaf[3]);
        let abcd = h2(&ab, &cd);
        let root = h2(&abcd, &leaf[4]);
        let l = |hash: &CryptoHash| label(hash, 1);

        let expected = vec![
            format!("        {}", l(&root)),
            "       / \\".to_string(),
            format!("      {}   {}", l(&abcd), l(&leaf[4])),
            "     / \\".to_string(),
            "    /   \\".to_string(),
            "   /     \\".to_string(),
            format!("  {}       {}", l(&ab), l(&cd)),
            " / \\     / \\".to_string(),
            format!("{}   {}   {}   {}", l(&leaf[0]), l(&leaf[1]), l(&leaf[2]), l(&leaf[3])),
        ];
        assert_eq!(tree(&["a", "b", "c", "d", "e"]).pretty(1), expected);
    }

    #[test]
    fn test_pretty_string_joins_lines() {
        let tree = tree(&["a", "b", "c"]);
        assert_eq!(tree.pretty_string(3), tree.pretty(3).join("\n"));
        assert!(!tree.pretty_string(3).ends_with('\n'));
    }

    #[test]
    fn test_no_trailing_spaces() {
        for n in 1..20 {
            let blocks: Vec<String> = (0..n).map(|i| format!("block-{i}")).collect();
            let tree: MerkleTree = MerkleTree::build(&blocks);
            for width in 1..=8 {
                for line in tree.pretty(width) {
                    assert!(!line.ends_with(' '), "trailing space at n={n} width={width}");
                }
            }
        }
    }

    #[test]
    fn test_every_leaf_label_is_drawn() {
        for n in 1..=64 {
            let blocks: Vec<String> = (0..n).map(|i| format!("block-{i}")).collect();
            let tree: MerkleTree = MerkleTree::build(&blocks);
            for width in 1..=6 {
                let lines = tree.pretty(width);
                let bottom = lines.last().expect("non-empty rendering");
                let first = label(&h(blocks[0].as_bytes()), width);
                assert!(bottom.starts_with(&first), "leftmost leaf at n={n} width={width}");

                let drawn = lines.join("\n");
                for block in &blocks {
                    let leaf = label(&h(block.as_bytes()), width);
                    assert!(drawn.contains(&leaf), "leaf {block} at n={n} width={width}");
                }
            }
        }
    }

    #[test]
    fn test_display_uses_default_width() {
        let tree = tree(&["http", "www", "lynn", "9388", "com"]);
        assert_eq!(tree.to_string(), tree.pretty_string(DEFAULT_NODE_WIDTH));
    }
}
