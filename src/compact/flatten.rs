use super::Tree;

/// Every sequence stored in the tree, leaves of a node before its children.
/// Order follows the tree rather than the input that built it, so callers
/// that need a stable order sort the result.
pub fn flatten(tree: &Tree) -> Vec<Vec<String>> {
    tree.leaves()
        .iter()
        .map(|leaf| leaf.split_whitespace().map(String::from).collect())
        .chain(tree.branches().values().flat_map(flatten))
        .collect()
}

impl Tree {
    pub fn flatten(&self) -> Vec<Vec<String>> {
        flatten(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn leaves_come_before_children() {
        let tree = Tree::new(
            vec!["d4".into()],
            BTreeMap::from([("d5".into(), Tree::terminal(vec!["d4 d5".into()]))]),
        );
        assert_eq!(flatten(&tree), vec![vec!["d4"], vec!["d4", "d5"]]);
    }

    #[test]
    fn empty_leaf_is_empty_sequence() {
        let tree = Tree::terminal(vec![String::new()]);
        assert_eq!(flatten(&tree), vec![Vec::<String>::new()]);
        assert!(flatten(&Tree::default()).is_empty());
    }
}
