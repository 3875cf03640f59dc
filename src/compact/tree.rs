use serde::ser::SerializeMap;
use std::collections::BTreeMap;

/// A prefix-sharing tree over move sequences.
///
/// Every node holds the full sequences that end at it, joined by spaces,
/// and its children keyed by the run of tokens consumed since the node.
/// Leaves are stored whole so that nothing above them is needed to
/// recover a sequence, which is what makes flattening lossless.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Tree {
    leaves: Vec<String>,
    branches: BTreeMap<String, Tree>,
}

impl Tree {
    pub fn new(leaves: Vec<String>, branches: BTreeMap<String, Tree>) -> Self {
        Self { leaves, branches }
    }
    /// a node where sequences end and nothing continues
    pub fn terminal(leaves: Vec<String>) -> Self {
        Self {
            leaves,
            branches: BTreeMap::new(),
        }
    }
    /// a node with nothing but one child
    pub fn chain(key: String, child: Tree) -> Self {
        Self {
            leaves: Vec::new(),
            branches: BTreeMap::from([(key, child)]),
        }
    }

    pub fn leaves(&self) -> &[String] {
        &self.leaves
    }
    pub fn branches(&self) -> &BTreeMap<String, Tree> {
        &self.branches
    }
    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty() && self.branches.is_empty()
    }
    /// sequences stored anywhere below
    pub fn size(&self) -> usize {
        self.leaves.len() + self.branches.values().map(Tree::size).sum::<usize>()
    }

    fn show(&self, f: &mut std::fmt::Formatter, prefix: &str) -> std::fmt::Result {
        let n = self.leaves.len() + self.branches.len();
        let leaves = self.leaves.iter().map(|leaf| (format!("■ {}", leaf), None));
        let branches = self.branches.iter().map(|(key, tree)| (key.clone(), Some(tree)));
        for (i, (head, child)) in leaves.chain(branches).enumerate() {
            let last = i == n - 1;
            let gaps = if last { "    " } else { "│   " };
            let stem = if last { "└" } else { "├" };
            writeln!(f, "{}{}── {}", prefix, stem, head)?;
            if let Some(child) = child {
                child.show(f, &format!("{}{}", prefix, gaps))?;
            }
        }
        Ok(())
    }
}

/// JSON object keyed by runs, with leaves under the reserved terminal key:
/// a string when one sequence ends here, an array when several do.
impl serde::Serialize for Tree {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let n = self.branches.len() + usize::from(!self.leaves.is_empty());
        let mut map = serializer.serialize_map(Some(n))?;
        match self.leaves.as_slice() {
            [] => {}
            [leaf] => map.serialize_entry(crate::TERMINATED, leaf)?,
            leaves => map.serialize_entry(crate::TERMINATED, leaves)?,
        }
        for (key, child) in self.branches.iter() {
            map.serialize_entry(key, child)?;
        }
        map.end()
    }
}

impl std::fmt::Display for Tree {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "ROOT")?;
        self.show(f, "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Tree {
        let open = Tree::new(
            vec!["e4 e5".into()],
            BTreeMap::from([
                ("Nc3".into(), Tree::terminal(vec!["e4 e5 Nc3".into()])),
                ("Nf3".into(), Tree::terminal(vec!["e4 e5 Nf3".into(), "e4 e5 Nf3".into()])),
            ]),
        );
        Tree::chain("e4 e5".into(), open)
    }

    #[test]
    fn serializes_terminals_under_reserved_key() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "e4 e5": {
                    "terminated": "e4 e5",
                    "Nc3": { "terminated": "e4 e5 Nc3" },
                    "Nf3": { "terminated": ["e4 e5 Nf3", "e4 e5 Nf3"] }
                }
            })
        );
    }

    #[test]
    fn counts_every_stored_sequence() {
        assert_eq!(sample().size(), 4);
        assert!(Tree::default().is_empty());
        assert!(!sample().is_empty());
    }

    #[test]
    fn display_draws_branches() {
        let text = sample().to_string();
        assert!(text.starts_with("ROOT\n└── e4 e5\n"));
        assert!(text.contains("    ├── ■ e4 e5\n"));
        assert!(text.contains("    └── Nf3\n        ├── ■ e4 e5 Nf3\n"));
    }
}
