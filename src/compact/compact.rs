use super::Tree;
use std::collections::BTreeMap;

type Group<'a> = Vec<&'a [String]>;

/// Fold sequences into a prefix-sharing [`Tree`].
///
/// Sequences are grouped by their token at each index. A position with a
/// single next token is folded into the run being built instead of
/// branching. With `consolidate`, sequences that end inside such a run are
/// carried down and stored at the node where the run stops. Without it, a
/// sequence ending at a position forces a node there.
///
/// Nothing is dropped: `flatten(compact(lines, _))` returns the same
/// multiset of sequences, duplicates included.
pub fn compact(lines: &[Vec<String>], consolidate: bool) -> Tree {
    let group = lines.iter().map(Vec::as_slice).collect::<Group>();
    match fold(group, 0, consolidate) {
        (run, tree) if run.is_empty() => tree,
        (run, tree) => Tree::chain(run.join(" "), tree),
    }
}

/// Consume single-token positions starting at `index` until the group
/// forks or runs out, returning the tokens consumed and the node reached.
fn fold<'a>(mut group: Group<'a>, mut index: usize, consolidate: bool) -> (Vec<&'a str>, Tree) {
    let mut run = Vec::new();
    let mut carried = Vec::new();
    loop {
        let (ended, rest) = group
            .into_iter()
            .partition::<Group, _>(|line| line.len() <= index);
        let mut forks = fork(rest, index);
        let foldable = forks.len() == 1 && (consolidate || ended.is_empty());
        carried.extend(ended.iter().map(|line| line.join(" ")));
        match forks.pop_first() {
            None => return (run, Tree::terminal(carried)),
            Some((token, next)) if foldable => {
                run.push(token);
                group = next;
                index += 1;
            }
            Some((token, next)) => {
                forks.insert(token, next);
                let branches = forks
                    .into_iter()
                    .map(|(token, next)| branch(token, next, index + 1, consolidate))
                    .collect();
                return (run, Tree::new(carried, branches));
            }
        }
    }
}

/// a child keyed by the token that opened it plus whatever folds after
fn branch<'a>(token: &'a str, group: Group<'a>, index: usize, consolidate: bool) -> (String, Tree) {
    let (run, tree) = fold(group, index, consolidate);
    let key = std::iter::once(token)
        .chain(run)
        .collect::<Vec<&str>>()
        .join(" ");
    (key, tree)
}

/// sequences grouped by their token at `index`, duplicates kept
fn fork<'a>(group: Group<'a>, index: usize) -> BTreeMap<&'a str, Group<'a>> {
    let mut forks = BTreeMap::<&str, Group>::new();
    for line in group {
        forks.entry(line[index].as_str()).or_default().push(line);
    }
    forks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compact::flatten;
    use rand::Rng;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use rand::seq::IndexedRandom;

    fn lines(raw: &[&str]) -> Vec<Vec<String>> {
        raw.iter()
            .map(|line| line.split_whitespace().map(String::from).collect())
            .collect()
    }

    fn sorted(mut lines: Vec<Vec<String>>) -> Vec<Vec<String>> {
        lines.sort();
        lines
    }

    fn keys(tree: &Tree) -> Vec<&str> {
        tree.branches().keys().map(String::as_str).collect()
    }

    #[test]
    fn shared_openings_branch_where_they_diverge() {
        let input = lines(&["e4 e5 Nf3", "e4 e5 Nc3", "d4 d5"]);
        let tree = compact(&input, true);
        assert_eq!(keys(&tree), vec!["d4 d5", "e4 e5"]);
        assert!(tree.leaves().is_empty());
        let e4 = &tree.branches()["e4 e5"];
        assert_eq!(keys(e4), vec!["Nc3", "Nf3"]);
        assert_eq!(e4.branches()["Nf3"].leaves(), ["e4 e5 Nf3"]);
        assert_eq!(tree.branches()["d4 d5"].leaves(), ["d4 d5"]);
        assert_eq!(
            sorted(flatten(&tree)),
            lines(&["d4 d5", "e4 e5 Nc3", "e4 e5 Nf3"])
        );
    }

    #[test]
    fn single_line_is_one_chain() {
        let input = lines(&["e4 c6 d4 d5 exd5 cxd5"]);
        let tree = compact(&input, true);
        assert!(tree.leaves().is_empty());
        assert_eq!(keys(&tree), vec!["e4 c6 d4 d5 exd5 cxd5"]);
        let leaf = &tree.branches()["e4 c6 d4 d5 exd5 cxd5"];
        assert!(leaf.branches().is_empty());
        assert_eq!(leaf.leaves(), ["e4 c6 d4 d5 exd5 cxd5"]);
    }

    #[test]
    fn consolidation_carries_prefixes_down() {
        let input = lines(&["e4", "e4 e5 Nf3", "e4 e5 Nc3"]);
        let tree = compact(&input, true);
        assert_eq!(keys(&tree), vec!["e4 e5"]);
        let node = &tree.branches()["e4 e5"];
        assert_eq!(node.leaves(), ["e4"]);
        assert_eq!(keys(node), vec!["Nc3", "Nf3"]);
        assert_eq!(sorted(flatten(&tree)), sorted(input));
    }

    #[test]
    fn terminals_force_nodes_without_consolidation() {
        let input = lines(&["e4", "e4 e5 Nf3", "e4 e5 Nc3"]);
        let tree = compact(&input, false);
        assert_eq!(keys(&tree), vec!["e4"]);
        let e4 = &tree.branches()["e4"];
        assert_eq!(e4.leaves(), ["e4"]);
        assert_eq!(keys(e4), vec!["e5"]);
        assert_eq!(keys(&e4.branches()["e5"]), vec!["Nc3", "Nf3"]);
        assert_eq!(sorted(flatten(&tree)), sorted(input));
    }

    #[test]
    fn duplicates_survive() {
        let input = lines(&["d4 Nf6", "d4 Nf6", "d4 d5"]);
        for consolidate in [true, false] {
            let tree = compact(&input, consolidate);
            assert_eq!(tree.size(), 3);
            assert_eq!(sorted(flatten(&tree)), sorted(input.clone()));
        }
    }

    #[test]
    fn degenerate_inputs() {
        assert!(compact(&[], true).is_empty());
        let empty = vec![Vec::<String>::new()];
        assert_eq!(compact(&empty, true).leaves(), [""]);
        assert_eq!(flatten(&compact(&empty, false)), empty);
    }

    #[test]
    fn flatten_inverts_compact() {
        const TOKENS: [&str; 5] = ["e4", "e5", "d4", "d5", "Nf3"];
        let ref mut rng = SmallRng::seed_from_u64(0);
        for _ in 0..500 {
            let n = rng.random_range(1..12);
            let input = (0..n)
                .map(|_| {
                    let len = rng.random_range(0..6);
                    (0..len)
                        .map(|_| TOKENS.choose(rng).copied().unwrap_or("e4").to_string())
                        .collect::<Vec<String>>()
                })
                .collect::<Vec<Vec<String>>>();
            for consolidate in [true, false] {
                let tree = compact(&input, consolidate);
                assert_eq!(
                    sorted(flatten(&tree)),
                    sorted(input.clone()),
                    "consolidate={} input={:?}",
                    consolidate,
                    input
                );
            }
        }
    }
}
