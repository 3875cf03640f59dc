use super::choice::Choice;
use super::decision::Decision;
use petgraph::Direction::Incoming;
use petgraph::Direction::Outgoing;
use petgraph::graph::DiGraph;
use petgraph::graph::NodeIndex;

/// Every decision made during one traversal.
///
/// Decisions are vertices of a petgraph::graph::DiGraph. An edge runs from a
/// decision to each decision made at the position it leads to. Decisions made
/// at the same position are inserted together as one family, and the family
/// is only visible once it is complete.
#[derive(Debug, Default)]
pub struct Arena {
    graph: DiGraph<Decision, ()>,
    families: Vec<Vec<NodeIndex>>,
    members: Vec<usize>,
}

impl Arena {
    /// insert a finished batch of siblings below an optional parent
    /// and return the index of their family
    pub fn adopt(&mut self, parent: Option<NodeIndex>, batch: Vec<Decision>) -> usize {
        let family = self.families.len();
        let children = batch
            .into_iter()
            .map(|decision| self.graph.add_node(decision))
            .collect::<Vec<NodeIndex>>();
        for child in children.iter().copied() {
            if let Some(parent) = parent {
                self.graph.add_edge(parent, child, ());
            }
            self.members.push(family);
        }
        self.families.push(children);
        family
    }

    pub fn len(&self) -> usize {
        self.graph.node_count()
    }
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }
    pub fn decision(&self, index: NodeIndex) -> &Decision {
        self.graph
            .node_weight(index)
            .expect("decision index in arena")
    }
    pub fn choice(&self, index: NodeIndex) -> Choice<'_> {
        Choice::from((index, self))
    }
    /// siblings of a family, in provider order
    pub fn family(&self, family: usize) -> &[NodeIndex] {
        &self.families[family]
    }
    /// family a decision was adopted into
    pub fn family_of(&self, index: NodeIndex) -> &[NodeIndex] {
        self.family(self.members[index.index()])
    }
    pub fn parent(&self, index: NodeIndex) -> Option<NodeIndex> {
        self.graph.neighbors_directed(index, Incoming).next()
    }
    pub fn children(&self, index: NodeIndex) -> Vec<NodeIndex> {
        let mut children = self
            .graph
            .neighbors_directed(index, Outgoing)
            .collect::<Vec<NodeIndex>>();
        children.sort();
        children
    }
    /// The other moves available where `index` was chosen.
    /// Computed over a finished family slice, never over a batch in progress.
    pub fn alternatives<'a>(
        &'a self,
        index: NodeIndex,
        family: &'a [NodeIndex],
    ) -> impl Iterator<Item = Choice<'a>> + 'a {
        family
            .iter()
            .copied()
            .filter(move |sibling| *sibling != index)
            .map(move |sibling| self.choice(sibling))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::BoardStats;
    use crate::moves::Line;
    use crate::moves::MoveStat;
    use crate::moves::Outcomes;

    fn batch(line: &Line, ucis: &[&str]) -> Vec<Decision> {
        let stats = BoardStats::from_moves(
            ucis.iter()
                .map(|uci| MoveStat::new(*uci, *uci, Outcomes::new(1, 1, 1)))
                .collect(),
        );
        Decision::siblings(line, &stats, 0)
    }

    #[test]
    fn families_are_contiguous_and_ordered() {
        let mut arena = Arena::default();
        let root = arena.adopt(None, batch(&Line::root(), &["e2e4", "d2d4", "c2c4"]));
        let first = arena.family(root)[0];
        let line = arena.decision(first).line().clone();
        let kids = arena.adopt(Some(first), batch(&line, &["e7e5", "c7c5"]));
        assert_eq!(arena.len(), 5);
        assert_eq!(arena.family(root).len(), 3);
        assert_eq!(arena.family(kids).len(), 2);
        assert_eq!(arena.children(first), arena.family(kids).to_vec());
        assert!(arena.children(arena.family(root)[1]).is_empty());
    }

    #[test]
    fn parents_link_through_indices() {
        let mut arena = Arena::default();
        let root = arena.adopt(None, batch(&Line::root(), &["e2e4", "d2d4"]));
        let first = arena.family(root)[0];
        let line = arena.decision(first).line().clone();
        let kids = arena.adopt(Some(first), batch(&line, &["e7e5"]));
        let kid = arena.family(kids)[0];
        assert_eq!(arena.parent(kid), Some(first));
        assert_eq!(arena.parent(first), None);
        assert_eq!(arena.decision(kid).id(), "e2e4 e7e5");
    }

    #[test]
    fn alternatives_exclude_self() {
        let mut arena = Arena::default();
        let root = arena.adopt(None, batch(&Line::root(), &["e2e4", "d2d4", "c2c4"]));
        let family = arena.family(root);
        let ids = arena
            .alternatives(family[1], family)
            .map(|c| c.id())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["e2e4", "c2c4"]);
        assert_eq!(arena.family_of(family[2]), family);
    }
}
