use super::arena::Arena;
use super::decision::Decision;
use petgraph::graph::NodeIndex;

/// A Choice is a wrapper around a NodeIndex and an &Arena.
/// because it is a thin wrapper around an index, it's
/// cheap to Copy. holding a reference to the Arena is what
/// lets policies look at parents and alternatives.
#[derive(Debug, Clone, Copy)]
pub struct Choice<'arena> {
    index: NodeIndex,
    arena: &'arena Arena,
}

impl<'arena> From<(NodeIndex, &'arena Arena)> for Choice<'arena> {
    fn from((index, arena): (NodeIndex, &'arena Arena)) -> Self {
        Self { index, arena }
    }
}

impl<'arena> Choice<'arena> {
    pub fn index(&self) -> NodeIndex {
        self.index
    }
    pub fn decision(&self) -> &'arena Decision {
        self.arena.decision(self.index)
    }
    /// the decision that led to the position where this one was made
    pub fn parent(&self) -> Option<Choice<'arena>> {
        self.arena
            .parent(self.index)
            .map(|index| self.arena.choice(index))
    }
    /// every sibling including this one, in provider order
    pub fn family(&self) -> &'arena [NodeIndex] {
        self.arena.family_of(self.index)
    }
    /// every sibling except this one, in provider order
    pub fn alternatives(&self) -> Vec<Choice<'arena>> {
        self.arena
            .alternatives(self.index, self.family())
            .collect()
    }
    /// decisions from the starting line down to and including this one
    pub fn history(&self) -> Vec<Choice<'arena>> {
        let mut history = self
            .parent()
            .map(|parent| parent.history())
            .unwrap_or_default();
        history.push(*self);
        history
    }
}

impl std::ops::Deref for Choice<'_> {
    type Target = Decision;
    fn deref(&self) -> &Self::Target {
        self.decision()
    }
}

impl std::fmt::Display for Choice<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.decision())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::BoardStats;
    use crate::moves::Line;
    use crate::moves::MoveStat;
    use crate::moves::Outcomes;

    fn arena() -> (Arena, NodeIndex) {
        let mut arena = Arena::default();
        let stats = BoardStats::from_moves(vec![
            MoveStat::new("e2e4", "e4", Outcomes::new(6, 3, 1)),
            MoveStat::new("d2d4", "d4", Outcomes::new(2, 2, 1)),
        ]);
        let root = arena.adopt(None, Decision::siblings(&Line::root(), &stats, 0));
        let first = arena.family(root)[0];
        let line = arena.decision(first).line().clone();
        let stats = BoardStats::from_moves(vec![
            MoveStat::new("e7e5", "e5", Outcomes::new(3, 2, 1)),
            MoveStat::new("c7c5", "c5", Outcomes::new(3, 1, 0)),
        ]);
        let kids = arena.adopt(Some(first), Decision::siblings(&line, &stats, 0));
        let last = arena.family(kids)[1];
        (arena, last)
    }

    #[test]
    fn navigates_to_parent() {
        let (arena, index) = arena();
        let choice = arena.choice(index);
        let parent = choice.parent().unwrap();
        assert_eq!(parent.id(), "e2e4");
        assert!(parent.parent().is_none());
        assert_eq!(parent.alternatives().len(), 1);
        assert_eq!(parent.alternatives()[0].id(), "d2d4");
    }

    #[test]
    fn alternatives_are_siblings_only() {
        let (arena, index) = arena();
        let choice = arena.choice(index);
        let alternatives = choice.alternatives();
        assert_eq!(alternatives.len(), 1);
        assert_eq!(alternatives[0].id(), "e2e4 e7e5");
        assert_eq!(choice.family().len(), 2);
    }

    #[test]
    fn history_reaches_back_to_start() {
        let (arena, index) = arena();
        let history = arena
            .choice(index)
            .history()
            .iter()
            .map(|c| c.line().to_string())
            .collect::<Vec<_>>();
        assert_eq!(history, vec!["e4", "e4 c5"]);
    }

    #[test]
    fn derefs_to_decision() {
        let (arena, index) = arena();
        let choice = arena.choice(index);
        assert_eq!(choice.games(), 4);
        assert_eq!(choice.probability(), Some(40.));
        assert_eq!(choice.cumulative(), 60.);
    }
}
