use crate::Count;
use crate::Percent;
use crate::decision::Decision;
use crate::moves::BoardStats;
use crate::moves::Line;
use crate::moves::Outcomes;
use crate::moves::Shares;

/// A visited position, keyed by its UCI line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub key: String,
    pub san: String,
    pub outcomes: Outcomes,
}

impl From<(&Line, &BoardStats)> for Board {
    fn from((line, stats): (&Line, &BoardStats)) -> Self {
        Self {
            key: line.key(),
            san: line.san().map(|san| san.join(" ")).unwrap_or_default(),
            outcomes: stats.outcomes,
        }
    }
}

/// A move between two visited positions, with the numbers that were
/// computed for it when it was chosen.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub source: String,
    pub target: String,
    pub uci: String,
    pub san: String,
    pub games: Count,
    pub shares: Option<Shares>,
    pub probability: Option<Percent>,
    pub cumulative: Percent,
}

impl From<&Decision> for Transition {
    fn from(decision: &Decision) -> Self {
        let line = decision.line();
        let (uci, san) = line.last().unwrap_or_default();
        Self {
            source: line.parent().map(|p| p.key()).unwrap_or_default(),
            target: line.key(),
            uci: uci.to_string(),
            san: san.unwrap_or_default().to_string(),
            games: decision.games(),
            shares: decision.shares(),
            probability: decision.probability(),
            cumulative: decision.cumulative(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::MoveStat;

    #[test]
    fn transition_links_parent_and_child_keys() {
        let start = Line::aligned(["e2e4"], ["e4"]).unwrap();
        let stats = BoardStats::from_moves(vec![MoveStat::new("c7c5", "c5", Outcomes::new(4, 5, 1))]);
        let decision = Decision::siblings(&start, &stats, 1).remove(0);
        let edge = Transition::from(&decision);
        assert_eq!(edge.source, "e2e4");
        assert_eq!(edge.target, "e2e4 c7c5");
        assert_eq!(edge.uci, "c7c5");
        assert_eq!(edge.san, "c5");
        assert_eq!(edge.games, 10);
        assert_eq!(edge.probability, Some(100.));
        assert_eq!(edge.shares.map(|s| s.black), Some(50.));
    }

    #[test]
    fn board_keys_by_uci() {
        let line = Line::aligned(["d2d4", "g8f6"], ["d4", "Nf6"]).unwrap();
        let stats = BoardStats::new(Outcomes::new(1, 2, 3), vec![]);
        let board = Board::from((&line, &stats));
        assert_eq!(board.key, "d2d4 g8f6");
        assert_eq!(board.san, "d4 Nf6");
        assert_eq!(board.outcomes.total(), 6);
    }
}
