use crate::Count;
use crate::moves::MoveStat;
use crate::moves::Outcomes;

/// Statistics of one position: its own outcomes and every candidate move.
///
/// The order of `moves` is the provider's and must be preserved. Cumulative
/// probabilities are accumulated in this order, so re-sorting silently
/// changes every one of them.
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BoardStats {
    #[serde(flatten)]
    pub outcomes: Outcomes,
    pub moves: Vec<MoveStat>,
}

impl BoardStats {
    pub fn new(outcomes: Outcomes, moves: Vec<MoveStat>) -> Self {
        Self { outcomes, moves }
    }
    /// a position whose own totals are the sum of its moves
    pub fn from_moves(moves: Vec<MoveStat>) -> Self {
        let outcomes = moves.iter().map(|m| m.outcomes).sum();
        Self { outcomes, moves }
    }
    pub fn games(&self) -> Count {
        self.outcomes.total()
    }
    /// games of the listed moves only, at most the position's total
    pub fn listed(&self) -> Count {
        self.moves.iter().map(MoveStat::games).sum()
    }
    pub fn is_empty(&self) -> bool {
        self.games() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_explorer_payload() {
        let json = r#"{
            "white": 120, "draws": 30, "black": 50,
            "moves": [
                { "uci": "e2e4", "san": "e4", "averageRating": 2100,
                  "white": 70, "draws": 10, "black": 20, "game": null },
                { "uci": "d2d4", "san": "d4", "averageRating": 2150,
                  "white": 50, "draws": 20, "black": 30, "game": null }
            ],
            "topGames": [],
            "opening": null
        }"#;
        let stats = serde_json::from_str::<BoardStats>(json).unwrap();
        assert_eq!(stats.outcomes, Outcomes::new(120, 50, 30));
        assert_eq!(stats.games(), 200);
        assert_eq!(stats.moves.len(), 2);
        assert_eq!(stats.moves[0].uci, "e2e4");
        assert_eq!(stats.moves[1].san, "d4");
        assert_eq!(stats.moves[1].games(), 100);
    }

    #[test]
    fn listed_games_exclude_unlisted_moves() {
        let stats = BoardStats::new(
            Outcomes::new(60, 30, 10),
            vec![
                MoveStat::new("e2e4", "e4", Outcomes::new(20, 5, 5)),
                MoveStat::new("d2d4", "d4", Outcomes::new(10, 5, 5)),
            ],
        );
        assert_eq!(stats.games(), 100);
        assert_eq!(stats.listed(), 50);
    }

    #[test]
    fn rejects_payload_without_moves() {
        let json = r#"{ "white": 1, "draws": 0, "black": 0 }"#;
        assert!(serde_json::from_str::<BoardStats>(json).is_err());
    }

    #[test]
    fn cached_form_is_stable() {
        let stats = BoardStats::from_moves(vec![
            MoveStat::new("e2e4", "e4", Outcomes::new(3, 2, 1)),
            MoveStat::new("d2d4", "d4", Outcomes::new(1, 1, 1)),
        ]);
        let json = serde_json::to_string(&stats).unwrap();
        assert_eq!(serde_json::from_str::<BoardStats>(&json).unwrap(), stats);
        assert_eq!(stats.outcomes, Outcomes::new(4, 3, 2));
    }
}
