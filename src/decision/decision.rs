use crate::Count;
use crate::Percent;
use crate::moves::BoardStats;
use crate::moves::Line;
use crate::moves::Shares;
use crate::moves::Side;
use crate::moves::percentage;
use crate::moves::round;

/// Everything computed for one candidate move at one position.
/// Policies read these to decide whether the move is followed or kept.
///
/// Relations to the parent decision and to siblings are not stored here;
/// they live in the [`super::Arena`] as indices.
#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
    line: Line,
    side: Side,
    depth: usize,
    games: Count,
    probability: Option<Percent>,
    cumulative: Percent,
    shares: Option<Shares>,
}

impl Decision {
    /// Decisions for every candidate move of a position, in provider order.
    ///
    /// `origin` is the length of the line the traversal started from.
    /// Probability is measured against the games of the listed moves, not
    /// the position's own total, since the provider only lists top moves.
    /// When the listed moves have no games, decisions carry no probability,
    /// and a move with zero games yields a decision without shares.
    pub fn siblings(line: &Line, stats: &BoardStats, origin: usize) -> Vec<Self> {
        let total = stats.listed();
        stats
            .moves
            .iter()
            .scan(0., |cumulative: &mut Percent, stat| {
                let next = line.play(stat);
                let games = stat.games();
                let probability = percentage(games, total);
                let decision = Self {
                    side: next.side(),
                    depth: next.len().saturating_sub(origin),
                    shares: stat.outcomes.shares(&next.key()).ok(),
                    cumulative: *cumulative,
                    probability,
                    games,
                    line: next,
                };
                *cumulative = round(*cumulative + probability.unwrap_or(0.));
                Some(decision)
            })
            .collect()
    }

    /// unique among all decisions of a traversal
    pub fn id(&self) -> String {
        self.line.key()
    }
    pub fn line(&self) -> &Line {
        &self.line
    }
    /// side to move after this decision
    pub fn side(&self) -> Side {
        self.side
    }
    /// plies below the starting line
    pub fn depth(&self) -> usize {
        self.depth
    }
    pub fn games(&self) -> Count {
        self.games
    }
    /// share of the position's games that chose this move
    pub fn probability(&self) -> Option<Percent> {
        self.probability
    }
    /// summed probability of the siblings listed before this one
    pub fn cumulative(&self) -> Percent {
        self.cumulative
    }
    pub fn shares(&self) -> Option<Shares> {
        self.shares
    }
    pub fn white(&self) -> Option<Percent> {
        self.shares.map(|s| s.white)
    }
    pub fn black(&self) -> Option<Percent> {
        self.shares.map(|s| s.black)
    }
    pub fn draws(&self) -> Option<Percent> {
        self.shares.map(|s| s.draws)
    }
    /// winning share of one side, None without games
    pub fn wins(&self, side: Side) -> Option<Percent> {
        self.shares.map(|s| s.wins(side))
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:<40} games {:<10}", self.line, self.games)?;
        match self.shares {
            Some(shares) => write!(f, "{}", shares),
            None => write!(f, "no games"),
        }
    }
}
