use crate::Count;
use crate::moves::Outcomes;

/// A candidate move out of a position, with the games that followed it.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MoveStat {
    pub uci: String,
    pub san: String,
    #[serde(flatten)]
    pub outcomes: Outcomes,
}

impl MoveStat {
    pub fn new(uci: impl Into<String>, san: impl Into<String>, outcomes: Outcomes) -> Self {
        Self {
            uci: uci.into(),
            san: san.into(),
            outcomes,
        }
    }
    pub fn games(&self) -> Count {
        self.outcomes.total()
    }
}

impl std::fmt::Display for MoveStat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}) x{}", self.san, self.uci, self.games())
    }
}
