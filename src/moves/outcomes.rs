use crate::Count;
use crate::Error;
use crate::Percent;
use crate::Result;
use crate::moves::Side;

/// Scale a ratio to percent and round to two decimals.
/// Returns None when the denominator is zero instead of NaN.
pub fn percentage(part: Count, whole: Count) -> Option<Percent> {
    match whole {
        0 => None,
        _ => Some(round(part as Percent / whole as Percent * 100.)),
    }
}

/// two-decimal rounding used for every percentage
pub fn round(value: Percent) -> Percent {
    (value * 100.).round() / 100.
}

/// Games won by either side or drawn, as reported by the provider.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Outcomes {
    pub white: Count,
    pub black: Count,
    pub draws: Count,
}

impl Outcomes {
    pub fn new(white: Count, black: Count, draws: Count) -> Self {
        Self {
            white,
            black,
            draws,
        }
    }
    pub fn total(&self) -> Count {
        self.white + self.black + self.draws
    }
    pub fn wins(&self, side: Side) -> Count {
        match side {
            Side::White => self.white,
            Side::Black => self.black,
        }
    }
    /// Outcome percentages. Zero games is an error rather than a
    /// silent NaN, so callers must decide what an empty position means.
    pub fn shares(&self, line: &str) -> Result<Shares> {
        let total = self.total();
        match (
            percentage(self.white, total),
            percentage(self.black, total),
            percentage(self.draws, total),
        ) {
            (Some(white), Some(black), Some(draws)) => Ok(Shares {
                white,
                black,
                draws,
            }),
            _ => Err(Error::EmptyStats {
                line: line.to_string(),
            }),
        }
    }
}

impl std::ops::Add for Outcomes {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.white + rhs.white,
            self.black + rhs.black,
            self.draws + rhs.draws,
        )
    }
}

impl std::iter::Sum for Outcomes {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |a, b| a + b)
    }
}

/// Outcome percentages of a nonempty set of games.
#[derive(Debug, Default, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Shares {
    pub white: Percent,
    pub black: Percent,
    pub draws: Percent,
}

impl Shares {
    pub fn wins(&self, side: Side) -> Percent {
        match side {
            Side::White => self.white,
            Side::Black => self.black,
        }
    }
    pub fn sum(&self) -> Percent {
        self.white + self.black + self.draws
    }
}

impl std::fmt::Display for Shares {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "W {:>6.2}%  B {:>6.2}%  D {:>6.2}%",
            self.white, self.black, self.draws
        )
    }
}
