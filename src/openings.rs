use crate::Result;
use crate::moves::Line;

/// Named starting lines to explore from.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "server", derive(clap::ValueEnum))]
pub enum Opening {
    #[default]
    Start,
    Italian,
    KnightAttack,
    BirdAttack,
    CaroKann,
    Stafford,
    Budapest,
}

impl Opening {
    pub const fn all() -> &'static [Self] {
        &[
            Self::Start,
            Self::Italian,
            Self::KnightAttack,
            Self::BirdAttack,
            Self::CaroKann,
            Self::Stafford,
            Self::Budapest,
        ]
    }

    #[rustfmt::skip]
    fn uci(&self) -> &'static [&'static str] {
        match self {
            Opening::Start        => &[],
            Opening::Italian      => &["e2e4", "e7e5", "g1f3", "b8c6", "f1c4"],
            Opening::KnightAttack => &["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6", "f3g5"],
            Opening::BirdAttack   => &["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "f8c5", "c2c3", "g8f6", "b2b4"],
            Opening::CaroKann     => &["e2e4", "c7c6", "d2d4", "d7d5", "e4d5", "c6d5"],
            Opening::Stafford     => &["e2e4", "e7e5", "g1f3", "g8f6", "f3e5", "b8c6", "e5c6"],
            Opening::Budapest     => &["d2d4", "g8f6", "c2c4", "e7e5", "d4e5", "f6g4"],
        }
    }

    #[rustfmt::skip]
    fn san(&self) -> &'static [&'static str] {
        match self {
            Opening::Start        => &[],
            Opening::Italian      => &["e4",   "e5",   "Nf3",  "Nc6",  "Bc4"],
            Opening::KnightAttack => &["e4",   "e5",   "Nf3",  "Nc6",  "Bc4",  "Nf6",  "Ng5"],
            Opening::BirdAttack   => &["e4",   "e5",   "Nf3",  "Nc6",  "Bc4",  "Bc5",  "c3",   "Nf6",  "b4"],
            Opening::CaroKann     => &["e4",   "c6",   "d4",   "d5",   "exd5", "cxd5"],
            Opening::Stafford     => &["e4",   "e5",   "Nf3",  "Nf6",  "Nxe5", "Nc6",  "Nxc6"],
            Opening::Budapest     => &["d4",   "Nf6",  "c4",   "e5",   "dxe5", "Ng4"],
        }
    }

    /// the opening as a line in both notations
    pub fn line(&self) -> Result<Line> {
        Line::aligned(self.uci().iter().copied(), self.san().iter().copied())
    }
}

impl std::fmt::Display for Opening {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Opening::Start => write!(f, "starting position"),
            Opening::Italian => write!(f, "Italian Game"),
            Opening::KnightAttack => write!(f, "Italian Game: Two Knights, Knight Attack"),
            Opening::BirdAttack => write!(f, "Italian Game: Bird's Attack"),
            Opening::CaroKann => write!(f, "Caro-Kann: Exchange Variation"),
            Opening::Stafford => write!(f, "Stafford Gambit"),
            Opening::Budapest => write!(f, "Budapest Defense"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_opening_is_aligned() {
        for opening in Opening::all() {
            let line = opening.line().unwrap();
            assert_eq!(line.san().map(<[String]>::len), Some(line.len()));
        }
    }

    #[test]
    fn openings_extend_each_other() {
        let italian = Opening::Italian.line().unwrap();
        let knight = Opening::KnightAttack.line().unwrap();
        assert!(knight.uci().starts_with(italian.uci()));
        assert!(Opening::Start.line().unwrap().is_empty());
        assert_eq!(Opening::Budapest.line().unwrap().to_string(), "d4 Nf6 c4 e5 dxe5 Ng4");
    }
}
