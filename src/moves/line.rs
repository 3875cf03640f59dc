use crate::Error;
use crate::Result;
use crate::moves::MoveStat;
use crate::moves::Side;

/// A sequence of moves from the initial position.
///
/// UCI notation is always present and is what the provider understands.
/// SAN notation is optional, but when present it stays index-aligned with
/// the UCI moves, since children are only ever built by [`Line::play`].
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Notations")]
pub struct Line {
    uci: Vec<String>,
    san: Option<Vec<String>>,
}

/// unchecked wire form, only admitted through [`Line::aligned`]
#[derive(serde::Deserialize)]
struct Notations {
    uci: Vec<String>,
    san: Option<Vec<String>>,
}

impl TryFrom<Notations> for Line {
    type Error = Error;
    fn try_from(notations: Notations) -> Result<Self> {
        match notations.san {
            Some(san) => Self::aligned(notations.uci, san),
            None => Ok(Self::new(notations.uci)),
        }
    }
}

impl Line {
    /// the initial position, with both notations
    pub fn root() -> Self {
        Self {
            uci: Vec::new(),
            san: Some(Vec::new()),
        }
    }
    /// a line known only in UCI notation
    pub fn new<S: Into<String>>(uci: impl IntoIterator<Item = S>) -> Self {
        Self {
            uci: uci.into_iter().map(Into::into).collect(),
            san: None,
        }
    }
    /// a line in both notations, which must have equal length
    pub fn aligned<S: Into<String>, T: Into<String>>(
        uci: impl IntoIterator<Item = S>,
        san: impl IntoIterator<Item = T>,
    ) -> Result<Self> {
        let uci = uci.into_iter().map(Into::into).collect::<Vec<String>>();
        let san = san.into_iter().map(Into::into).collect::<Vec<String>>();
        match uci.len() == san.len() {
            true => Ok(Self {
                uci,
                san: Some(san),
            }),
            false => Err(Error::Misaligned {
                uci: uci.len(),
                san: san.len(),
            }),
        }
    }
    /// extend by one move in both notations
    pub fn play(&self, stat: &MoveStat) -> Self {
        let mut uci = self.uci.clone();
        uci.push(stat.uci.clone());
        let san = self.san.as_ref().map(|san| {
            let mut san = san.clone();
            san.push(stat.san.clone());
            san
        });
        Self { uci, san }
    }

    pub fn len(&self) -> usize {
        self.uci.len()
    }
    pub fn is_empty(&self) -> bool {
        self.uci.is_empty()
    }
    pub fn uci(&self) -> &[String] {
        &self.uci
    }
    pub fn san(&self) -> Option<&[String]> {
        self.san.as_deref()
    }
    /// side to move after this line, by absolute ply count
    pub fn side(&self) -> Side {
        Side::from(self.len())
    }
    /// the move that led here, in both notations
    pub fn last(&self) -> Option<(&str, Option<&str>)> {
        self.uci.last().map(|uci| {
            let san = self.san().and_then(|san| san.last()).map(String::as_str);
            (uci.as_str(), san)
        })
    }
    /// the line one move shorter, None at the initial position
    pub fn parent(&self) -> Option<Self> {
        match self.uci.split_last() {
            None => None,
            Some((_, uci)) => Some(Self {
                uci: uci.to_vec(),
                san: self.san.as_ref().map(|san| san[..uci.len()].to_vec()),
            }),
        }
    }
    /// space-joined UCI moves, unique per position path
    pub fn key(&self) -> String {
        self.uci.join(" ")
    }
}

/// SAN when available, UCI otherwise
impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.san() {
            Some(san) => write!(f, "{}", san.join(" ")),
            None => write!(f, "{}", self.uci.join(" ")),
        }
    }
}
