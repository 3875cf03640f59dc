use super::Provider;
use crate::Error;
use crate::Result;
use crate::moves::BoardStats;
use reqwest::Client;
use reqwest::Url;

/// The Lichess opening explorer over the lichess games database.
///
/// Every request carries the same starting position, time controls and
/// rating bands; only the `play` sequence varies.
pub struct Lichess {
    base: String,
    fen: String,
    speeds: Vec<String>,
    ratings: Vec<u16>,
    http: Client,
}

impl Default for Lichess {
    fn default() -> Self {
        Self::new(std::env::var("EXPLORER_URL").unwrap_or_else(|_| crate::EXPLORER_URL.to_string()))
    }
}

impl Lichess {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            fen: crate::STANDARD_FEN.to_string(),
            speeds: crate::SPEEDS.iter().map(|s| s.to_string()).collect(),
            ratings: crate::RATINGS.to_vec(),
            http: Client::new(),
        }
    }
    pub fn ratings(mut self, ratings: impl IntoIterator<Item = u16>) -> Self {
        self.ratings = ratings.into_iter().collect();
        self
    }

    /// the full request URL, which doubles as the cache key
    pub fn url(&self, moves: &[String]) -> Result<Url> {
        let speeds = self.speeds.join(",");
        let ratings = self
            .ratings
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<String>>()
            .join(",");
        Url::parse_with_params(
            &self.base,
            &[
                ("variant", "standard"),
                ("fen", self.fen.as_str()),
                ("play", moves.join(",").as_str()),
                ("speeds", speeds.as_str()),
                ("ratings", ratings.as_str()),
            ],
        )
        .map_err(|e| Error::fetch(moves.join(" "), e))
    }
}

#[async_trait::async_trait]
impl Provider for Lichess {
    fn key(&self, moves: &[String]) -> String {
        self.url(moves)
            .map(String::from)
            .unwrap_or_else(|_| format!("{}?play={}", self.base, moves.join(",")))
    }

    async fn fetch(&self, moves: &[String]) -> Result<BoardStats> {
        let ref line = moves.join(" ");
        let url = self.url(moves)?;
        log::debug!("GET {}", url);
        let response = self
            .http
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| Error::fetch(line.as_str(), e))?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::fetch(line.as_str(), format!("explorer answered {}", status)));
        }
        let body = response
            .text()
            .await
            .map_err(|e| Error::fetch(line.as_str(), e))?;
        serde_json::from_str::<BoardStats>(&body).map_err(|source| Error::Decode {
            line: line.clone(),
            source,
        })
    }
}
