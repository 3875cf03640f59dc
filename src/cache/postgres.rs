use super::Cache;
use crate::moves::BoardStats;
use crate::persist::RESPONSES;
use const_format::concatcp;
use tokio_postgres::Client;

/// Durable cache in the same database as the persisted graph.
/// Bodies are stored as the JSON the provider answered with.
#[rustfmt::skip]
#[async_trait::async_trait]
impl Cache for Client {
    async fn get(&self, key: &str) -> Option<BoardStats> {
        const SQL: &str = concatcp!(
            "SELECT body ",
            "FROM   ", RESPONSES, " ",
            "WHERE  key = $1"
        );
        match self.query_opt(SQL, &[&key]).await {
            Ok(row) => row
                .map(|row| row.get::<_, String>(0))
                .and_then(|body| match serde_json::from_str::<BoardStats>(&body) {
                    Ok(stats) => Some(stats),
                    Err(e) => {
                        log::warn!("discarding unreadable cached body for {}: {}", key, e);
                        None
                    }
                }),
            Err(e) => {
                log::warn!("cache lookup failed for {}: {}", key, e);
                None
            }
        }
    }
    async fn set(&self, key: &str, stats: &BoardStats) {
        const SQL: &str = concatcp!(
            "INSERT INTO ", RESPONSES, " (key, body) ",
            "VALUES                      ($1,  $2) ",
            "ON CONFLICT (key) DO NOTHING"
        );
        let body = match serde_json::to_string(stats) {
            Ok(body) => body,
            Err(e) => return log::warn!("cannot serialize response for {}: {}", key, e),
        };
        if let Err(e) = self.execute(SQL, &[&key, &body]).await {
            log::warn!("cache store failed for {}: {}", key, e);
        }
    }
}
