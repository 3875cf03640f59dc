use super::BOARDS;
use super::MOVES;
use crate::Count;
use crate::Error;
use crate::Percent;
use crate::Result;
use crate::moves::Side;
use const_format::concatcp;
use std::sync::Arc;
use tokio_postgres::Client;

/// Lines to pull out of a previously persisted graph.
#[derive(Debug, Clone)]
pub struct Query {
    /// UCI key of the position to search from
    pub start: String,
    /// longest line below the start, in plies
    pub depth: usize,
    /// every move on the line needs more games than this
    pub games: Count,
    /// side whose winning share is tested on the final move
    pub side: Side,
    /// winning share the final move must exceed
    pub threshold: Percent,
}

/// Search answers queries from the persisted graph without the provider.
#[async_trait::async_trait]
pub trait Search: Send + Sync {
    /// SAN lines, each starting from the initial position
    async fn lines(&self, query: &Query) -> Result<Vec<Vec<String>>>;
}

#[rustfmt::skip]
#[async_trait::async_trait]
impl Search for Client {
    async fn lines(&self, query: &Query) -> Result<Vec<Vec<String>>> {
        const SQL: &str = concatcp!(
            "WITH RECURSIVE walk (key, line, depth, white, black) AS ( ",
                "SELECT b.key, ",
                       "string_to_array(NULLIF(b.san, ''), ' '), ",
                       "0, ",
                       "NULL::DOUBLE PRECISION, ",
                       "NULL::DOUBLE PRECISION ",
                "FROM   ", BOARDS, " b ",
                "WHERE  b.key = $1 ",
              "UNION ALL ",
                "SELECT m.target, ",
                       "COALESCE(w.line, ARRAY[]::TEXT[]) || m.san, ",
                       "w.depth + 1, ",
                       "m.white, ",
                       "m.black ",
                "FROM   walk w ",
                "JOIN   ", MOVES, " m ON m.source = w.key ",
                "WHERE  w.depth < $2 ",
                "AND    m.games > $3 ",
            ") ",
            "SELECT line ",
            "FROM   walk ",
            "WHERE  depth > 0 ",
            "AND    (CASE WHEN $4 THEN white ELSE black END) > $5 ",
            "ORDER  BY array_to_string(line, ' ')"
        );
        let white = query.side == Side::White;
        self.query(
            SQL,
            &[
                &query.start,
                &(query.depth as i32),
                &(query.games as i64),
                &white,
                &query.threshold,
            ],
        )
        .await
        .map_err(|e| Error::persist(query.start.as_str(), e))
        .map(|rows| rows.iter().map(|row| row.get::<_, Vec<String>>(0)).collect())
    }
}

#[async_trait::async_trait]
impl Search for Arc<Client> {
    async fn lines(&self, query: &Query) -> Result<Vec<Vec<String>>> {
        self.as_ref().lines(query).await
    }
}
