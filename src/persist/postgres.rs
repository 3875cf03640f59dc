use super::BOARDS;
use super::Board;
use super::MOVES;
use super::Persist;
use super::Transition;
use crate::Error;
use crate::Result;
use const_format::concatcp;
use tokio_postgres::Client;

#[rustfmt::skip]
#[async_trait::async_trait]
impl Persist for Client {
    async fn upsert_node(&self, board: &Board) -> Result<()> {
        const SQL: &str = concatcp!(
            "INSERT INTO ", BOARDS, " (key, san, white, black, draws) ",
            "VALUES                   ($1,  $2,  $3,    $4,    $5) ",
            "ON CONFLICT (key) DO NOTHING"
        );
        self.execute(
            SQL,
            &[
                &board.key,
                &board.san,
                &(board.outcomes.white as i64),
                &(board.outcomes.black as i64),
                &(board.outcomes.draws as i64),
            ],
        )
        .await
        .map(|_| ())
        .map_err(|e| Error::persist(board.key.as_str(), e))
    }

    async fn upsert_edge(&self, edge: &Transition) -> Result<()> {
        const SQL: &str = concatcp!(
            "INSERT INTO ", MOVES, " (source, target, uci, san, games, white, black, draws, probability, cumulative) ",
            "VALUES                  ($1,     $2,     $3,  $4,  $5,    $6,    $7,    $8,    $9,          $10) ",
            "ON CONFLICT (source, target, uci) DO NOTHING"
        );
        self.execute(
            SQL,
            &[
                &edge.source,
                &edge.target,
                &edge.uci,
                &edge.san,
                &(edge.games as i64),
                &edge.shares.map(|s| s.white),
                &edge.shares.map(|s| s.black),
                &edge.shares.map(|s| s.draws),
                &edge.probability,
                &edge.cumulative,
            ],
        )
        .await
        .map(|_| ())
        .map_err(|e| Error::persist(format!("{} -> {}", edge.source, edge.target), e))
    }
}
