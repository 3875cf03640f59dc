use crate::Result;
use crate::moves::BoardStats;
use std::sync::Arc;

/// Provider defines where position statistics come from.
///
/// Implementations must return the candidate moves in their own stable
/// order and must never re-sort them: cumulative probabilities are
/// accumulated in exactly this order.
#[async_trait::async_trait]
pub trait Provider: Send + Sync {
    /// cache key for a move sequence, covering every fixed request parameter
    fn key(&self, moves: &[String]) -> String;
    /// statistics of the position reached by playing `moves` in UCI
    async fn fetch(&self, moves: &[String]) -> Result<BoardStats>;
}

#[async_trait::async_trait]
impl<P> Provider for Arc<P>
where
    P: Provider + ?Sized,
{
    fn key(&self, moves: &[String]) -> String {
        self.as_ref().key(moves)
    }
    async fn fetch(&self, moves: &[String]) -> Result<BoardStats> {
        self.as_ref().fetch(moves).await
    }
}
