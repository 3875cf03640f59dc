use super::Board;
use super::Transition;
use crate::Result;
use std::sync::Arc;

/// Persist stores visited positions and the moves between them.
///
/// Both operations are create-if-absent: repeating them with the same key
/// leaves the store unchanged. Failures are returned to the explorer, which
/// aborts the run rather than leave the graph silently incomplete.
#[async_trait::async_trait]
pub trait Persist: Send + Sync {
    async fn upsert_node(&self, board: &Board) -> Result<()>;
    async fn upsert_edge(&self, edge: &Transition) -> Result<()>;
}

#[async_trait::async_trait]
impl<P> Persist for Arc<P>
where
    P: Persist + ?Sized,
{
    async fn upsert_node(&self, board: &Board) -> Result<()> {
        self.as_ref().upsert_node(board).await
    }
    async fn upsert_edge(&self, edge: &Transition) -> Result<()> {
        self.as_ref().upsert_edge(edge).await
    }
}

#[async_trait::async_trait]
impl<P> Persist for Box<P>
where
    P: Persist + ?Sized,
{
    async fn upsert_node(&self, board: &Board) -> Result<()> {
        self.as_ref().upsert_node(board).await
    }
    async fn upsert_edge(&self, edge: &Transition) -> Result<()> {
        self.as_ref().upsert_edge(edge).await
    }
}
