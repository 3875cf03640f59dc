use crate::moves::BoardStats;
use std::sync::Arc;

/// Cache memoizes provider responses by request key.
///
/// A miss is ordinary control flow. Implementations backed by fallible
/// storage log their failures and report them as misses; a lookup followed
/// by a store is not atomic, so concurrent traversals may both populate.
#[async_trait::async_trait]
pub trait Cache: Send + Sync {
    async fn get(&self, key: &str) -> Option<BoardStats>;
    async fn set(&self, key: &str, stats: &BoardStats);
}

#[async_trait::async_trait]
impl<C> Cache for Arc<C>
where
    C: Cache + ?Sized,
{
    async fn get(&self, key: &str) -> Option<BoardStats> {
        self.as_ref().get(key).await
    }
    async fn set(&self, key: &str, stats: &BoardStats) {
        self.as_ref().set(key, stats).await
    }
}

#[async_trait::async_trait]
impl<C> Cache for Box<C>
where
    C: Cache + ?Sized,
{
    async fn get(&self, key: &str) -> Option<BoardStats> {
        self.as_ref().get(key).await
    }
    async fn set(&self, key: &str, stats: &BoardStats) {
        self.as_ref().set(key, stats).await
    }
}
