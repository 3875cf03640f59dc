use super::State;
use crate::Result;
use crate::cache::Cache;
use crate::cache::Memory;
use crate::decision::Decision;
use crate::moves::BoardStats;
use crate::moves::Line;
use crate::persist::Board;
use crate::persist::Persist;
use crate::persist::Transition;
use crate::persist::Void;
use crate::policy::Policy;
use crate::provider::Provider;
use futures::FutureExt;
use futures::future::LocalBoxFuture;
use petgraph::graph::NodeIndex;
use std::time::Duration;

/// Depth-first walk over the move tree.
///
/// The explorer owns its collaborators: where statistics come from, where
/// they are memoized, and where visited positions are persisted. Everything
/// a single walk accumulates lives in the [`State`] it returns.
pub struct Explorer<P, C = Memory, G = Void>
where
    P: Provider,
    C: Cache,
    G: Persist,
{
    provider: P,
    cache: C,
    graph: G,
    pace: Duration,
}

impl<P> Explorer<P>
where
    P: Provider,
{
    /// in-memory cache, no persistence, default pacing
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            cache: Memory::default(),
            graph: Void,
            pace: crate::PACING,
        }
    }
}

impl<P, C, G> Explorer<P, C, G>
where
    P: Provider,
    C: Cache,
    G: Persist,
{
    pub fn cache<D: Cache>(self, cache: D) -> Explorer<P, D, G> {
        Explorer {
            provider: self.provider,
            cache,
            graph: self.graph,
            pace: self.pace,
        }
    }
    pub fn persist<H: Persist>(self, graph: H) -> Explorer<P, C, H> {
        Explorer {
            provider: self.provider,
            cache: self.cache,
            graph,
            pace: self.pace,
        }
    }
    /// wait before every provider call
    pub fn pace(self, pace: Duration) -> Self {
        Self { pace, ..self }
    }

    /// Walk the tree below `start` until the policy stops expanding or
    /// asks to stop. Provider failures that survive a retry, and every
    /// persistence failure, abort the walk.
    pub async fn explore<R>(&self, start: Line, policy: &R) -> Result<State>
    where
        R: Policy,
    {
        self.resume(State::default(), start, policy).await
    }

    /// Same as [`Self::explore`] but continues an existing budget.
    /// A state that is already stopped performs no work at all.
    pub async fn resume<R>(&self, mut state: State, start: Line, policy: &R) -> Result<State>
    where
        R: Policy,
    {
        log::info!("exploring from [{}]", start);
        state.begin(start.len());
        self.visit(policy, &mut state, start, None).await?;
        log::info!("{}", state);
        Ok(state)
    }

    fn visit<'a, R>(
        &'a self,
        policy: &'a R,
        state: &'a mut State,
        line: Line,
        previous: Option<NodeIndex>,
    ) -> LocalBoxFuture<'a, Result<()>>
    where
        R: Policy,
    {
        async move {
            if state.stopped() {
                return Ok(());
            }
            if policy.stop(state) {
                log::info!("stopping before [{}]", line);
                state.halt();
                return Ok(());
            }
            let stats = self.stats(&line).await?;
            self.save(&line, &stats, previous.map(|i| state.arena().decision(i)))
                .await?;
            state.expand();
            log::info!("[{}] {} games, {} moves", line, stats.games(), stats.moves.len());
            let batch = Decision::siblings(&line, &stats, state.origin());
            for index in state.adopt(previous, batch) {
                if state.stopped() {
                    break;
                }
                let choice = state.arena().choice(index);
                let record = policy.record(&choice);
                let expand = policy.expand(&choice);
                let child = choice.line().clone();
                if record {
                    log::info!("recorded [{}]", child);
                    state.record(index);
                }
                if expand {
                    self.visit(policy, state, child, Some(index)).await?;
                }
            }
            Ok(())
        }
        .boxed_local()
    }

    /// Statistics through the cache. On a miss, wait out the pacing delay,
    /// ask the provider, retry once immediately, then populate the cache.
    async fn stats(&self, line: &Line) -> Result<BoardStats> {
        let moves = line.uci();
        let ref key = self.provider.key(moves);
        if let Some(stats) = self.cache.get(key).await {
            log::debug!("cache hit [{}]", line);
            return Ok(stats);
        }
        if !self.pace.is_zero() {
            tokio::time::sleep(self.pace).await;
        }
        let mut attempt = 0;
        let stats = loop {
            match self.provider.fetch(moves).await {
                Ok(stats) => break stats,
                Err(e) if e.is_retryable() && attempt < crate::RETRIES => {
                    log::warn!("retrying [{}] after {}", line, e);
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        };
        self.cache.set(key, &stats).await;
        Ok(stats)
    }

    /// Board first, then the move that reached it.
    async fn save(&self, line: &Line, stats: &BoardStats, previous: Option<&Decision>) -> Result<()> {
        self.graph.upsert_node(&Board::from((line, stats))).await?;
        if let Some(decision) = previous {
            self.graph.upsert_edge(&Transition::from(decision)).await?;
        }
        Ok(())
    }
}
