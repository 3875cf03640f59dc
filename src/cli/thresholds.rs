use super::Args;
use crate::Count;
use crate::Percent;
use crate::decision::Choice;
use crate::explore::State;
use crate::policy::Policy;
use std::time::Duration;

/// Follow popular moves to a fixed depth and keep the ones
/// where either side wins decisively.
#[derive(Debug, Clone, Copy)]
pub struct Thresholds {
    games: Count,
    depth: usize,
    threshold: Percent,
    timeout: Duration,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::new(crate::MIN_GAMES, crate::MAX_DEPTH, crate::DECISIVE, crate::TIMEOUT)
    }
}

impl From<&Args> for Thresholds {
    fn from(args: &Args) -> Self {
        Self::new(args.games, args.depth, args.threshold, args.timeout)
    }
}

impl Thresholds {
    pub fn new(games: Count, depth: usize, threshold: Percent, timeout: Duration) -> Self {
        Self {
            games,
            depth,
            threshold,
            timeout,
        }
    }
    fn decisive(&self, choice: &Choice<'_>) -> bool {
        let threshold = Some(self.threshold);
        choice.white() > threshold || choice.black() > threshold
    }
}

impl Policy for Thresholds {
    fn expand(&self, choice: &Choice<'_>) -> bool {
        choice.games() > self.games && choice.depth() < self.depth
    }
    fn record(&self, choice: &Choice<'_>) -> bool {
        choice.games() > self.games && self.decisive(choice)
    }
    fn stop(&self, state: &State) -> bool {
        state.millis() > self.timeout.as_millis() as u64 || crate::interrupted()
    }
}

impl std::fmt::Display for Thresholds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "games > {}, depth < {}, winning share > {}%, timeout {}s",
            self.games,
            self.depth,
            self.threshold,
            self.timeout.as_secs()
        )
    }
}
