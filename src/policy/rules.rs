use super::Policy;
use crate::decision::Choice;
use crate::explore::State;

type Never = fn(&State) -> bool;

/// A Policy assembled from closures.
///
/// ```
/// use repertoire::policy::Rules;
/// let rules = Rules::new(|c| c.games() > 5000 && c.depth() < 12, |c| c.games() > 5000)
///     .until(|state| state.millis() > 600_000);
/// ```
pub struct Rules<E, R, S = Never> {
    expand: E,
    record: R,
    stop: Option<S>,
}

impl<E, R> Rules<E, R>
where
    E: Fn(&Choice<'_>) -> bool,
    R: Fn(&Choice<'_>) -> bool,
{
    pub fn new(expand: E, record: R) -> Self {
        Self {
            expand,
            record,
            stop: None,
        }
    }
}

impl<E, R, S> Rules<E, R, S>
where
    E: Fn(&Choice<'_>) -> bool,
    R: Fn(&Choice<'_>) -> bool,
    S: Fn(&State) -> bool,
{
    /// attach a global kill switch
    pub fn until<T>(self, stop: T) -> Rules<E, R, T>
    where
        T: Fn(&State) -> bool,
    {
        Rules {
            expand: self.expand,
            record: self.record,
            stop: Some(stop),
        }
    }
}

impl<E, R, S> Policy for Rules<E, R, S>
where
    E: Fn(&Choice<'_>) -> bool,
    R: Fn(&Choice<'_>) -> bool,
    S: Fn(&State) -> bool,
{
    fn expand(&self, choice: &Choice<'_>) -> bool {
        (self.expand)(choice)
    }
    fn record(&self, choice: &Choice<'_>) -> bool {
        (self.record)(choice)
    }
    fn stop(&self, state: &State) -> bool {
        self.stop.as_ref().map_or(false, |stop| stop(state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decision::Arena;
    use crate::decision::Decision;
    use crate::moves::BoardStats;
    use crate::moves::Line;
    use crate::moves::MoveStat;
    use crate::moves::Outcomes;
    use std::time::Duration;
    use std::time::Instant;

    #[test]
    fn closures_see_the_choice() {
        let mut arena = Arena::default();
        let stats = BoardStats::from_moves(vec![
            MoveStat::new("e2e4", "e4", Outcomes::new(9000, 1000, 0)),
            MoveStat::new("a2a3", "a3", Outcomes::new(10, 10, 10)),
        ]);
        let family = arena.adopt(None, Decision::siblings(&Line::root(), &stats, 0));
        let rules = Rules::new(|c| c.games() > 5000, |c| c.white() > Some(80.));
        let [e4, a3] = [arena.family(family)[0], arena.family(family)[1]];
        assert!(rules.expand(&arena.choice(e4)));
        assert!(rules.record(&arena.choice(e4)));
        assert!(!rules.expand(&arena.choice(a3)));
        assert!(!rules.record(&arena.choice(a3)));
        assert!(!rules.stop(&State::default()));
    }

    #[test]
    fn stop_closure_reads_elapsed_time() {
        let rules = Rules::new(|_| true, |_| true).until(|s| s.millis() > 600_000);
        let late = Instant::now()
            .checked_sub(Duration::from_millis(600_001))
            .map(State::since);
        if let Some(state) = late {
            assert!(rules.stop(&state));
        }
        assert!(!rules.stop(&State::default()));
    }
}
