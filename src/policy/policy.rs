use crate::decision::Choice;
use crate::explore::State;

/// Caller-supplied predicates that shape a traversal.
///
/// `expand` and `record` are evaluated independently for every candidate
/// move, in provider order. `stop` is evaluated once per position visit,
/// before anything is fetched, and ends the whole traversal when true.
pub trait Policy {
    /// follow this move and explore the position it leads to
    fn expand(&self, choice: &Choice<'_>) -> bool;
    /// keep the line ending in this move as a result
    fn record(&self, choice: &Choice<'_>) -> bool;
    /// halt the traversal before the next position is fetched
    fn stop(&self, _: &State) -> bool {
        false
    }
}

impl<P> Policy for &P
where
    P: Policy + ?Sized,
{
    fn expand(&self, choice: &Choice<'_>) -> bool {
        (**self).expand(choice)
    }
    fn record(&self, choice: &Choice<'_>) -> bool {
        (**self).record(choice)
    }
    fn stop(&self, state: &State) -> bool {
        (**self).stop(state)
    }
}

impl<P> Policy for Box<P>
where
    P: Policy + ?Sized,
{
    fn expand(&self, choice: &Choice<'_>) -> bool {
        self.as_ref().expand(choice)
    }
    fn record(&self, choice: &Choice<'_>) -> bool {
        self.as_ref().record(choice)
    }
    fn stop(&self, state: &State) -> bool {
        self.as_ref().stop(state)
    }
}
