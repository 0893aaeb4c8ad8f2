/// Watches an integration as it walks the time grid.
///
/// A solver hands each event (for the fixed-step solvers, one per grid point
/// reached) to its observer. Returning `Some(action)` asks the solver to act on
/// it, for example to stop before the end of the grid. Returning `None` lets
/// the integration carry on.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, and `()` is the
/// observer that watches silently.
pub trait Observer<E, A> {
    /// Inspects one event and optionally requests an action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
