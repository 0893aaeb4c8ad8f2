use odestep_core::Observer;

use crate::traits::{CanStopEarly, HasState, HasStep};

/// Stops a solver as soon as it observes a non-finite state.
///
/// The fixed-step solvers let infinities and NaNs propagate. Attach this
/// observer to end the integration at the first one instead. The step and
/// time of that event are kept in [`tripped_step`](Self::tripped_step) and
/// [`tripped_at`](Self::tripped_at).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StopOnNonFinite {
    tripped: Option<(usize, f64)>,
}

impl StopOnNonFinite {
    /// Creates an observer that has not tripped yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the step of the first non-finite state, if one was seen.
    #[must_use]
    pub fn tripped_step(&self) -> Option<usize> {
        self.tripped.map(|(step, _)| step)
    }

    /// Returns the time of the first non-finite state, if one was seen.
    #[must_use]
    pub fn tripped_at(&self) -> Option<f64> {
        self.tripped.map(|(_, t)| t)
    }

    fn check<E, A>(&mut self, event: &E) -> Option<A>
    where
        E: HasState + HasStep,
        A: CanStopEarly,
    {
        if event.state().is_finite() {
            return None;
        }
        self.tripped.get_or_insert((event.step(), event.time()));
        Some(A::stop_early())
    }
}

impl<E: HasState + HasStep, A: CanStopEarly> Observer<E, A> for StopOnNonFinite {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.check(event)
    }
}

impl<E: HasState + HasStep, A: CanStopEarly> Observer<E, A> for &mut StopOnNonFinite {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.check(event)
    }
}
