use odestep_core::Observer;

use crate::traits::HasState;

/// Records the `[t, x]` point of every event it observes.
///
/// The recorded points can be handed directly to a plotting routine. A
/// `Trace` never returns an action, so it does not change how a solver runs.
///
/// Pass `&mut trace` to a solver to keep ownership of the recording:
///
/// ```
/// use odestep_core::linspace;
/// use odestep_observers::Trace;
/// use odestep_solvers::fixed_step::{self, Method};
///
/// let t = linspace(0.0, 1.0, 3);
/// let mut trace = Trace::new();
/// fixed_step::solve(Method::Euler, |_x: f64, _t: f64| 2.0, 0.0, &t, &mut trace)?;
///
/// assert_eq!(trace.points(), [[0.0, 0.0], [0.5, 1.0], [1.0, 2.0]]);
/// # Ok::<(), fixed_step::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trace {
    points: Vec<[f64; 2]>,
}

impl Trace {
    /// Creates an empty trace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded `[t, x]` points in observation order.
    #[must_use]
    pub fn points(&self) -> &[[f64; 2]] {
        &self.points
    }

    /// Returns the recorded times.
    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|[t, _]| *t)
    }

    /// Returns the recorded states.
    pub fn states(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|[_, x]| *x)
    }

    /// Consumes the trace and returns its points.
    #[must_use]
    pub fn into_points(self) -> Vec<[f64; 2]> {
        self.points
    }

    fn record<E: HasState>(&mut self, event: &E) {
        self.points.push([event.time(), event.state()]);
    }
}

impl<E: HasState, A> Observer<E, A> for Trace {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event);
        None
    }
}

impl<E: HasState, A> Observer<E, A> for &mut Trace {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event);
        None
    }
}
