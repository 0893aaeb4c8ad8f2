//! Capability traits for generic observers.
//!
//! These traits abstract over solver-specific event and action types, so an
//! observer can be written once and used with any solver that implements them.
//!
//! # Example
//!
//! ```rust
//! use odestep_core::Observer;
//! use odestep_observers::traits::{CanStopEarly, HasState};
//!
//! struct StopPast {
//!     limit: f64,
//! }
//!
//! impl<E: HasState, A: CanStopEarly> Observer<E, A> for StopPast {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.state() > self.limit).then(A::stop_early)
//!     }
//! }
//! ```

use odestep_solvers::fixed_step;

/// An event that carries the state at a point in time.
pub trait HasState {
    /// Returns the independent variable (usually time) of this event.
    fn time(&self) -> f64;

    /// Returns the state at [`time`](HasState::time).
    fn state(&self) -> f64;
}

/// An event that knows which solver step produced it.
pub trait HasStep {
    /// Returns the step number, where step 0 is the initial point.
    fn step(&self) -> usize;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl HasState for fixed_step::Event {
    fn time(&self) -> f64 {
        self.t
    }

    fn state(&self) -> f64 {
        self.x
    }
}

impl HasStep for fixed_step::Event {
    fn step(&self) -> usize {
        self.step
    }
}

impl CanStopEarly for fixed_step::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
