//! Fixed-step explicit integrators over a discrete time grid.
//!
//! Each method walks the grid `t` once and computes the trajectory with a
//! one-step recurrence. The step size is recomputed at every grid point,
//!
//! ```text
//! h_i = t[i] - t[i-1]
//! x[i] = x[i-1] + increment(f, x[i-1], t[i-1], h_i)
//! ```
//!
//! so non-uniform grids are supported. See [`Method`] for each increment.
//!
//! No stability safeguards are applied. If `f` or the step arithmetic produces
//! a non-finite value it propagates through the remaining steps.
//!
//! # Example
//!
//! ```
//! use odestep_core::{linspace, reference::forced_cubic};
//! use odestep_solvers::fixed_step;
//!
//! let t = linspace(0.0, 10.0, 20);
//! let x = fixed_step::rk4(forced_cubic, 0.0, &t)?;
//!
//! assert_eq!(x.len(), t.len());
//! assert_eq!(x[0], 0.0);
//! # Ok::<(), fixed_step::Error>(())
//! ```
//!
//! # Observer Events
//!
//! [`solve`] emits one [`Event`] for the initial point (step 0) and one after
//! each step. Observers can return [`Action::StopEarly`] to halt; the solution
//! then holds only the points computed so far.

mod action;
mod classic_rk4;
mod error;
mod event;
mod forward_euler;
mod method;
mod midpoint;
mod solution;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use method::Method;
pub use solution::{Solution, Status};

use odestep_core::{Derivative, Observer};

/// Integrates `dx/dt = f(x, t)` with forward Euler.
///
/// Returns one value per point of `t`, starting with `x0`.
///
/// # Errors
///
/// Returns [`Error::EmptyGrid`] if `t` is empty.
pub fn euler<F: Derivative>(f: F, x0: f64, t: &[f64]) -> Result<Vec<f64>, Error> {
    solve_unobserved(Method::Euler, f, x0, t).map(|solution| solution.x)
}

/// Integrates `dx/dt = f(x, t)` with the midpoint Runge–Kutta method.
///
/// Returns one value per point of `t`, starting with `x0`.
///
/// # Errors
///
/// Returns [`Error::EmptyGrid`] if `t` is empty.
pub fn rk2<F: Derivative>(f: F, x0: f64, t: &[f64]) -> Result<Vec<f64>, Error> {
    solve_unobserved(Method::Rk2, f, x0, t).map(|solution| solution.x)
}

/// Integrates `dx/dt = f(x, t)` with the classical Runge–Kutta method.
///
/// Returns one value per point of `t`, starting with `x0`.
///
/// # Errors
///
/// Returns [`Error::EmptyGrid`] if `t` is empty.
pub fn rk4<F: Derivative>(f: F, x0: f64, t: &[f64]) -> Result<Vec<f64>, Error> {
    solve_unobserved(Method::Rk4, f, x0, t).map(|solution| solution.x)
}

/// Integrates `dx/dt = f(x, t)` over the grid `t` with the given method.
///
/// # Algorithm
///
/// 1. Seed the trajectory with `x0` and emit the step 0 event.
/// 2. For each consecutive pair `(t[i-1], t[i])`:
///    - Compute `h = t[i] - t[i-1]`.
///    - Advance the state with [`Method::advance`].
///    - Emit an [`Event`] to the observer.
///    - If the observer returns `StopEarly`, terminate.
/// 3. Return the solution with the full trajectory.
///
/// A single-point grid completes with zero steps and never evaluates `f`.
///
/// # Errors
///
/// Returns [`Error::EmptyGrid`] if `t` is empty.
pub fn solve<F, Obs>(
    method: Method,
    f: F,
    x0: f64,
    t: &[f64],
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Derivative,
    Obs: Observer<Event, Action>,
{
    let Some(&t0) = t.first() else {
        return Err(Error::EmptyGrid);
    };

    let mut x = Vec::with_capacity(t.len());
    x.push(x0);

    let event = Event {
        step: 0,
        t: t0,
        x: x0,
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        return Ok(Solution::new(method, Status::StoppedByObserver, x));
    }

    let mut current = x0;

    for (step, pair) in t.windows(2).enumerate().map(|(i, pair)| (i + 1, pair)) {
        let (t_prev, t_next) = (pair[0], pair[1]);
        let h = t_next - t_prev;

        current = method.advance(&f, current, t_prev, h);
        x.push(current);

        let event = Event {
            step,
            t: t_next,
            x: current,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::new(method, Status::StoppedByObserver, x));
        }
    }

    Ok(Solution::new(method, Status::Complete, x))
}

/// Integrates `dx/dt = f(x, t)` with the given method without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns [`Error::EmptyGrid`] if `t` is empty.
pub fn solve_unobserved<F: Derivative>(
    method: Method,
    f: F,
    x0: f64,
    t: &[f64],
) -> Result<Solution, Error> {
    solve(method, f, x0, t, ())
}
