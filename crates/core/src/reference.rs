//! Sample derivative functions.
//!
//! These are fixtures for documentation and tests. The integrators accept any
//! [`Derivative`](crate::Derivative), not just the functions here.

/// A cubic decay driven by a sinusoidal forcing term: `f(x, t) = -x³ + sin(t)`.
///
/// ```
/// use odestep_core::reference::forced_cubic;
///
/// assert_eq!(forced_cubic(1.0, 0.0), -1.0);
/// ```
#[must_use]
pub fn forced_cubic(x: f64, t: f64) -> f64 {
    -x.powi(3) + t.sin()
}
