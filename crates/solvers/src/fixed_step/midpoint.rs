use odestep_core::Derivative;

/// Takes one midpoint Runge–Kutta step.
///
/// The increment is `k2` alone.
pub(super) fn step<F: Derivative>(f: &F, x: f64, t: f64, h: f64) -> f64 {
    let k1 = h * f.rate(x, t);
    let k2 = h * f.rate(x + 0.5 * k1, t + 0.5 * h);
    x + k2
}
