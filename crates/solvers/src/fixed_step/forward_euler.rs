use odestep_core::Derivative;

/// Takes one forward Euler step.
pub(super) fn step<F: Derivative>(f: &F, x: f64, t: f64, h: f64) -> f64 {
    x + h * f.rate(x, t)
}
