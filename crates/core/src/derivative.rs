/// The right-hand side of a scalar first-order ODE, `dx/dt = f(x, t)`.
///
/// Implementations must be pure: the same `(x, t)` always yields the same
/// rate. Every closure or function item with the signature
/// `Fn(f64, f64) -> f64` implements this trait, so most callers never
/// implement it by hand.
///
/// Implement it directly when the derivative carries parameters:
///
/// ```
/// use odestep_core::Derivative;
///
/// struct Decay {
///     rate: f64,
/// }
///
/// impl Derivative for Decay {
///     fn rate(&self, x: f64, _t: f64) -> f64 {
///         -self.rate * x
///     }
/// }
///
/// assert_eq!(Decay { rate: 2.0 }.rate(3.0, 0.0), -6.0);
/// ```
pub trait Derivative {
    /// Returns the rate of change of the state `x` at time `t`.
    fn rate(&self, x: f64, t: f64) -> f64;
}

impl<F> Derivative for F
where
    F: Fn(f64, f64) -> f64,
{
    fn rate(&self, x: f64, t: f64) -> f64 {
        self(x, t)
    }
}
