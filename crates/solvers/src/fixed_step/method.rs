use odestep_core::Derivative;

use super::{classic_rk4, forward_euler, midpoint};

/// Supported fixed-step integration methods.
///
/// All methods are explicit and take exactly one step per grid interval. None
/// of them estimates local error or adapts the step size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Method {
    /// Forward Euler.
    ///
    /// ```text
    /// x_{n+1} = x_n + h f(x_n, t_n)
    /// ```
    ///
    /// First order: local truncation error is O(h²), global error O(h).
    Euler,

    /// Midpoint Runge–Kutta.
    ///
    /// ```text
    /// k1 = h f(x_n, t_n)
    /// k2 = h f(x_n + k1/2, t_n + h/2)
    /// x_{n+1} = x_n + k2
    /// ```
    ///
    /// Second order. The increment is the midpoint slope alone, not the
    /// average of `k1` and `k2` used by Heun's method.
    Rk2,

    /// Classical fourth-order Runge–Kutta.
    ///
    /// ```text
    /// k1 = h f(x_n, t_n)
    /// k2 = h f(x_n + k1/2, t_n + h/2)
    /// k3 = h f(x_n + k2/2, t_n + h/2)
    /// k4 = h f(x_n + k3, t_n + h)
    /// x_{n+1} = x_n + (k1 + 2 k2 + 2 k3 + k4) / 6
    /// ```
    Rk4,
}

impl Method {
    /// All methods, in increasing order of accuracy.
    pub const ALL: [Method; 3] = [Method::Euler, Method::Rk2, Method::Rk4];

    /// Returns the global order of accuracy.
    #[must_use]
    pub const fn order(self) -> u32 {
        match self {
            Method::Euler => 1,
            Method::Rk2 => 2,
            Method::Rk4 => 4,
        }
    }

    /// Returns how many times `f` is evaluated per step.
    #[must_use]
    pub const fn evaluations_per_step(self) -> usize {
        match self {
            Method::Euler => 1,
            Method::Rk2 => 2,
            Method::Rk4 => 4,
        }
    }

    /// Advances the state `x` at time `t` by one step of size `h`.
    #[must_use]
    pub fn advance<F: Derivative>(self, f: &F, x: f64, t: f64, h: f64) -> f64 {
        match self {
            Method::Euler => forward_euler::step(f, x, t, h),
            Method::Rk2 => midpoint::step(f, x, t, h),
            Method::Rk4 => classic_rk4::step(f, x, t, h),
        }
    }
}
