//! Fixed-step explicit integrators for scalar ODEs.
//!
//! The [`fixed_step`] module integrates `dx/dt = f(x, t)` over a caller-supplied
//! time grid using one of three methods:
//!
//! - [`fixed_step::euler`]: forward Euler, first order
//! - [`fixed_step::rk2`]: midpoint Runge–Kutta, second order
//! - [`fixed_step::rk4`]: classical Runge–Kutta, fourth order
//!
//! Use [`fixed_step::solve`] to pick a [`fixed_step::Method`] at runtime and
//! attach an [`Observer`](odestep_core::Observer).

pub mod fixed_step;
