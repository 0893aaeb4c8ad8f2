//! Core traits and helpers for fixed-step scalar ODE integration.
//!
//! This crate defines the shared abstractions that the integrators and
//! observers build on:
//!
//! - [`Derivative`]: the right-hand side `f(x, t)` of `dx/dt = f(x, t)`
//! - [`Observer`]: receives solver events and optionally returns control actions
//! - [`linspace`]: builds an evenly spaced time grid
//! - [`reference`]: sample derivative functions used in docs and tests

mod derivative;
mod grid;
mod observer;
pub mod reference;

pub use derivative::Derivative;
pub use grid::linspace;
pub use observer::Observer;
