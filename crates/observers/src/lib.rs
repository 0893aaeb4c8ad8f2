//! Reusable observers for the odestep integrators.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with any solver whose events and actions implement them.
//!
//! # Modules
//!
//! - [`traits`]: Capability traits for generic observers
//!   ([`HasState`], [`HasStep`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`Trace`]: records `[t, x]` points for plotting or inspection
//! - [`StopOnNonFinite`]: halts integration at the first non-finite state
//!
//! [`Observer`]: odestep_core::Observer
//! [`HasState`]: traits::HasState
//! [`HasStep`]: traits::HasStep
//! [`CanStopEarly`]: traits::CanStopEarly

mod non_finite;
mod trace;
pub mod traits;

pub use non_finite::StopOnNonFinite;
pub use trace::Trace;
