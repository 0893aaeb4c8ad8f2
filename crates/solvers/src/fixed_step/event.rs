/// Event emitted by the fixed-step solvers for each grid point reached.
///
/// Step 0 is the initial point before any integration.
/// Steps 1..N are emitted after each integration step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The step number (0 for initial, 1..N for integration steps).
    pub step: usize,

    /// The grid time of this point.
    pub t: f64,

    /// The state at `t`.
    pub x: f64,
}
