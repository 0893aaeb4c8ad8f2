use super::Method;

/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// Integrated across the whole grid.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of a fixed-step integration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// How the solver terminated.
    pub status: Status,

    /// State at each grid point reached, starting with the initial value.
    ///
    /// When the status is [`Status::Complete`] this has one entry per grid point.
    pub x: Vec<f64>,

    /// Number of integration steps completed.
    pub steps: usize,

    /// Number of derivative evaluations performed.
    pub evaluations: usize,
}

impl Solution {
    pub(crate) fn new(method: Method, status: Status, x: Vec<f64>) -> Self {
        let steps = x.len() - 1;
        Self {
            status,
            x,
            steps,
            evaluations: steps * method.evaluations_per_step(),
        }
    }

    /// Returns the state at the last grid point reached.
    #[must_use]
    pub fn last(&self) -> Option<f64> {
        self.x.last().copied()
    }
}
