/// Errors that can occur during fixed-step integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The time grid has no points, so there is nowhere to place `x0`.
    #[error("time grid is empty: at least one point is required")]
    EmptyGrid,
}
