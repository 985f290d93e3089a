//! Simulation assembly errors.

use thiserror::Error;

/// Errors detected while assembling a simulation.
///
/// Nothing after [`SimBuilder::build`][crate::SimBuilder::build] returns an
/// error: full registries, unreachable goals, and blocked cells are ordinary
/// tick outcomes, handled inside the turn logic.
#[derive(Debug, Error)]
pub enum SimError {
    /// The map defines no parking spots, so there are no vehicles to spawn
    /// and nothing to simulate.
    #[error("city map defines no parking spots; nothing to simulate")]
    NoParkingSpots,
}

/// Convenience alias used throughout `gt-sim`.
pub type SimResult<T> = Result<T, SimError>;
