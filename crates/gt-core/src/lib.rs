//! `gt-core` — foundational types for the `gridtown` traffic simulation.
//!
//! This crate is a dependency of every other `gt-*` crate.  It intentionally
//! has no `gt-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                              |
//! |-----------|-------------------------------------------------------|
//! | [`ids`]   | `VehicleId`, `LightId`, `ParkingId`                   |
//! | [`cell`]  | `Cell`, Manhattan distance                            |
//! | [`light`] | `LightState` (red/green signal phase)                 |
//! | [`time`]  | `Tick`, `SimConfig`                                   |
//! | [`rng`]   | `SimRng` (the single injected random source)          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                              |
//! |---------|---------------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on all public types; the `gt-sim` snapshot feed requires it. |

pub mod cell;
pub mod ids;
pub mod light;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::Cell;
pub use ids::{LightId, ParkingId, VehicleId};
pub use light::LightState;
pub use rng::SimRng;
pub use time::{SimConfig, Tick};
