//! `gt-agent` — the acting entities of the `gridtown` traffic simulation.
//!
//! Everything that takes a turn during a tick lives here: vehicles and
//! traffic lights (the two roster agent kinds), plus the two shared
//! structures their turns consult and update — the parking registry and the
//! vehicle occupancy grid.
//!
//! # Crate layout
//!
//! | Module        | Contents                                            |
//! |---------------|-----------------------------------------------------|
//! | [`light`]     | `TrafficLight`, `LightController`                   |
//! | [`parking`]   | `ParkingSpot`, `ParkingRegistry`                    |
//! | [`occupancy`] | `OccupancyGrid` (cell → occupying vehicle)          |
//! | [`vehicle`]   | `Vehicle`, `TurnContext`, `StepOutcome`             |
//!
//! The crate has no notion of a tick loop; `gt-sim` owns scheduling and
//! calls into the turn methods here in whatever order its roster dictates.

pub mod light;
pub mod occupancy;
pub mod parking;
pub mod vehicle;


pub use light::{LightController, TrafficLight, TOGGLE_PERIOD};
pub use occupancy::OccupancyGrid;
pub use parking::{ParkingRegistry, ParkingSpot};
pub use vehicle::{StepOutcome, TurnContext, Vehicle};
