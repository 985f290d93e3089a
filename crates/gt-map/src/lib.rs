//! `gt-map` — city map, cell connectivity, and route planning.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`graph`]   | `ConnectivityGraph` (CSR over grid cells)                  |
//! | [`map`]     | `CityMap`, `CityMapBuilder`                                |
//! | [`planner`] | `RoutePlanner` trait, `AStarPlanner`                       |
//! | [`error`]   | `MapError`, `MapResult<T>`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                      |
//! |---------|-------------------------------------------------------------|
//! | `serde` | Propagates serde derives through `gt-core` types.           |

pub mod error;
pub mod graph;
pub mod map;
pub mod planner;

#[cfg(test)]
mod tests;

pub use error::{MapError, MapResult};
pub use graph::ConnectivityGraph;
pub use map::{CityMap, CityMapBuilder};
pub use planner::{AStarPlanner, RoutePlanner};
