//! `gt-sim` — tick loop orchestrator for the grid-traffic framework.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 1..=config.total_ticks:
//!   ① Shuffle   — draw a fresh random activation order over all agents
//!                 (vehicles and traffic lights alike).
//!   ② Turns     — activate each agent once, in that order:
//!                   vehicle → movement ladder (park / assign / plan /
//!                             wait / advance one cell)
//!                   light   → toggle phase on period multiples
//!                 Mutations land immediately; later agents this tick see
//!                 what earlier agents did.
//!   ③ Advance   — the global tick counter catches up.
//!   ④ Snapshot  — the closing state is handed to the observer.
//! ```
//!
//! Within a tick, conflicts resolve by draw order: of two vehicles headed
//! for the same cell, whichever activates first claims it and the other
//! waits.  Reshuffling every tick keeps that advantage from sticking to
//! any one vehicle.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use gt_core::SimConfig;
//! use gt_map::{AStarPlanner, CityMapBuilder};
//! use gt_sim::{NoopObserver, SimBuilder};
//!
//! let map = CityMapBuilder::new(8, 8)
//!     .two_way((0, 0), (1, 0))
//!     .parking((0, 0))
//!     .parking((1, 0))
//!     .build()?;
//! let mut sim = SimBuilder::new(SimConfig::new(100, 42), map, AStarPlanner).build()?;
//! let end = sim.run(&mut NoopObserver);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod snapshot;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver, TickReport};
pub use sim::{AgentRef, Simulation};
pub use snapshot::{LightSnapshot, Snapshot, VehicleSnapshot};
