//! Per-tick read-only state snapshots.
//!
//! A [`Snapshot`] is a plain value: building one reads the simulation and
//! changes nothing, so two snapshots taken back to back are identical.
//! Rows carry `serde::Serialize` unconditionally — the snapshot exists to
//! be fed to an external sink (a JSON feed, a visualiser bridge), and that
//! is worthless without a wire form.

use gt_core::{Cell, LightId, LightState, Tick, VehicleId};
use serde::Serialize;

/// Complete observable state at the end of one tick.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// The tick this snapshot closes (1-based; the first tick emits `T1`).
    pub tick: Tick,

    /// One row per vehicle, in [`VehicleId`] order.
    pub vehicles: Vec<VehicleSnapshot>,

    /// One row per traffic light, in [`LightId`] order.
    pub lights: Vec<LightSnapshot>,
}

/// Where one vehicle stands.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VehicleSnapshot {
    pub id: VehicleId,
    pub cell: Cell,
}

/// Where one light stands and what it shows.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LightSnapshot {
    pub id: LightId,
    pub cell: Cell,
    pub state: LightState,
}
