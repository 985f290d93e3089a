//! Traffic lights and their fixed-period controller.
//!
//! Lights are scenery to the map but agents to the scheduler: each takes a
//! turn every tick like any vehicle.  The turn itself is trivial — flip
//! phase whenever the global tick counter hits a multiple of
//! [`TOGGLE_PERIOD`].  Because every light watches the same counter, lights
//! initialised to opposite phases stay exactly out of phase forever, which
//! is how a map encodes a crossing with alternating right of way.

use gt_core::{Cell, LightId, LightState, Tick};
use rustc_hash::FxHashMap;

/// A light flips phase on every tick whose counter is a multiple of this.
pub const TOGGLE_PERIOD: u64 = 5;

/// One signal head guarding a single cell.
#[derive(Copy, Clone, Debug)]
pub struct TrafficLight {
    pub id: LightId,

    /// The guarded cell.  A vehicle whose next hop is this cell may only
    /// enter while the phase is green.
    pub cell: Cell,

    pub state: LightState,
}

/// All traffic lights of a running simulation, with by-cell lookup for the
/// movement rules.
pub struct LightController {
    /// Lights indexed by [`LightId`].
    lights: Vec<TrafficLight>,

    /// Guarded cell → light.  At most one light per cell; the map builder
    /// rejects duplicates.
    by_cell: FxHashMap<Cell, LightId>,
}

impl LightController {
    /// Build from `(cell, initial phase)` pairs; ids follow input order.
    pub fn new(defs: &[(Cell, LightState)]) -> Self {
        let mut lights = Vec::with_capacity(defs.len());
        let mut by_cell = FxHashMap::default();
        for (i, &(cell, state)) in defs.iter().enumerate() {
            let id = LightId(i as u32);
            lights.push(TrafficLight { id, cell, state });
            by_cell.insert(cell, id);
        }
        Self { lights, by_cell }
    }

    pub fn len(&self) -> usize {
        self.lights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lights.is_empty()
    }

    /// All lights in id order.
    pub fn lights(&self) -> &[TrafficLight] {
        &self.lights
    }

    pub fn get(&self, id: LightId) -> &TrafficLight {
        &self.lights[id.index()]
    }

    /// Signal phase at `cell`, or `None` when no light guards it.  Cells
    /// outside the grid never have lights, so any probe is safe.
    pub fn state_at(&self, cell: Cell) -> Option<LightState> {
        self.by_cell.get(&cell).map(|id| self.lights[id.index()].state)
    }

    /// `true` only when a light at `cell` currently shows red.  Unguarded
    /// cells are always enterable.
    pub fn is_red(&self, cell: Cell) -> bool {
        self.state_at(cell) == Some(LightState::Red)
    }

    /// One scheduler turn for light `id` during tick `now`.
    pub fn step(&mut self, id: LightId, now: Tick) {
        if now.0.is_multiple_of(TOGGLE_PERIOD) {
            let light = &mut self.lights[id.index()];
            light.state = light.state.toggle();
            log::trace!("{now}: light at {} switched to {}", light.cell, light.state);
        }
    }
}
