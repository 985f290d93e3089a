//! Which vehicle stands on which cell.
//!
//! A dense per-cell table: the grid is small and every vehicle turn probes
//! it, so `Vec<Option<VehicleId>>` is both the simplest and the fastest
//! shape.  At most one vehicle per cell is the collision invariant of the
//! whole simulation; the mutators `debug_assert` it rather than return
//! errors, since a violation is always a bug in the turn logic and never a
//! runtime condition.

use gt_core::{Cell, VehicleId};

/// Cell → occupying vehicle.
pub struct OccupancyGrid {
    width: u32,
    height: u32,
    cells: Vec<Option<VehicleId>>,
}

impl OccupancyGrid {
    /// An empty grid of `width x height` cells.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    /// Dense index of `cell`, or `None` when it lies outside the grid.
    fn slot(&self, cell: Cell) -> Option<usize> {
        let inside = cell.x >= 0
            && cell.y >= 0
            && (cell.x as u32) < self.width
            && (cell.y as u32) < self.height;
        inside.then(|| cell.y as usize * self.width as usize + cell.x as usize)
    }

    /// The vehicle on `cell`, if any.  Cells outside the grid read as vacant.
    pub fn occupant(&self, cell: Cell) -> Option<VehicleId> {
        self.slot(cell).and_then(|i| self.cells[i])
    }

    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.occupant(cell).is_some()
    }

    /// Put `vehicle` on `cell` (spawn).
    pub fn place(&mut self, vehicle: VehicleId, cell: Cell) {
        if let Some(i) = self.slot(cell) {
            debug_assert!(self.cells[i].is_none(), "cell {cell} already occupied");
            self.cells[i] = Some(vehicle);
        }
    }

    /// Take `vehicle` off `cell`.
    pub fn remove(&mut self, vehicle: VehicleId, cell: Cell) {
        if let Some(i) = self.slot(cell) {
            debug_assert_eq!(self.cells[i], Some(vehicle), "cell {cell} not held by {vehicle}");
            self.cells[i] = None;
        }
    }

    /// Move `vehicle` from `from` to `to` in one step.
    pub fn relocate(&mut self, vehicle: VehicleId, from: Cell, to: Cell) {
        self.remove(vehicle, from);
        self.place(vehicle, to);
    }
}
