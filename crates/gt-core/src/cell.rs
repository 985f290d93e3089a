//! Grid coordinate type and distance utilities.
//!
//! `Cell` is a signed integer coordinate so map authoring code can form
//! off-grid probes (`offset(-1, 0)` from a border cell) without underflow;
//! anything that actually enters the simulation is bounds-checked by the
//! map layer.
//!
//! The derived `Ord` compares `x` first, then `y`.  Route planning uses this
//! order to break cost ties, so it is part of the reproducibility contract,
//! not a convenience.

use std::fmt;

/// A grid coordinate.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan (taxicab) distance to `other`.
    ///
    /// This is the route planner's admissible heuristic: on a 4-connected
    /// grid with unit move cost no path can be shorter.
    #[inline]
    pub fn manhattan(self, other: Cell) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// The cell displaced by `(dx, dy)`.
    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Cell {
        Cell::new(self.x + dx, self.y + dy)
    }
}

impl From<(i32, i32)> for Cell {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Cell::new(x, y)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
