//! Cell connectivity graph: which cell-to-cell moves are legal.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** format for outgoing edges.
//! Cells index densely as `y * width + x`; given a cell with index `i`, the
//! cells reachable from it in one move occupy the slice:
//!
//! ```text
//! edge_to[ cell_out_start[i] .. cell_out_start[i+1] ]
//! ```
//!
//! Neighbour slices are sorted by target cell and deduplicated, so lookups
//! are a contiguous memory scan and their iteration order is reproducible.
//! A cell with no registered moves simply has an empty slice — "no entry"
//! and "no legal moves" are the same thing.
//!
//! Every edge endpoint is bounds-checked at construction.  Malformed map
//! data therefore fails in [`ConnectivityGraph::from_edges`] with a
//! [`MapError`], never mid-simulation.

use gt_core::Cell;

use crate::error::{MapError, MapResult};

/// Directed cell adjacency in CSR format.
///
/// All fields are `pub` for direct indexed access on hot paths.  Do not
/// construct directly; use [`from_edges`](Self::from_edges) or
/// [`CityMapBuilder`](crate::CityMapBuilder).
#[derive(Debug)]
pub struct ConnectivityGraph {
    /// Grid width in cells; valid x coordinates are `0..width`.
    pub width: u32,
    /// Grid height in cells; valid y coordinates are `0..height`.
    pub height: u32,

    /// CSR row pointer.  Outgoing moves of cell index `i` are at
    /// `edge_to[cell_out_start[i] .. cell_out_start[i+1]]`.
    /// Length = `width * height + 1`.
    pub cell_out_start: Vec<u32>,

    /// Target cell of each edge, sorted by (source index, target cell).
    pub edge_to: Vec<Cell>,
}

impl ConnectivityGraph {
    /// Build the graph from a directed edge list.
    ///
    /// Duplicate edges are collapsed.  Any endpoint outside the
    /// `width x height` grid is a configuration error.
    pub fn from_edges(width: u32, height: u32, edges: Vec<(Cell, Cell)>) -> MapResult<Self> {
        let cell_count = (width as usize) * (height as usize);

        // Validate every endpoint before any index math.
        let mut raw: Vec<(usize, Cell)> = Vec::with_capacity(edges.len());
        for (from, to) in edges {
            match index_of(width, height, from) {
                Some(from_idx) if in_bounds(width, height, to) => raw.push((from_idx, to)),
                _ => {
                    return Err(MapError::EdgeOutOfBounds {
                        from,
                        to,
                        width,
                        height,
                    });
                }
            }
        }

        // Sort by source index, then target cell, so each neighbour slice
        // comes out ordered; collapse duplicate declarations.
        raw.sort_unstable();
        raw.dedup();

        // Build CSR row pointer.
        let mut cell_out_start = vec![0u32; cell_count + 1];
        for (from_idx, _) in &raw {
            cell_out_start[from_idx + 1] += 1;
        }
        for i in 1..=cell_count {
            cell_out_start[i] += cell_out_start[i - 1];
        }
        debug_assert_eq!(cell_out_start[cell_count] as usize, raw.len());

        let edge_to: Vec<Cell> = raw.iter().map(|&(_, to)| to).collect();

        log::debug!(
            "connectivity graph built: {width}x{height} grid, {} edges",
            edge_to.len()
        );

        Ok(Self {
            width,
            height,
            cell_out_start,
            edge_to,
        })
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    /// Number of cells in the grid (`width * height`).
    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    // ── Cell addressing ───────────────────────────────────────────────────

    /// `true` if `cell` lies on the grid.
    #[inline]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        in_bounds(self.width, self.height, cell)
    }

    /// Dense index of `cell`, or `None` if it lies off the grid.
    #[inline]
    pub fn cell_index(&self, cell: Cell) -> Option<usize> {
        index_of(self.width, self.height, cell)
    }

    /// Inverse of [`cell_index`](Self::cell_index).
    ///
    /// # Panics
    /// Panics if `index >= cell_count()`.
    #[inline]
    pub fn cell_at(&self, index: usize) -> Cell {
        debug_assert!(index < self.cell_count());
        let w = self.width as usize;
        Cell::new((index % w) as i32, (index / w) as i32)
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// The cells legally reachable from `cell` in one move, in ascending
    /// cell order.
    ///
    /// Off-grid cells and cells with no registered moves both yield the
    /// empty slice — this is a contiguous index range, no heap allocation.
    #[inline]
    pub fn neighbors(&self, cell: Cell) -> &[Cell] {
        let Some(idx) = self.cell_index(cell) else {
            return &[];
        };
        let start = self.cell_out_start[idx] as usize;
        let end = self.cell_out_start[idx + 1] as usize;
        &self.edge_to[start..end]
    }

    /// Out-degree of `cell` (number of legal moves).
    #[inline]
    pub fn out_degree(&self, cell: Cell) -> usize {
        self.neighbors(cell).len()
    }

    /// `true` if `from -> to` is a legal move.
    ///
    /// Binary search over the sorted neighbour slice.
    #[inline]
    pub fn has_edge(&self, from: Cell, to: Cell) -> bool {
        self.neighbors(from).binary_search(&to).is_ok()
    }
}

#[inline]
fn in_bounds(width: u32, height: u32, cell: Cell) -> bool {
    cell.x >= 0 && (cell.x as u32) < width && cell.y >= 0 && (cell.y as u32) < height
}

#[inline]
fn index_of(width: u32, height: u32, cell: Cell) -> Option<usize> {
    in_bounds(width, height, cell)
        .then(|| (cell.y as usize) * (width as usize) + (cell.x as usize))
}
