//! City map: the connectivity graph plus the cell classifications the
//! simulation consumes (parking spots, traffic lights).
//!
//! Buildings, roundabouts and other scenery are authoring concerns — they
//! shape which edges exist but are invisible to the simulation, so the map
//! does not record them.

use gt_core::{Cell, LightState};

use crate::error::{MapError, MapResult};
use crate::graph::ConnectivityGraph;

// ── CityMap ───────────────────────────────────────────────────────────────────

/// A validated city map.
///
/// Do not construct directly; use [`CityMapBuilder`].  `parkings` and
/// `lights` are in registration order — the simulation builder turns the
/// positions into registry entries with matching ids.
#[derive(Debug)]
pub struct CityMap {
    pub graph: ConnectivityGraph,

    /// One parking spot per entry.
    pub parkings: Vec<Cell>,

    /// One traffic light per entry, with its starting phase.
    pub lights: Vec<(Cell, LightState)>,
}

// ── CityMapBuilder ────────────────────────────────────────────────────────────

/// Construct a [`CityMap`] incrementally, then call [`build`](Self::build).
///
/// The builder accepts edges, parking spots, and lights in any order;
/// `build()` validates everything against the grid bounds and constructs
/// the CSR graph.
///
/// # Example
///
/// ```
/// use gt_core::LightState;
/// use gt_map::CityMapBuilder;
///
/// let mut b = CityMapBuilder::new(3, 1);
/// b.edge((0, 0), (1, 0));
/// b.edge((1, 0), (2, 0));
/// b.parking((2, 0));
/// b.light((1, 0), LightState::Red);
/// let map = b.build().unwrap();
/// assert_eq!(map.graph.edge_count(), 2);
/// ```
pub struct CityMapBuilder {
    width: u32,
    height: u32,
    edges: Vec<(Cell, Cell)>,
    parkings: Vec<Cell>,
    lights: Vec<(Cell, LightState)>,
}

impl CityMapBuilder {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            edges: Vec::new(),
            parkings: Vec::new(),
            lights: Vec::new(),
        }
    }

    /// Pre-allocate for the expected edge count to reduce reallocations when
    /// bulk-loading an authored layout.
    pub fn with_capacity(width: u32, height: u32, edges: usize) -> Self {
        Self {
            width,
            height,
            edges: Vec::with_capacity(edges),
            parkings: Vec::new(),
            lights: Vec::new(),
        }
    }

    /// Add a **directed** legal move from `from` to `to`.
    pub fn edge(&mut self, from: impl Into<Cell>, to: impl Into<Cell>) {
        self.edges.push((from.into(), to.into()));
    }

    /// Convenience: add legal moves in **both directions** between `a` and
    /// `b` (the usual shape for a parking driveway).
    pub fn two_way(&mut self, a: impl Into<Cell>, b: impl Into<Cell>) {
        let (a, b) = (a.into(), b.into());
        self.edge(a, b);
        self.edge(b, a);
    }

    /// Register a parking spot on `cell`.
    pub fn parking(&mut self, cell: impl Into<Cell>) {
        self.parkings.push(cell.into());
    }

    /// Register a traffic light on `cell` with its starting phase.
    pub fn light(&mut self, cell: impl Into<Cell>, initial: LightState) {
        self.lights.push((cell.into(), initial));
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Consume the builder and produce a validated [`CityMap`].
    ///
    /// Fails on any edge endpoint, parking spot, or light that leaves the
    /// grid, and on two parkings or two lights claiming the same cell.
    pub fn build(self) -> MapResult<CityMap> {
        let graph = ConnectivityGraph::from_edges(self.width, self.height, self.edges)?;

        let mut parking_claimed = vec![false; graph.cell_count()];
        for &cell in &self.parkings {
            let Some(idx) = graph.cell_index(cell) else {
                return Err(MapError::CellOutOfBounds {
                    what: "parking spot",
                    cell,
                    width: self.width,
                    height: self.height,
                });
            };
            if parking_claimed[idx] {
                return Err(MapError::DuplicateParking(cell));
            }
            parking_claimed[idx] = true;

            if graph.out_degree(cell) == 0 {
                log::warn!("parking spot at {cell} has no outgoing edges; its vehicle can never leave");
            }
        }

        let mut light_claimed = vec![false; graph.cell_count()];
        for &(cell, _) in &self.lights {
            let Some(idx) = graph.cell_index(cell) else {
                return Err(MapError::CellOutOfBounds {
                    what: "traffic light",
                    cell,
                    width: self.width,
                    height: self.height,
                });
            };
            if light_claimed[idx] {
                return Err(MapError::DuplicateLight(cell));
            }
            light_claimed[idx] = true;
        }

        Ok(CityMap {
            graph,
            parkings: self.parkings,
            lights: self.lights,
        })
    }
}
