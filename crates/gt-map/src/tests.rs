//! Unit tests for gt-map.
//!
//! All tests use hand-crafted maps small enough to verify by eye.

#[cfg(test)]
mod helpers {
    use gt_core::Cell;

    use crate::ConnectivityGraph;

    /// Three cells in a row with one-way moves:
    ///
    ///   (0,0) → (1,0) → (2,0)
    pub fn line_graph() -> ConnectivityGraph {
        let edges = vec![
            (Cell::new(0, 0), Cell::new(1, 0)),
            (Cell::new(1, 0), Cell::new(2, 0)),
        ];
        ConnectivityGraph::from_edges(3, 1, edges).unwrap()
    }

    /// Full two-way 4-connected lattice of `width x height` cells.
    pub fn lattice(width: u32, height: u32) -> ConnectivityGraph {
        let mut edges = Vec::new();
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                let here = Cell::new(x, y);
                if x + 1 < width as i32 {
                    edges.push((here, here.offset(1, 0)));
                    edges.push((here.offset(1, 0), here));
                }
                if y + 1 < height as i32 {
                    edges.push((here, here.offset(0, 1)));
                    edges.push((here.offset(0, 1), here));
                }
            }
        }
        ConnectivityGraph::from_edges(width, height, edges).unwrap()
    }
}

// ── Connectivity graph ────────────────────────────────────────────────────────

#[cfg(test)]
mod graph {
    use gt_core::Cell;

    use crate::{ConnectivityGraph, MapError};

    #[test]
    fn empty_grid() {
        let g = ConnectivityGraph::from_edges(4, 4, vec![]).unwrap();
        assert_eq!(g.cell_count(), 16);
        assert_eq!(g.edge_count(), 0);
        assert!(g.neighbors(Cell::new(2, 2)).is_empty());
    }

    #[test]
    fn neighbors_sorted_and_deduped() {
        let from = Cell::new(1, 1);
        let edges = vec![
            (from, Cell::new(2, 1)),
            (from, Cell::new(0, 1)),
            (from, Cell::new(1, 2)),
            (from, Cell::new(2, 1)), // duplicate declaration
        ];
        let g = ConnectivityGraph::from_edges(3, 3, edges).unwrap();
        assert_eq!(
            g.neighbors(from),
            &[Cell::new(0, 1), Cell::new(1, 2), Cell::new(2, 1)],
            "neighbour slice should be sorted by cell and deduplicated"
        );
        assert_eq!(g.out_degree(from), 3);
    }

    #[test]
    fn rejects_out_of_bounds_edge() {
        let edges = vec![(Cell::new(0, 0), Cell::new(3, 0))];
        let err = ConnectivityGraph::from_edges(3, 1, edges).unwrap_err();
        assert!(matches!(err, MapError::EdgeOutOfBounds { .. }));

        // A negative source coordinate is just as malformed.
        let edges = vec![(Cell::new(-1, 0), Cell::new(0, 0))];
        assert!(ConnectivityGraph::from_edges(3, 1, edges).is_err());
    }

    #[test]
    fn one_way_has_no_return() {
        let g = super::helpers::line_graph();
        assert!(g.has_edge(Cell::new(0, 0), Cell::new(1, 0)));
        assert!(!g.has_edge(Cell::new(1, 0), Cell::new(0, 0)));
        assert!(g.neighbors(Cell::new(2, 0)).is_empty());
    }

    #[test]
    fn cell_index_roundtrip() {
        let g = super::helpers::lattice(5, 4);
        for y in 0..4 {
            for x in 0..5 {
                let cell = Cell::new(x, y);
                let idx = g.cell_index(cell).unwrap();
                assert_eq!(g.cell_at(idx), cell);
            }
        }
        assert!(g.cell_index(Cell::new(5, 0)).is_none());
        assert!(g.cell_index(Cell::new(0, -1)).is_none());
    }

    #[test]
    fn off_grid_queries_are_empty() {
        let g = super::helpers::lattice(3, 3);
        assert!(g.neighbors(Cell::new(-1, 0)).is_empty());
        assert!(g.neighbors(Cell::new(0, 7)).is_empty());
        assert!(!g.has_edge(Cell::new(-1, 0), Cell::new(0, 0)));
    }

    #[test]
    fn lattice_degrees() {
        let g = super::helpers::lattice(3, 3);
        assert_eq!(g.out_degree(Cell::new(1, 1)), 4, "interior cell");
        assert_eq!(g.out_degree(Cell::new(0, 0)), 2, "corner cell");
        assert_eq!(g.out_degree(Cell::new(1, 0)), 3, "border cell");
    }
}

// ── City map builder ──────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use gt_core::{Cell, LightState};

    use crate::{CityMapBuilder, MapError};

    #[test]
    fn collects_parkings_and_lights() {
        let mut b = CityMapBuilder::new(4, 4);
        b.two_way((0, 0), (1, 0));
        b.edge((1, 0), (1, 1));
        b.parking((0, 0));
        b.parking((1, 1));
        b.light((1, 0), LightState::Red);

        let map = b.build().unwrap();
        assert_eq!(map.parkings, vec![Cell::new(0, 0), Cell::new(1, 1)]);
        assert_eq!(map.lights, vec![(Cell::new(1, 0), LightState::Red)]);
        assert_eq!(map.graph.edge_count(), 3);
    }

    #[test]
    fn two_way_adds_both_directions() {
        let mut b = CityMapBuilder::new(2, 1);
        b.two_way((0, 0), (1, 0));
        let map = b.build().unwrap();
        assert!(map.graph.has_edge(Cell::new(0, 0), Cell::new(1, 0)));
        assert!(map.graph.has_edge(Cell::new(1, 0), Cell::new(0, 0)));
    }

    #[test]
    fn rejects_out_of_bounds_parking() {
        let mut b = CityMapBuilder::new(2, 2);
        b.parking((2, 0));
        let err = b.build().unwrap_err();
        assert!(matches!(
            err,
            MapError::CellOutOfBounds { what: "parking spot", .. }
        ));
    }

    #[test]
    fn rejects_duplicate_parking() {
        let mut b = CityMapBuilder::new(2, 2);
        b.parking((1, 1));
        b.parking((1, 1));
        assert!(matches!(b.build(), Err(MapError::DuplicateParking(_))));
    }

    #[test]
    fn rejects_out_of_bounds_light() {
        let mut b = CityMapBuilder::new(2, 2);
        b.light((0, 5), LightState::Green);
        assert!(matches!(
            b.build(),
            Err(MapError::CellOutOfBounds { what: "traffic light", .. })
        ));
    }

    #[test]
    fn rejects_duplicate_light() {
        let mut b = CityMapBuilder::new(2, 2);
        b.light((0, 0), LightState::Red);
        b.light((0, 0), LightState::Green);
        assert!(matches!(b.build(), Err(MapError::DuplicateLight(_))));
    }
}

// ── Route planning ────────────────────────────────────────────────────────────

#[cfg(test)]
mod planning {
    use std::collections::VecDeque;

    use gt_core::Cell;

    use crate::{AStarPlanner, ConnectivityGraph, RoutePlanner};

    /// Breadth-first move count from `start` to `goal`; `None` if unreachable.
    /// Oracle for the shortest-length property.
    fn bfs_distance(graph: &ConnectivityGraph, start: Cell, goal: Cell) -> Option<u32> {
        let mut dist = vec![u32::MAX; graph.cell_count()];
        dist[graph.cell_index(start)?] = 0;
        let mut queue = VecDeque::from([start]);
        while let Some(cell) = queue.pop_front() {
            let d = dist[graph.cell_index(cell)?];
            if cell == goal {
                return Some(d);
            }
            for &next in graph.neighbors(cell) {
                let idx = graph.cell_index(next)?;
                if dist[idx] == u32::MAX {
                    dist[idx] = d + 1;
                    queue.push_back(next);
                }
            }
        }
        None
    }

    #[test]
    fn three_cell_line() {
        let g = super::helpers::line_graph();
        let route = AStarPlanner.plan(&g, Cell::new(0, 0), Cell::new(2, 0));
        assert_eq!(route, vec![Cell::new(1, 0), Cell::new(2, 0)]);
    }

    #[test]
    fn route_excludes_start_and_ends_at_goal() {
        let g = super::helpers::lattice(5, 5);
        let start = Cell::new(0, 3);
        let goal = Cell::new(4, 1);
        let route = AStarPlanner.plan(&g, start, goal);
        assert!(!route.is_empty());
        assert_ne!(route[0], start);
        assert_eq!(*route.last().unwrap(), goal);
    }

    #[test]
    fn route_moves_are_graph_edges() {
        let g = super::helpers::lattice(5, 5);
        let start = Cell::new(1, 4);
        let route = AStarPlanner.plan(&g, start, Cell::new(4, 0));
        let mut prev = start;
        for &cell in &route {
            assert!(g.has_edge(prev, cell), "illegal move {prev} -> {cell}");
            prev = cell;
        }
    }

    #[test]
    fn same_cell_yields_empty() {
        let g = super::helpers::lattice(3, 3);
        assert!(AStarPlanner.plan(&g, Cell::new(1, 1), Cell::new(1, 1)).is_empty());
    }

    #[test]
    fn unreachable_yields_empty() {
        // Two cells, no edges at all.
        let g = ConnectivityGraph::from_edges(2, 1, vec![]).unwrap();
        let route = AStarPlanner.plan(&g, Cell::new(0, 0), Cell::new(1, 0));
        assert!(route.is_empty());
    }

    #[test]
    fn one_way_blocks_return() {
        let g = super::helpers::line_graph();
        assert!(AStarPlanner.plan(&g, Cell::new(2, 0), Cell::new(0, 0)).is_empty());
    }

    #[test]
    fn off_grid_endpoints_yield_empty() {
        let g = super::helpers::lattice(3, 3);
        assert!(AStarPlanner.plan(&g, Cell::new(-1, 0), Cell::new(2, 2)).is_empty());
        assert!(AStarPlanner.plan(&g, Cell::new(0, 0), Cell::new(9, 9)).is_empty());
    }

    #[test]
    fn tie_break_is_lexicographic() {
        // 2x2 lattice: (0,0) → (1,1) has two equal-cost routes.  The frontier
        // ordering must pick the one through (0,1), the smaller cell.
        let g = super::helpers::lattice(2, 2);
        let route = AStarPlanner.plan(&g, Cell::new(0, 0), Cell::new(1, 1));
        assert_eq!(route, vec![Cell::new(0, 1), Cell::new(1, 1)]);
    }

    #[test]
    fn staircase_resolves_low_x_first() {
        // All monotone staircases (0,0) → (2,2) cost 4; the deterministic
        // expansion order settles on the low-x column first.
        let g = super::helpers::lattice(3, 3);
        let route = AStarPlanner.plan(&g, Cell::new(0, 0), Cell::new(2, 2));
        assert_eq!(
            route,
            vec![
                Cell::new(0, 1),
                Cell::new(0, 2),
                Cell::new(1, 2),
                Cell::new(2, 2),
            ]
        );
    }

    #[test]
    fn identical_inputs_identical_route() {
        let g = super::helpers::lattice(6, 4);
        let a = AStarPlanner.plan(&g, Cell::new(0, 0), Cell::new(5, 3));
        let b = AStarPlanner.plan(&g, Cell::new(0, 0), Cell::new(5, 3));
        assert_eq!(a, b);
    }

    #[test]
    fn length_matches_bfs_distance() {
        let g = super::helpers::lattice(6, 6);
        let pairs = [
            (Cell::new(0, 0), Cell::new(5, 5)),
            (Cell::new(3, 1), Cell::new(0, 4)),
            (Cell::new(5, 0), Cell::new(0, 0)),
            (Cell::new(2, 2), Cell::new(2, 5)),
        ];
        for (start, goal) in pairs {
            let route = AStarPlanner.plan(&g, start, goal);
            let oracle = bfs_distance(&g, start, goal).unwrap();
            assert_eq!(route.len() as u32, oracle, "route {start} -> {goal}");
        }
    }
}
