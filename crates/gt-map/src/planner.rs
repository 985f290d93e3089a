//! Route planning trait and the default A* implementation.
//!
//! # Pluggability
//!
//! `gt-sim` plans routes via the [`RoutePlanner`] trait, so applications can
//! swap in custom implementations (precomputed tables, congestion-aware
//! costs) without touching the simulation core.  The default
//! [`AStarPlanner`] is sufficient for city-scale grids.
//!
//! # Determinism
//!
//! Every move costs 1, so many candidate paths tie.  The frontier is ordered
//! by `(estimated_total_cost, cell)`: among equal-cost candidates the
//! lexicographically least cell (by `x`, then `y`) is expanded first.  That
//! makes the chosen route a pure function of the graph and the endpoints —
//! replays and cross-run comparisons see identical traffic.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use gt_core::Cell;

use crate::graph::ConnectivityGraph;

// ── RoutePlanner trait ────────────────────────────────────────────────────────

/// Pluggable route planning engine.
pub trait RoutePlanner {
    /// Compute the moves from `start` to `goal`.
    ///
    /// The returned cells are the moves to make in order: `start` is
    /// excluded, `goal` (when reachable) is last.  An empty route means
    /// `goal` is unreachable from `start` — or already reached; callers
    /// treat both as "nowhere to go".
    fn plan(&self, graph: &ConnectivityGraph, start: Cell, goal: Cell) -> Vec<Cell>;
}

// ── AStarPlanner ──────────────────────────────────────────────────────────────

/// A* over the CSR connectivity graph with unit move cost and the Manhattan
/// distance as heuristic.
///
/// Manhattan distance never overestimates on a grid where every move costs
/// 1, so the first time the goal leaves the frontier its route is shortest.
pub struct AStarPlanner;

impl RoutePlanner for AStarPlanner {
    fn plan(&self, graph: &ConnectivityGraph, start: Cell, goal: Cell) -> Vec<Cell> {
        astar(graph, start, goal)
    }
}

// ── A* internals ──────────────────────────────────────────────────────────────

/// Sentinel for "cell not yet reached" in the predecessor array.
const UNREACHED: u32 = u32::MAX;

fn astar(graph: &ConnectivityGraph, start: Cell, goal: Cell) -> Vec<Cell> {
    let (Some(start_idx), Some(goal_idx)) = (graph.cell_index(start), graph.cell_index(goal))
    else {
        // Off-grid endpoints can't be routed to; same answer as unreachable.
        return Vec::new();
    };
    if start_idx == goal_idx {
        return Vec::new();
    }

    let n = graph.cell_count();
    // g[i] = best known move count to reach cell index i.
    let mut g = vec![u32::MAX; n];
    // prev[i] = cell index the best route reached i from.
    let mut prev = vec![UNREACHED; n];

    g[start_idx] = 0;

    // Min-heap: (f, cell) where f = g + Manhattan-to-goal.  Reverse makes
    // BinaryHeap (max) behave as min-heap.  Secondary key Cell pins the
    // expansion order of equal-f candidates.
    let mut frontier: BinaryHeap<Reverse<(u32, Cell)>> = BinaryHeap::new();
    frontier.push(Reverse((start.manhattan(goal), start)));

    while let Some(Reverse((f, cell))) = frontier.pop() {
        if cell == goal {
            return reconstruct(graph, &prev, goal_idx);
        }

        // Frontier cells come from the graph, so the index always resolves.
        let Some(idx) = graph.cell_index(cell) else {
            continue;
        };

        // Skip stale frontier entries (a cheaper route got there first).
        let h = cell.manhattan(goal);
        if f > g[idx].saturating_add(h) {
            continue;
        }

        for &next in graph.neighbors(cell) {
            let Some(next_idx) = graph.cell_index(next) else {
                continue;
            };
            let tentative = g[idx] + 1;
            if tentative < g[next_idx] {
                g[next_idx] = tentative;
                prev[next_idx] = idx as u32;
                frontier.push(Reverse((tentative + next.manhattan(goal), next)));
            }
        }
    }

    // Frontier exhausted without reaching the goal.
    log::debug!("no route from {start} to {goal}");
    Vec::new()
}

/// Walk the predecessor chain back from the goal, then flip it into
/// travel order.  The start cell has no predecessor and is left out.
fn reconstruct(graph: &ConnectivityGraph, prev: &[u32], goal_idx: usize) -> Vec<Cell> {
    let mut route = Vec::new();
    let mut cur = goal_idx;
    while prev[cur] != UNREACHED {
        route.push(graph.cell_at(cur));
        cur = prev[cur] as usize;
    }
    route.reverse();
    route
}
