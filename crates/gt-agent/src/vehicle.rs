//! Vehicles and their per-tick movement turn.
//!
//! # Turn protocol
//!
//! A vehicle's turn walks a fixed decision ladder and stops at the first
//! rung that applies:
//!
//! 1. already parked → nothing to do,
//! 2. no destination → ask the parking registry for one,
//! 3. no pending route → plan one with the injected [`RoutePlanner`],
//! 4. next cell occupied or behind a red light → wait, keeping the route,
//! 5. otherwise advance exactly one cell, parking if that was the last.
//!
//! Failures along the ladder are ordinary outcomes, not errors: a full
//! registry or an unreachable goal leaves the vehicle idle for the tick,
//! and it simply tries again on its next turn.
//!
//! # Waiting
//!
//! Waiting is pure backoff.  The route is kept, nothing is re-planned, and
//! no queue forms — of the vehicles blocked on a cell, whichever the
//! scheduler happens to activate first after it frees claims it.

use std::collections::VecDeque;

use gt_core::{Cell, ParkingId, SimRng, VehicleId};
use gt_map::{ConnectivityGraph, RoutePlanner};

use crate::light::LightController;
use crate::occupancy::OccupancyGrid;
use crate::parking::ParkingRegistry;

// ── TurnContext ───────────────────────────────────────────────────────────────

/// Read-only world view handed to every vehicle turn.
///
/// The mutable collaborators (occupancy grid, parking registry, RNG) are
/// passed to [`Vehicle::step`] separately, so the borrow checker can see
/// they are disjoint from this bundle.
pub struct TurnContext<'a, P: RoutePlanner> {
    pub graph: &'a ConnectivityGraph,
    pub planner: &'a P,
    pub lights: &'a LightController,
}

impl<'a, P: RoutePlanner> TurnContext<'a, P> {
    pub fn new(graph: &'a ConnectivityGraph, planner: &'a P, lights: &'a LightController) -> Self {
        Self { graph, planner, lights }
    }
}

// ── StepOutcome ───────────────────────────────────────────────────────────────

/// What a vehicle's turn amounted to.  Only `Moved` and `Arrived` change
/// the occupancy grid.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum StepOutcome {
    /// Parked on the destination spot since an earlier tick; turns are
    /// no-ops from here on.
    Parked,

    /// No destination, or no reachable one, this tick.  Retried next turn.
    Idle,

    /// The next route cell is occupied or behind a red light.  Position
    /// unchanged, route kept.
    Waiting,

    /// Advanced one cell along the route.
    Moved,

    /// Advanced onto the destination spot and parked for good.
    Arrived,
}

// ── Vehicle ───────────────────────────────────────────────────────────────────

/// One car, spawned on its origin parking spot.
#[derive(Clone, Debug)]
pub struct Vehicle {
    pub id: VehicleId,

    /// Current cell; mirrored by the occupancy grid at all times.
    pub cell: Cell,

    /// The spot the vehicle spawned on — never picked as its destination.
    pub origin: ParkingId,

    /// Reserved destination spot, once one is assigned.
    pub destination: Option<ParkingId>,

    /// Cells still to traverse; the front is the next hop.
    pub route: VecDeque<Cell>,

    /// Set on reaching the destination.  Terminal.
    pub arrived: bool,
}

impl Vehicle {
    pub fn new(id: VehicleId, origin: ParkingId, cell: Cell) -> Self {
        Self {
            id,
            cell,
            origin,
            destination: None,
            route: VecDeque::new(),
            arrived: false,
        }
    }

    /// Run one scheduler turn.
    pub fn step<P: RoutePlanner>(
        &mut self,
        ctx: &TurnContext<'_, P>,
        grid: &mut OccupancyGrid,
        parking: &mut ParkingRegistry,
        rng: &mut SimRng,
    ) -> StepOutcome {
        if self.arrived {
            return StepOutcome::Parked;
        }

        // Destination: hold one or ask for one.
        if self.destination.is_none() {
            self.destination = parking.assign(self.id, self.origin, rng);
            if self.destination.is_none() {
                return StepOutcome::Idle;
            }
        }

        // Route: plan when none is pending.
        if self.route.is_empty() && !self.acquire_route(ctx, parking, rng) {
            return StepOutcome::Idle;
        }
        let Some(&next) = self.route.front() else {
            return StepOutcome::Idle; // not reached: acquire_route left a route
        };

        // Right of way: the next cell must be vacant and not behind a red.
        if grid.is_occupied(next) || ctx.lights.is_red(next) {
            return StepOutcome::Waiting;
        }

        // Advance one cell.
        grid.relocate(self.id, self.cell, next);
        self.cell = next;
        self.route.pop_front();

        match self.destination {
            Some(dest) if self.cell == parking.cell_of(dest) => {
                self.arrived = true;
                parking.arrive(dest);
                log::debug!("{} parked at {}", self.id, self.cell);
                StepOutcome::Arrived
            }
            _ => StepOutcome::Moved,
        }
    }

    /// Plan a route to the held destination.  An unreachable spot is handed
    /// back and one replacement tried, so a dead-end goal is abandoned
    /// rather than retried turn after turn.  `false` leaves the vehicle
    /// destination-less and idle for this tick.
    fn acquire_route<P: RoutePlanner>(
        &mut self,
        ctx: &TurnContext<'_, P>,
        parking: &mut ParkingRegistry,
        rng: &mut SimRng,
    ) -> bool {
        if self.plan_to_destination(ctx, parking) {
            return true;
        }
        self.abandon_destination(parking);
        self.destination = parking.assign(self.id, self.origin, rng);
        if self.plan_to_destination(ctx, parking) {
            return true;
        }
        self.abandon_destination(parking);
        false
    }

    /// Plan to the current destination; `true` iff a non-empty route was
    /// stored.
    fn plan_to_destination<P: RoutePlanner>(
        &mut self,
        ctx: &TurnContext<'_, P>,
        parking: &ParkingRegistry,
    ) -> bool {
        let Some(dest) = self.destination else {
            return false;
        };
        let goal = parking.cell_of(dest);
        let route = ctx.planner.plan(ctx.graph, self.cell, goal);
        if route.is_empty() {
            log::debug!("{}: no route {} -> {}", self.id, self.cell, goal);
            return false;
        }
        self.route = route.into();
        true
    }

    /// Drop the current destination, returning its reservation to the pool.
    fn abandon_destination(&mut self, parking: &mut ParkingRegistry) {
        if let Some(dest) = self.destination.take() {
            parking.release(dest);
        }
    }
}
