//! The `Simulation` struct and its tick loop.

use gt_agent::{LightController, OccupancyGrid, ParkingRegistry, StepOutcome, TurnContext, Vehicle};
use gt_core::{LightId, SimConfig, SimRng, Tick, VehicleId};
use gt_map::{ConnectivityGraph, RoutePlanner};

use crate::observer::{SimObserver, TickReport};
use crate::snapshot::{LightSnapshot, Snapshot, VehicleSnapshot};

// ── Activation roster ─────────────────────────────────────────────────────────

/// One entry in the activation roster.
///
/// Only vehicles and traffic lights act; buildings and other scenery never
/// enter the roster.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum AgentRef {
    Vehicle(VehicleId),
    Light(LightId),
}

// ── Simulation ────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Simulation<P>` owns all world state and drives the tick loop:
///
/// 1. **Shuffle**: draw a fresh random activation order over the roster.
/// 2. **Turns**: run each agent's turn once — vehicles walk their movement
///    ladder, lights toggle on period multiples.  Mutations are immediate,
///    so later agents see what earlier agents did this tick.
/// 3. **Advance**: the stored tick counter catches up to the tick just run.
/// 4. **Snapshot**: the closing state goes to the observer.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Simulation<P: RoutePlanner> {
    /// Global configuration (run length, seed, early-stop policy).
    pub config: SimConfig,

    /// Completed ticks.  `Tick::ZERO` before the first tick runs.
    pub tick: Tick,

    /// Drivable-cell connectivity, shared by every route plan.
    pub graph: ConnectivityGraph,

    /// The injected route planner.
    pub planner: P,

    /// Cell → occupying vehicle.
    pub grid: OccupancyGrid,

    /// Parking spots and their reservation state.
    pub parking: ParkingRegistry,

    /// Traffic lights and their phases.
    pub lights: LightController,

    /// Vehicles indexed by [`VehicleId`].
    pub vehicles: Vec<Vehicle>,

    /// Activation roster, reshuffled at the start of every tick.
    pub roster: Vec<AgentRef>,

    /// The single random source: activation shuffles and parking picks.
    pub rng: SimRng,
}

impl<P: RoutePlanner> Simulation<P> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current tick to `config.end_tick()`, or until every
    /// vehicle is parked when `config.stop_when_parked` is set.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    /// Returns the final tick.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> Tick {
        loop {
            if self.tick >= self.config.end_tick() {
                break;
            }
            if self.config.stop_when_parked && self.all_arrived() {
                log::info!("{}: all vehicles parked, stopping early", self.tick);
                break;
            }
            self.step_tick(observer);
        }
        observer.on_sim_end(self.tick);
        self.tick
    }

    /// Run exactly `n` ticks from the current position (ignores the
    /// configured end tick and early-stop policy).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.step_tick(observer);
        }
    }

    /// `true` once every vehicle has parked on its destination.
    pub fn all_arrived(&self) -> bool {
        self.vehicles.iter().all(|v| v.arrived)
    }

    /// Build the read-only state snapshot for the current tick.
    ///
    /// Reads everything, changes nothing: calling this twice in a row
    /// yields identical values.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick: self.tick,
            vehicles: self
                .vehicles
                .iter()
                .map(|v| VehicleSnapshot { id: v.id, cell: v.cell })
                .collect(),
            lights: self
                .lights
                .lights()
                .iter()
                .map(|l| LightSnapshot { id: l.id, cell: l.cell, state: l.state })
                .collect(),
        }
    }

    // ── Core tick processing ──────────────────────────────────────────────

    /// Run one full tick and fire the observer hooks around it.
    fn step_tick<O: SimObserver>(&mut self, observer: &mut O) {
        // Turns observe the counter of the tick in progress: the first tick
        // runs as T1, and the stored counter catches up after the turns.
        let now = self.tick + 1;
        observer.on_tick_start(now);
        let report = self.process_tick(now);
        self.tick = now;

        observer.on_snapshot(&self.snapshot());
        observer.on_tick_end(now, &report);

        log::trace!(
            "{now}: moved {}, waiting {}, arrivals {}",
            report.moved,
            report.waiting,
            report.arrivals
        );
    }

    /// Activate every agent once, in a fresh random order.
    fn process_tick(&mut self, now: Tick) -> TickReport {
        // A fresh order every tick is the concurrency model: of two agents
        // contending for a cell, whoever is drawn first this tick wins, and
        // the later one sees the updated occupancy and waits.
        self.rng.shuffle(&mut self.roster);

        // Explicit field borrows so the borrow checker sees disjoint access.
        let graph = &self.graph;
        let planner = &self.planner;
        let lights = &mut self.lights;
        let grid = &mut self.grid;
        let parking = &mut self.parking;
        let vehicles = &mut self.vehicles;
        let rng = &mut self.rng;

        let mut report = TickReport::default();
        for &agent in &self.roster {
            match agent {
                AgentRef::Vehicle(id) => {
                    let ctx = TurnContext::new(graph, planner, lights);
                    match vehicles[id.index()].step(&ctx, grid, parking, rng) {
                        StepOutcome::Moved => report.moved += 1,
                        StepOutcome::Arrived => {
                            report.moved += 1;
                            report.arrivals += 1;
                        }
                        StepOutcome::Waiting => report.waiting += 1,
                        StepOutcome::Parked | StepOutcome::Idle => {}
                    }
                }
                AgentRef::Light(id) => lights.step(id, now),
            }
        }
        report
    }
}
