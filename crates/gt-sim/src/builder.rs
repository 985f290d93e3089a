//! Assembles a [`Simulation`] from a map, a planner, and a config.

use gt_agent::{LightController, OccupancyGrid, ParkingRegistry, Vehicle};
use gt_core::{ParkingId, SimConfig, SimRng, Tick, VehicleId};
use gt_map::{CityMap, RoutePlanner};

use crate::error::{SimError, SimResult};
use crate::sim::{AgentRef, Simulation};

/// Builder for [`Simulation`].
///
/// Spawns one vehicle per parking spot: vehicle `i` starts parked on spot
/// `i`, so every spot is occupied at T0 and the only free capacity is what
/// vehicles open up by leaving.
///
/// ```rust,ignore
/// let sim = SimBuilder::new(SimConfig::new(200, 42), map, AStarPlanner).build()?;
/// ```
pub struct SimBuilder<P: RoutePlanner> {
    config: SimConfig,
    map: CityMap,
    planner: P,
}

impl<P: RoutePlanner> SimBuilder<P> {
    pub fn new(config: SimConfig, map: CityMap, planner: P) -> Self {
        SimBuilder { config, map, planner }
    }

    /// Consume the builder and produce a ready-to-run [`Simulation`].
    ///
    /// Fails when the map defines no parking spots, since the population is
    /// derived from them.
    pub fn build(self) -> SimResult<Simulation<P>> {
        let SimBuilder { config, map, planner } = self;
        let CityMap { graph, parkings, lights } = map;

        if parkings.is_empty() {
            return Err(SimError::NoParkingSpots);
        }

        let parking = ParkingRegistry::new(&parkings);
        let lights = LightController::new(&lights);
        let mut grid = OccupancyGrid::new(graph.width, graph.height);

        // Vehicle i wakes up on spot i; the matching ids make the pairing
        // readable in logs and snapshots.
        let mut vehicles = Vec::with_capacity(parkings.len());
        for (i, &cell) in parkings.iter().enumerate() {
            let vehicle = Vehicle::new(VehicleId(i as u32), ParkingId(i as u32), cell);
            grid.place(vehicle.id, cell);
            vehicles.push(vehicle);
        }

        let mut roster: Vec<AgentRef> =
            vehicles.iter().map(|v| AgentRef::Vehicle(v.id)).collect();
        roster.extend(lights.lights().iter().map(|l| AgentRef::Light(l.id)));

        log::info!(
            "simulation ready: {} vehicles, {} lights, {}x{} grid, {} ticks from seed {}",
            vehicles.len(),
            lights.len(),
            graph.width,
            graph.height,
            config.total_ticks,
            config.seed
        );

        Ok(Simulation {
            rng: SimRng::new(config.seed),
            config,
            tick: Tick::ZERO,
            graph,
            planner,
            grid,
            parking,
            lights,
            vehicles,
            roster,
        })
    }
}
