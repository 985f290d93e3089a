//! downtown — grid-traffic demo on a 24x24 city map.
//!
//! Seventeen cars wake up parked around downtown, each picks another spot
//! to drive to, and the run ends once everyone has re-parked (or at the
//! tick cap).  Every tick is printed as one JSON line shaped like the
//! position feed a visualiser bridge would poll.

mod map;

use std::time::Instant;

use anyhow::Result;
use gt_core::{SimConfig, Tick};
use gt_map::AStarPlanner;
use gt_sim::{SimBuilder, SimObserver, Snapshot, TickReport};
use serde_json::json;

use map::build_downtown;

// ── Constants ─────────────────────────────────────────────────────────────────

const TOTAL_TICKS: u64 = 400;
const SEED: u64 = 42;

// ── Position feed ─────────────────────────────────────────────────────────────

/// Prints one JSON line per tick: car and light positions keyed the way a
/// visualiser feed expects (`car_3`, `light_0`), lights with their phase.
#[derive(Default)]
struct JsonFeed {
    lines: usize,
    moves: usize,
    waits: usize,
}

impl SimObserver for JsonFeed {
    fn on_snapshot(&mut self, snapshot: &Snapshot) {
        let positions: Vec<_> = snapshot
            .vehicles
            .iter()
            .map(|v| {
                json!({
                    "id": format!("car_{}", v.id.0),
                    "position": [v.cell.x, v.cell.y],
                })
            })
            .chain(snapshot.lights.iter().map(|l| {
                json!({
                    "id": format!("light_{}", l.id.0),
                    "position": [l.cell.x, l.cell.y],
                    "state": l.state,
                })
            }))
            .collect();

        println!("{}", json!({ "tick": snapshot.tick.0, "positions": positions }));
        self.lines += 1;
    }

    fn on_tick_end(&mut self, _tick: Tick, report: &TickReport) {
        self.moves += report.moved;
        self.waits += report.waiting;
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    println!("=== downtown — grid traffic simulation ===");
    println!("Ticks: up to {TOTAL_TICKS} (stops when everyone parks)  |  Seed: {SEED}");
    println!();

    // 1. Build the city map.
    let map = build_downtown()?;
    println!(
        "City map: {}x{} cells, {} street moves, {} parking spots, {} lights",
        map.graph.width,
        map.graph.height,
        map.graph.edge_count(),
        map.parkings.len(),
        map.lights.len(),
    );

    // 2. Config: hard cap at TOTAL_TICKS, early stop once every car parks.
    let mut config = SimConfig::new(TOTAL_TICKS, SEED);
    config.stop_when_parked = true;

    // 3. Build the simulation: one car per parking spot.
    let mut sim = SimBuilder::new(config, map, AStarPlanner).build()?;
    println!("Cars: {}", sim.vehicles.len());
    println!();

    // 4. Run, streaming one JSON feed line per tick.
    let t0 = Instant::now();
    let mut feed = JsonFeed::default();
    let end = sim.run(&mut feed);
    let elapsed = t0.elapsed();

    // 5. Summary.
    println!();
    println!("Simulation complete at {end} in {:.3} s", elapsed.as_secs_f64());
    println!(
        "  feed lines: {}  |  moves: {}  |  waits: {}  |  parked: {}/{}",
        feed.lines,
        feed.moves,
        feed.waits,
        sim.parking.occupied_count(),
        sim.vehicles.len(),
    );
    println!();

    // 6. Final car positions.
    println!("{:<8} {:<10} {:<8}", "Car", "Cell", "Parked");
    println!("{}", "-".repeat(28));
    for v in &sim.vehicles {
        println!(
            "{:<8} {:<10} {:<8}",
            v.id.0,
            v.cell.to_string(),
            if v.arrived { "yes" } else { "no" },
        );
    }

    Ok(())
}
