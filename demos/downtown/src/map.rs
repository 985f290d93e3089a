//! Downtown map definition: a 24x24 city-block layout.
//!
//! Buildings carve the street grid, seventeen parking pockets sit in gaps
//! between them, and a four-cell roundabout island anchors the centre.
//! Streets are one-way and alternate direction block by block, the way
//! inner-city grids do.

use std::ops::Range;

use gt_core::LightState;
use gt_map::{CityMap, CityMapBuilder, MapResult};

pub const WIDTH: u32 = 24;
pub const HEIGHT: u32 = 24;

/// Cells covered by buildings, as `(x range, rows)`.  Traffic never touches
/// these; they exist only to shape the streets left between them.
const BLOCKS: &[(Range<i32>, &[i32])] = &[
    (2..9, &[21]),
    (10..12, &[21]),
    (3..12, &[20]),
    (2..11, &[19]),
    (2..6, &[18]),
    (7..12, &[18]),
    (16..18, &[21, 19, 18]),
    (20..22, &[21, 20, 18]),
    (21..22, &[19]),
    (16..17, &[20]),
    (2..5, &[15, 14, 12]),
    (2..4, &[13]),
    (7..12, &[14, 12]),
    (7..11, &[13]),
    (7..8, &[15]),
    (9..12, &[15]),
    (16..18, &[15, 14, 12]),
    (20..22, &[15, 13, 12]),
    (20..21, &[14]),
    (17..18, &[13]),
    (2..6, &[7, 5, 4, 2]),
    (3..6, &[6]),
    (2..5, &[3]),
    (8..12, &[2, 4, 5, 6, 7]),
    (9..12, &[3]),
    (16..22, &[2, 7]),
    (16..19, &[3]),
    (20..22, &[3]),
    (16..17, &[6]),
    (18..19, &[6]),
    (20..22, &[6]),
];

/// The seventeen parking pockets.  Each spawns one car.
const PARKING_SPOTS: [(i32, i32); 17] = [
    (2, 20),
    (9, 21),
    (6, 18),
    (11, 19),
    (17, 20),
    (20, 19),
    (8, 15),
    (4, 13),
    (11, 13),
    (21, 14),
    (16, 13),
    (5, 3),
    (8, 3),
    (19, 3),
    (2, 6),
    (17, 6),
    (19, 6),
];

/// Centre island of the roundabout.  The ring of street cells around it
/// stays drivable; the island itself takes no traffic.
const ROUNDABOUT_CORE: [(i32, i32); 4] = [(13, 9), (13, 10), (14, 9), (14, 10)];

/// Signal heads on the roundabout ring.  The east-west approaches start
/// green and the north-south legs start red; the shared toggle clock keeps
/// the two groups in opposite phase forever.
const LIGHTS: [((i32, i32), LightState); 8] = [
    ((13, 8), LightState::Green),
    ((14, 8), LightState::Green),
    ((13, 11), LightState::Green),
    ((14, 11), LightState::Green),
    ((12, 9), LightState::Red),
    ((12, 10), LightState::Red),
    ((15, 9), LightState::Red),
    ((15, 10), LightState::Red),
];

/// Build the downtown map.
///
/// Every cell not claimed by a building, a parking pocket, or the
/// roundabout island is street.  Row `y` flows east when `y` is even and
/// west when odd; column `x` flows towards `+y` when `x` is odd and towards
/// `-y` when even, so each street cell offers at most one horizontal and
/// one vertical move.  Each parking pocket gets a two-way driveway to its
/// first open street neighbour (probing east, west, `+y`, `-y`).
///
/// The alternating rule closes a one-way loop around the roundabout island
/// and leaves the street network strongly connected: every spot can reach
/// every other spot.
pub fn build_downtown() -> MapResult<CityMap> {
    let road = road_cells();
    let mut b = CityMapBuilder::with_capacity(WIDTH, HEIGHT, 700);

    for y in 0..HEIGHT as i32 {
        for x in 0..WIDTH as i32 {
            if !road[index(x, y)] {
                continue;
            }
            let row_dx = if y % 2 == 0 { 1 } else { -1 };
            let col_dy = if x % 2 == 1 { 1 } else { -1 };
            for (tx, ty) in [(x + row_dx, y), (x, y + col_dy)] {
                if is_road(&road, tx, ty) {
                    b.edge((x, y), (tx, ty));
                }
            }
        }
    }

    for (x, y) in PARKING_SPOTS {
        let driveway = [(x + 1, y), (x - 1, y), (x, y + 1), (x, y - 1)]
            .into_iter()
            .find(|&(tx, ty)| is_road(&road, tx, ty));
        if let Some(street) = driveway {
            b.two_way((x, y), street);
        }
        b.parking((x, y));
    }

    for (cell, initial) in LIGHTS {
        b.light(cell, initial);
    }

    b.build()
}

/// Flag per cell: `true` where through traffic may drive.
fn road_cells() -> Vec<bool> {
    let mut road = vec![true; (WIDTH * HEIGHT) as usize];
    for (xs, rows) in BLOCKS {
        for x in xs.clone() {
            for &y in *rows {
                road[index(x, y)] = false;
            }
        }
    }
    for (x, y) in PARKING_SPOTS {
        road[index(x, y)] = false;
    }
    for (x, y) in ROUNDABOUT_CORE {
        road[index(x, y)] = false;
    }
    road
}

fn index(x: i32, y: i32) -> usize {
    (y * WIDTH as i32 + x) as usize
}

fn is_road(road: &[bool], x: i32, y: i32) -> bool {
    x >= 0 && y >= 0 && x < WIDTH as i32 && y < HEIGHT as i32 && road[index(x, y)]
}
