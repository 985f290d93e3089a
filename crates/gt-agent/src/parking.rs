//! Parking spots and their exclusive allocation.
//!
//! The registry is the single authority on destinations: a vehicle obtains
//! one only through [`ParkingRegistry::assign`], which reserves the chosen
//! spot, and the reservation holds until the vehicle either parks on it
//! ([`ParkingRegistry::arrive`]) or hands it back
//! ([`ParkingRegistry::release`]).  The `reserved`/`occupied` flags are the
//! entire allocation state — there is no separate free list to drift out of
//! sync with them.

use gt_core::{Cell, ParkingId, SimRng, VehicleId};

/// One off-street parking cell.
#[derive(Copy, Clone, Debug)]
pub struct ParkingSpot {
    pub id: ParkingId,
    pub cell: Cell,

    /// Promised to a vehicle that is still on its way.
    pub reserved: bool,

    /// A vehicle stands on the spot for good.
    pub occupied: bool,
}

impl ParkingSpot {
    /// Eligible as a fresh destination.
    #[inline]
    fn available(&self) -> bool {
        !self.reserved && !self.occupied
    }
}

/// All parking spots, indexed by [`ParkingId`].
pub struct ParkingRegistry {
    spots: Vec<ParkingSpot>,
}

impl ParkingRegistry {
    /// Build from spot cells; ids follow input order.
    pub fn new(cells: &[Cell]) -> Self {
        let spots = cells
            .iter()
            .enumerate()
            .map(|(i, &cell)| ParkingSpot {
                id: ParkingId(i as u32),
                cell,
                reserved: false,
                occupied: false,
            })
            .collect();
        Self { spots }
    }

    pub fn len(&self) -> usize {
        self.spots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }

    /// All spots in id order.
    pub fn spots(&self) -> &[ParkingSpot] {
        &self.spots
    }

    pub fn get(&self, id: ParkingId) -> &ParkingSpot {
        &self.spots[id.index()]
    }

    /// The cell of spot `id`.
    pub fn cell_of(&self, id: ParkingId) -> Cell {
        self.spots[id.index()].cell
    }

    /// Spots currently holding a parked vehicle.
    pub fn occupied_count(&self) -> usize {
        self.spots.iter().filter(|s| s.occupied).count()
    }

    /// Reserve a destination for `vehicle`: a uniform random pick among
    /// spots that are neither reserved nor occupied, excluding `exclude`
    /// (the vehicle's own origin).
    ///
    /// `None` means nothing is eligible right now.  That is not an error —
    /// the caller idles this tick and asks again on its next turn.
    pub fn assign(
        &mut self,
        vehicle: VehicleId,
        exclude: ParkingId,
        rng: &mut SimRng,
    ) -> Option<ParkingId> {
        let eligible: Vec<ParkingId> = self
            .spots
            .iter()
            .filter(|s| s.available() && s.id != exclude)
            .map(|s| s.id)
            .collect();
        let pick = *rng.choose(&eligible)?;
        self.spots[pick.index()].reserved = true;
        log::trace!("spot {} at {} reserved for {}", pick, self.cell_of(pick), vehicle);
        Some(pick)
    }

    /// Hand a reservation back (goal unreachable or abandoned).  Releasing
    /// an unreserved spot is a no-op.
    pub fn release(&mut self, id: ParkingId) {
        self.spots[id.index()].reserved = false;
    }

    /// Record that the reserving vehicle now stands on the spot.  The spot
    /// leaves the pool permanently: occupied spots are never assigned.
    pub fn arrive(&mut self, id: ParkingId) {
        let spot = &mut self.spots[id.index()];
        spot.reserved = false;
        spot.occupied = true;
    }
}
