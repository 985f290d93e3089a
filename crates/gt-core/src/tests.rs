//! Unit tests for gt-core primitives.

#[cfg(test)]
mod ids {
    use crate::{LightId, ParkingId, VehicleId};

    #[test]
    fn index_roundtrip() {
        let id = VehicleId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(VehicleId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(VehicleId(0) < VehicleId(1));
        assert!(ParkingId(100) > ParkingId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(VehicleId::INVALID.0, u32::MAX);
        assert_eq!(LightId::INVALID.0, u32::MAX);
        assert_eq!(ParkingId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(VehicleId(7).to_string(), "VehicleId(7)");
    }
}

#[cfg(test)]
mod cell {
    use crate::Cell;

    #[test]
    fn manhattan_distance() {
        let a = Cell::new(0, 0);
        let b = Cell::new(3, 4);
        assert_eq!(a.manhattan(b), 7);
        assert_eq!(b.manhattan(a), 7);
        assert_eq!(a.manhattan(a), 0);
    }

    #[test]
    fn manhattan_handles_negatives() {
        let a = Cell::new(-2, 5);
        let b = Cell::new(1, -1);
        assert_eq!(a.manhattan(b), 9);
    }

    #[test]
    fn ordering_is_x_then_y() {
        // x dominates even when y is larger
        assert!(Cell::new(1, 9) < Cell::new(2, 0));
        // equal x falls back to y
        assert!(Cell::new(3, 1) < Cell::new(3, 2));
        assert_eq!(Cell::new(4, 4), Cell::new(4, 4));
    }

    #[test]
    fn sort_order_matches_tie_break_contract() {
        let mut cells = vec![
            Cell::new(2, 0),
            Cell::new(0, 1),
            Cell::new(0, 0),
            Cell::new(1, 5),
        ];
        cells.sort();
        assert_eq!(
            cells,
            vec![
                Cell::new(0, 0),
                Cell::new(0, 1),
                Cell::new(1, 5),
                Cell::new(2, 0),
            ]
        );
    }

    #[test]
    fn offset_and_display() {
        let c = Cell::new(3, 4).offset(-1, 2);
        assert_eq!(c, Cell::new(2, 6));
        assert_eq!(c.to_string(), "(2, 6)");
    }
}

#[cfg(test)]
mod light {
    use crate::LightState;

    #[test]
    fn toggle_alternates() {
        assert_eq!(LightState::Red.toggle(), LightState::Green);
        assert_eq!(LightState::Green.toggle(), LightState::Red);
        assert_eq!(LightState::Red.toggle().toggle(), LightState::Red);
    }

    #[test]
    fn entry_permission() {
        assert!(LightState::Green.permits_entry());
        assert!(!LightState::Red.permits_entry());
    }

    #[test]
    fn display() {
        assert_eq!(LightState::Red.to_string(), "red");
        assert_eq!(LightState::Green.to_string(), "green");
    }
}

#[cfg(test)]
mod time {
    use crate::{SimConfig, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick(15).since(Tick(10)), 5u64);
    }

    #[test]
    fn display() {
        assert_eq!(Tick(12).to_string(), "T12");
    }

    #[test]
    fn sim_config_end_tick() {
        let cfg = SimConfig::new(200, 42);
        assert_eq!(cfg.end_tick(), Tick(200));
        assert!(!cfg.stop_when_parked);
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: u64 = r1.random();
            let b: u64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut r1 = SimRng::new(1);
        let mut r2 = SimRng::new(2);
        let a: u64 = r1.random();
        let b: u64 = r2.random();
        assert_ne!(a, b, "adjacent seeds should diverge");
    }

    #[test]
    fn shuffle_is_seed_deterministic() {
        let mut r1 = SimRng::new(7);
        let mut r2 = SimRng::new(7);
        let mut a: Vec<u32> = (0..50).collect();
        let mut b: Vec<u32> = (0..50).collect();
        r1.shuffle(&mut a);
        r2.shuffle(&mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn choose_on_empty_is_none() {
        let mut rng = SimRng::new(0);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v = rng.gen_range(0..10u32);
            assert!(v < 10);
        }
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }
}
