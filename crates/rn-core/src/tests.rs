//! Unit tests for rn-core primitives.

#[cfg(test)]
mod ids {
    use crate::{StationId, TrainId};

    #[test]
    fn train_slots_are_one_based() {
        assert_eq!(TrainId(1).slot(), Some(0));
        assert_eq!(TrainId(7).slot(), Some(6));
        assert_eq!(TrainId(0).slot(), None);
        assert_eq!(TrainId::from_slot(0), TrainId::FIRST);
        assert_eq!(TrainId::from_slot(4), TrainId(5));
    }

    #[test]
    fn station_index_and_try_from() {
        let id = StationId::try_from(42usize).unwrap();
        assert_eq!(id, StationId(42));
        assert_eq!(id.index(), 42);
    }

    #[test]
    fn display() {
        assert_eq!(StationId(3).to_string(), "StationId(3)");
    }
}

#[cfg(test)]
mod direction {
    use crate::Direction;

    #[test]
    fn display() {
        assert_eq!(Direction::North.to_string(), "North");
        assert_eq!(Direction::South.to_string(), "South");
    }
}

#[cfg(test)]
mod time {
    use crate::{SimConfig, Tick};

    #[test]
    fn tick_order_and_display() {
        assert_eq!(Tick(3).next(), Tick(4));
        assert!(Tick(3) < Tick(3).next());
        assert_eq!(Tick(2).to_string(), "T2");
    }

    #[test]
    fn snapshot_interval() {
        let cfg = SimConfig { output_interval_ticks: 3, ..SimConfig::default() };
        assert!(cfg.snapshot_due(Tick(0)));
        assert!(!cfg.snapshot_due(Tick(1)));
        assert!(cfg.snapshot_due(Tick(6)));

        let never = SimConfig { output_interval_ticks: 0, ..SimConfig::default() };
        assert!(!never.snapshot_due(Tick(0)));
    }

    #[test]
    fn end_tick() {
        let cfg = SimConfig { total_ticks: 25, ..SimConfig::default() };
        assert_eq!(cfg.end_tick(), Tick(25));
    }
}

#[cfg(test)]
mod rng {
    use crate::{RandomSource, SequenceRng, SimRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            assert_eq!(r1.unit(), r2.unit());
        }
    }

    #[test]
    fn unit_in_half_open_range() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v = rng.unit();
            assert!((0.0..1.0).contains(&v), "got {v}");
        }
    }

    #[test]
    fn index_in_bounds() {
        let mut rng = SimRng::new(7);
        for _ in 0..1000 {
            assert!(rng.index(3) < 3);
        }
        assert_eq!(rng.index(1), 0);
    }

    #[test]
    fn sequence_cycles_and_counts() {
        let mut rng = SequenceRng::new(vec![0.1, 0.6]);
        assert_eq!(rng.unit(), 0.1);
        assert_eq!(rng.unit(), 0.6);
        assert_eq!(rng.unit(), 0.1);
        assert_eq!(rng.draws(), 3);
    }

    #[test]
    fn sequence_index_scales_unit() {
        let mut rng = SequenceRng::new(vec![0.0, 0.5, 0.99]);
        assert_eq!(rng.index(4), 0);
        assert_eq!(rng.index(4), 2);
        assert_eq!(rng.index(4), 3);
    }

    fn draw_once<R: RandomSource>(mut source: R) -> f64 {
        source.unit()
    }

    #[test]
    fn mut_ref_forwards() {
        let mut rng = SequenceRng::constant(0.25);
        assert_eq!(draw_once(&mut rng), 0.25);
        assert_eq!(rng.draws(), 1);
    }

    #[test]
    #[should_panic]
    fn sequence_rejects_one() {
        let _ = SequenceRng::new(vec![1.0]);
    }
}
