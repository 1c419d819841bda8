//! Unit tests for epi-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, RunId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
        assert!(RunId(100) > RunId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(RunId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod tile {
    use crate::Tile;

    #[test]
    fn chebyshev_is_symmetric() {
        let a = Tile::new(2, 3);
        let b = Tile::new(7, 5);
        assert_eq!(a.chebyshev(b), 5);
        assert_eq!(b.chebyshev(a), 5);
    }

    #[test]
    fn chebyshev_diagonal_counts_once() {
        assert_eq!(Tile::new(0, 0).chebyshev(Tile::new(3, 3)), 3);
    }

    #[test]
    fn zero_distance_to_self() {
        let t = Tile::new(9, 9);
        assert_eq!(t.chebyshev(t), 0);
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn offset_and_since() {
        let t = Tick(100);
        assert_eq!(t.offset(50), Tick(150));
        assert_eq!(Tick(150).since(t), 50);
    }

    #[test]
    fn arithmetic_ops() {
        assert_eq!(Tick(10) + 5, Tick(15));
        assert_eq!(Tick(15) - Tick(10), 5);
    }

    #[test]
    fn display() {
        assert_eq!(Tick(42).to_string(), "T42");
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentId, AgentRng, SimRng};

    #[test]
    fn same_seed_same_stream() {
        let mut a = AgentRng::new(7, AgentId(3));
        let mut b = AgentRng::new(7, AgentId(3));
        for _ in 0..100 {
            assert_eq!(a.random::<u64>(), b.random::<u64>());
        }
    }

    #[test]
    fn different_agents_different_streams() {
        let mut a = AgentRng::new(7, AgentId(0));
        let mut b = AgentRng::new(7, AgentId(1));
        // Astronomically unlikely to collide on the first draw.
        assert_ne!(a.random::<u64>(), b.random::<u64>());
    }

    #[test]
    fn spread_zero_dispersion_is_exact() {
        let mut rng = AgentRng::new(1, AgentId(0));
        for _ in 0..10 {
            assert_eq!(rng.spread(10_000, 0), 10_000);
        }
    }

    #[test]
    fn spread_stays_in_bounds() {
        let mut rng = AgentRng::new(1, AgentId(0));
        for _ in 0..1_000 {
            let d = rng.spread(5_000, 2_000);
            assert!((3_000..=7_000).contains(&d), "got {d}");
        }
    }

    #[test]
    fn gen_bool_clamps() {
        let mut rng = AgentRng::new(1, AgentId(0));
        assert!(rng.gen_bool(2.0));
        assert!(!rng.gen_bool(-1.0));
    }

    #[test]
    fn sim_rng_children_are_deterministic() {
        let mut root_a = SimRng::new(99);
        let mut root_b = SimRng::new(99);
        let mut child_a = root_a.child(1);
        let mut child_b = root_b.child(1);
        assert_eq!(child_a.random::<u64>(), child_b.random::<u64>());
    }
}

#[cfg(test)]
mod config {
    use crate::RunConfig;

    fn valid() -> RunConfig {
        RunConfig {
            population: 10,
            duration: 60_000,
            width: 20,
            height: 20,
            base_infection_probability: 0.25,
            initial_infection_probability: 0.1,
            recovery_time: 25_000,
            recovery_dispersion: 5_000,
            immunity_time: 10_000,
            immunity_dispersion: 2_000,
            immunity_rate: 0.8,
            public_dwell: 5_500,
            public_dwell_dispersion: 2_500,
            private_dwell: 5_500,
            private_dwell_dispersion: 2_500,
            home_sick_rest: 0,
            infection_radius: 1,
            walking_speed: 10.0,
            seed: 42,
        }
    }

    #[test]
    fn valid_config_passes() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn zero_population_rejected() {
        let mut c = valid();
        c.population = 0;
        assert!(c.validate().is_err());
    }

    #[test]
    fn zero_duration_rejected() {
        let mut c = valid();
        c.duration = 0;
        assert!(c.validate().is_err());
    }

    #[test]
    fn probability_out_of_range_rejected() {
        let mut c = valid();
        c.base_infection_probability = 1.5;
        assert!(c.validate().is_err());
        let mut c = valid();
        c.initial_infection_probability = -0.1;
        assert!(c.validate().is_err());
    }

    #[test]
    fn dispersion_above_mean_rejected() {
        let mut c = valid();
        c.recovery_dispersion = c.recovery_time + 1;
        assert!(c.validate().is_err());
        let mut c = valid();
        c.public_dwell_dispersion = c.public_dwell + 1;
        assert!(c.validate().is_err());
    }

    #[test]
    fn tiny_grid_rejected() {
        let mut c = valid();
        c.width = 2;
        assert!(c.validate().is_err());
    }

    #[test]
    fn non_positive_speed_rejected() {
        let mut c = valid();
        c.walking_speed = 0.0;
        assert!(c.validate().is_err());
    }
}
