//! Unit tests for epi-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, ClusterId, CompartmentId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
        assert!(CompartmentId(9) > CompartmentId(8));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(ClusterId::INVALID.0, u16::MAX);
        assert_eq!(CompartmentId::INVALID.0, u16::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod geom {
    use crate::{Rect, Vec2};

    #[test]
    fn dist_sq() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(3.0, 4.0);
        assert_eq!(a.dist_sq(b), 25.0);
        assert_eq!(b.dist_sq(a), 25.0);
    }

    #[test]
    fn add_and_neg() {
        let v = Vec2::new(1.0, -2.0) + Vec2::new(2.0, 2.0);
        assert_eq!(v, Vec2::new(3.0, 0.0));
        assert_eq!(-v, Vec2::new(-3.0, 0.0));
    }

    #[test]
    fn rect_contains() {
        let r = Rect::new(10.0, 10.0, 100.0, 50.0);
        assert!(r.contains(Vec2::new(10.0, 10.0)));
        assert!(r.contains(Vec2::new(110.0, 60.0)));
        assert!(!r.contains(Vec2::new(9.9, 30.0)));
        assert_eq!(r.width(), 100.0);
        assert_eq!(r.height(), 50.0);
    }

    #[test]
    fn clamp_circle_pulls_inside() {
        let r = Rect::new(0.0, 0.0, 100.0, 100.0);
        let p = r.clamp_circle(Vec2::new(-5.0, 200.0), 3.0);
        assert_eq!(p, Vec2::new(3.0, 97.0));
        // Already-interior points are untouched.
        let q = Vec2::new(50.0, 50.0);
        assert_eq!(r.clamp_circle(q, 3.0), q);
    }

    #[test]
    fn boundary_crossing_includes_radius() {
        let r = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(r.crosses_x(Vec2::new(2.0, 50.0), 3.0));
        assert!(!r.crosses_x(Vec2::new(3.0, 50.0), 3.0));
        assert!(r.crosses_y(Vec2::new(50.0, 98.5), 3.0));
    }
}

#[cfg(test)]
mod phase {
    use crate::{Phase, RowMarker};

    #[test]
    fn marker_display() {
        assert_eq!(RowMarker::Start.to_string(), "S");
        assert_eq!(RowMarker::Tick(17).to_string(), "17");
        assert_eq!(RowMarker::End.to_string(), "E");
    }

    #[test]
    fn phase_display() {
        assert_eq!(Phase::During.to_string(), "DURING");
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::seeded(12345);
        let mut r2 = SimRng::seeded(12345);
        for _ in 0..100 {
            assert_eq!(r1.uniform(), r2.uniform());
        }
    }

    #[test]
    fn uniform_in_unit_interval() {
        let mut rng = SimRng::seeded(0);
        for _ in 0..1000 {
            let v = rng.uniform();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn trial_extremes() {
        let mut rng = SimRng::seeded(0);
        assert!(!rng.trial(0.0));
        assert!(rng.trial(1.0));
        // Out-of-range probabilities saturate instead of panicking.
        assert!(rng.trial(2.5));
        assert!(!rng.trial(-1.0));
    }

    #[test]
    fn normal_degenerates_without_spread() {
        let mut rng = SimRng::seeded(7);
        assert_eq!(rng.sample_normal(0.25, 0.0), 0.25);
        assert_eq!(rng.sample_normal(0.25, -1.0), 0.25);
    }

    #[test]
    fn normal_spreads_with_stdev() {
        let mut rng = SimRng::seeded(7);
        let samples: Vec<f64> = (0..100).map(|_| rng.sample_normal(0.0, 1.0)).collect();
        let distinct = samples.windows(2).any(|w| w[0] != w[1]);
        assert!(distinct);
    }
}

#[cfg(test)]
mod config {
    use crate::SimConfig;

    #[test]
    fn documented_defaults() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.width, 320.0);
        assert_eq!(cfg.height, 320.0);
        assert_eq!(cfg.agent_radius, 3.0);
        assert_eq!(cfg.agent_speed, 1.0);
        assert_eq!(cfg.wander_mean, 0.0);
        assert!(cfg.elastic_collisions);
        assert_eq!(cfg.tick_interval_ms, 0);
        assert_eq!(cfg.max_iterations, 0);
        assert!(cfg.seed.is_none());
    }

    #[test]
    fn limit_zero_is_unbounded() {
        let cfg = SimConfig::default();
        assert!(!cfg.limit_reached(u64::MAX));
        let capped = SimConfig { max_iterations: 10, ..SimConfig::default() };
        assert!(!capped.limit_reached(9));
        assert!(capped.limit_reached(10));
    }
}
