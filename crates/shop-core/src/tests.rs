//! Unit tests for shop-core.

// ── IDs ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod ids {
    use crate::{AgentId, NodeId, ProductId};

    #[test]
    fn invalid_sentinel() {
        assert_eq!(NodeId::INVALID.0, u32::MAX);
        assert_eq!(ProductId::INVALID.0, u16::MAX);
        assert_eq!(AgentId::default(), AgentId::INVALID);
    }

    #[test]
    fn index_matches_inner() {
        assert_eq!(NodeId(7).index(), 7);
        assert_eq!(ProductId(3).index(), 3);
    }

    #[test]
    fn display_includes_type_name() {
        assert_eq!(format!("{}", AgentId(4)), "AgentId(4)");
        assert_eq!(format!("{}", NodeId(0)), "NodeId(0)");
    }
}

// ── RNG ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod rng {
    use crate::{AgentId, AgentRng};

    #[test]
    fn same_seed_same_sequence() {
        let mut a = AgentRng::new(42, AgentId(0));
        let mut b = AgentRng::new(42, AgentId(0));
        for _ in 0..32 {
            assert_eq!(a.random::<u64>(), b.random::<u64>());
        }
    }

    #[test]
    fn different_agents_diverge() {
        let mut a = AgentRng::new(42, AgentId(0));
        let mut b = AgentRng::new(42, AgentId(1));
        let same = (0..16).filter(|_| a.random::<u64>() == b.random::<u64>()).count();
        assert_eq!(same, 0);
    }

    #[test]
    fn shuffle_is_deterministic_per_seed() {
        let mut a = AgentRng::new(7, AgentId(3));
        let mut b = AgentRng::new(7, AgentId(3));
        let mut xs = [0, 1, 2, 3, 4, 5, 6, 7];
        let mut ys = xs;
        a.shuffle(&mut xs);
        b.shuffle(&mut ys);
        assert_eq!(xs, ys);
    }

    #[test]
    fn gen_range_inclusive_bounds() {
        let mut r = AgentRng::new(1, AgentId(0));
        for _ in 0..100 {
            let v: u32 = r.gen_range(1..=3);
            assert!((1..=3).contains(&v));
        }
        // Degenerate float range collapses to the single value.
        let d: f32 = r.gen_range(1.0..=1.0);
        assert_eq!(d, 1.0);
    }

    #[test]
    fn choose_empty_is_none() {
        let mut r = AgentRng::new(1, AgentId(0));
        let empty: [u8; 0] = [];
        assert!(r.choose(&empty).is_none());
    }
}

// ── Time ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod time {
    use crate::{SimConfig, Tick};

    #[test]
    fn clock_advances_and_accumulates() {
        let config = SimConfig {
            dt_secs: 0.5,
            total_ticks: 10,
            seed: 0,
            snapshot_interval_ticks: 0,
        };
        let mut clock = config.make_clock();
        assert_eq!(clock.current_tick, Tick::ZERO);
        for _ in 0..4 {
            clock.advance();
        }
        assert_eq!(clock.current_tick, Tick(4));
        assert!((clock.elapsed_secs() - 2.0).abs() < 1e-6);
        assert_eq!(config.end_tick(), Tick(10));
    }
}

// ── Math ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod math {
    use std::f32::consts::{FRAC_PI_2, PI};

    use crate::{Vec3, slerp_yaw, yaw_of};

    #[test]
    fn distance_and_with_y() {
        let a = Vec3::new(0.0, 1.0, 0.0);
        let b = Vec3::new(3.0, 5.0, 4.0);
        assert!((a.distance(b) - (9.0f32 + 16.0 + 16.0).sqrt()).abs() < 1e-6);
        // Projecting b onto a's ground plane removes the vertical component.
        assert!((a.distance(b.with_y(a.y)) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn normalized_zero_is_none() {
        assert!(Vec3::ZERO.normalized().is_none());
        let unit = Vec3::new(0.0, 0.0, 2.0).normalized().unwrap();
        assert!((unit.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn yaw_of_cardinal_directions() {
        assert!((yaw_of(Vec3::new(0.0, 0.0, 1.0)) - 0.0).abs() < 1e-6);
        assert!((yaw_of(Vec3::new(1.0, 0.0, 0.0)) - FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn slerp_yaw_takes_shortest_arc() {
        // From +170° to -170° the short way is +20°, crossing the ±π seam.
        let from = 170.0_f32.to_radians();
        let to = -170.0_f32.to_radians();
        let half = slerp_yaw(from, to, 0.5);
        assert!((half - PI).abs() < 1e-4 || (half + PI).abs() < 1e-4);
        // Full step lands exactly on the target.
        let full = slerp_yaw(from, to, 1.0);
        assert!((full - to).abs() < 1e-4);
    }

    #[test]
    fn slerp_yaw_clamps_overshoot() {
        let r = slerp_yaw(0.0, 1.0, 5.0); // t > 1 must not overshoot
        assert!((r - 1.0).abs() < 1e-6);
    }
}
