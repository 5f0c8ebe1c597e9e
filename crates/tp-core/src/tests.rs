//! Unit tests for tp-core primitives.

#[cfg(test)]
mod ids {
    use crate::{MapId, PlatformId, RiderId};

    #[test]
    fn ordering() {
        assert!(PlatformId(0) < PlatformId(1));
        assert!(RiderId(100) > RiderId(99));
    }

    #[test]
    fn display() {
        assert_eq!(PlatformId(7).to_string(), "PlatformId(7)");
        assert_eq!(MapId(530).to_string(), "MapId(530)");
    }

    #[test]
    fn from_raw() {
        assert_eq!(MapId::from(1), MapId(1));
        assert_eq!(RiderId::from(9u64), RiderId(9));
    }
}

#[cfg(test)]
mod geo {
    use std::f32::consts::{FRAC_PI_2, PI, TAU};

    use crate::{Location, Vec3, normalize_orientation};

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn distance_is_euclidean() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(3.0, 4.0, 12.0);
        assert!(close(a.distance(b), 13.0));
        assert!(close(a.distance_sq(b), 169.0));
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = Vec3::new(0.0, 10.0, 0.0);
        let b = Vec3::new(100.0, 10.0, 50.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Vec3::new(50.0, 10.0, 25.0));
    }

    #[test]
    fn heading_none_for_vertical_move() {
        let a = Vec3::new(1.0, 1.0, 0.0);
        assert_eq!(a.heading_to(Vec3::new(1.0, 1.0, 40.0)), None);
    }

    #[test]
    fn heading_is_normalized() {
        let a = Vec3::ZERO;
        assert!(close(a.heading_to(Vec3::new(0.0, 1.0, 0.0)).unwrap(), FRAC_PI_2));
        // Facing -y is 3π/2 after normalization, not -π/2.
        assert!(close(a.heading_to(Vec3::new(0.0, -1.0, 0.0)).unwrap(), 3.0 * FRAC_PI_2));
    }

    #[test]
    fn normalize_wraps_both_ways() {
        assert!(close(normalize_orientation(-FRAC_PI_2), 3.0 * FRAC_PI_2));
        assert!(close(normalize_orientation(TAU + 1.0), 1.0));
        let r = normalize_orientation(-1e-9);
        assert!((0.0..TAU).contains(&r));
    }

    #[test]
    fn local_to_world_rotates_then_translates() {
        // Platform at (100, 0, 5) facing +y (π/2); a rider 10 units "forward"
        // in local x ends up 10 units along world +y.
        let frame = Location::new(Vec3::new(100.0, 0.0, 5.0), FRAC_PI_2);
        let world = frame.local_to_world(Vec3::new(10.0, 0.0, 2.0));
        assert!(close(world.x, 100.0));
        assert!(close(world.y, 10.0));
        assert!(close(world.z, 7.0));
    }

    #[test]
    fn transform_adds_orientation_hint() {
        let frame = Location::new(Vec3::ZERO, PI);
        let loc = frame.transform(Vec3::new(1.0, 0.0, 0.0), PI);
        assert!(close(loc.position.x, -1.0));
        assert!(close(loc.orientation, 0.0) || close(loc.orientation, TAU));
    }
}

#[cfg(test)]
mod time {
    use crate::{Millis, mod_diff, phase_in};

    #[test]
    fn millis_arithmetic() {
        let t = Millis(1_000);
        assert_eq!(t + 500, Millis(1_500));
        assert_eq!(t.offset(1), Millis(1_001));
        assert_eq!(Millis(1_500).since(t), 500);
        assert_eq!(t.since(Millis(1_500)), 0, "stale instants saturate");
    }

    #[test]
    fn mod_diff_simple() {
        assert_eq!(mod_diff(700, 200, 1_000), 500);
        assert_eq!(mod_diff(200, 200, 1_000), 0);
    }

    #[test]
    fn mod_diff_across_seam() {
        // From 900 forward to 100 in a 1000 ms period is 200 ms, not -800.
        assert_eq!(mod_diff(100, 900, 1_000), 200);
        assert_eq!(mod_diff(0, 999, 1_000), 1);
    }

    #[test]
    fn mod_diff_large_values_do_not_overflow() {
        assert_eq!(mod_diff(5, u32::MAX, 7), (5 + 7 - (u32::MAX % 7)) % 7);
    }

    #[test]
    fn mod_diff_zero_period() {
        assert_eq!(mod_diff(5, 3, 0), 0);
    }

    #[test]
    fn phase_wraps() {
        assert_eq!(phase_in(Millis(2_500), 1_000), 500);
        assert_eq!(phase_in(Millis(2_500), 0), 0);
    }
}

#[cfg(test)]
mod config {
    use crate::{TpError, TransportConfig};

    #[test]
    fn defaults_match_reference_constants() {
        let cfg = TransportConfig::default();
        assert_eq!(cfg.kinematics.acceleration, 1.0);
        assert_eq!(cfg.kinematics.cruise_speed, 30.0);
        assert_eq!(cfg.kinematics.sample_interval_ms, 100);
        assert_eq!(cfg.tick_interval_ms, 100);
        assert_eq!(cfg.attachment.detach_radius, 60.0);
        assert_eq!(cfg.attachment.loss_grace_ms, 2_000);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_zero_acceleration() {
        let mut cfg = TransportConfig::default();
        cfg.kinematics.acceleration = 0.0;
        assert!(matches!(cfg.validate(), Err(TpError::Config(_))));
    }

    #[test]
    fn rejects_nan_cruise_speed() {
        let mut cfg = TransportConfig::default();
        cfg.kinematics.cruise_speed = f32::NAN;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_zero_tick_interval() {
        let mut cfg = TransportConfig::default();
        cfg.tick_interval_ms = 0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_negative_docked_radius() {
        let mut cfg = TransportConfig::default();
        cfg.docks.docked_radius = -1.0;
        assert!(matches!(cfg.validate(), Err(TpError::Config(_))));
    }
}
