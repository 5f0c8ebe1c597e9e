//! Unit tests for tp-rider.

use std::f32::consts::FRAC_PI_2;

use tp_core::{AttachmentConfig, Location, Millis, PlatformId, RiderId, Vec3};

use crate::{
    AttachmentRecord, AttachmentState, AttachmentTracker, DetachReason, MovementReport,
    PassengerRegistry, TransportLinkage, Transition,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

const RIDER: RiderId = RiderId(11);

fn tracker() -> AttachmentTracker {
    AttachmentTracker::new(AttachmentConfig::default())
}

/// Platform at (100, 0, 0) facing +y.
fn frame() -> Location {
    Location::new(Vec3::new(100.0, 0.0, 0.0), FRAC_PI_2)
}

fn link(offset: Vec3) -> TransportLinkage {
    TransportLinkage { platform: PlatformId(1), offset, orientation_hint: 0.0 }
}

fn near() -> Location {
    Location::new(Vec3::new(105.0, 5.0, 0.0), 0.0)
}

fn far() -> Location {
    Location::new(Vec3::new(200.0, 0.0, 0.0), 0.0)
}

fn aboard(at: u64, loc: Location) -> MovementReport {
    MovementReport::aboard(RIDER, Millis(at), loc, link(Vec3::new(5.0, 0.0, 1.0)))
}

fn free(at: u64, loc: Location) -> MovementReport {
    MovementReport::free(RIDER, Millis(at), loc)
}

fn boarded(reg: &mut PassengerRegistry, at: u64) {
    let t = tracker().observe(reg, &frame(), &aboard(at, near()));
    assert!(matches!(t, Transition::Boarded { .. }));
}

// ── Registry ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod registry {
    use super::*;

    #[test]
    fn riders_are_ordered() {
        let mut reg = PassengerRegistry::new();
        for id in [9, 2, 5] {
            reg.insert(AttachmentRecord::new(RiderId(id), Vec3::ZERO, 0.0, Millis(0)));
        }
        assert_eq!(reg.riders(), vec![RiderId(2), RiderId(5), RiderId(9)]);
        assert_eq!(reg.len(), 3);
    }

    #[test]
    fn insert_replaces() {
        let mut reg = PassengerRegistry::new();
        reg.insert(AttachmentRecord::new(RIDER, Vec3::ZERO, 0.0, Millis(0)));
        let old = reg.insert(AttachmentRecord::new(RIDER, Vec3::new(1.0, 0.0, 0.0), 0.0, Millis(5)));
        assert!(old.is_some());
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.get(RIDER).unwrap().last_confirmed, Millis(5));
    }

    #[test]
    fn world_location_rotates_offset() {
        let mut reg = PassengerRegistry::new();
        reg.insert(AttachmentRecord::new(RIDER, Vec3::new(5.0, 0.0, 1.0), 0.5, Millis(0)));
        let w = reg.world_location(RIDER, &frame()).unwrap();
        assert!((w.position.x - 100.0).abs() < 1e-4);
        assert!((w.position.y - 5.0).abs() < 1e-4);
        assert_eq!(w.position.z, 1.0);
        assert!((w.orientation - (FRAC_PI_2 + 0.5)).abs() < 1e-5);
        assert!(reg.world_location(RiderId(99), &frame()).is_none());
    }

    #[test]
    fn relocation_target_does_not_rotate() {
        let rec = AttachmentRecord::new(RIDER, Vec3::new(5.0, 0.0, 1.0), 0.0, Millis(0));
        assert_eq!(rec.relocation_target(Vec3::new(10.0, 10.0, 10.0)), Vec3::new(15.0, 10.0, 11.0));
    }
}

// ── AttachmentTracker ─────────────────────────────────────────────────────────

#[cfg(test)]
mod tracker {
    use super::*;

    #[test]
    fn boarding_creates_record_and_places_rider() {
        let mut reg = PassengerRegistry::new();
        let t = tracker().observe(&mut reg, &frame(), &aboard(0, near()));
        let world = t.world().unwrap();
        assert!((world.position.y - 5.0).abs() < 1e-4, "offset rotated by platform facing");
        assert!(t.changes_frame());
        assert_eq!(reg.get(RIDER).unwrap().state, AttachmentState::Attached);
    }

    #[test]
    fn free_report_without_record_is_ignored() {
        let mut reg = PassengerRegistry::new();
        let t = tracker().observe(&mut reg, &frame(), &free(0, near()));
        assert_eq!(t, Transition::Unattached);
        assert!(reg.is_empty());
    }

    #[test]
    fn linked_report_refreshes_offset() {
        let mut reg = PassengerRegistry::new();
        boarded(&mut reg, 0);
        let mut r = aboard(100, near());
        r.linkage = Some(link(Vec3::new(-3.0, 2.0, 0.0)));
        let t = tracker().observe(&mut reg, &frame(), &r);
        assert!(matches!(t, Transition::Refreshed { .. }));
        let rec = reg.get(RIDER).unwrap();
        assert_eq!(rec.local_offset, Vec3::new(-3.0, 2.0, 0.0));
        assert_eq!(rec.last_confirmed, Millis(100));
        assert!(!t.changes_frame());
    }

    #[test]
    fn far_report_detaches_even_with_linkage() {
        let mut reg = PassengerRegistry::new();
        boarded(&mut reg, 0);
        let t = tracker().observe(&mut reg, &frame(), &aboard(100, far()));
        assert_eq!(t, Transition::Detached { reason: DetachReason::FarAway });
        assert!(reg.is_empty(), "a far report does not re-attach");
    }

    #[test]
    fn far_report_without_linkage_detaches_immediately() {
        let mut reg = PassengerRegistry::new();
        boarded(&mut reg, 0);
        let t = tracker().observe(&mut reg, &frame(), &free(100, far()));
        assert_eq!(t, Transition::Detached { reason: DetachReason::FarAway });
    }

    #[test]
    fn missing_linkage_near_goes_pending() {
        let mut reg = PassengerRegistry::new();
        boarded(&mut reg, 0);
        let t = tracker().observe(&mut reg, &frame(), &free(1_000, near()));
        assert!(matches!(t, Transition::LossPending { .. }));
        assert_eq!(
            reg.get(RIDER).unwrap().state,
            AttachmentState::LossPending { since: Millis(1_000) },
        );
    }

    #[test]
    fn regained_within_grace_never_detaches() {
        let mut reg = PassengerRegistry::new();
        let tr = tracker();
        boarded(&mut reg, 0);
        let t = tr.observe(&mut reg, &frame(), &free(1_000, near()));
        assert!(matches!(t, Transition::LossPending { .. }));
        let t = tr.observe(&mut reg, &frame(), &free(2_500, near()));
        assert!(matches!(t, Transition::StillPending { .. }));
        let t = tr.observe(&mut reg, &frame(), &aboard(2_999, near()));
        assert!(matches!(t, Transition::Recovered { .. }));
        assert!(!reg.get(RIDER).unwrap().is_pending());
    }

    #[test]
    fn pending_rider_is_carried_on_last_offset() {
        let mut reg = PassengerRegistry::new();
        let tr = tracker();
        boarded(&mut reg, 0);
        let moved = Location::new(Vec3::new(120.0, 0.0, 0.0), 0.0);

        let t = tr.observe(&mut reg, &moved, &free(1_000, near()));
        assert_eq!(t.world().unwrap().position, Vec3::new(125.0, 0.0, 1.0));

        let further = Location::new(Vec3::new(130.0, 0.0, 0.0), 0.0);
        let t = tr.observe(&mut reg, &further, &free(1_500, near()));
        assert!(matches!(t, Transition::StillPending { .. }));
        assert_eq!(t.world().unwrap().position, Vec3::new(135.0, 0.0, 1.0));
    }

    #[test]
    fn grace_boundary_is_strict_and_detaches_once() {
        let mut reg = PassengerRegistry::new();
        let tr = tracker();
        boarded(&mut reg, 0);
        tr.observe(&mut reg, &frame(), &free(1_000, near()));
        // Exactly 2000 ms is still inside the window.
        let t = tr.observe(&mut reg, &frame(), &free(3_000, near()));
        assert!(matches!(t, Transition::StillPending { .. }));

        let detaches = [3_001, 3_100, 3_500]
            .into_iter()
            .map(|t| tr.observe(&mut reg, &frame(), &free(t, near())))
            .filter(Transition::is_detach)
            .count();
        assert_eq!(detaches, 1);
        assert!(reg.is_empty());
    }

    #[test]
    fn linkage_after_expired_grace_detaches_first() {
        let mut reg = PassengerRegistry::new();
        let tr = tracker();
        boarded(&mut reg, 0);
        tr.observe(&mut reg, &frame(), &free(1_000, near()));
        let t = tr.observe(&mut reg, &frame(), &aboard(3_001, near()));
        assert_eq!(t, Transition::Detached { reason: DetachReason::GraceExpired });
        // The following report boards again.
        let t = tr.observe(&mut reg, &frame(), &aboard(3_100, near()));
        assert!(matches!(t, Transition::Boarded { .. }));
    }

    #[test]
    fn pending_rider_moving_away_detaches() {
        let mut reg = PassengerRegistry::new();
        let tr = tracker();
        boarded(&mut reg, 0);
        tr.observe(&mut reg, &frame(), &free(1_000, near()));
        let t = tr.observe(&mut reg, &frame(), &free(1_200, far()));
        assert_eq!(t, Transition::Detached { reason: DetachReason::FarAway });
    }

    #[test]
    fn transfer_out_drops_record() {
        let mut reg = PassengerRegistry::new();
        let tr = tracker();
        boarded(&mut reg, 0);
        let t = tr.transfer_out(&mut reg, &aboard(100, near()));
        assert_eq!(t, Transition::Detached { reason: DetachReason::Transferred });
        assert!(t.changes_frame());
        assert_eq!(tr.transfer_out(&mut reg, &aboard(200, near())), Transition::Unattached);
    }
}
