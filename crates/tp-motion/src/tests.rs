//! Unit tests for tp-motion.

use tp_core::{KinematicsConfig, MapId, Millis, PathId, Vec3};
use tp_path::{NodeAction, PathNode, PathSynthesizer, WaypointSchedule};

use crate::{FrameInterpolator, MotionClock, MotionEngine, TransportState};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn node(map: u32, x: f32, z: f32, action: NodeAction, dwell: u32) -> PathNode {
    PathNode::new(MapId(map), Vec3::new(x, 0.0, z), action, dwell)
}

fn schedule(nodes: &[PathNode]) -> WaypointSchedule {
    PathSynthesizer::new(&KinematicsConfig::default())
        .synthesize(PathId(1), nodes)
        .unwrap()
}

/// Waypoints every 100 ms from 0 to 60 000; period 60 100.
fn straight_line() -> WaypointSchedule {
    schedule(&[
        node(1, 0.0, 0.0, NodeAction::Normal, 0),
        node(1, 450.0, 0.0, NodeAction::Normal, 0),
        node(1, 900.0, 0.0, NodeAction::Normal, 0),
    ])
}

/// Dock at 20 000 (dwell 5 s), teleport to map 2 at 25 100; period 25 200.
fn dock_then_teleport() -> WaypointSchedule {
    schedule(&[
        node(1, 0.0, 0.0, NodeAction::Normal, 0),
        node(1, 100.0, 0.0, NodeAction::Stop, 5),
        node(2, 0.0, 0.0, NodeAction::Teleport, 0),
    ])
}

// ── MotionClock ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod clock {
    use super::*;

    #[test]
    fn one_step_per_tick_for_two_laps() {
        let s = straight_line();
        let mut state = TransportState::new(&s, None);
        for k in 1..=(2 * 601) {
            let report = MotionClock::advance(&mut state, &s, Millis(k * 100));
            assert_eq!(report.steps, 1, "tick {k}");
            assert!(report.crossing.is_none());
        }
    }

    #[test]
    fn wrap_seam_advances_exactly_once() {
        let s = straight_line();
        let last = s.len() - 1;
        let mut state = TransportState::at_time(&s, None, Millis(60_050));
        assert_eq!(state.current, last);
        assert_eq!(state.next, 0);

        // Still before the wrap: no stall, no advance.
        assert_eq!(MotionClock::advance(&mut state, &s, Millis(60_099)).steps, 0);

        // Phase 30 of the next lap.
        let report = MotionClock::advance(&mut state, &s, Millis(60_130));
        assert_eq!(report.steps, 1);
        assert_eq!(state.current, 0);
        assert_eq!(state.next, 1);
    }

    #[test]
    fn same_time_twice_is_idle() {
        let s = straight_line();
        let mut state = TransportState::new(&s, None);
        assert_eq!(MotionClock::advance(&mut state, &s, Millis(500)).steps, 5);
        assert_eq!(MotionClock::advance(&mut state, &s, Millis(500)).steps, 0);
    }

    #[test]
    fn in_place_advance_snaps_to_waypoint() {
        let s = straight_line();
        let mut state = TransportState::new(&s, None);
        MotionClock::advance(&mut state, &s, Millis(30_000));
        assert_eq!(state.location.position, Vec3::new(450.0, 0.0, 0.0));
    }

    #[test]
    fn dock_then_crossing() {
        let s = dock_then_teleport();
        let dock = s.docks().next().unwrap().0;
        let mut state = TransportState::new(&s, None);

        let mut docked = Vec::new();
        let mut crossings = Vec::new();
        for k in 1..=251 {
            let r = MotionClock::advance(&mut state, &s, Millis(k * 100));
            docked.extend(r.docked);
            crossings.extend(r.crossing);
        }
        assert_eq!(docked, vec![dock]);
        assert_eq!(crossings.len(), 1);

        let c = crossings[0];
        assert_eq!(c.from_map, MapId(1));
        assert_eq!(c.to_map, MapId(2));
        assert_eq!(c.waypoint, s.len() - 1);
        // The clock never moves the platform across maps itself.
        assert_eq!(state.map, MapId(1));

        state.place(c.to_map, c.destination);
        let back = MotionClock::advance(&mut state, &s, Millis(25_200)).crossing.unwrap();
        assert_eq!((back.from_map, back.to_map, back.waypoint), (MapId(2), MapId(1), 0));
    }

    #[test]
    fn crossing_stops_further_advancement() {
        let s = dock_then_teleport();
        // Docked, then a late tick lands 300 ms into the next lap.
        let mut state = TransportState::at_time(&s, None, Millis(25_000));
        let r = MotionClock::advance(&mut state, &s, Millis(25_200 + 300));
        assert!(r.crossing.is_some());
        assert_eq!(state.current, s.len() - 1);
    }

    #[test]
    fn single_waypoint_never_advances() {
        let s = schedule(&[node(1, 0.0, 0.0, NodeAction::Stop, 3)]);
        let mut state = TransportState::new(&s, None);
        let r = MotionClock::advance(&mut state, &s, Millis(999_999));
        assert_eq!(r.steps, 0);
        assert_eq!(state.current, 0);
    }

    #[test]
    fn clock_period_override_drives_elapsed() {
        let s = straight_line();
        let mut state = TransportState::new(&s, Some(1_000));
        MotionClock::advance(&mut state, &s, Millis(5_250));
        assert_eq!(state.elapsed_ms, 250);
        assert_eq!(state.current, 2);
    }
}

// ── FrameInterpolator ─────────────────────────────────────────────────────────

#[cfg(test)]
mod interp {
    use super::*;

    #[test]
    fn blends_between_waypoints() {
        let s = straight_line();
        let mut state = TransportState::at_time(&s, None, Millis(30_050));
        let from = s.get(state.current).unwrap().position().x;
        let to = s.get(state.next).unwrap().position().x;

        let loc = FrameInterpolator::interpolate(&state, &s).unwrap();
        assert!((loc.position.x - (from + to) / 2.0).abs() < 1e-3);
        assert!(loc.orientation.abs() < 1e-6, "facing +x");

        // Past the next waypoint's time the blend clamps at the span.
        state.elapsed_ms = 30_099;
        let loc = FrameInterpolator::interpolate(&state, &s).unwrap();
        assert!(loc.position.x <= to);
    }

    #[test]
    fn refuses_across_teleport_and_map_change() {
        let s = dock_then_teleport();
        let state = TransportState::at_time(&s, None, Millis(25_150));
        assert_eq!(state.current, s.len() - 1);
        assert!(s.get(state.current).unwrap().is_teleport_edge);
        assert_eq!(state.next, 0);
        assert!(FrameInterpolator::interpolate(&state, &s).is_none());
    }

    #[test]
    fn refuses_when_platform_is_on_another_map() {
        let s = straight_line();
        let mut state = TransportState::at_time(&s, None, Millis(1_050));
        state.map = MapId(9);
        assert!(FrameInterpolator::interpolate(&state, &s).is_none());
    }

    #[test]
    fn zero_span_is_noop() {
        let s = schedule(&[node(1, 0.0, 0.0, NodeAction::Normal, 0)]);
        let state = TransportState::new(&s, None);
        assert_eq!(state.current, state.next);
        assert!(FrameInterpolator::interpolate(&state, &s).is_none());
    }

    #[test]
    fn vertical_segment_keeps_facing() {
        let s = schedule(&[
            node(1, 0.0, 0.0, NodeAction::Stop, 0),
            node(1, 0.0, 100.0, NodeAction::Stop, 0),
        ]);
        let mut state = TransportState::at_time(&s, None, Millis(5_050));
        state.location.orientation = 1.25;
        let loc = FrameInterpolator::interpolate(&state, &s).unwrap();
        assert_eq!(loc.orientation, 1.25);
        assert!(loc.position.z > 0.0);
    }
}

// ── MotionEngine ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod engine {
    use super::*;

    #[test]
    fn tick_interpolates_when_no_crossing() {
        let s = straight_line();
        let mut state = TransportState::new(&s, None);
        let step = MotionEngine::tick(&mut state, &s, Millis(10_050));
        assert!(step.interpolated);
        assert!(step.moved_in_place());
        let a = s.get(state.current).unwrap().position().x;
        let b = s.get(state.next).unwrap().position().x;
        assert!(state.location.position.x > a && state.location.position.x < b);
    }

    #[test]
    fn tick_leaves_placement_alone_on_crossing() {
        let s = dock_then_teleport();
        let mut state = TransportState::at_time(&s, None, Millis(25_000));
        let before = state.location;
        let step = MotionEngine::tick(&mut state, &s, Millis(25_100));
        assert!(step.crossing.is_some());
        assert!(!step.interpolated);
        assert!(!step.moved_in_place());
        assert_eq!(state.location, before);
    }
}
