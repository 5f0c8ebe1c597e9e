//! Modular schedule advancement.
//!
//! The advance test compares forward distances from the current waypoint:
//!
//! ```text
//! mod_diff(elapsed, cur.time, P) >= mod_diff(next.time, cur.time, P)
//! ```
//!
//! Both sides are measured in the same direction from the same origin, so
//! the comparison is correct across the `P - 1 → 0` seam, where plain
//! subtraction of offsets would go negative.

use tp_core::{Location, MapId, Millis, mod_diff, phase_in};
use tp_path::WaypointSchedule;

use crate::TransportState;

/// The platform committed a waypoint it cannot reach by continuous motion.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MapCrossing {
    pub from_map:    MapId,
    pub to_map:      MapId,
    /// Index of the committed waypoint.
    pub waypoint:    usize,
    pub destination: Location,
}

/// What one clock advance did.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClockReport {
    /// Number of waypoints committed.
    pub steps:    u32,
    /// Dock waypoints reached in place, in order.
    pub docked:   Vec<usize>,
    /// Set when advancement stopped at a map change or teleport edge.
    pub crossing: Option<MapCrossing>,
}

pub struct MotionClock;

impl MotionClock {
    /// Bring `state` up to wall time `now`.
    ///
    /// Same-map advances snap `state.location` to the committed waypoint.  A
    /// crossing leaves `state.map` and `state.location` untouched; the caller
    /// relocates and then calls [`TransportState::place`].
    ///
    /// A schedule with fewer than two waypoints never advances.  At most one
    /// full lap is committed per call.
    pub fn advance(state: &mut TransportState, schedule: &WaypointSchedule, now: Millis) -> ClockReport {
        let mut report = ClockReport::default();
        state.elapsed_ms = phase_in(now, state.clock_period_ms);

        let period = state.path_period_ms;
        if schedule.len() < 2 || period == 0 {
            return report;
        }

        for _ in 0..schedule.len() {
            let (Some(cur), Some(next)) = (schedule.get(state.current), schedule.get(state.next))
            else {
                break;
            };
            let waited = mod_diff(state.elapsed_ms, cur.time_ms, period);
            let span = mod_diff(next.time_ms, cur.time_ms, period);
            if waited < span {
                break;
            }

            let committed = state.next;
            state.current = committed;
            state.next = schedule.next_index(committed);
            report.steps += 1;

            if next.map != state.map || next.is_teleport_edge {
                log::debug!(
                    "{}: crossing {} -> {} at waypoint {committed}",
                    schedule.path(), state.map, next.map,
                );
                report.crossing = Some(MapCrossing {
                    from_map:    state.map,
                    to_map:      next.map,
                    waypoint:    committed,
                    destination: next.location,
                });
                break;
            }

            // Exact, not interpolated; the facing is left to the interpolator.
            state.location.position = next.position();
            if next.is_dock_stop {
                report.docked.push(committed);
            }
        }
        report
    }
}
