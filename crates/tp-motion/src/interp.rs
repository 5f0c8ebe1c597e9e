//! Same-map sub-tick smoothing between two adjacent waypoints.

use tp_core::{Location, mod_diff};
use tp_path::WaypointSchedule;

use crate::TransportState;

pub struct FrameInterpolator;

impl FrameInterpolator {
    /// Smoothed placement between `current` and `next` at `state.elapsed_ms`.
    ///
    /// `None` when either waypoint is missing, they are on different maps,
    /// either is a teleport edge, the platform is not on their map, or the
    /// span between them is zero.  Position is a linear blend; orientation
    /// faces the direction of travel, or keeps the current facing for a
    /// purely vertical segment.
    pub fn interpolate(state: &TransportState, schedule: &WaypointSchedule) -> Option<Location> {
        let cur = schedule.get(state.current)?;
        let next = schedule.get(state.next)?;
        if cur.map != next.map || cur.is_teleport_edge || next.is_teleport_edge {
            return None;
        }
        if cur.map != state.map {
            return None;
        }

        let period = state.path_period_ms;
        let span = mod_diff(next.time_ms, cur.time_ms, period);
        if span == 0 {
            return None;
        }
        let elapsed = mod_diff(state.elapsed_ms, cur.time_ms, period).min(span);
        let pct = elapsed as f32 / span as f32;

        let from = cur.position();
        let to = next.position();
        let orientation = from.heading_to(to).unwrap_or(state.location.orientation);
        Some(Location::new(from.lerp(to, pct), orientation))
    }
}
