//! Per-platform schedule cursor.

use tp_core::{Location, MapId, Millis, phase_in};
use tp_path::WaypointSchedule;

/// Where one platform is in its schedule and in the world.
///
/// Exclusively owned by its platform and mutated only from that platform's
/// tick.  `next` is always the schedule successor of `current`.
#[derive(Clone, Debug, PartialEq)]
pub struct TransportState {
    pub current:         usize,
    pub next:            usize,
    /// Period of the synthesized schedule; all modular comparisons use it.
    pub path_period_ms:  u32,
    /// Period of the wall clock that drives `elapsed_ms`.
    pub clock_period_ms: u32,
    pub elapsed_ms:      u32,
    pub map:             MapId,
    pub location:        Location,
}

impl TransportState {
    /// Cursor at waypoint 0.  `clock_period_ms` falls back to the path
    /// period when `None`.
    pub fn new(schedule: &WaypointSchedule, clock_period_ms: Option<u32>) -> Self {
        Self::at_index(schedule, clock_period_ms, 0, 0)
    }

    /// Cursor on whichever waypoint is current at wall time `now`, so a
    /// platform spawned mid-period does not replay the schedule up to it.
    pub fn at_time(schedule: &WaypointSchedule, clock_period_ms: Option<u32>, now: Millis) -> Self {
        let clock = clock_period_ms.unwrap_or(schedule.period_ms());
        let elapsed = phase_in(now, clock);
        let index = schedule.index_at(elapsed % schedule.period_ms());
        Self::at_index(schedule, clock_period_ms, index, elapsed)
    }

    fn at_index(
        schedule:        &WaypointSchedule,
        clock_period_ms: Option<u32>,
        index:           usize,
        elapsed_ms:      u32,
    ) -> Self {
        let path_period_ms = schedule.period_ms();
        let (map, location) = schedule
            .get(index)
            .map(|w| (w.map, w.location))
            .unwrap_or_default();
        Self {
            current: index,
            next: schedule.next_index(index),
            path_period_ms,
            clock_period_ms: clock_period_ms.unwrap_or(path_period_ms),
            elapsed_ms,
            map,
            location,
        }
    }

    /// Commit a new map and exact placement (after a relocation).
    pub fn place(&mut self, map: MapId, location: Location) {
        self.map = map;
        self.location = location;
    }
}
