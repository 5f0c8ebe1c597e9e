//! The synthesized, cyclic waypoint schedule of one path.
//!
//! # Cycle model
//!
//! Waypoints are stored sorted ascending by `time_ms`, all in
//! `[0, period_ms)`.  The successor of waypoint `i` is `(i + 1) % len`, so
//! the last waypoint wraps to the first.  At schedule phase `p` the current
//! waypoint is the one with the largest `time_ms <= p`.

use tp_core::{Location, MapId, PathId, Vec3};

// ── Waypoint ──────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Waypoint {
    /// Offset into the schedule period.
    pub time_ms:          u32,
    pub map:              MapId,
    pub location:         Location,
    /// The platform arrives here discontinuously; never interpolate into or
    /// out of it.
    pub is_teleport_edge: bool,
    pub is_dock_stop:     bool,
    /// Effective wait after arriving (zero for pass-through waypoints).
    pub dwell_ms:         u32,
}

impl Waypoint {
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.location.position
    }
}

// ── DockMatch ─────────────────────────────────────────────────────────────────

/// Result of [`WaypointSchedule::find_dock_near`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DockMatch {
    pub index:   usize,
    pub time_ms: u32,
    pub dist_sq: f32,
}

// ── WaypointSchedule ──────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaypointSchedule {
    path:      PathId,
    waypoints: Vec<Waypoint>,
    period_ms: u32,
}

impl WaypointSchedule {
    /// Built only by [`crate::PathSynthesizer`], which guarantees a
    /// non-empty, time-sorted waypoint list and a positive period.
    pub(crate) fn new(path: PathId, waypoints: Vec<Waypoint>, period_ms: u32) -> Self {
        debug_assert!(!waypoints.is_empty(), "schedule must have a waypoint");
        debug_assert!(period_ms > 0, "period must be positive");
        debug_assert!(
            waypoints.windows(2).all(|w| w[0].time_ms <= w[1].time_ms),
            "waypoints must be time-sorted"
        );
        Self { path, waypoints, period_ms }
    }

    pub fn path(&self) -> PathId {
        self.path
    }

    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Always `false` for a synthesized schedule.
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Waypoint> {
        self.waypoints.get(index)
    }

    /// Successor index, wrapping to 0 after the last waypoint.
    #[inline]
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.waypoints.len()
    }

    /// Index of the waypoint current at schedule phase `phase_ms`.
    pub fn index_at(&self, phase_ms: u32) -> usize {
        // First waypoint strictly after the phase; the one before it is
        // current.  Waypoint 0 is always at time 0, so idx >= 1.
        let idx = self.waypoints.partition_point(|w| w.time_ms <= phase_ms);
        idx.saturating_sub(1)
    }

    /// Dock waypoints, in schedule order.
    pub fn docks(&self) -> impl Iterator<Item = (usize, &Waypoint)> {
        self.waypoints.iter().enumerate().filter(|(_, w)| w.is_dock_stop)
    }

    /// The dock waypoint on `map` closest to `position`, within `max_dist`.
    ///
    /// Ties go to the later waypoint in schedule order.
    pub fn find_dock_near(&self, map: MapId, position: Vec3, max_dist: f32) -> Option<DockMatch> {
        let limit = max_dist * max_dist;
        let mut best: Option<DockMatch> = None;
        for (index, w) in self.docks().filter(|(_, w)| w.map == map) {
            let dist_sq = w.position().distance_sq(position);
            if dist_sq > limit {
                continue;
            }
            if best.is_none_or(|b| dist_sq <= b.dist_sq) {
                best = Some(DockMatch { index, time_ms: w.time_ms, dist_sq });
            }
        }
        best
    }
}
