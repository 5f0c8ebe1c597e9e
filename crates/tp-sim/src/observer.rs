//! Fleet observer trait for diagnostics and data collection.

use tp_core::{Millis, PlatformId};
use tp_motion::MapCrossing;

use crate::{Fleet, RelocationSummary};

/// Per-tick counters returned by [`Fleet::tick`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickSummary {
    pub wall:       Millis,
    pub platforms:  usize,
    /// Platforms that moved without changing map.
    pub moved:      usize,
    pub crossings:  usize,
    pub docked:     usize,
    pub relocated:  u32,
    pub pruned:     u32,
    pub redirected: u32,
    pub skipped:    u32,
}

impl TickSummary {
    pub(crate) fn absorb(&mut self, r: &RelocationSummary) {
        self.crossings  += 1;
        self.relocated  += r.relocated;
        self.pruned     += r.pruned;
        self.redirected += r.redirected;
        self.skipped    += r.skipped;
    }
}

/// Callbacks invoked by [`Fleet::tick`] and [`Fleet::run`].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
pub trait FleetObserver {
    /// Called before the motion phase.
    fn on_tick_start(&mut self, _now: Millis) {}

    /// Called after the apply phase.
    fn on_tick_end(&mut self, _summary: &TickSummary) {}

    /// Called after a platform and its riders have been relocated.
    fn on_crossing(
        &mut self,
        _now:      Millis,
        _platform: PlatformId,
        _crossing: &MapCrossing,
        _summary:  &RelocationSummary,
    ) {}

    /// Called when a platform reaches a dock waypoint.
    fn on_docked(&mut self, _now: Millis, _platform: PlatformId, _waypoint: usize) {}

    /// Called by [`Fleet::run`] every `snapshot_every` ticks with read-only
    /// access to the whole fleet.
    fn on_snapshot(&mut self, _now: Millis, _fleet: &Fleet) {}

    /// Called once after [`Fleet::run`] finishes.
    fn on_run_end(&mut self, _now: Millis) {}
}

/// A [`FleetObserver`] that does nothing.
pub struct NoopObserver;

impl FleetObserver for NoopObserver {}
