//! One tick of platform motion: clock, then interpolation.

use tp_core::Millis;
use tp_path::WaypointSchedule;

use crate::{ClockReport, FrameInterpolator, MapCrossing, MotionClock, TransportState};

/// Outcome of [`MotionEngine::tick`] for one platform.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MotionStep {
    pub steps:        u32,
    pub docked:       Vec<usize>,
    pub crossing:     Option<MapCrossing>,
    /// `true` when the placement was smoothed this tick.
    pub interpolated: bool,
}

impl MotionStep {
    /// The platform moved without leaving its map.
    pub fn moved_in_place(&self) -> bool {
        self.crossing.is_none() && (self.steps > 0 || self.interpolated)
    }
}

impl From<ClockReport> for MotionStep {
    fn from(r: ClockReport) -> Self {
        Self { steps: r.steps, docked: r.docked, crossing: r.crossing, interpolated: false }
    }
}

pub struct MotionEngine;

impl MotionEngine {
    /// Advance `state` to `now` and smooth its placement.
    ///
    /// Touches only `state`; safe to run for many platforms in parallel.
    pub fn tick(state: &mut TransportState, schedule: &WaypointSchedule, now: Millis) -> MotionStep {
        let mut step = MotionStep::from(MotionClock::advance(state, schedule, now));
        if step.crossing.is_some() {
            return step;
        }
        if let Some(loc) = FrameInterpolator::interpolate(state, schedule) {
            state.location = loc;
            step.interpolated = true;
        }
        step
    }
}
