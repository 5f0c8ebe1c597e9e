//! One running platform instance.

use tp_core::{Location, MapId, Millis, PathId, PlatformId};
use tp_motion::TransportState;
use tp_path::WaypointSchedule;
use tp_rider::PassengerRegistry;

/// Static description of a platform, as the host loads it.
#[derive(Clone, Debug, PartialEq)]
pub struct PlatformDef {
    pub id:           PlatformId,
    pub path:         PathId,
    pub name:         String,
    /// Display class; selects the dock cue.
    pub visual_class: u32,
    /// Wall-clock period override.  `None` uses the synthesized path period.
    pub period_ms:    Option<u32>,
}

impl PlatformDef {
    pub fn new(id: PlatformId, path: PathId, name: impl Into<String>, visual_class: u32) -> Self {
        Self { id, path, name: name.into(), visual_class, period_ms: None }
    }

    pub fn with_period(mut self, period_ms: u32) -> Self {
        self.period_ms = Some(period_ms);
        self
    }
}

/// A platform: its schedule, where it is on it, and who is aboard.
///
/// All three are owned here and mutated only through `&mut Platform`.
#[derive(Clone, Debug)]
pub struct Platform {
    pub def:        PlatformDef,
    pub schedule:   WaypointSchedule,
    pub state:      TransportState,
    pub passengers: PassengerRegistry,
}

impl Platform {
    pub fn new(def: PlatformDef, schedule: WaypointSchedule, now: Millis) -> Self {
        let state = TransportState::at_time(&schedule, def.period_ms, now);
        Self { def, schedule, state, passengers: PassengerRegistry::new() }
    }

    #[inline]
    pub fn id(&self) -> PlatformId {
        self.def.id
    }

    #[inline]
    pub fn map(&self) -> MapId {
        self.state.map
    }

    #[inline]
    pub fn location(&self) -> Location {
        self.state.location
    }
}
