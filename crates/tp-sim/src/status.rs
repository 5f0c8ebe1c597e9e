//! "Where is the boat?": dock status for a position near a dock.

use std::fmt;

use tp_core::{PlatformId, mod_diff};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DockStatus {
    Docked,
    ArrivingShortly,
    EnRoute,
}

impl fmt::Display for DockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DockStatus::Docked          => "currently docked; it will depart soon",
            DockStatus::ArrivingShortly => "should arrive shortly",
            DockStatus::EnRoute         => "en route",
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DockReport {
    pub platform: PlatformId,
    pub name:     String,
    /// Schedule time of the matched dock waypoint.
    pub dock_ms:  u32,
    /// Time until the platform next reaches that dock.
    pub eta_ms:   u32,
    pub status:   DockStatus,
}

impl DockReport {
    /// ETA rounded to the nearest second.
    pub fn eta_secs(&self) -> u32 {
        (self.eta_ms + 500) / 1000
    }
}

impl fmt::Display for DockReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "The {} is {}.", self.name, self.status)
    }
}

/// Classify a platform relative to a dock.
///
/// A zero ETA without being docked reads as en route.
pub(crate) fn classify(
    docked:           bool,
    dock_ms:          u32,
    elapsed_ms:       u32,
    period_ms:        u32,
    arriving_soon_ms: u32,
) -> (u32, DockStatus) {
    let eta = mod_diff(dock_ms, elapsed_ms, period_ms);
    let status = if docked {
        DockStatus::Docked
    } else if eta == 0 {
        DockStatus::EnRoute
    } else if (eta as u64 + 500) / 1000 * 1000 <= arriving_soon_ms as u64 {
        DockStatus::ArrivingShortly
    } else {
        DockStatus::EnRoute
    };
    (eta, status)
}
