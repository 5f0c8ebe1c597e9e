//! Engine configuration.
//!
//! Typically loaded from a TOML/JSON file by the host application (enable the
//! `serde` feature) and handed to `tp_sim::FleetBuilder`.  Every field has a
//! default matching the reference transport behavior, so `Default::default()`
//! is a working configuration.

use crate::{TpError, TpResult};

// ── KinematicsConfig ──────────────────────────────────────────────────────────

/// The acceleration-limited motion profile used for path synthesis.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct KinematicsConfig {
    /// Units per second squared, for both acceleration and braking.
    pub acceleration: f32,

    /// Cruise speed cap, units per second.
    pub cruise_speed: f32,

    /// Cadence at which the path is sampled into waypoints.
    pub sample_interval_ms: u32,
}

impl Default for KinematicsConfig {
    fn default() -> Self {
        Self {
            acceleration:       1.0,
            cruise_speed:       30.0,
            sample_interval_ms: 100,
        }
    }
}

// ── AttachmentConfig ──────────────────────────────────────────────────────────

/// Thresholds for the rider attach/detach state machine.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AttachmentConfig {
    /// A rider reporting from farther than this (straight-line) from its
    /// platform has unambiguously left it.
    pub detach_radius: f32,

    /// How long a missing linkage field is tolerated before detaching.
    /// Expiry is strict: exactly `loss_grace_ms` is still within grace.
    pub loss_grace_ms: u32,

    /// Movement-consistency checks are suppressed for this long after the
    /// rider's coordinate frame changes (boarding or leaving).
    pub check_suppression_ms: u32,
}

impl Default for AttachmentConfig {
    fn default() -> Self {
        Self {
            detach_radius:        60.0,
            loss_grace_ms:        2_000,
            check_suppression_ms: 500,
        }
    }
}

// ── DockConfig ────────────────────────────────────────────────────────────────

/// Radii and thresholds for dock lookup and dock-status reporting.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DockConfig {
    /// A dock waypoint farther than this from the asking position is ignored.
    pub search_radius: f32,

    /// A platform within this distance of the dock counts as docked.
    pub docked_radius: f32,

    /// ETAs at or under this are reported as "arriving shortly".
    pub arriving_soon_ms: u32,
}

impl Default for DockConfig {
    fn default() -> Self {
        Self {
            search_radius:    120.0,
            docked_radius:    75.0,
            arriving_soon_ms: 30_000,
        }
    }
}

// ── TransportConfig ───────────────────────────────────────────────────────────

/// Top-level engine configuration.
///
/// With the `serde` feature, missing sections and fields fall back to their
/// defaults, so a config file only needs to name what it overrides.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TransportConfig {
    pub kinematics: KinematicsConfig,

    /// Cadence of each platform's periodic timer.
    pub tick_interval_ms: u32,

    pub attachment: AttachmentConfig,

    pub docks: DockConfig,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            kinematics:       KinematicsConfig::default(),
            tick_interval_ms: 100,
            attachment:       AttachmentConfig::default(),
            docks:            DockConfig::default(),
        }
    }
}

impl TransportConfig {
    /// Reject values that would make synthesis or ticking degenerate.
    pub fn validate(&self) -> TpResult<()> {
        let k = &self.kinematics;
        if !positive(k.acceleration) {
            return Err(TpError::Config(format!(
                "acceleration must be positive, got {}", k.acceleration
            )));
        }
        if !positive(k.cruise_speed) {
            return Err(TpError::Config(format!(
                "cruise speed must be positive, got {}", k.cruise_speed
            )));
        }
        if k.sample_interval_ms == 0 {
            return Err(TpError::Config("sample interval must be non-zero".into()));
        }
        if self.tick_interval_ms == 0 {
            return Err(TpError::Config("tick interval must be non-zero".into()));
        }
        if !positive(self.attachment.detach_radius) {
            return Err(TpError::Config(format!(
                "detach radius must be positive, got {}", self.attachment.detach_radius
            )));
        }
        if !positive(self.docks.search_radius) {
            return Err(TpError::Config(format!(
                "dock search radius must be positive, got {}", self.docks.search_radius
            )));
        }
        if !positive(self.docks.docked_radius) {
            return Err(TpError::Config(format!(
                "docked radius must be positive, got {}", self.docks.docked_radius
            )));
        }
        Ok(())
    }
}

/// `true` for finite, strictly positive values (rejects NaN).
#[inline]
fn positive(v: f32) -> bool {
    v.is_finite() && v > 0.0
}
