//! Host-world collaborators.
//!
//! The engine never owns riders or world objects.  Everything it does to the
//! world goes through these traits, which the host implements once (usually
//! on a single world handle) and passes to [`Fleet`][crate::Fleet] methods
//! by `&mut`.

use tp_core::{Location, MapId, PlatformId, RiderId};

use crate::DockCue;

/// Placement of platforms and riders in the world's spatial index.
pub trait WorldPlacement {
    fn remove_from_world(&mut self, platform: PlatformId);
    fn set_map(&mut self, platform: PlatformId, map: MapId);
    fn set_position(&mut self, platform: PlatformId, at: Location);
    /// Insert the platform into the map last given to `set_map`.
    fn add_to_world(&mut self, platform: PlatformId);

    fn set_rider_position(&mut self, rider: RiderId, at: Location);
    /// Re-index `rider` immediately, even if it moved less than the usual
    /// re-index threshold.
    fn force_reindex(&mut self, rider: RiderId);
}

/// A rider as the host currently sees it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RiderStatus {
    /// `false` while the rider is on a loading screen.
    pub in_world: bool,
    pub dead:     bool,
    pub map:      MapId,
    pub location: Location,
}

/// Outbound "you are about to change maps" notice.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TransferPending {
    pub dest_map:   MapId,
    pub platform:   PlatformId,
    pub origin_map: MapId,
}

/// Rider lookup and rider-side effects.
pub trait RiderDirectory {
    /// `None` once the rider has disconnected or been removed.
    fn rider_status(&self, rider: RiderId) -> Option<RiderStatus>;

    fn send_transfer_pending(&mut self, rider: RiderId, notice: TransferPending);
    fn relocate_rider(&mut self, rider: RiderId, map: MapId, at: Location);
    /// Bring a dead rider back with health and primary power at maximum.
    fn resurrect_full(&mut self, rider: RiderId);
    /// Send the rider to its nearest respawn point.
    fn repop_at_respawn(&mut self, rider: RiderId);
    /// Skip speed/consistency checks for `ms` milliseconds.
    fn suppress_movement_checks(&mut self, rider: RiderId, ms: u32);
}

pub trait ContentAccess {
    fn may_enter(&self, rider: RiderId, map: MapId) -> bool;
}

/// Fire-and-forget dock arrival cue.
pub trait DockingCues {
    fn on_docked(&mut self, platform: PlatformId, visual_class: u32, cue: DockCue);
}

/// Everything the fleet needs from the host.
pub trait TransportWorld: WorldPlacement + RiderDirectory + ContentAccess + DockingCues {}

impl<T> TransportWorld for T where T: WorldPlacement + RiderDirectory + ContentAccess + DockingCues {}
