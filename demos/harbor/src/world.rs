//! A minimal in-memory host world that prints what the engine asks of it.

use std::collections::{HashMap, HashSet};

use tp_core::{Location, MapId, PlatformId, RiderId};
use tp_sim::{
    ContentAccess, DockCue, DockingCues, RiderDirectory, RiderStatus, TransferPending,
    WorldPlacement,
};

#[derive(Default)]
pub struct HarborWorld {
    pub riders:      HashMap<RiderId, RiderStatus>,
    /// Riders locked out of a map's content.
    pub locked:      HashSet<(RiderId, MapId)>,
    pub placements:  u64,
    pub dock_cues:   u64,
    pub transfers:   u64,
    pub respawns:    u64,
}

impl HarborWorld {
    pub fn add_rider(&mut self, rider: RiderId, map: MapId, at: Location, dead: bool) {
        self.riders.insert(rider, RiderStatus { in_world: true, dead, map, location: at });
    }

    pub fn rider_map(&self, rider: RiderId) -> Option<MapId> {
        self.riders.get(&rider).map(|r| r.map)
    }
}

impl WorldPlacement for HarborWorld {
    fn remove_from_world(&mut self, platform: PlatformId) {
        println!("  world: {platform} leaves its map");
    }

    fn set_map(&mut self, _platform: PlatformId, _map: MapId) {}

    fn set_position(&mut self, _platform: PlatformId, _at: Location) {
        self.placements += 1;
    }

    fn add_to_world(&mut self, platform: PlatformId) {
        println!("  world: {platform} placed");
    }

    fn set_rider_position(&mut self, rider: RiderId, at: Location) {
        if let Some(r) = self.riders.get_mut(&rider) {
            r.location = at;
        }
    }

    fn force_reindex(&mut self, _rider: RiderId) {}
}

impl RiderDirectory for HarborWorld {
    fn rider_status(&self, rider: RiderId) -> Option<RiderStatus> {
        self.riders.get(&rider).copied()
    }

    fn send_transfer_pending(&mut self, rider: RiderId, notice: TransferPending) {
        println!(
            "  {rider}: transfer pending {} -> {} on {}",
            notice.origin_map, notice.dest_map, notice.platform,
        );
    }

    fn relocate_rider(&mut self, rider: RiderId, map: MapId, at: Location) {
        if let Some(r) = self.riders.get_mut(&rider) {
            r.map = map;
            r.location = at;
        }
        self.transfers += 1;
    }

    fn resurrect_full(&mut self, rider: RiderId) {
        if let Some(r) = self.riders.get_mut(&rider) {
            r.dead = false;
        }
        println!("  {rider}: resurrected on arrival");
    }

    fn repop_at_respawn(&mut self, rider: RiderId) {
        println!("  {rider}: no access, sent to respawn");
        self.respawns += 1;
    }

    fn suppress_movement_checks(&mut self, _rider: RiderId, _ms: u32) {}
}

impl ContentAccess for HarborWorld {
    fn may_enter(&self, rider: RiderId, map: MapId) -> bool {
        !self.locked.contains(&(rider, map))
    }
}

impl DockingCues for HarborWorld {
    fn on_docked(&mut self, _platform: PlatformId, _visual_class: u32, _cue: DockCue) {
        self.dock_cues += 1;
    }
}
