//! Moving a platform and everyone on it across a map boundary.
//!
//! # Order of operations
//!
//! ```text
//! 1. remove_from_world(platform)
//! 2. set_map + set_position(platform, destination)
//! 3. add_to_world(platform)
//! 4. for each rider (ascending id):
//!      unresolvable          → drop record
//!      not in world          → skip, keep record
//!      content access denied → repop at respawn, drop record
//!      otherwise             → transfer notice, relocate, resurrect if dead
//! ```
//!
//! Riders only move once the platform is fully placed on the destination
//! map, so there is always something under them when they arrive.

use tp_core::{Location, RiderId};
use tp_motion::MapCrossing;

use crate::{Platform, TransferPending, TransportWorld};

/// Per-crossing rider outcomes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RelocationSummary {
    pub relocated:  u32,
    pub pruned:     u32,
    pub redirected: u32,
    pub skipped:    u32,
    /// Riders whose record was removed (pruned or redirected).
    pub dropped:    Vec<RiderId>,
}

pub struct CrossMapRelocator;

impl CrossMapRelocator {
    /// Apply `crossing` to `platform` and its riders.
    ///
    /// Never fails: per-rider problems are isolated to that rider.
    pub fn relocate<W: TransportWorld + ?Sized>(
        platform: &mut Platform,
        crossing: &MapCrossing,
        world:    &mut W,
    ) -> RelocationSummary {
        let id = platform.id();
        let dest = crossing.destination;

        world.remove_from_world(id);
        world.set_map(id, crossing.to_map);
        world.set_position(id, dest);
        world.add_to_world(id);
        platform.state.place(crossing.to_map, dest);

        let notice = TransferPending {
            dest_map:   crossing.to_map,
            platform:   id,
            origin_map: crossing.from_map,
        };

        let mut summary = RelocationSummary::default();
        for rider in platform.passengers.riders() {
            let Some(status) = world.rider_status(rider) else {
                platform.passengers.remove(rider);
                summary.pruned += 1;
                summary.dropped.push(rider);
                log::debug!("{id}: pruned unresolvable {rider}");
                continue;
            };
            if !status.in_world {
                summary.skipped += 1;
                continue;
            }
            let Some(rec) = platform.passengers.get(rider) else {
                continue;
            };
            let target = Location::new(
                rec.relocation_target(dest.position),
                status.location.orientation,
            );

            if !world.may_enter(rider, crossing.to_map) {
                world.repop_at_respawn(rider);
                platform.passengers.remove(rider);
                summary.redirected += 1;
                summary.dropped.push(rider);
                log::warn!("{id}: {rider} may not enter {}, sent to respawn", crossing.to_map);
                continue;
            }

            world.send_transfer_pending(rider, notice);
            world.relocate_rider(rider, crossing.to_map, target);
            if status.dead {
                world.resurrect_full(rider);
            }
            summary.relocated += 1;
        }
        summary
    }
}
