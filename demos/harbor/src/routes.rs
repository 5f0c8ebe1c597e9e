//! Route definitions for the harbor demo.
//!
//! Two maps: the mainland (`MAINLAND`) and the isles (`ISLES`).  The ferry
//! shuttles between two mainland piers; the airship docks at a tower on the
//! isles, jumps to the mainland, docks again, and jumps back.

use tp_core::{MapId, PathId, PlatformId, Vec3};
use tp_path::{NodeAction, PathNode, PathTable};
use tp_sim::PlatformDef;

pub const MAINLAND: MapId = MapId(0);
pub const ISLES:    MapId = MapId(1);

pub const FERRY:   PlatformId = PlatformId(1);
pub const AIRSHIP: PlatformId = PlatformId(2);

const FERRY_PATH:   PathId = PathId(10);
const AIRSHIP_PATH: PathId = PathId(20);

pub const NORTH_PIER:     Vec3 = Vec3::new(0.0, 0.0, 0.0);
pub const SOUTH_PIER:     Vec3 = Vec3::new(1_200.0, 0.0, 0.0);
pub const ISLE_TOWER:     Vec3 = Vec3::new(0.0, 0.0, 50.0);
pub const MAINLAND_TOWER: Vec3 = Vec3::new(5_600.0, 0.0, 50.0);

/// Path rows as the host would load them.
///
/// Each route ends on its first node again so the wrap back to the start is
/// a standstill rather than a jump.
pub fn build_paths() -> PathTable {
    use NodeAction::{Normal, Stop, Teleport};

    let mut t = PathTable::new();
    t.extend_path(FERRY_PATH, [
        PathNode::new(MAINLAND, NORTH_PIER, Stop, 10),
        PathNode::new(MAINLAND, Vec3::new(600.0, 200.0, 0.0), Normal, 0),
        PathNode::new(MAINLAND, SOUTH_PIER, Stop, 10),
        PathNode::new(MAINLAND, Vec3::new(600.0, -200.0, 0.0), Normal, 0),
        PathNode::new(MAINLAND, NORTH_PIER, Normal, 0),
    ]);
    t.extend_path(AIRSHIP_PATH, [
        PathNode::new(ISLES, ISLE_TOWER, Stop, 8),
        PathNode::new(ISLES, Vec3::new(800.0, 0.0, 80.0), Normal, 0),
        PathNode::new(MAINLAND, Vec3::new(5_000.0, 0.0, 80.0), Teleport, 0),
        PathNode::new(MAINLAND, MAINLAND_TOWER, Stop, 8),
        PathNode::new(MAINLAND, Vec3::new(6_400.0, 0.0, 80.0), Normal, 0),
        PathNode::new(ISLES, Vec3::new(-800.0, 0.0, 80.0), Teleport, 0),
        PathNode::new(ISLES, ISLE_TOWER, Normal, 0),
    ]);
    t
}

pub fn platform_defs() -> Vec<PlatformDef> {
    vec![
        PlatformDef::new(FERRY, FERRY_PATH, "ferry", 3015),
        PlatformDef::new(AIRSHIP, AIRSHIP_PATH, "airship", 3031),
    ]
}
