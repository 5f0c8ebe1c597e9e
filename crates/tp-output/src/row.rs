//! Plain data row types written by output backends.

/// Where one platform was at a snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlatformSnapshotRow {
    pub wall_ms:     u64,
    pub platform_id: u32,
    pub map_id:      u32,
    pub x:           f32,
    pub y:           f32,
    pub z:           f32,
    pub orientation: f32,
    /// Riders with an attachment record at snapshot time.
    pub passengers:  u32,
}

/// One map crossing and what happened to the riders aboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrossingRow {
    pub wall_ms:     u64,
    pub platform_id: u32,
    pub from_map:    u32,
    pub to_map:      u32,
    pub relocated:   u32,
    pub pruned:      u32,
    pub redirected:  u32,
    pub skipped:     u32,
}
