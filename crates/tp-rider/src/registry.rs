//! Per-platform passenger registry.
//!
//! Ordered by rider id so relocation visits riders in a deterministic order.

use std::collections::BTreeMap;

use tp_core::{Location, RiderId};

use crate::AttachmentRecord;

#[derive(Clone, Debug, Default)]
pub struct PassengerRegistry {
    records: BTreeMap<RiderId, AttachmentRecord>,
}

impl PassengerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, rider: RiderId) -> bool {
        self.records.contains_key(&rider)
    }

    pub fn get(&self, rider: RiderId) -> Option<&AttachmentRecord> {
        self.records.get(&rider)
    }

    pub fn get_mut(&mut self, rider: RiderId) -> Option<&mut AttachmentRecord> {
        self.records.get_mut(&rider)
    }

    /// Insert or replace the record for `record.rider`.
    pub fn insert(&mut self, record: AttachmentRecord) -> Option<AttachmentRecord> {
        self.records.insert(record.rider, record)
    }

    pub fn remove(&mut self, rider: RiderId) -> Option<AttachmentRecord> {
        self.records.remove(&rider)
    }

    /// Riders in ascending id order.  A snapshot, so the registry can be
    /// mutated while walking it.
    pub fn riders(&self) -> Vec<RiderId> {
        self.records.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AttachmentRecord> {
        self.records.values()
    }

    /// World placement of `rider` if it is aboard a platform at `frame`.
    pub fn world_location(&self, rider: RiderId, frame: &Location) -> Option<Location> {
        self.get(rider).map(|r| r.world_location(frame))
    }
}
