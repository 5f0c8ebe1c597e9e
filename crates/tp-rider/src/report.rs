//! Inbound rider movement reports.

use tp_core::{Location, Millis, PlatformId, RiderId, Vec3};

/// The optional "I am standing on a platform" part of a movement report.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransportLinkage {
    pub platform:         PlatformId,
    /// Rider position in the platform's local frame.
    pub offset:           Vec3,
    /// Rider facing relative to the platform's facing.
    pub orientation_hint: f32,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovementReport {
    pub rider:     RiderId,
    /// Client movement flags, carried through untouched.
    pub flags:     u32,
    pub timestamp: Millis,
    /// Absolute world placement as the client sees it.
    pub location:  Location,
    pub linkage:   Option<TransportLinkage>,
}

impl MovementReport {
    /// A report without transport linkage.
    pub fn free(rider: RiderId, timestamp: Millis, location: Location) -> Self {
        Self { rider, flags: 0, timestamp, location, linkage: None }
    }

    /// A report standing on `linkage.platform`.
    pub fn aboard(
        rider:     RiderId,
        timestamp: Millis,
        location:  Location,
        linkage:   TransportLinkage,
    ) -> Self {
        Self { rider, flags: 0, timestamp, location, linkage: Some(linkage) }
    }

    #[inline]
    pub fn linked_platform(&self) -> Option<PlatformId> {
        self.linkage.map(|l| l.platform)
    }
}
