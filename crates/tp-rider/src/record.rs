use tp_core::{Location, Millis, RiderId, Vec3};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttachmentState {
    Attached,
    /// Linkage went missing at `since`; the grace window runs from there.
    LossPending { since: Millis },
}

/// A rider's link to one platform.  Exists only while the rider is
/// `Attached` or `LossPending`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttachmentRecord {
    pub rider:                  RiderId,
    pub local_offset:           Vec3,
    pub local_orientation_hint: f32,
    /// Timestamp of the last report that carried linkage.
    pub last_confirmed:         Millis,
    pub state:                  AttachmentState,
}

impl AttachmentRecord {
    pub fn new(rider: RiderId, local_offset: Vec3, hint: f32, now: Millis) -> Self {
        Self {
            rider,
            local_offset,
            local_orientation_hint: hint,
            last_confirmed: now,
            state: AttachmentState::Attached,
        }
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        matches!(self.state, AttachmentState::LossPending { .. })
    }

    /// World placement of this rider on a platform at `frame`.
    #[inline]
    pub fn world_location(&self, frame: &Location) -> Location {
        frame.transform(self.local_offset, self.local_orientation_hint)
    }

    /// Platform-unrotated destination used by cross-map relocation.
    #[inline]
    pub fn relocation_target(&self, platform_position: Vec3) -> Vec3 {
        platform_position + self.local_offset
    }
}
