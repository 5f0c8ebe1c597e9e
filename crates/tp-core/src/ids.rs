//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$inner> for $name {
            #[inline(always)]
            fn from(raw: $inner) -> $name {
                $name(raw)
            }
        }
    };
}

typed_id! {
    /// Identity of one platform instance (boat, airship, tram).
    pub struct PlatformId(u32);
}

typed_id! {
    /// Identity of a rider.  Riders are owned by the host world; the engine
    /// only ever refers to them by id.
    pub struct RiderId(u64);
}

typed_id! {
    /// A world map.  Crossing between maps is a teleport edge.
    pub struct MapId(u32);
}

typed_id! {
    /// Key of one ordered, cyclic path-node list in the path configuration.
    pub struct PathId(u32);
}
