//! World-space geometry: positions, orientations, and the platform frame.
//!
//! Positions are single-precision (`f32`), which is what the host world
//! stores.  Kinematic integration in `tp-path` widens to `f64` internally and
//! narrows again when a waypoint is stored.
//!
//! Orientation is a yaw angle in radians about the vertical (z) axis,
//! normalized to `[0, 2π)`.

use std::f32::consts::TAU;
use std::ops::{Add, Sub};

/// A point (or offset) in world or platform-local space.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Squared straight-line distance.  Prefer this for radius checks.
    #[inline]
    pub fn distance_sq(self, other: Vec3) -> f32 {
        let d = other - self;
        d.x * d.x + d.y * d.y + d.z * d.z
    }

    /// Straight-line (3-D Euclidean) distance.
    #[inline]
    pub fn distance(self, other: Vec3) -> f32 {
        self.distance_sq(other).sqrt()
    }

    /// Linear interpolation: `t = 0` → `self`, `t = 1` → `other`.
    #[inline]
    pub fn lerp(self, other: Vec3, t: f32) -> Vec3 {
        Vec3 {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
            z: self.z + (other.z - self.z) * t,
        }
    }

    /// Yaw facing from `self` toward `other`, or `None` when the two points
    /// share the same x/y (a purely vertical or zero move has no heading).
    pub fn heading_to(self, other: Vec3) -> Option<f32> {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        if dx == 0.0 && dy == 0.0 {
            return None;
        }
        Some(normalize_orientation(dy.atan2(dx)))
    }

    /// Rotate about the z axis by `angle` radians.  `z` is unchanged.
    #[inline]
    pub fn rotate_z(self, angle: f32) -> Vec3 {
        let (s, c) = angle.sin_cos();
        Vec3 {
            x: self.x * c - self.y * s,
            y: self.x * s + self.y * c,
            z: self.z,
        }
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    #[inline]
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    #[inline]
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl std::fmt::Display for Vec3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}

/// Wrap any angle into `[0, 2π)`.
#[inline]
pub fn normalize_orientation(o: f32) -> f32 {
    let r = o.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs.
    if r >= TAU { 0.0 } else { r }
}

// ── Location ──────────────────────────────────────────────────────────────────

/// A position plus a facing.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub position:    Vec3,
    pub orientation: f32,
}

impl Location {
    #[inline]
    pub fn new(position: Vec3, orientation: f32) -> Self {
        Self { position, orientation }
    }

    /// World-space position of a point given in this location's local frame:
    /// rotate the offset by `orientation` in the x/y plane, then translate.
    #[inline]
    pub fn local_to_world(&self, offset: Vec3) -> Vec3 {
        self.position + offset.rotate_z(self.orientation)
    }

    /// World-space location of a rider standing at `offset` and facing
    /// `orientation_hint` relative to this frame.
    pub fn transform(&self, offset: Vec3, orientation_hint: f32) -> Location {
        Location {
            position:    self.local_to_world(offset),
            orientation: normalize_orientation(self.orientation + orientation_hint),
        }
    }
}
