//! Time model.
//!
//! # Design
//!
//! Wall-clock time is a monotonically increasing millisecond counter,
//! [`Millis`].  Schedules are periodic: a platform's position in its schedule
//! is `wall_ms mod period`, a `u32` in `[0, period)`.
//!
//! All arithmetic on schedule offsets goes through [`mod_diff`], the true
//! modular difference.  Plain wrapping `u32` subtraction followed by `%` is
//! only correct when the period divides 2³², which schedule periods never do;
//! the error shows up exactly at the wrap seam.

use std::fmt;

// ── Millis ────────────────────────────────────────────────────────────────────

/// An absolute wall-clock instant in milliseconds.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Millis(pub u64);

impl Millis {
    pub const ZERO: Millis = Millis(0);

    /// The instant `ms` milliseconds after `self`.
    #[inline]
    pub fn offset(self, ms: u64) -> Millis {
        Millis(self.0 + ms)
    }

    /// Milliseconds elapsed from `earlier` to `self`, saturating at zero.
    ///
    /// Reports can arrive out of order; a stale timestamp reads as "no time
    /// has passed" rather than panicking.
    #[inline]
    pub fn since(self, earlier: Millis) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl std::ops::Add<u64> for Millis {
    type Output = Millis;
    #[inline]
    fn add(self, rhs: u64) -> Millis {
        Millis(self.0 + rhs)
    }
}

impl fmt::Display for Millis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

// ── Modular helpers ───────────────────────────────────────────────────────────

/// `(a - b) mod m`, computed without overflow or sign errors.
///
/// Returns `0` when `m == 0` (degenerate period).
#[inline]
pub fn mod_diff(a: u32, b: u32, m: u32) -> u32 {
    if m == 0 {
        return 0;
    }
    let (a, b, m) = (a as u64, b as u64, m as u64);
    ((a % m + m - b % m) % m) as u32
}

/// Position of `now` within a repeating period of `period_ms`.
///
/// Returns `0` for a zero period.
#[inline]
pub fn phase_in(now: Millis, period_ms: u32) -> u32 {
    if period_ms == 0 {
        return 0;
    }
    (now.0 % period_ms as u64) as u32
}
