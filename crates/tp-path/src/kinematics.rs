//! Acceleration-limited motion profile.
//!
//! A platform accelerates at `a` from rest until it reaches cruise speed `v`,
//! cruises, then brakes at `a` back to rest at the next stop.  With the
//! defaults (`a = 1`, `v = 30`) the ramp takes 30 s and covers 450 units.
//!
//! ```text
//! t(d) = sqrt(2d / a)                     d <  d_ramp
//!      = t_ramp + (d - d_ramp) / v        d >= d_ramp
//!
//! d(t) = a t² / 2                         t <= t_ramp
//!      = d_ramp + v (t - t_ramp)          t >  t_ramp
//! ```
//!
//! A leg of length `D` between two rests is symmetric: it takes
//! `2 · t(D / 2)`.  All arithmetic is `f64`; results are narrowed by callers.

use tp_core::KinematicsConfig;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MotionProfile {
    acceleration:  f64,
    cruise_speed:  f64,
    ramp_time:     f64,
    ramp_distance: f64,
}

impl MotionProfile {
    /// Build from a validated config.  Non-positive acceleration or cruise
    /// speed produces non-finite results.
    pub fn new(cfg: &KinematicsConfig) -> Self {
        let a = cfg.acceleration as f64;
        let v = cfg.cruise_speed as f64;
        Self {
            acceleration:  a,
            cruise_speed:  v,
            ramp_time:     v / a,
            ramp_distance: 0.5 * v * v / a,
        }
    }

    /// Distance covered while accelerating from rest to cruise speed.
    #[inline]
    pub fn ramp_distance(&self) -> f64 {
        self.ramp_distance
    }

    /// Seconds needed to cover `distance` starting from rest.
    pub fn time_for_distance(&self, distance: f64) -> f64 {
        let d = distance.max(0.0);
        if d < self.ramp_distance {
            (2.0 * d / self.acceleration).sqrt()
        } else {
            self.ramp_time + (d - self.ramp_distance) / self.cruise_speed
        }
    }

    /// Distance covered `secs` seconds after starting from rest.
    pub fn distance_for_time(&self, secs: f64) -> f64 {
        let t = secs.max(0.0);
        if t <= self.ramp_time {
            0.5 * self.acceleration * t * t
        } else {
            self.ramp_distance + self.cruise_speed * (t - self.ramp_time)
        }
    }

    #[inline]
    pub fn time_for_distance_ms(&self, distance: f64) -> f64 {
        self.time_for_distance(distance) * 1000.0
    }

    #[inline]
    pub fn distance_for_time_ms(&self, ms: f64) -> f64 {
        self.distance_for_time(ms / 1000.0)
    }

    /// Milliseconds for a full rest-to-rest leg of `length` units.
    #[inline]
    pub fn leg_time_ms(&self, length: f64) -> f64 {
        2.0 * self.time_for_distance_ms(length / 2.0)
    }
}
