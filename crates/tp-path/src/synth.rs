//! Path synthesis: raw nodes → [`WaypointSchedule`].
//!
//! # Sampling
//!
//! Between key frames `a` and `b` (segment length `s = b.dist_from_prev`) the
//! platform is sampled every `sample_interval_ms`.  Within the stop-to-stop
//! leg of length `D = a.since + a.until` that takes `T = 2 · t(D / 2)`, the
//! sampler tracks time since departure `from` and time to arrival
//! `to = T - from`, and derives the distance covered past `a` from whichever
//! is smaller:
//!
//! ```text
//! covered = d(from) - a.since          from <= to   (still accelerating)
//!         = a.until - d(to)            otherwise    (braking toward the dock)
//! ```
//!
//! `b` itself lands on the first sample slot where `covered >= s` or
//! `to <= 0`.  Zero-length segments (teleports and map changes) take one
//! sample interval.  Dwell after a `Stop` or `Teleport` key frame pushes all
//! later samples back by `dwell_ms`.

use tp_core::{KinematicsConfig, Location, PathId};

use crate::{
    KeyFrame, MotionProfile, NodeAction, PathError, PathNode, PathResult, PathSource, Waypoint,
    WaypointSchedule, build_keyframes,
};

pub struct PathSynthesizer {
    profile:   MotionProfile,
    sample_ms: u32,
}

impl PathSynthesizer {
    pub fn new(cfg: &KinematicsConfig) -> Self {
        Self {
            profile:   MotionProfile::new(cfg),
            sample_ms: cfg.sample_interval_ms.max(1),
        }
    }

    pub fn profile(&self) -> &MotionProfile {
        &self.profile
    }

    /// Look `path` up in `source` and synthesize its schedule.
    pub fn resolve<S: PathSource + ?Sized>(
        &self,
        source: &S,
        path:   PathId,
    ) -> PathResult<WaypointSchedule> {
        let nodes = source.nodes(path);
        self.synthesize(path, &nodes)
    }

    /// Turn an ordered cyclic node list into a schedule.
    ///
    /// Fails with [`PathError::NoNodes`] for an empty list; a platform on
    /// that path must not be created.
    pub fn synthesize(&self, path: PathId, nodes: &[PathNode]) -> PathResult<WaypointSchedule> {
        if nodes.is_empty() {
            return Err(PathError::NoNodes(path));
        }
        if let Some(index) = nodes.iter().position(|n| {
            let p = n.position;
            !(p.x.is_finite() && p.y.is_finite() && p.z.is_finite())
        }) {
            return Err(PathError::NonFiniteNode { path, index });
        }

        let frames = build_keyframes(nodes, &self.profile);
        let last = frames.len() - 1;
        let sample = self.sample_ms as u64;

        // Times are accumulated in u64 and narrowed once the period is known.
        let mut out: Vec<(u64, Waypoint)> = Vec::with_capacity(frames.len() * 4);
        let mut heading = segment_heading(&frames, 0).unwrap_or(0.0);

        let kf0 = &frames[0];
        out.push((0, keyframe_waypoint(kf0, heading, is_edge(&frames, 0))));
        let mut t = kf0.effective_dwell_ms() as u64;

        for i in 0..last {
            let (a, b) = (&frames[i], &frames[i + 1]);
            if let Some(h) = segment_heading(&frames, i) {
                heading = h;
            }

            let arrival = if b.dist_from_prev > 0.0 {
                self.sample_segment(a, b, t, heading, &mut out)
            } else {
                log::debug!("{path}: zero-length segment into key frame {}", i + 1);
                sample
            };
            t += arrival;

            if let Some(h) = segment_heading(&frames, i + 1) {
                heading = h;
            }
            out.push((t, keyframe_waypoint(b, heading, is_edge(&frames, i + 1))));
            t += b.effective_dwell_ms() as u64;
        }

        // The wrap edge back to waypoint 0 takes at least one sample.
        let last_time = out.last().map_or(0, |(time, _)| *time);
        let period = t.max(last_time + sample);

        let period_ms = u32::try_from(period).map_err(|_| PathError::PeriodOverflow(path))?;
        let waypoints: Vec<Waypoint> = out
            .into_iter()
            .map(|(time, mut w)| {
                // period fits in u32 and every time is below it.
                w.time_ms = time as u32;
                w
            })
            .collect();

        log::debug!(
            "{path}: {} key frames -> {} waypoints, period {period_ms} ms",
            frames.len(),
            waypoints.len(),
        );
        Ok(WaypointSchedule::new(path, waypoints, period_ms))
    }

    /// Emit the intermediate samples between `a` and `b` starting at absolute
    /// schedule time `t0`.  Returns the time from `t0` until `b` is reached.
    fn sample_segment(
        &self,
        a:       &KeyFrame,
        b:       &KeyFrame,
        t0:      u64,
        heading: f32,
        out:     &mut Vec<(u64, Waypoint)>,
    ) -> u64 {
        let seg = b.dist_from_prev;
        let step = self.sample_ms as f64;
        let leg = self.profile.leg_time_ms(a.leg_length());
        let start = if a.time_from_ms <= a.time_to_ms {
            a.time_from_ms
        } else {
            leg - a.time_to_ms
        };

        let mut k: u64 = 1;
        loop {
            let from = start + k as f64 * step;
            let to = leg - from;
            if to <= 0.0 {
                break;
            }
            let covered = if from <= to {
                self.profile.distance_for_time_ms(from) - a.dist_since_stop
            } else {
                a.dist_until_stop - self.profile.distance_for_time_ms(to)
            };
            if covered >= seg {
                break;
            }
            if covered > 0.0 {
                let frac = (covered / seg) as f32;
                out.push((
                    t0 + k * self.sample_ms as u64,
                    Waypoint {
                        time_ms:          0,
                        map:              a.map,
                        location:         Location::new(a.position.lerp(b.position, frac), heading),
                        is_teleport_edge: false,
                        is_dock_stop:     false,
                        dwell_ms:         0,
                    },
                ));
            }
            k += 1;
        }
        k * self.sample_ms as u64
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Heading along the segment leaving key frame `i`, if that segment is
/// continuous motion with a horizontal component.
fn segment_heading(frames: &[KeyFrame], i: usize) -> Option<f32> {
    let next = frames.get(i + 1)?;
    if next.dist_from_prev <= 0.0 {
        return None;
    }
    frames[i].position.heading_to(next.position)
}

/// A key frame is reached discontinuously if it is a teleport or its map
/// differs from the key frame before it (cyclically).
fn is_edge(frames: &[KeyFrame], i: usize) -> bool {
    let prev = if i == 0 { frames.len() - 1 } else { i - 1 };
    frames[i].action == NodeAction::Teleport || frames[i].map != frames[prev].map
}

fn keyframe_waypoint(k: &KeyFrame, orientation: f32, is_teleport_edge: bool) -> Waypoint {
    Waypoint {
        time_ms: 0,
        map: k.map,
        location: Location::new(k.position, orientation),
        is_teleport_edge,
        is_dock_stop: k.action == NodeAction::Stop,
        dwell_ms: k.effective_dwell_ms(),
    }
}
