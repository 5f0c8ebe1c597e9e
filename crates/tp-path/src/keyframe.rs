//! Key frames: path nodes annotated with distance and time to the
//! surrounding stops.
//!
//! # Anchors
//!
//! Distances are measured between *anchors*: the `Stop` key frames, or key
//! frame 0 when the path has no stop at all.  Both sweeps are cyclic and
//! start at the first anchor, so the leg that wraps from the last node back
//! to the first is measured like any other.
//!
//! ```text
//! since[j] = 0                              j is an anchor
//!          = since[j-1] + dist_from_prev[j] otherwise
//!
//! until[j] = dist_from_prev[j+1]                     j+1 is an anchor
//!          = dist_from_prev[j+1] + until[j+1]        otherwise
//! ```
//!
//! `dist_from_prev` is zero for key frame 0, for `Teleport` key frames, and
//! wherever the map changes.

use tp_core::{MapId, Vec3};

use crate::{MotionProfile, NodeAction, PathNode};

#[derive(Clone, Debug, PartialEq)]
pub struct KeyFrame {
    pub map:             MapId,
    pub position:        Vec3,
    pub action:          NodeAction,
    /// Dwell at this key frame, already converted to milliseconds.
    pub dwell_ms:        u32,

    pub dist_from_prev:  f64,
    pub dist_since_stop: f64,
    pub dist_until_stop: f64,

    /// Time to cover `dist_since_stop` from rest, in milliseconds.
    pub time_from_ms:    f64,
    /// Time to cover `dist_until_stop` from rest, in milliseconds.
    pub time_to_ms:      f64,
}

impl KeyFrame {
    /// Whether the platform waits here.  Only stops and teleport arrivals
    /// honor their dwell; a dwell on a pass-through node is ignored.
    #[inline]
    pub fn effective_dwell_ms(&self) -> u32 {
        match self.action {
            NodeAction::Stop | NodeAction::Teleport => self.dwell_ms,
            NodeAction::Normal                      => 0,
        }
    }

    /// Total length of the stop-to-stop leg this key frame starts a
    /// segment of.
    #[inline]
    pub fn leg_length(&self) -> f64 {
        self.dist_since_stop + self.dist_until_stop
    }
}

/// Annotate `nodes` with distances and times.  Returns an empty vector for
/// empty input.
pub fn build_keyframes(nodes: &[PathNode], profile: &MotionProfile) -> Vec<KeyFrame> {
    let n = nodes.len();
    if n == 0 {
        return Vec::new();
    }

    let mut frames: Vec<KeyFrame> = nodes
        .iter()
        .enumerate()
        .map(|(i, node)| {
            let joined = i > 0
                && node.action != NodeAction::Teleport
                && node.map == nodes[i - 1].map;
            let dist_from_prev = if joined {
                nodes[i - 1].position.distance(node.position) as f64
            } else {
                0.0
            };
            KeyFrame {
                map:             node.map,
                position:        node.position,
                action:          node.action,
                dwell_ms:        node.dwell_secs.saturating_mul(1000),
                dist_from_prev,
                dist_since_stop: 0.0,
                dist_until_stop: 0.0,
                time_from_ms:    0.0,
                time_to_ms:      0.0,
            }
        })
        .collect();

    let mut anchor: Vec<bool> = frames.iter().map(|k| k.action == NodeAction::Stop).collect();
    let first_anchor = match anchor.iter().position(|&a| a) {
        Some(i) => i,
        None => {
            anchor[0] = true;
            0
        }
    };

    // Forward sweep.
    let mut acc = 0.0;
    for step in 0..n {
        let j = (first_anchor + step) % n;
        acc = if anchor[j] { 0.0 } else { acc + frames[j].dist_from_prev };
        frames[j].dist_since_stop = acc;
    }

    // Backward sweep.
    let mut acc = 0.0;
    for step in 1..=n {
        let j = (first_anchor + n - step) % n;
        let next = (j + 1) % n;
        let carried = if anchor[next] { 0.0 } else { acc };
        acc = frames[next].dist_from_prev + carried;
        frames[j].dist_until_stop = acc;
    }

    for k in &mut frames {
        k.time_from_ms = profile.time_for_distance_ms(k.dist_since_stop);
        k.time_to_ms   = profile.time_for_distance_ms(k.dist_until_stop);
    }
    frames
}
