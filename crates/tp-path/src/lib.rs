//! `tp-path` — path nodes and waypoint schedule synthesis.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`node`]        | `NodeAction`, `PathNode`                                  |
//! | [`source`]      | `PathSource` trait, in-memory `PathTable`                 |
//! | [`kinematics`]  | `MotionProfile`: accel-limited distance ↔ time            |
//! | [`keyframe`]    | `KeyFrame`, `build_keyframes` (distance sweeps)           |
//! | [`schedule`]    | `Waypoint`, `WaypointSchedule`, `DockMatch`               |
//! | [`synth`]       | `PathSynthesizer`: nodes → schedule                       |
//! | [`error`]       | `PathError`, `PathResult<T>`                              |
//!
//! # Synthesis (summary)
//!
//! ```text
//! nodes ──build_keyframes──▶ key frames (dist_from_prev, since/until stop,
//!                                        time_from/time_to)
//!       ──sample every 100 ms between adjacent key frames──▶ waypoints
//!       ──period = last waypoint time + its dwell──▶ WaypointSchedule
//! ```
//!
//! The schedule is an arena: waypoints sorted by `time_ms`, addressed by
//! index, with the successor of `i` at `(i + 1) % len`.

pub mod error;
pub mod keyframe;
pub mod kinematics;
pub mod node;
pub mod schedule;
pub mod source;
pub mod synth;


pub use error::{PathError, PathResult};
pub use keyframe::{KeyFrame, build_keyframes};
pub use kinematics::MotionProfile;
pub use node::{NodeAction, PathNode};
pub use schedule::{DockMatch, Waypoint, WaypointSchedule};
pub use source::{PathSource, PathTable};
pub use synth::PathSynthesizer;
