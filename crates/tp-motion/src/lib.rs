//! `tp-motion` — advancing a platform along its waypoint schedule.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`state`]    | `TransportState`: per-platform schedule cursor + placement   |
//! | [`clock`]    | `MotionClock`: modular current/next advancement              |
//! | [`interp`]   | `FrameInterpolator`: same-map sub-tick smoothing             |
//! | [`engine`]   | `MotionEngine`, `MotionStep`: one tick of the above          |
//!
//! # Tick model
//!
//! ```text
//! elapsed = wall_ms mod clock_period
//! while (elapsed - cur.time) mod P >= (next.time - cur.time) mod P:
//!     cur, next = next, successor(next)
//!     map change / teleport edge → MapCrossing, stop advancing
//!     otherwise                  → snap to the waypoint, note docks
//! no crossing → interpolate between cur and next
//! ```
//!
//! Nothing here touches the world.  A [`MapCrossing`] is handed back to the
//! caller, which performs the relocation and then commits the new placement
//! with [`TransportState::place`].

pub mod clock;
pub mod engine;
pub mod interp;
pub mod state;

#[cfg(test)]
mod tests;

pub use clock::{ClockReport, MapCrossing, MotionClock};
pub use engine::{MotionEngine, MotionStep};
pub use interp::FrameInterpolator;
pub use state::TransportState;
