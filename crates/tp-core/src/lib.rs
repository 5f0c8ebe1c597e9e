//! `tp-core` — foundational types for the `rust_tp` transport engine.
//!
//! This crate is a dependency of every other `tp-*` crate.  It has no `tp-*`
//! dependencies and only `thiserror` (plus optional `serde`) externally.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `PlatformId`, `RiderId`, `MapId`, `PathId`            |
//! | [`geo`]         | `Vec3`, `Location`, platform-local frame transform    |
//! | [`time`]        | `Millis`, `mod_diff`, `phase_in`                      |
//! | [`config`]      | `TransportConfig` and its sub-sections                |
//! | [`error`]       | `TpError`, `TpResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{AttachmentConfig, DockConfig, KinematicsConfig, TransportConfig};
pub use error::{TpError, TpResult};
pub use geo::{Location, Vec3, normalize_orientation};
pub use ids::{MapId, PathId, PlatformId, RiderId};
pub use time::{Millis, mod_diff, phase_in};
