//! `tp-sim` — runs a fleet of platforms against a host world.
//!
//! # Two-phase tick
//!
//! ```text
//! Fleet::tick(now):
//!   ① Motion  — MotionEngine::tick for every platform
//!               (parallel with the `parallel` feature; touches only the
//!               platform's own TransportState).
//!   ② Apply   — ascending PlatformId order:
//!                 docked waypoints → DockingCues::on_docked
//!                 MapCrossing      → CrossMapRelocator (platform, then riders)
//!                 in-place move    → WorldPlacement::set_position
//! ```
//!
//! Rider movement reports go through [`Fleet::on_movement_report`], which
//! routes them to the platform the rider is on (or names) and applies the
//! [`AttachmentTracker`][tp_rider::AttachmentTracker] transition to the
//! world.  Because both paths need `&mut Fleet`, a rider's report can never
//! race a relocation of the same rider.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                               |
//! |------------|------------------------------------------------------|
//! | `parallel` | Runs the motion phase on Rayon's thread pool.        |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! let mut fleet = FleetBuilder::new(TransportConfig::default())
//!     .platforms(defs)
//!     .build(&path_table, &mut world)?;
//! fleet.run(Millis(0), 600, &mut world, &mut NoopObserver);
//! ```

pub mod builder;
pub mod cue;
pub mod error;
pub mod fleet;
pub mod observer;
pub mod platform;
pub mod relocate;
pub mod status;
pub mod world;


pub use builder::FleetBuilder;
pub use cue::DockCue;
pub use error::{FleetError, FleetResult};
pub use fleet::Fleet;
pub use observer::{FleetObserver, NoopObserver, TickSummary};
pub use platform::{Platform, PlatformDef};
pub use relocate::{CrossMapRelocator, RelocationSummary};
pub use status::{DockReport, DockStatus};
pub use world::{
    ContentAccess, DockingCues, RiderDirectory, RiderStatus, TransferPending, TransportWorld,
    WorldPlacement,
};
