//! `tp-rider` — who is standing on a platform, and where.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | [`report`]    | `MovementReport`, `TransportLinkage`: inbound rider reports   |
//! | [`record`]    | `AttachmentRecord`, `AttachmentState`                         |
//! | [`registry`]  | `PassengerRegistry`: per-platform rider → record map          |
//! | [`tracker`]   | `AttachmentTracker`, `Transition`, `DetachReason`             |
//!
//! # Attachment state machine
//!
//! ```text
//!              linkage                     no linkage, near
//!  DETACHED ────────────▶ ATTACHED ──────────────────────────▶ LOSS_PENDING
//!     ▲                    │   ▲                                  │   │
//!     │  far from platform │   └──────── linkage (in grace) ──────┘   │
//!     ├────────────────────┘                                          │
//!     └─────────────── grace expired, or far from platform ───────────┘
//! ```
//!
//! `DETACHED` is the absence of a record.  A rider's world position while
//! attached is always derived from its local offset through the platform's
//! current frame, never taken from the report.

pub mod record;
pub mod registry;
pub mod report;
pub mod tracker;

#[cfg(test)]
mod tests;

pub use record::{AttachmentRecord, AttachmentState};
pub use registry::PassengerRegistry;
pub use report::{MovementReport, TransportLinkage};
pub use tracker::{AttachmentTracker, DetachReason, Transition};
