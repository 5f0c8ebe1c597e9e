//! `tp-output` — diagnostic trace writers for the rust_tp transport engine.
//!
//! | Backend | Files created                                |
//! |---------|----------------------------------------------|
//! | CSV     | `platform_snapshots.csv`, `crossings.csv`    |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`FleetOutputObserver`], which implements `tp_sim::FleetObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use tp_output::{CsvWriter, FleetOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = FleetOutputObserver::new(writer);
//! fleet.run(Millis(0), 600, &mut world, &mut obs);
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::FleetOutputObserver;
pub use row::{CrossingRow, PlatformSnapshotRow};
pub use writer::OutputWriter;
