//! The `OutputWriter` trait implemented by backend writers.

use crate::{CrossingRow, OutputResult, PlatformSnapshotRow};

/// Sink for fleet trace rows.
///
/// Errors are stored by the observer and retrieved with
/// [`FleetOutputObserver::take_error`][crate::FleetOutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of platform snapshots.
    fn write_snapshots(&mut self, rows: &[PlatformSnapshotRow]) -> OutputResult<()>;

    /// Write one crossing row.
    fn write_crossing(&mut self, row: &CrossingRow) -> OutputResult<()>;

    /// Flush all underlying file handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
