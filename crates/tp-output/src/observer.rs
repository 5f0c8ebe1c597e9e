//! `FleetOutputObserver<W>` — bridges `FleetObserver` to an `OutputWriter`.

use tp_core::{Millis, PlatformId};
use tp_motion::MapCrossing;
use tp_sim::{Fleet, FleetObserver, RelocationSummary};

use crate::row::{CrossingRow, PlatformSnapshotRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`FleetObserver`] that writes platform snapshots and crossings to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  After `fleet.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct FleetOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> FleetOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any).  `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                log::error!("trace output failed: {e}");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> FleetObserver for FleetOutputObserver<W> {
    fn on_crossing(
        &mut self,
        now:      Millis,
        platform: PlatformId,
        crossing: &MapCrossing,
        summary:  &RelocationSummary,
    ) {
        let row = CrossingRow {
            wall_ms:     now.0,
            platform_id: platform.0,
            from_map:    crossing.from_map.0,
            to_map:      crossing.to_map.0,
            relocated:   summary.relocated,
            pruned:      summary.pruned,
            redirected:  summary.redirected,
            skipped:     summary.skipped,
        };
        let result = self.writer.write_crossing(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, now: Millis, fleet: &Fleet) {
        let rows: Vec<PlatformSnapshotRow> = fleet
            .platforms()
            .map(|p| {
                let at = p.location();
                PlatformSnapshotRow {
                    wall_ms:     now.0,
                    platform_id: p.id().0,
                    map_id:      p.map().0,
                    x:           at.position.x,
                    y:           at.position.y,
                    z:           at.position.z,
                    orientation: at.orientation,
                    passengers:  p.passengers.len() as u32,
                }
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_run_end(&mut self, _now: Millis) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
