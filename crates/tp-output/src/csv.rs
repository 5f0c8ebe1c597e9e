//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `platform_snapshots.csv`
//! - `crossings.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{CrossingRow, OutputError, OutputResult, PlatformSnapshotRow};

/// Writes fleet traces to two CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    crossings: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create the two CSV files in `dir` and write the header rows.
    ///
    /// `dir` must already exist.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        if !dir.is_dir() {
            return Err(OutputError::MissingDir(dir.to_path_buf()));
        }

        let mut snapshots = Writer::from_path(dir.join("platform_snapshots.csv"))?;
        snapshots.write_record([
            "wall_ms", "platform_id", "map_id", "x", "y", "z", "orientation", "passengers",
        ])?;

        let mut crossings = Writer::from_path(dir.join("crossings.csv"))?;
        crossings.write_record([
            "wall_ms", "platform_id", "from_map", "to_map", "relocated", "pruned", "redirected",
            "skipped",
        ])?;

        Ok(Self { snapshots, crossings, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[PlatformSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.wall_ms.to_string(),
                row.platform_id.to_string(),
                row.map_id.to_string(),
                format!("{:.3}", row.x),
                format!("{:.3}", row.y),
                format!("{:.3}", row.z),
                format!("{:.4}", row.orientation),
                row.passengers.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_crossing(&mut self, row: &CrossingRow) -> OutputResult<()> {
        self.crossings.write_record(&[
            row.wall_ms.to_string(),
            row.platform_id.to_string(),
            row.from_map.to_string(),
            row.to_map.to_string(),
            row.relocated.to_string(),
            row.pruned.to_string(),
            row.redirected.to_string(),
            row.skipped.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.crossings.flush()?;
        Ok(())
    }
}
