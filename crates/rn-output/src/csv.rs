//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `train_snapshots.csv`
//! - `tick_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;
use tracing::info;

use crate::writer::OutputWriter;
use crate::{OutputResult, TickSummaryRow, TrainSnapshotRow};

/// Writes run output to two CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open (or truncate) the two CSV files in it,
    /// and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut snapshots = Writer::from_path(dir.join("train_snapshots.csv"))?;
        snapshots.write_record(["tick", "train_id", "station", "line", "direction", "delayed"])?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(["tick", "moved_trains", "delayed_trains"])?;

        info!(dir = %dir.display(), "writing CSV output");
        Ok(Self { snapshots, summaries, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[TrainSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record([
                row.tick.to_string().as_str(),
                row.train_id.to_string().as_str(),
                row.station.as_str(),
                row.line.as_str(),
                row.direction.as_str(),
                if row.delayed { "1" } else { "0" },
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.moved_trains.to_string(),
            row.delayed_trains.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
