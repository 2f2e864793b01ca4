//! The `OutputWriter` trait implemented by backend writers.

use crate::{OutputResult, TickSummaryRow, TrainSnapshotRow};

/// A sink for per-tick run output.
///
/// Errors are stored by [`SimOutputObserver`](crate::SimOutputObserver) and
/// retrieved with its `take_error`.
pub trait OutputWriter {
    /// Write a batch of train snapshots.
    fn write_snapshots(&mut self, rows: &[TrainSnapshotRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
