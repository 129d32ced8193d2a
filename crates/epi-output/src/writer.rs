//! The `OutputWriter` trait implemented by all backend writers.

use epi_sim::{HistoryRow, ResultRow};

use crate::OutputResult;

/// Trait implemented by the CSV and SQLite writers.
///
/// The counter layout is only known once a simulation is built, so the
/// results header (the ordered counter names) is delivered at runtime via
/// [`write_results_header`](Self::write_results_header) before the first row.
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with [`SimOutputObserver::take_error`].
///
/// [`SimOutputObserver::take_error`]: crate::SimOutputObserver::take_error
pub trait OutputWriter {
    /// Record the ordered counter names.  Called once, before any result row.
    fn write_results_header(&mut self, names: &[String]) -> OutputResult<()>;

    /// Write one results row (marker + counter values in header order).
    fn write_result_row(&mut self, row: &ResultRow) -> OutputResult<()>;

    /// Write a batch of per-agent compartment-history records.
    fn write_history(&mut self, rows: &[HistoryRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
