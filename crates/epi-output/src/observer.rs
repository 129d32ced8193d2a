//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use epi_core::Phase;
use epi_sim::{SimObserver, World};

use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that streams the results log to any [`OutputWriter`]
/// backend (CSV or SQLite) and dumps the full compartment history when the
/// run stops.
///
/// Rows are written incrementally: after every phase completion the observer
/// drains whatever the results log has appended since the last drain, so a
/// long run does not buffer its whole output in memory twice.  The header is
/// written lazily before the first row, once the counter layout is known.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After the run, check with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:         W,
    rows_written:   usize,
    header_written: bool,
    last_error:     Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            rows_written:   0,
            header_written: false,
            last_error:     None,
        }
    }

    /// Take the stored write error (if any) after the run.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }

    /// Write every results row appended since the previous drain.
    fn drain_results(&mut self, world: &World) {
        if !self.header_written {
            self.header_written = true;
            let result = self.writer.write_results_header(world.counters.names());
            self.store_err(result);
        }
        for row in &world.results.rows()[self.rows_written..] {
            let result = self.writer.write_result_row(row);
            self.store_err(result);
        }
        self.rows_written = world.results.len();
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_phase_end(&mut self, _phase: Phase, world: &World) {
        self.drain_results(world);
    }

    fn on_tick_end(&mut self, _iteration: u64, world: &World) {
        self.drain_results(world);
    }

    fn on_stop(&mut self, world: &World) {
        self.drain_results(world);
        let result = self.writer.write_history(&world.history_rows());
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
