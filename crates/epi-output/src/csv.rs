//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `results.csv` — one row per phase execution (`marker` + counter columns)
//! - `history.csv` — the flattened per-agent compartment history

use std::fs::File;
use std::path::Path;

use csv::Writer;

use epi_sim::{HistoryRow, ResultRow};

use crate::writer::OutputWriter;
use crate::OutputResult;

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    results:  Writer<File>,
    history:  Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir`.  The history header is
    /// fixed and written immediately; the results header arrives later, once
    /// the counter layout is known.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let results = Writer::from_path(dir.join("results.csv"))?;

        let mut history = Writer::from_path(dir.join("history.csv"))?;
        history.write_record(["agent_id", "marker", "compartment"])?;

        Ok(Self {
            results,
            history,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_results_header(&mut self, names: &[String]) -> OutputResult<()> {
        let mut record = vec!["marker".to_string()];
        record.extend(names.iter().cloned());
        self.results.write_record(&record)?;
        Ok(())
    }

    fn write_result_row(&mut self, row: &ResultRow) -> OutputResult<()> {
        let mut record = vec![row.marker.to_string()];
        record.extend(row.values.iter().map(|v| v.to_string()));
        self.results.write_record(&record)?;
        Ok(())
    }

    fn write_history(&mut self, rows: &[HistoryRow]) -> OutputResult<()> {
        for row in rows {
            self.history.write_record(&[
                row.agent.0.to_string(),
                row.marker.to_string(),
                row.compartment.clone(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.results.flush()?;
        self.history.flush()?;
        Ok(())
    }
}
