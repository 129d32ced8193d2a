//! The append-only results log and exportable row types.

use epi_core::{AgentId, RowMarker};

/// One snapshot of all counter values, in board order, tagged with the phase
/// marker that produced it (`S`, the iteration index, or `E`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultRow {
    pub marker: RowMarker,
    pub values: Vec<i64>,
}

/// Ordered sequence of result rows: one per BEFORE run, one per DURING tick,
/// one per AFTER run.
#[derive(Clone, Debug, Default)]
pub struct ResultsLog {
    rows: Vec<ResultRow>,
}

impl ResultsLog {
    pub(crate) fn push(&mut self, marker: RowMarker, values: Vec<i64>) {
        self.rows.push(ResultRow { marker, values });
    }

    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The most recently appended row, if any.
    pub fn last(&self) -> Option<&ResultRow> {
        self.rows.last()
    }
}

// ── History export rows ───────────────────────────────────────────────────────

/// One flattened compartment-history record, ready for export.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryRow {
    pub agent:       AgentId,
    pub marker:      RowMarker,
    /// Compartment name resolved through the owning cluster's catalog.
    pub compartment: String,
}
