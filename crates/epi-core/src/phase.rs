//! Run phases and results-row markers.
//!
//! A run has exactly three phases: BEFORE executes once at the start of the
//! first tick, DURING repeats once per iteration, AFTER executes once when the
//! run halts.  Each phase execution appends one row to the results log; the
//! row's marker records which phase produced it.

use std::fmt;

/// One of the three pipeline stages of a run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Pre-run snapshot, executed exactly once before the first iteration.
    Before,
    /// One repeating simulation step.
    During,
    /// Post-run snapshot, executed exactly once when the run stops.
    After,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Before => write!(f, "BEFORE"),
            Phase::During => write!(f, "DURING"),
            Phase::After  => write!(f, "AFTER"),
        }
    }
}

// ── RowMarker ─────────────────────────────────────────────────────────────────

/// The first column of a results row, and the iteration marker stored in each
/// agent history entry.
///
/// Renders as `S` for the BEFORE snapshot, the bare iteration index for a
/// DURING tick, and `E` for the AFTER snapshot.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RowMarker {
    Start,
    Tick(u64),
    End,
}

impl fmt::Display for RowMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowMarker::Start   => write!(f, "S"),
            RowMarker::Tick(n) => write!(f, "{n}"),
            RowMarker::End     => write!(f, "E"),
        }
    }
}
