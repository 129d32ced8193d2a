//! A point-mass agent with an append-only compartment history.

use epi_core::{AgentId, ClusterId, CompartmentId, RowMarker, Vec2};

/// One entry in an agent's compartment history: which compartment the agent
/// entered, and at which point of the run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistoryEntry {
    pub marker:      RowMarker,
    pub compartment: CompartmentId,
}

/// A spatially-moving agent.
///
/// The `cluster` field is a weak back-reference (an index, not ownership)
/// used to look up the owning cluster's bounds and catalog.  The history is
/// the full audit trail of the agent's disease course:
///
/// - it is never empty after construction;
/// - the last entry is always the current compartment;
/// - entries are appended, never rewritten or removed.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    /// Monotonic, never reused — survives population shrink/regrow cycles.
    pub id: AgentId,

    /// Owning cluster (geometry and catalog lookup only).
    pub cluster: ClusterId,

    pub pos:    Vec2,
    pub vel:    Vec2,
    pub radius: f64,

    /// Per-tick probability of picking a fresh random heading.  Drawn once
    /// at creation from the configured Normal and clamped to [0, 1].
    pub wander_probability: f64,

    history: Vec<HistoryEntry>,
}

impl Agent {
    /// Construct an agent with its first history entry.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id:                 AgentId,
        cluster:            ClusterId,
        pos:                Vec2,
        vel:                Vec2,
        radius:             f64,
        wander_probability: f64,
        marker:             RowMarker,
        compartment:        CompartmentId,
    ) -> Self {
        Self {
            id,
            cluster,
            pos,
            vel,
            radius,
            wander_probability: wander_probability.clamp(0.0, 1.0),
            history: vec![HistoryEntry { marker, compartment }],
        }
    }

    /// The agent's current compartment — always the last history entry.
    #[inline]
    pub fn current_compartment(&self) -> CompartmentId {
        // History is non-empty by construction.
        self.history[self.history.len() - 1].compartment
    }

    /// Append a compartment change.  This is the only way the history grows;
    /// the engine calls it from transition evaluation and transmission.
    #[inline]
    pub fn record(&mut self, marker: RowMarker, compartment: CompartmentId) {
        self.history.push(HistoryEntry { marker, compartment });
    }

    /// Read-only view of the full audit trail.
    #[inline]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }
}
