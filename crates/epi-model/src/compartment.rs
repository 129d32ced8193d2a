//! A single disease compartment and its outgoing transition edges.

use epi_core::{CompartmentId, Rgb};

/// One named disease/behavioral state an agent can occupy.
///
/// # Transition edges
///
/// `transitions` is an insertion-ordered list, not a map: the order edges
/// were defined in is the order they are evaluated each tick, and evaluation
/// commits to the first edge whose independent uniform draw succeeds.  Edge
/// probabilities are NOT required to sum to 1 — unassigned mass means
/// "remain in this compartment this tick".
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Compartment {
    pub name: String,

    /// Whether this compartment counts toward the aggregate `infections`
    /// counter.  A static classification, distinct from `infectiousness`.
    pub infectious: bool,

    /// Per-collision transmission probability when this agent is the
    /// infectious member of a colliding pair.  Stored as given; the engine
    /// only clamps at draw time.
    pub infectiousness: f64,

    /// Nonnegative weight in the cluster's initial-compartment distribution.
    pub initial_ratio: f64,

    /// Display color read by rendering layers.
    pub color: Rgb,

    /// Outgoing edges `(destination, probability)` in definition order.
    pub transitions: Vec<(CompartmentId, f64)>,
}

impl Compartment {
    pub fn new(name: impl Into<String>, color: Rgb) -> Self {
        Self {
            name:           name.into(),
            infectious:     false,
            infectiousness: 0.0,
            initial_ratio:  0.0,
            color,
            transitions:    Vec::new(),
        }
    }

    // ── Builder-style setup helpers (used by defaults and tests) ──────────

    pub fn infectious(mut self, infectiousness: f64) -> Self {
        self.infectious = true;
        self.infectiousness = infectiousness;
        self
    }

    pub fn ratio(mut self, weight: f64) -> Self {
        self.initial_ratio = weight;
        self
    }

    // ── Edge access ───────────────────────────────────────────────────────

    /// Update the edge to `dest` in place, or append a new one.  Updating
    /// preserves the edge's original position in the evaluation order.
    pub fn set_transition(&mut self, dest: CompartmentId, p: f64) {
        match self.transitions.iter_mut().find(|(d, _)| *d == dest) {
            Some(edge) => edge.1 = p,
            None => self.transitions.push((dest, p)),
        }
    }

    /// Remove the edge to `dest` if present.
    pub fn clear_transition(&mut self, dest: CompartmentId) {
        self.transitions.retain(|(d, _)| *d != dest);
    }

    pub fn transition_to(&self, dest: CompartmentId) -> Option<f64> {
        self.transitions.iter().find(|(d, _)| *d == dest).map(|(_, p)| *p)
    }
}
