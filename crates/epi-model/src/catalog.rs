//! The per-cluster compartment catalog and its editing operations.

use rustc_hash::FxHashMap;

use epi_core::{CompartmentId, Rgb};

use crate::error::{CatalogError, CatalogResult};
use crate::Compartment;

/// One cluster's complete disease model.
///
/// # Value semantics
///
/// `Clone` produces a fully independent catalog.  The simulation clones the
/// configured catalog into each cluster at construction, so editing one
/// cluster's model never leaks into another's.
///
/// # Well-known roles
///
/// Three compartments have engine-level meaning and are resolved by name at
/// construction:
///
/// - **susceptible** — the only compartment transmission can move an agent
///   *out of*;
/// - **exposed** — the compartment transmission moves a susceptible agent
///   *into*;
/// - **dead** — the terminal sentinel: agents here are excluded from motion,
///   collision, and transition evaluation for the rest of the run.
///
/// # Validation policy
///
/// Every setter resolves all names *before* mutating, so a failed edit leaves
/// the catalog exactly as it was.  Probabilities and infectiousness values
/// are stored as given — the core does not clamp or range-check them (an
/// editing layer may clamp to [0, 1] before calling; the engine only
/// saturates at draw time).
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompartmentCatalog {
    compartments: Vec<Compartment>,
    index:        FxHashMap<String, CompartmentId>,
    susceptible:  CompartmentId,
    exposed:      CompartmentId,
    dead:         CompartmentId,
}

impl CompartmentCatalog {
    /// Build a catalog from an ordered compartment list and the three
    /// well-known role names.
    ///
    /// Fails on duplicate names, missing roles, or a dead compartment that
    /// carries outgoing transitions (DEAD is terminal by definition).
    pub fn new(
        compartments: Vec<Compartment>,
        susceptible:  &str,
        exposed:      &str,
        dead:         &str,
    ) -> CatalogResult<Self> {
        let mut index = FxHashMap::default();
        for (i, c) in compartments.iter().enumerate() {
            let id = CompartmentId(i as u16);
            if index.insert(c.name.clone(), id).is_some() {
                return Err(CatalogError::DuplicateCompartment(c.name.clone()));
            }
        }

        let role = |kind: &'static str, name: &str| {
            index
                .get(name)
                .copied()
                .ok_or_else(|| CatalogError::MissingRole(kind, name.to_string()))
        };
        let susceptible = role("susceptible", susceptible)?;
        let exposed     = role("exposed", exposed)?;
        let dead        = role("dead", dead)?;

        if !compartments[dead.index()].transitions.is_empty() {
            return Err(CatalogError::DeadNotTerminal(compartments[dead.index()].name.clone()));
        }

        Ok(Self { compartments, index, susceptible, exposed, dead })
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    /// Resolve a compartment name, failing fast when it is unknown.
    pub fn id_of(&self, name: &str) -> CatalogResult<CompartmentId> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| CatalogError::UnknownCompartment(name.to_string()))
    }

    #[inline]
    pub fn get(&self, id: CompartmentId) -> &Compartment {
        &self.compartments[id.index()]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.compartments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.compartments.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (CompartmentId, &Compartment)> {
        self.compartments
            .iter()
            .enumerate()
            .map(|(i, c)| (CompartmentId(i as u16), c))
    }

    // ── Well-known roles ──────────────────────────────────────────────────

    #[inline]
    pub fn susceptible(&self) -> CompartmentId {
        self.susceptible
    }

    #[inline]
    pub fn exposed(&self) -> CompartmentId {
        self.exposed
    }

    #[inline]
    pub fn dead(&self) -> CompartmentId {
        self.dead
    }

    #[inline]
    pub fn is_dead(&self, id: CompartmentId) -> bool {
        id == self.dead
    }

    #[inline]
    pub fn color(&self, id: CompartmentId) -> Rgb {
        self.compartments[id.index()].color
    }

    // ── Editing operations ────────────────────────────────────────────────
    //
    // Each resolves every named compartment before touching anything.

    pub fn set_initial_ratio(&mut self, name: &str, weight: f64) -> CatalogResult<()> {
        let id = self.id_of(name)?;
        self.compartments[id.index()].initial_ratio = weight;
        Ok(())
    }

    pub fn clear_initial_ratio(&mut self, name: &str) -> CatalogResult<()> {
        self.set_initial_ratio(name, 0.0)
    }

    pub fn set_infectiousness(&mut self, name: &str, value: f64) -> CatalogResult<()> {
        let id = self.id_of(name)?;
        self.compartments[id.index()].infectiousness = value;
        Ok(())
    }

    pub fn clear_infectiousness(&mut self, name: &str) -> CatalogResult<()> {
        self.set_infectiousness(name, 0.0)
    }

    pub fn set_transition(&mut self, from: &str, to: &str, p: f64) -> CatalogResult<()> {
        let from = self.id_of(from)?;
        let to   = self.id_of(to)?;
        self.compartments[from.index()].set_transition(to, p);
        Ok(())
    }

    pub fn clear_transition(&mut self, from: &str, to: &str) -> CatalogResult<()> {
        let from = self.id_of(from)?;
        let to   = self.id_of(to)?;
        self.compartments[from.index()].clear_transition(to);
        Ok(())
    }

    /// Drop every outgoing edge of `from`.
    pub fn clear_transitions(&mut self, from: &str) -> CatalogResult<()> {
        let from = self.id_of(from)?;
        self.compartments[from.index()].transitions.clear();
        Ok(())
    }

    /// Reset ratios, infectiousness, and transitions to the neutral baseline.
    /// Compartment names, colors, and `infectious` flags are preserved.
    pub fn clear_all(&mut self) {
        for c in &mut self.compartments {
            c.initial_ratio = 0.0;
            c.infectiousness = 0.0;
            c.transitions.clear();
        }
    }

    // ── Initial-compartment distribution ──────────────────────────────────

    /// Cumulative shares of the initial-ratio distribution, one entry per
    /// compartment in catalog order.  The last entry is exactly 1.0 up to
    /// floating rounding.
    ///
    /// Fails when the total weight is zero — a configuration with no
    /// assignable initial compartment is rejected rather than propagating a
    /// division by zero.
    pub fn initial_cumulative(&self) -> CatalogResult<Vec<f64>> {
        let total: f64 = self.compartments.iter().map(|c| c.initial_ratio).sum();
        if total <= 0.0 {
            return Err(CatalogError::ZeroInitialWeight);
        }
        let mut acc = 0.0;
        Ok(self
            .compartments
            .iter()
            .map(|c| {
                acc += c.initial_ratio / total;
                acc
            })
            .collect())
    }

    /// Map one uniform draw `u ∈ [0, 1)` to a compartment via the cumulative
    /// distribution produced by [`initial_cumulative`](Self::initial_cumulative).
    pub fn pick_initial(cumulative: &[f64], u: f64) -> CompartmentId {
        for (i, &share) in cumulative.iter().enumerate() {
            if u < share {
                return CompartmentId(i as u16);
            }
        }
        // u == 1.0 - epsilon rounding: fall back to the last compartment.
        CompartmentId(cumulative.len().saturating_sub(1) as u16)
    }
}
