//! The ordered counter board.
//!
//! # Counter layout
//!
//! Four compulsory counters come first, then one counter per compartment
//! name (the union across all cluster catalogs, first-seen order):
//!
//! | Slot | Name                          | Reset policy                  |
//! |------|-------------------------------|-------------------------------|
//! | 0    | `alive`                       | never (accumulates per scan)  |
//! | 1    | `infections`                  | never (accumulates per scan)  |
//! | 2    | `total_initial_infections`    | set once at initialization    |
//! | 3    | `total_simulation_infections` | transmission events only      |
//! | 4..  | per-compartment census        | zeroed at every recomputation |
//!
//! Per-compartment counters are derived strictly from the current agent set
//! on every pass — no incremental drift is possible.  The compulsory
//! counters deliberately accumulate across passes, matching the reference
//! model's cumulative semantics.

use rustc_hash::FxHashMap;

use epi_agent::Agent;
use epi_core::CompartmentId;

use crate::Cluster;

/// Index of the `alive` counter.
pub const ALIVE: usize = 0;
/// Index of the aggregate `infections` counter.
pub const INFECTIONS: usize = 1;
/// Index of the `total_initial_infections` counter.
pub const TOTAL_INITIAL_INFECTIONS: usize = 2;
/// Index of the `total_simulation_infections` counter.
pub const TOTAL_SIMULATION_INFECTIONS: usize = 3;
/// First per-compartment slot.
pub const COMPARTMENTS_START: usize = 4;

/// Ordered counter names and values, plus the per-cluster mapping from
/// `CompartmentId` to counter slot.
#[derive(Clone, Debug)]
pub struct CounterBoard {
    names:  Vec<String>,
    values: Vec<i64>,

    /// Per cluster: `CompartmentId` index → counter slot.  Catalogs never
    /// change shape mid-run, so this mapping is built once.
    slots: Vec<Vec<usize>>,
    /// Per cluster: `CompartmentId` index → infectious classification.
    infectious: Vec<Vec<bool>>,
    /// Per cluster: the DEAD sentinel.
    dead: Vec<CompartmentId>,
}

impl CounterBoard {
    /// Build the board from the cluster catalogs.
    pub fn new(clusters: &[Cluster]) -> Self {
        let mut names = vec![
            "alive".to_string(),
            "infections".to_string(),
            "total_initial_infections".to_string(),
            "total_simulation_infections".to_string(),
        ];
        let mut by_name: FxHashMap<String, usize> = FxHashMap::default();

        let mut slots = Vec::with_capacity(clusters.len());
        let mut infectious = Vec::with_capacity(clusters.len());
        let mut dead = Vec::with_capacity(clusters.len());

        for cluster in clusters {
            let mut cluster_slots = Vec::with_capacity(cluster.catalog.len());
            let mut cluster_flags = Vec::with_capacity(cluster.catalog.len());
            for (_, c) in cluster.catalog.iter() {
                let slot = *by_name.entry(c.name.clone()).or_insert_with(|| {
                    names.push(c.name.clone());
                    names.len() - 1
                });
                cluster_slots.push(slot);
                cluster_flags.push(c.infectious);
            }
            slots.push(cluster_slots);
            infectious.push(cluster_flags);
            dead.push(cluster.catalog.dead());
        }

        let values = vec![0; names.len()];
        Self { names, values, slots, infectious, dead }
    }

    // ── Recomputation ─────────────────────────────────────────────────────

    /// One full scan over all agents.
    ///
    /// Zeroes the per-compartment counters, then for each agent increments
    /// its current-compartment counter, `infections` when that compartment
    /// is classified infectious, and `alive` when it is not DEAD.
    pub fn recompute(&mut self, agents: &[Agent]) {
        for v in &mut self.values[COMPARTMENTS_START..] {
            *v = 0;
        }
        for agent in agents {
            let cluster = agent.cluster.index();
            let comp = agent.current_compartment();
            self.values[self.slots[cluster][comp.index()]] += 1;
            if self.infectious[cluster][comp.index()] {
                self.values[INFECTIONS] += 1;
            }
            if comp != self.dead[cluster] {
                self.values[ALIVE] += 1;
            }
        }
    }

    // ── Mutation hooks for the engine ─────────────────────────────────────

    /// Set `total_initial_infections`.  Called exactly once, at
    /// initialization; never recomputed afterwards.
    pub(crate) fn set_initial_infections(&mut self, count: i64) {
        self.values[TOTAL_INITIAL_INFECTIONS] = count;
    }

    /// Count one successful transmission event.
    pub(crate) fn add_simulation_infection(&mut self) {
        self.values[TOTAL_SIMULATION_INFECTIONS] += 1;
    }

    // ── Read surface ──────────────────────────────────────────────────────

    /// Ordered counter names — the on-demand header row.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Ordered counter values at this moment.
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// Look one counter up by name.
    pub fn get(&self, name: &str) -> Option<i64> {
        self.names.iter().position(|n| n == name).map(|i| self.values[i])
    }

    #[inline]
    pub fn alive(&self) -> i64 {
        self.values[ALIVE]
    }

    #[inline]
    pub fn infections(&self) -> i64 {
        self.values[INFECTIONS]
    }

    #[inline]
    pub fn total_initial_infections(&self) -> i64 {
        self.values[TOTAL_INITIAL_INFECTIONS]
    }

    #[inline]
    pub fn total_simulation_infections(&self) -> i64 {
        self.values[TOTAL_SIMULATION_INFECTIONS]
    }
}
