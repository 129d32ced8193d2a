//! `World` — all mutable simulation state.
//!
//! The `World` is what pipeline extensions receive each phase: clusters,
//! the flattened cross-cluster agent sequence, the counter board, the results
//! log, and the simulation's explicit RNG.  Run-control state (playing /
//! paused, phase-completion flags) lives in [`Simulation`][crate::Simulation],
//! not here, so extensions can mutate the world but never the schedule.

use epi_agent::{random_velocity, Agent};
use epi_core::{AgentId, ClusterId, Phase, Rgb, RowMarker, SimConfig, SimRng, Vec2};
use epi_model::CompartmentCatalog;

use crate::counters::CounterBoard;
use crate::error::{SimError, SimResult};
use crate::results::{HistoryRow, ResultsLog};
use crate::Cluster;

/// A read-only per-agent record for rendering layers: where the agent is,
/// how big it is, and what color its current compartment carries.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AgentSnapshot {
    pub id:     AgentId,
    pub pos:    Vec2,
    pub radius: f64,
    pub color:  Rgb,
}

/// All mutable simulation state, shared by every pipeline extension.
///
/// External layers may read this at any time and mutate it only between
/// ticks; the synchronous tick loop makes mid-tick external mutation
/// impossible by construction (the `&mut` borrow is held for the whole
/// tick).
pub struct World {
    pub config:   SimConfig,
    pub clusters: Vec<Cluster>,

    /// The flattened global agent sequence, ascending by id.  Collision
    /// detection runs across this whole sequence regardless of cluster.
    pub agents: Vec<Agent>,

    /// Completed DURING iterations.
    pub iteration: u64,

    /// The phase currently (or most recently) executing.
    pub phase: Phase,

    pub rng:      SimRng,
    pub counters: CounterBoard,
    pub results:  ResultsLog,

    /// Next agent id to hand out.  Monotonic; never reset by shrink.
    pub(crate) next_agent_id: u32,
}

impl World {
    /// The history/results marker for the current point of the run.
    pub fn current_marker(&self) -> RowMarker {
        match self.phase {
            Phase::Before => RowMarker::Start,
            Phase::During => RowMarker::Tick(self.iteration),
            Phase::After  => RowMarker::End,
        }
    }

    /// Borrow the catalog owning `agent`.
    #[inline]
    pub fn catalog_of(&self, agent: &Agent) -> &CompartmentCatalog {
        &self.clusters[agent.cluster.index()].catalog
    }

    // ── Agent creation ────────────────────────────────────────────────────

    /// Create `count` agents inside `cluster`, assigning initial compartments
    /// via the cluster's cumulative initial-ratio distribution.
    ///
    /// Used both by initialization (every cluster, marker `S`) and by a
    /// population grow (one cluster, marker = current iteration).  Existing
    /// agents and accumulated counters are untouched.
    pub(crate) fn spawn(
        &mut self,
        cluster: ClusterId,
        count:   usize,
        marker:  RowMarker,
    ) -> SimResult<()> {
        let idx = cluster.index();
        let Some(cl) = self.clusters.get(idx) else {
            return Err(SimError::ClusterNotFound(cluster));
        };
        let cumulative = cl.catalog.initial_cumulative()?;
        let bounds = cl.bounds;
        let radius = self.config.agent_radius;

        for _ in 0..count {
            let id = AgentId(self.next_agent_id);
            self.next_agent_id += 1;

            let pos = Vec2::new(
                self.rng.gen_range(bounds.min.x + radius..=bounds.max.x - radius),
                self.rng.gen_range(bounds.min.y + radius..=bounds.max.y - radius),
            );
            let vel = random_velocity(&mut self.rng, self.config.agent_speed);
            let wander = self
                .rng
                .sample_normal(self.config.wander_mean, self.config.wander_stdev);
            let compartment =
                CompartmentCatalog::pick_initial(&cumulative, self.rng.uniform());

            self.agents.push(Agent::new(
                id, cluster, pos, vel, radius, wander, marker, compartment,
            ));
        }
        Ok(())
    }

    /// Remove `count` agents from the tail of the global sequence.
    ///
    /// This is a documented approximation: when clusters' agents interleave,
    /// the removed tail may belong to a different cluster than the one whose
    /// target shrank.
    pub(crate) fn remove_from_tail(&mut self, count: usize) {
        let keep = self.agents.len().saturating_sub(count);
        self.agents.truncate(keep);
    }

    // ── Read surfaces for rendering / charting / export ───────────────────

    /// Live per-agent render data.
    pub fn agent_snapshots(&self) -> impl Iterator<Item = AgentSnapshot> + '_ {
        self.agents.iter().map(|a| AgentSnapshot {
            id:     a.id,
            pos:    a.pos,
            radius: a.radius,
            color:  self.catalog_of(a).color(a.current_compartment()),
        })
    }

    /// The full per-agent compartment history as a flat record stream, agent
    /// order then history order.
    pub fn history_rows(&self) -> Vec<HistoryRow> {
        let mut rows = Vec::new();
        for agent in &self.agents {
            let catalog = self.catalog_of(agent);
            for entry in agent.history() {
                rows.push(HistoryRow {
                    agent:       agent.id,
                    marker:      entry.marker,
                    compartment: catalog.get(entry.compartment).name.clone(),
                });
            }
        }
        rows
    }
}
