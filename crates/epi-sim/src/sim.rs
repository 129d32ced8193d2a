//! The `Simulation` struct: phase execution and run control.

use std::time::Duration;

use epi_core::{ClusterId, Phase, RowMarker};
use epi_model::{CatalogResult, CompartmentCatalog};
use tracing::{debug, info, trace};

use crate::error::{SimError, SimResult};
use crate::observer::SimObserver;
use crate::pipeline::Pipeline;
use crate::world::World;
use crate::Cluster;

/// Run-control state.  A simulation starts PAUSED; `play` makes it PLAYING
/// until an observer pauses it or the iteration cap auto-halts it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RunState {
    Paused,
    Playing,
}

/// The simulation engine.
///
/// Owns the [`World`] (clusters, agents, counters, results, RNG) and the
/// three-stage extension [`Pipeline`].  Construction and initialization
/// happen in [`SimulationBuilder`][crate::SimulationBuilder]; a freshly
/// built simulation has its agents created, initial compartments assigned,
/// and initial metrics computed, but has not yet run any phase.
///
/// # Scheduling model
///
/// Single-threaded and cooperative: `play` drives repeated DURING ticks
/// synchronously, sleeping `tick_interval_ms` between laps and polling the
/// observer's pause request at every tick boundary.  No two ticks can ever
/// overlap and there is no mid-tick suspension.  External layers read or
/// mutate configuration only between ticks — enforced structurally, because
/// every mutation entry point needs `&mut Simulation`, which `play` holds
/// for the whole lap.
pub struct Simulation {
    /// All mutable simulation state.  Public for read access and for
    /// between-tick mutation by external layers; the documented operations
    /// below are the supported mutation surface.
    pub world: World,

    pipeline:    Pipeline,
    state:       RunState,
    before_done: bool,
    after_done:  bool,
}

impl Simulation {
    pub(crate) fn new(world: World, pipeline: Pipeline) -> Self {
        Self {
            world,
            pipeline,
            state: RunState::Paused,
            before_done: false,
            after_done: false,
        }
    }

    // ── Read accessors ────────────────────────────────────────────────────

    #[inline]
    pub fn state(&self) -> RunState {
        self.state
    }

    #[inline]
    pub fn iteration(&self) -> u64 {
        self.world.iteration
    }

    pub fn clusters(&self) -> &[Cluster] {
        &self.world.clusters
    }

    #[inline]
    pub fn counters(&self) -> &crate::CounterBoard {
        &self.world.counters
    }

    #[inline]
    pub fn results(&self) -> &crate::ResultsLog {
        &self.world.results
    }

    /// Live per-agent render data (position, radius, compartment color).
    pub fn agent_snapshots(&self) -> impl Iterator<Item = crate::AgentSnapshot> + '_ {
        self.world.agent_snapshots()
    }

    /// The flattened per-agent compartment history.
    pub fn history_rows(&self) -> Vec<crate::HistoryRow> {
        self.world.history_rows()
    }

    // ── Phase execution ───────────────────────────────────────────────────

    fn run_phase(&mut self, phase: Phase) {
        self.world.phase = phase;
        // Take the stage out so extensions can borrow the world mutably.
        let mut stage = std::mem::take(self.pipeline.stage_mut(phase));
        for ext in &mut stage {
            trace!(phase = %phase, step = ext.name(), "running extension");
            ext.apply(phase, &mut self.world);
        }
        *self.pipeline.stage_mut(phase) = stage;
    }

    fn ensure_before<O: SimObserver>(&mut self, observer: &mut O) {
        // BEFORE runs exactly once, and only from a fresh iteration counter.
        if !self.before_done && self.world.iteration == 0 {
            observer.on_phase_start(Phase::Before, 0);
            self.run_phase(Phase::Before);
            self.before_done = true;
            observer.on_phase_end(Phase::Before, &self.world);
        }
    }

    fn tick<O: SimObserver>(&mut self, observer: &mut O) {
        let iteration = self.world.iteration;
        observer.on_phase_start(Phase::During, iteration);
        self.run_phase(Phase::During);
        self.world.iteration += 1;
        observer.on_tick_end(iteration, &self.world);
    }

    // ── Run control ───────────────────────────────────────────────────────

    /// Run exactly one DURING tick (preceded by BEFORE on the very first
    /// call).  Safe to call repeatedly while paused; a no-op while playing.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) {
        if self.state == RunState::Playing {
            return;
        }
        self.ensure_before(observer);
        self.tick(observer);
        if self.world.config.limit_reached(self.world.iteration) {
            self.stop(observer);
        }
    }

    /// Enter PLAYING and run repeated ticks until the observer requests a
    /// pause or the configured iteration cap auto-halts the run.
    ///
    /// The loop re-reads `tick_interval_ms` every lap, so an interval change
    /// made from an observer callback takes effect at the next boundary —
    /// there is no timer to cancel and re-arm, hence nothing to stack.
    pub fn play<O: SimObserver>(&mut self, observer: &mut O) {
        if self.state == RunState::Playing {
            return;
        }
        self.state = RunState::Playing;
        debug!(iteration = self.world.iteration, "playing");

        self.ensure_before(observer);
        loop {
            if self.world.config.limit_reached(self.world.iteration) {
                self.stop(observer);
                return;
            }
            self.tick(observer);
            if self.world.config.limit_reached(self.world.iteration) {
                self.stop(observer);
                return;
            }
            if observer.request_pause(self.world.iteration) {
                self.pause();
                return;
            }
            let ms = self.world.config.tick_interval_ms;
            if ms > 0 {
                std::thread::sleep(Duration::from_millis(ms));
            }
        }
    }

    /// Return to PAUSED at the current tick boundary.  Idempotent.
    pub fn pause(&mut self) {
        if self.state != RunState::Paused {
            debug!(iteration = self.world.iteration, "paused");
        }
        self.state = RunState::Paused;
    }

    /// Halt the run: pause, then run the AFTER phase exactly once.
    ///
    /// Calling `stop` again later (or stepping past completion) never
    /// re-invokes AFTER.
    pub fn stop<O: SimObserver>(&mut self, observer: &mut O) {
        self.pause();
        if self.after_done {
            return;
        }
        self.after_done = true;
        observer.on_phase_start(Phase::After, self.world.iteration);
        self.run_phase(Phase::After);
        observer.on_phase_end(Phase::After, &self.world);
        observer.on_stop(&self.world);
        info!(iteration = self.world.iteration, "run complete");
    }

    // ── Runtime configuration ─────────────────────────────────────────────

    /// Change the between-tick sleep interval.  Takes effect at the next
    /// tick boundary.
    pub fn set_tick_interval(&mut self, ms: u64) {
        self.world.config.tick_interval_ms = ms;
    }

    /// Resize one cluster's population target.
    ///
    /// Growth creates the delta of new agents in that cluster, assigning
    /// initial compartments via the cluster's cumulative-ratio draw, without
    /// disturbing existing agents' histories or accumulated counters.
    /// Shrink removes agents from the tail of the *global* agent sequence —
    /// a documented approximation that may remove another cluster's agents
    /// when populations interleave.
    pub fn set_cluster_target(&mut self, cluster: ClusterId, target: usize) -> SimResult<()> {
        let idx = cluster.index();
        let current = self
            .world
            .clusters
            .get(idx)
            .ok_or(SimError::ClusterNotFound(cluster))?
            .target_count;

        if target > current {
            let marker = if self.before_done {
                RowMarker::Tick(self.world.iteration)
            } else {
                RowMarker::Start
            };
            self.world.spawn(cluster, target - current, marker)?;
        } else if target < current {
            self.world.remove_from_tail(current - target);
        }
        self.world.clusters[idx].target_count = target;
        info!(cluster = %cluster, from = current, to = target, "resized cluster");
        Ok(())
    }

    // ── Catalog editing (cluster-scoped) ──────────────────────────────────
    //
    // Thin pass-throughs to the owning cluster's catalog.  Each fails fast
    // on an unknown cluster or compartment with no partial mutation.

    pub fn set_initial_ratio(&mut self, cluster: ClusterId, name: &str, weight: f64) -> SimResult<()> {
        self.edit(cluster, |cat| cat.set_initial_ratio(name, weight))
    }

    pub fn clear_initial_ratio(&mut self, cluster: ClusterId, name: &str) -> SimResult<()> {
        self.edit(cluster, |cat| cat.clear_initial_ratio(name))
    }

    pub fn set_infectiousness(&mut self, cluster: ClusterId, name: &str, value: f64) -> SimResult<()> {
        self.edit(cluster, |cat| cat.set_infectiousness(name, value))
    }

    pub fn clear_infectiousness(&mut self, cluster: ClusterId, name: &str) -> SimResult<()> {
        self.edit(cluster, |cat| cat.clear_infectiousness(name))
    }

    pub fn set_transition(&mut self, cluster: ClusterId, from: &str, to: &str, p: f64) -> SimResult<()> {
        self.edit(cluster, |cat| cat.set_transition(from, to, p))
    }

    pub fn clear_transition(&mut self, cluster: ClusterId, from: &str, to: &str) -> SimResult<()> {
        self.edit(cluster, |cat| cat.clear_transition(from, to))
    }

    pub fn clear_transitions(&mut self, cluster: ClusterId, from: &str) -> SimResult<()> {
        self.edit(cluster, |cat| cat.clear_transitions(from))
    }

    pub fn clear_catalog(&mut self, cluster: ClusterId) -> SimResult<()> {
        self.edit(cluster, |cat| {
            cat.clear_all();
            Ok(())
        })
    }

    // ── Catalog editing (all clusters) ────────────────────────────────────
    //
    // Convenience forms applying one edit identically to every cluster.
    // Validation runs against every catalog before any catalog is touched,
    // so a name missing from one cluster leaves all clusters unchanged.

    pub fn set_initial_ratio_all(&mut self, name: &str, weight: f64) -> SimResult<()> {
        self.edit_all(|cat| cat.id_of(name).map(|_| ()), |cat| {
            cat.set_initial_ratio(name, weight)
        })
    }

    pub fn clear_initial_ratio_all(&mut self, name: &str) -> SimResult<()> {
        self.set_initial_ratio_all(name, 0.0)
    }

    pub fn set_infectiousness_all(&mut self, name: &str, value: f64) -> SimResult<()> {
        self.edit_all(|cat| cat.id_of(name).map(|_| ()), |cat| {
            cat.set_infectiousness(name, value)
        })
    }

    pub fn clear_infectiousness_all(&mut self, name: &str) -> SimResult<()> {
        self.set_infectiousness_all(name, 0.0)
    }

    pub fn set_transition_all(&mut self, from: &str, to: &str, p: f64) -> SimResult<()> {
        self.edit_all(
            |cat| cat.id_of(from).and(cat.id_of(to)).map(|_| ()),
            |cat| cat.set_transition(from, to, p),
        )
    }

    pub fn clear_transition_all(&mut self, from: &str, to: &str) -> SimResult<()> {
        self.edit_all(
            |cat| cat.id_of(from).and(cat.id_of(to)).map(|_| ()),
            |cat| cat.clear_transition(from, to),
        )
    }

    pub fn clear_transitions_all(&mut self, from: &str) -> SimResult<()> {
        self.edit_all(|cat| cat.id_of(from).map(|_| ()), |cat| {
            cat.clear_transitions(from)
        })
    }

    pub fn clear_catalog_all(&mut self) {
        for cluster in &mut self.world.clusters {
            cluster.catalog.clear_all();
        }
    }

    // ── Editing plumbing ──────────────────────────────────────────────────

    fn edit<F>(&mut self, cluster: ClusterId, op: F) -> SimResult<()>
    where
        F: FnOnce(&mut CompartmentCatalog) -> CatalogResult<()>,
    {
        let idx = cluster.index();
        let cl = self
            .world
            .clusters
            .get_mut(idx)
            .ok_or(SimError::ClusterNotFound(cluster))?;
        op(&mut cl.catalog)?;
        Ok(())
    }

    fn edit_all<V, F>(&mut self, validate: V, op: F) -> SimResult<()>
    where
        V: Fn(&CompartmentCatalog) -> CatalogResult<()>,
        F: Fn(&mut CompartmentCatalog) -> CatalogResult<()>,
    {
        for cluster in &self.world.clusters {
            validate(&cluster.catalog)?;
        }
        for cluster in &mut self.world.clusters {
            op(&mut cluster.catalog)?;
        }
        Ok(())
    }
}
