//! Fluent construction of a fully-initialized [`Simulation`].

use epi_core::{Phase, RowMarker, SimConfig, SimRng};
use epi_model::default_catalog;
use tracing::info;

use crate::cluster::{Cluster, ClusterSpec};
use crate::counters::CounterBoard;
use crate::error::{SimError, SimResult};
use crate::pipeline::{Pipeline, SimExtension};
use crate::results::ResultsLog;
use crate::sim::Simulation;
use crate::world::World;

/// Builds a [`Simulation`] from a config and one or more cluster specs.
///
/// `build` performs the whole initialization sequence: clusters are realized
/// (cloning the default disease model into any spec without its own), each
/// cluster's population is created with randomized placement and initial
/// compartments, the counter board is computed once, and the extension
/// pipeline is assembled.  The built simulation is PAUSED at iteration 0
/// with no phase yet run.
///
/// ```rust,ignore
/// let config = SimConfig { seed: Some(42), ..SimConfig::default() };
/// let sim = SimulationBuilder::new(config)
///     .cluster(ClusterSpec::new("town", Rect::new(0.0, 0.0, 320.0, 320.0), 200))
///     .build()?;
/// ```
pub struct SimulationBuilder {
    config:     SimConfig,
    specs:      Vec<ClusterSpec>,
    extensions: Vec<(Phase, Box<dyn SimExtension>)>,
}

impl SimulationBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            specs: Vec::new(),
            extensions: Vec::new(),
        }
    }

    /// Add a cluster.  At least one is required.
    pub fn cluster(mut self, spec: ClusterSpec) -> Self {
        self.specs.push(spec);
        self
    }

    /// Append a simulation-level extension to one phase of the pipeline,
    /// after the engine defaults.
    pub fn extension(mut self, phase: Phase, ext: Box<dyn SimExtension>) -> Self {
        self.extensions.push((phase, ext));
        self
    }

    /// Realize the simulation.
    ///
    /// Fails when no cluster was supplied or when any cluster's catalog has a
    /// zero initial-ratio total (agents would be unassignable).
    pub fn build(self) -> SimResult<Simulation> {
        if self.specs.is_empty() {
            return Err(SimError::Config("at least one cluster is required".into()));
        }

        let rng = match self.config.seed {
            Some(seed) => SimRng::seeded(seed),
            None => SimRng::from_entropy(),
        };

        let mut pipeline = Pipeline::engine_defaults();
        for (phase, ext) in self.extensions {
            pipeline.push(phase, ext);
        }

        let mut clusters = Vec::with_capacity(self.specs.len());
        let mut targets = Vec::with_capacity(self.specs.len());
        for spec in self.specs {
            let catalog = match spec.catalog {
                Some(catalog) => catalog,
                None => default_catalog()?,
            };
            // Surface a bad initial distribution now rather than mid-spawn.
            catalog.initial_cumulative()?;
            targets.push(spec.target_count);
            for (phase, ext) in spec.extensions {
                pipeline.push(phase, ext);
            }
            clusters.push(Cluster {
                name: spec.name,
                bounds: spec.bounds,
                catalog,
                target_count: spec.target_count,
            });
        }

        let counters = CounterBoard::new(&clusters);
        let mut world = World {
            config: self.config,
            clusters,
            agents: Vec::new(),
            iteration: 0,
            phase: Phase::Before,
            rng,
            counters,
            results: ResultsLog::default(),
            next_agent_id: 0,
        };

        for (idx, target) in targets.iter().enumerate() {
            let id = epi_core::ClusterId(idx as u16);
            world.spawn(id, *target, RowMarker::Start)?;
        }

        // Agents born into an infectious compartment are the initial seed.
        let initial = world
            .agents
            .iter()
            .filter(|a| {
                world.clusters[a.cluster.index()]
                    .catalog
                    .get(a.current_compartment())
                    .infectious
            })
            .count() as i64;
        world.counters.set_initial_infections(initial);
        world.counters.recompute(&world.agents);

        info!(
            clusters = world.clusters.len(),
            agents = world.agents.len(),
            initial_infections = initial,
            "simulation initialized"
        );
        Ok(Simulation::new(world, pipeline))
    }
}
