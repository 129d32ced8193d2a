//! Clusters and the builder-facing cluster specification.

use epi_core::{Phase, Rect};
use epi_model::CompartmentCatalog;

use crate::pipeline::SimExtension;

/// A bounded spatial region with its own agent population and disease model.
///
/// The catalog is an owned value moved in from the [`ClusterSpec`] at
/// construction, so per-cluster edits never alias another cluster's model.
#[derive(Clone, Debug)]
pub struct Cluster {
    pub name:         String,
    pub bounds:       Rect,
    pub catalog:      CompartmentCatalog,
    /// Desired population.  Changed at runtime via
    /// [`Simulation::set_cluster_target`][crate::Simulation::set_cluster_target].
    pub target_count: usize,
}

// ── ClusterSpec ───────────────────────────────────────────────────────────────

/// Builder input describing one cluster.
///
/// A spec without a catalog receives a clone of the standard default model.
/// Extensions listed here are appended to the engine-default pipeline after
/// any simulation-level extensions, in cluster order.
pub struct ClusterSpec {
    pub(crate) name:         String,
    pub(crate) bounds:       Rect,
    pub(crate) catalog:      Option<CompartmentCatalog>,
    pub(crate) target_count: usize,
    pub(crate) extensions:   Vec<(Phase, Box<dyn SimExtension>)>,
}

impl ClusterSpec {
    pub fn new(name: impl Into<String>, bounds: Rect, target_count: usize) -> Self {
        Self {
            name: name.into(),
            bounds,
            catalog: None,
            target_count,
            extensions: Vec::new(),
        }
    }

    /// Use `catalog` instead of the default model.
    pub fn catalog(mut self, catalog: CompartmentCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Append a custom extension to one phase of the pipeline.
    pub fn extension(mut self, phase: Phase, ext: Box<dyn SimExtension>) -> Self {
        self.extensions.push((phase, ext));
        self
    }
}
