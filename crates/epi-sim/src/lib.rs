//! Simulation engine: clusters, the tick pipeline, run control, counters,
//! and the results log.
//!
//! | Module     | Contents                                              |
//! |------------|-------------------------------------------------------|
//! | `cluster`  | [`Cluster`], [`ClusterSpec`]                          |
//! | `world`    | [`World`], [`AgentSnapshot`]                          |
//! | `pipeline` | [`SimExtension`], [`Pipeline`]                        |
//! | `steps`    | engine-default transition/motion/metrics/record steps |
//! | `counters` | [`CounterBoard`]                                      |
//! | `results`  | [`ResultsLog`], [`ResultRow`], [`HistoryRow`]         |
//! | `sim`      | [`Simulation`], [`RunState`]                          |
//! | `builder`  | [`SimulationBuilder`]                                 |
//! | `observer` | [`SimObserver`], [`NoopObserver`]                     |
//!
//! # Tick anatomy
//!
//! A run is BEFORE, then zero or more DURING ticks, then AFTER.  Every phase
//! executes its ordered extension list against the shared mutable [`World`];
//! the engine-default DURING list is transition → motion → metrics → record.
//! BEFORE records the initial state; AFTER recomputes and records the final
//! state exactly once per run.
//!
//! # Determinism
//!
//! All randomness flows through the single `SimRng` owned by the world.
//! With a fixed seed the draw sequence, and therefore the entire run, is
//! reproducible — including under the `parallel` feature, which only
//! parallelizes read-only collision detection.

mod builder;
mod cluster;
mod counters;
mod error;
mod observer;
mod pipeline;
mod results;
mod sim;
mod steps;
mod world;


pub use builder::SimulationBuilder;
pub use cluster::{Cluster, ClusterSpec};
pub use counters::{
    CounterBoard, ALIVE, COMPARTMENTS_START, INFECTIONS, TOTAL_INITIAL_INFECTIONS,
    TOTAL_SIMULATION_INFECTIONS,
};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use pipeline::{Pipeline, SimExtension};
pub use results::{HistoryRow, ResultRow, ResultsLog};
pub use sim::{RunState, Simulation};
pub use steps::{MetricsStep, MotionStep, RecordStep, TransitionStep};
pub use world::{AgentSnapshot, World};
