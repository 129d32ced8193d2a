//! Engine-default pipeline steps.
//!
//! Four built-in extensions implement the DURING tick in order: compartment
//! transitions, motion with collision-triggered transmission, metrics
//! recomputation, and results recording.  The record and metrics steps are
//! reused by the BEFORE/AFTER phases.

use epi_agent::{random_velocity, Agent};
use epi_core::{Phase, Vec2};

use crate::pipeline::SimExtension;
use crate::world::World;
use crate::Cluster;

// ── TransitionStep ────────────────────────────────────────────────────────────

/// Per-agent compartment transition evaluation, first match wins.
///
/// For each agent, the current compartment's outgoing edges are walked in
/// definition order; each edge gets one independent uniform draw, and the
/// first success appends the destination and ends evaluation for this agent.
/// At most one transition per agent per tick.  Edge probabilities need not
/// sum to 1 — leftover mass means "stay put".
pub struct TransitionStep;

impl SimExtension for TransitionStep {
    fn name(&self) -> &'static str {
        "transition"
    }

    fn apply(&mut self, _phase: Phase, world: &mut World) {
        let marker = world.current_marker();
        let World { clusters, agents, rng, .. } = world;

        for agent in agents.iter_mut() {
            let catalog = &clusters[agent.cluster.index()].catalog;
            let current = agent.current_compartment();
            if catalog.is_dead(current) {
                continue;
            }
            for &(dest, p) in &catalog.get(current).transitions {
                if rng.uniform() < p {
                    agent.record(marker, dest);
                    break;
                }
            }
        }
    }
}

// ── MotionStep ────────────────────────────────────────────────────────────────

/// Spatial motion, boundary reflection, pairwise collision, elastic swap,
/// and collision-triggered transmission.
///
/// Agents are processed in ascending id order; within one mover's turn,
/// collision partners are handled in ascending id order too.  With a fixed
/// seed this makes the consumption order of random draws deterministic, so
/// the optional parallel detection pass (`parallel` feature) cannot change
/// outcomes.
pub struct MotionStep;

impl SimExtension for MotionStep {
    fn name(&self) -> &'static str {
        "motion"
    }

    fn apply(&mut self, _phase: Phase, world: &mut World) {
        let marker = world.current_marker();
        let World { config, clusters, agents, rng, counters, .. } = world;

        let n = agents.len();
        for i in 0..n {
            let cluster_idx = agents[i].cluster.index();
            if clusters[cluster_idx]
                .catalog
                .is_dead(agents[i].current_compartment())
            {
                // DEAD agents neither move nor participate in collisions.
                continue;
            }

            // Movement randomness: one Bernoulli per agent per tick.
            if rng.trial(agents[i].wander_probability) {
                agents[i].vel = random_velocity(rng, config.agent_speed);
            }

            // Billiard reflection against the owning cluster's box, using the
            // projected next position so agents turn before crossing.  The x
            // and y components reflect independently.
            let bounds = clusters[cluster_idx].bounds;
            let pos = agents[i].pos;
            let radius = agents[i].radius;
            let mut vel = agents[i].vel;
            let projected = pos + vel;
            if bounds.crosses_x(projected, radius) {
                vel.x = -vel.x;
            }
            if bounds.crosses_y(projected, radius) {
                vel.y = -vel.y;
            }
            agents[i].vel = vel;
            let projected = pos + vel;

            // Predictive pairwise test against every other live agent in the
            // whole simulation, at both current and projected positions.
            let partners = colliding_partners(agents, clusters, i, projected);

            for j in partners {
                if config.elastic_collisions && agents[i].id < agents[j].id {
                    // One swap per pair per tick, owned by the lower id; the
                    // higher id's own scan sees the pair but never swaps.
                    let (vi, vj) = (agents[i].vel, agents[j].vel);
                    agents[i].vel = vj;
                    agents[j].vel = vi;
                }

                // Transmission flows only into a fully-susceptible mover from
                // a partner with strictly positive infectiousness.  Detection
                // is symmetric; the history mutation is not.
                let mover_catalog = &clusters[agents[i].cluster.index()].catalog;
                if agents[i].current_compartment() == mover_catalog.susceptible() {
                    let infectiousness = clusters[agents[j].cluster.index()]
                        .catalog
                        .get(agents[j].current_compartment())
                        .infectiousness;
                    if infectiousness > 0.0 && rng.trial(infectiousness) {
                        let exposed = mover_catalog.exposed();
                        agents[i].record(marker, exposed);
                        counters.add_simulation_infection();
                    }
                }
            }

            // Apply the (possibly swapped) velocity, then clamp back inside
            // the cluster box to correct floating drift.
            let vel = agents[i].vel;
            let next = agents[i].pos + vel;
            agents[i].pos = bounds.clamp_circle(next, radius);
        }
    }
}

/// Indices of all live agents colliding with mover `i`, ascending.
///
/// Read-only over the agent sequence, which is what makes the parallel
/// variant outcome-identical: detection order is fixed by index, and all
/// random draws happen afterwards in that order.
fn colliding_partners(
    agents:    &[Agent],
    clusters:  &[Cluster],
    i:         usize,
    projected: Vec2,
) -> Vec<usize> {
    let mover = &agents[i];
    let hits = |j: usize, other: &Agent| -> bool {
        if j == i {
            return false;
        }
        if clusters[other.cluster.index()]
            .catalog
            .is_dead(other.current_compartment())
        {
            return false;
        }
        let sum = mover.radius + other.radius;
        let sum_sq = sum * sum;
        mover.pos.dist_sq(other.pos) <= sum_sq || projected.dist_sq(other.pos) <= sum_sq
    };

    #[cfg(not(feature = "parallel"))]
    {
        agents
            .iter()
            .enumerate()
            .filter(|(j, other)| hits(*j, other))
            .map(|(j, _)| j)
            .collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        // Rayon's filter preserves the underlying index order.
        agents
            .par_iter()
            .enumerate()
            .filter(|(j, other)| hits(*j, other))
            .map(|(j, _)| j)
            .collect()
    }
}

// ── MetricsStep ───────────────────────────────────────────────────────────────

/// Full-scan counter recomputation (see [`CounterBoard::recompute`]).
///
/// [`CounterBoard::recompute`]: crate::CounterBoard::recompute
pub struct MetricsStep;

impl SimExtension for MetricsStep {
    fn name(&self) -> &'static str {
        "metrics"
    }

    fn apply(&mut self, _phase: Phase, world: &mut World) {
        let World { agents, counters, .. } = world;
        counters.recompute(agents);
    }
}

// ── RecordStep ────────────────────────────────────────────────────────────────

/// Append one results row tagged with the current phase marker.
pub struct RecordStep;

impl SimExtension for RecordStep {
    fn name(&self) -> &'static str {
        "record"
    }

    fn apply(&mut self, _phase: Phase, world: &mut World) {
        let marker = world.current_marker();
        let values = world.counters.values().to_vec();
        world.results.push(marker, values);
    }
}
