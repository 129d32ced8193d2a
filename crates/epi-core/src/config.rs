//! Top-level simulation configuration.

/// Construction-time knobs shared by every cluster.
///
/// Cluster geometry, catalogs, and agent-count targets are configured
/// separately (they are per-cluster); everything here applies uniformly to
/// all agents.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// World width in simulation units.  Cluster rectangles are expected to
    /// lie inside `[0, width] × [0, height]`, though the engine never checks.
    pub width: f64,

    /// World height in simulation units.
    pub height: f64,

    /// Radius of every agent.
    pub agent_radius: f64,

    /// Speed constant applied to the 8 fixed movement headings.
    pub agent_speed: f64,

    /// Mean of the per-agent movement-randomness draw.  Each agent samples
    /// `Normal(wander_mean, wander_stdev)` once at creation; the clamped
    /// result is that agent's per-tick probability of picking a new heading.
    pub wander_mean: f64,

    /// Standard deviation of the movement-randomness draw.  Zero (the
    /// default) gives every agent exactly `wander_mean`.
    pub wander_stdev: f64,

    /// Swap velocities when two agents collide.
    pub elastic_collisions: bool,

    /// Milliseconds to sleep between ticks while playing.  Zero runs ticks
    /// back-to-back.  Read fresh at every tick boundary, so changing it
    /// mid-run takes effect on the next lap.
    pub tick_interval_ms: u64,

    /// Iteration count at which a playing run auto-halts.  Zero means
    /// unbounded.
    pub max_iterations: u64,

    /// RNG seed.  `None` seeds from OS entropy (non-reproducible runs).
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width:              320.0,
            height:             320.0,
            agent_radius:       3.0,
            agent_speed:        1.0,
            wander_mean:        0.0,
            wander_stdev:       0.0,
            elastic_collisions: true,
            tick_interval_ms:   0,
            max_iterations:     0,
            seed:               None,
        }
    }
}

impl SimConfig {
    /// `true` once `iteration` has reached the configured cap.
    #[inline]
    pub fn limit_reached(&self, iteration: u64) -> bool {
        self.max_iterations > 0 && iteration >= self.max_iterations
    }
}
