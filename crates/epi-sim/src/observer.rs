//! Simulation observer trait for progress reporting, data collection, and
//! interactive pause control.

use epi_core::Phase;

use crate::world::World;

/// Callbacks invoked by [`Simulation`][crate::Simulation] at key points of
/// the run.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  `request_pause` is polled between
/// ticks while playing — it is the only suspension point, which is what
/// guarantees pause-at-tick-boundary semantics.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, iteration: u64, world: &World) {
///         if iteration % self.interval == 0 {
///             println!("tick {iteration}: {} alive", world.counters.alive());
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before a phase's extension list runs.
    fn on_phase_start(&mut self, _phase: Phase, _iteration: u64) {}

    /// Called after the BEFORE or AFTER phase completes (the DURING phase
    /// reports through `on_tick_end` instead).
    fn on_phase_end(&mut self, _phase: Phase, _world: &World) {}

    /// Called after each completed DURING tick.  `iteration` is the index of
    /// the tick that just ran.
    fn on_tick_end(&mut self, _iteration: u64, _world: &World) {}

    /// Polled between ticks while playing.  Return `true` to pause the run
    /// at this tick boundary; `play` then returns with the simulation
    /// PAUSED and resumable.
    fn request_pause(&mut self, _iteration: u64) -> bool {
        false
    }

    /// Called exactly once when the run halts (after the AFTER phase).
    fn on_stop(&mut self, _world: &World) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to drive a
/// simulation but don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
