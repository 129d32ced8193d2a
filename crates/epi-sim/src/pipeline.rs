//! The fixed three-stage extension pipeline.
//!
//! Each phase owns an ordered list of polymorphic extensions.  The engine
//! installs its default steps at construction; caller-supplied extensions
//! are appended after them and run in registration order.  Extensions are
//! the only code that mutates the world during a phase — there is no ad hoc
//! callable injection.

use epi_core::Phase;

use crate::world::World;

/// A simulation-mutating pipeline step.
///
/// Extensions receive the whole mutable [`World`] plus the phase being
/// executed, so one extension type can serve several phases (the metrics and
/// record steps do exactly that).
///
/// `Send` so a simulation can be moved across threads; extensions are never
/// *shared* between threads.
pub trait SimExtension: Send {
    /// Stable name used in trace logging.
    fn name(&self) -> &'static str;

    fn apply(&mut self, phase: Phase, world: &mut World);
}

// ── Pipeline ──────────────────────────────────────────────────────────────────

/// Ordered extension lists for the three phases.
pub struct Pipeline {
    pub(crate) before: Vec<Box<dyn SimExtension>>,
    pub(crate) during: Vec<Box<dyn SimExtension>>,
    pub(crate) after:  Vec<Box<dyn SimExtension>>,
}

impl Pipeline {
    /// The engine defaults:
    ///
    /// | Phase  | Steps                                  |
    /// |--------|----------------------------------------|
    /// | BEFORE | record                                 |
    /// | DURING | transition, motion, metrics, record    |
    /// | AFTER  | metrics, record                        |
    pub fn engine_defaults() -> Self {
        use crate::steps::{MetricsStep, MotionStep, RecordStep, TransitionStep};
        Self {
            before: vec![Box::new(RecordStep)],
            during: vec![
                Box::new(TransitionStep),
                Box::new(MotionStep),
                Box::new(MetricsStep),
                Box::new(RecordStep),
            ],
            after: vec![Box::new(MetricsStep), Box::new(RecordStep)],
        }
    }

    /// Append `ext` to the end of one phase's list.
    pub fn push(&mut self, phase: Phase, ext: Box<dyn SimExtension>) {
        self.stage_mut(phase).push(ext);
    }

    pub(crate) fn stage_mut(&mut self, phase: Phase) -> &mut Vec<Box<dyn SimExtension>> {
        match phase {
            Phase::Before => &mut self.before,
            Phase::During => &mut self.during,
            Phase::After  => &mut self.after,
        }
    }
}
