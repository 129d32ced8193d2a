//! The simulation's explicit random source.
//!
//! All randomness — motion jitter, compartment transitions, transmission
//! trials, initial compartment draws — flows through one `SimRng` owned by the
//! simulation and threaded through the tick pipeline by reference.  There is
//! no ambient/thread-local randomness anywhere in the engine, which makes
//! seeded runs fully reproducible: the consumption order of draws is fixed by
//! the (deterministic) iteration order over agents.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

/// Seeded or entropy-initialized RNG wrapper around `SmallRng`.
///
/// `SmallRng` is not cryptographically secure, which is fine here: speed and
/// reproducibility are the only requirements.
pub struct SimRng(SmallRng);

impl SimRng {
    /// Seed deterministically — two `SimRng::seeded(s)` instances produce
    /// identical draw sequences.
    pub fn seeded(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from OS entropy.  Runs are not reproducible across invocations.
    pub fn from_entropy() -> Self {
        SimRng(SmallRng::from_entropy())
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// One uniform draw in `[0, 1)`.
    #[inline]
    pub fn uniform(&mut self) -> f64 {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// One Bernoulli trial: `true` with probability `p` (clamped to [0, 1]).
    ///
    /// Clamping lives here, not in the catalog: the core stores whatever
    /// probability a caller configured, and only the draw saturates.
    #[inline]
    pub fn trial(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Sample `Normal(mean, stdev)`.  A non-positive or non-finite `stdev`
    /// degenerates to `mean`, matching the default configuration where both
    /// parameters are zero.
    pub fn sample_normal(&mut self, mean: f64, stdev: f64) -> f64 {
        match Normal::new(mean, stdev) {
            Ok(dist) if stdev > 0.0 => dist.sample(&mut self.0),
            _ => mean,
        }
    }

    /// Choose a random element from a slice.  Returns `None` if it is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
