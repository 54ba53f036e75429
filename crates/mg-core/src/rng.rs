//! Injectable, deterministic randomness.
//!
//! Both the location sampler and the trip sampler draw from a `SampleRng`
//! supplied by the caller, so any run can be replayed from its seed.  The
//! wrapper hides the concrete generator (`SmallRng`) behind the handful of
//! operations the samplers actually need.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seed-mixing constant: 64-bit fractional part of the golden ratio.
/// Spreads consecutive offsets uniformly across the seed space.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Deterministic RNG handed to every sampling operation.
///
/// The type is `!Sync` to prevent accidental sharing across threads; derive
/// independent children with [`child`][Self::child] instead.
pub struct SampleRng(SmallRng);

impl SampleRng {
    pub fn new(seed: u64) -> Self {
        SampleRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SampleRng` with a different seed offset — useful for
    /// seeding per-phase or per-worker RNGs deterministically from one root.
    pub fn child(&mut self, offset: u64) -> SampleRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SampleRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// A uniform `f64` in `[0, 1)`.
    #[inline]
    pub fn unit(&mut self) -> f64 {
        self.0.r#gen::<f64>()
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

    /// Choose a random element from a slice; `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
