/// Random source abstraction.
///
/// The simulation only ever asks for two kinds of numbers, so it talks to
/// this narrow trait instead of a concrete generator.  Draws happen in a
/// fixed order (spawn roll, lane, kind, colour, then per-particle values),
/// which makes a seeded run replay exactly.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait RandomSource {
    /// Uniform integer in `0..bound`.  `bound` is always at least 1.
    fn next_below(&mut self, bound: u32) -> u32;

    /// Uniform float in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

/// Default generator backed by `StdRng`.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: StdRng,
}

impl GameRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_entropy(),
        }
    }
}

impl RandomSource for GameRng {
    fn next_below(&mut self, bound: u32) -> u32 {
        self.inner.gen_range(0..bound.max(1))
    }

    fn next_unit(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }
}
