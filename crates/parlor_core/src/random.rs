//! Injectable random sources.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument};

/// A source of uniform random integers.
///
/// Engines take `&mut S where S: RandomSource + ?Sized` so callers can hand in
/// a seeded generator, a scripted sequence, or a `&mut dyn RandomSource`.
pub trait RandomSource {
    /// Returns an integer drawn uniformly from `min..=max`.
    ///
    /// `min` must not exceed `max`.
    fn range_inclusive(&mut self, min: u32, max: u32) -> u32;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn range_inclusive(&mut self, min: u32, max: u32) -> u32 {
        (**self).range_inclusive(min, max)
    }
}

/// Deterministic RNG backed by ChaCha8.
///
/// The same seed always produces the same sequence, which makes a whole
/// session reproducible from the seed written to the log.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Creates a generator from a fixed seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates a generator from a seed taken from the thread-local RNG.
    #[instrument]
    #[must_use]
    pub fn from_entropy() -> Self {
        let seed: u64 = rand::rng().random();
        debug!(seed, "Seeded game RNG from entropy");
        Self::new(seed)
    }

    /// Returns the seed this generator was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for GameRng {
    fn range_inclusive(&mut self, min: u32, max: u32) -> u32 {
        self.inner.random_range(min..=max)
    }
}

/// Replays a fixed list of integers.
///
/// Values outside the requested range are clamped into it and the script
/// wraps around once exhausted, so a short script never panics mid-game.
#[derive(Clone, Debug)]
pub struct ScriptedSource {
    values: Vec<u32>,
    cursor: usize,
}

impl ScriptedSource {
    /// Creates a source that yields `values` in order.
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Number of values handed out so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedSource {
    fn range_inclusive(&mut self, min: u32, max: u32) -> u32 {
        if self.values.is_empty() {
            return min;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.clamp(min, max)
    }
}
