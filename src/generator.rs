//! Bounded random values for the bot.

use rand::rngs::SmallRng;
use rand::Rng;
use rand_core::SeedableRng;

pub trait Generate<T> {
    /// Draw a fresh value. Implementations keep no memory of earlier draws.
    fn generate(&mut self) -> T;
}

/// Uniform integers in `1..ceil`.
pub struct IntGenerator {
    ceil: u32,
    rng: SmallRng,
}

impl IntGenerator {
    pub fn new(ceil: u32) -> Self {
        Self::with_rng(ceil, SmallRng::from_entropy())
    }

    /// Reproducible sequence for tests and replays.
    pub fn seeded(ceil: u32, seed: u64) -> Self {
        Self::with_rng(ceil, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(ceil: u32, rng: SmallRng) -> Self {
        assert!(ceil > 1, "empty range 1..{ceil}");
        Self { ceil, rng }
    }

    pub fn ceil(&self) -> u32 {
        self.ceil
    }
}

impl Generate<u32> for IntGenerator {
    fn generate(&mut self) -> u32 {
        self.rng.gen_range(1..self.ceil)
    }
}
