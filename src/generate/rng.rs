use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform draws consumed by the link builders.
pub trait RandomSource {
    /// Uniform integer in `low..=high`.
    fn int_inclusive(&mut self, low: u32, high: u32) -> u32;

    /// Uniform position in `0..len`; `len` is never zero.
    fn index(&mut self, len: usize) -> usize;
}

pub struct SeededRng {
    seed: u64,
    rng: StdRng,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Picks a fresh seed from the thread RNG so the run can be replayed.
    pub fn from_entropy() -> Self {
        Self::new(rand::rng().random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRng {
    fn int_inclusive(&mut self, low: u32, high: u32) -> u32 {
        self.rng.random_range(low..=high)
    }

    fn index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// Replays a fixed list of draws, for tests that need exact sequences.
#[cfg(test)]
pub struct ScriptedSource {
    draws: std::collections::VecDeque<usize>,
}

#[cfg(test)]
impl ScriptedSource {
    pub fn new(draws: &[usize]) -> Self {
        Self {
            draws: draws.iter().copied().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.draws.len()
    }

    fn next(&mut self) -> usize {
        self.draws.pop_front().expect("script exhausted")
    }
}

#[cfg(test)]
impl RandomSource for ScriptedSource {
    fn int_inclusive(&mut self, low: u32, high: u32) -> u32 {
        let value = self.next() as u32;
        assert!((low..=high).contains(&value), "{value} outside {low}..={high}");
        value
    }

    fn index(&mut self, len: usize) -> usize {
        let value = self.next();
        assert!(value < len, "{value} outside 0..{len}");
        value
    }
}
