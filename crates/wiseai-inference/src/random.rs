//! [`RandomSource`] implementations.
//!
//! - [`ThreadRandom`]: thread-local OS-seeded generator (production default)
//! - [`SeededRandom`]: reproducible sequence shared behind a mutex
//! - [`FixedRandom`]: always the same index, for deterministic tests

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use wiseai_core::RandomSource;

/// Draws from `rand::thread_rng()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick(&self, bound: usize) -> usize {
        if bound <= 1 {
            return 0;
        }
        rand::thread_rng().gen_range(0..bound)
    }
}

/// Seeded generator. Concurrent callers serialize on the inner lock, so the
/// sequence is reproducible only for a fixed call order.
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn pick(&self, bound: usize) -> usize {
        if bound <= 1 {
            return 0;
        }
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        rng.gen_range(0..bound)
    }
}

/// Always returns the same index, clamped into range.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedRandom(pub usize);

impl RandomSource for FixedRandom {
    fn pick(&self, bound: usize) -> usize {
        self.0.min(bound.saturating_sub(1))
    }
}
