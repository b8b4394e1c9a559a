//! Seeded random stream
//!
//! One PCG32 state is derived from the seed string and advanced by every
//! call, so the n-th draw of a run is fixed no matter which helper made it.
//! A stream cannot be reseeded once built.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use sha2::{Digest, Sha256};

/// Deterministic number stream built from an opaque seed string
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: Pcg32,
}

impl SeededRandom {
    /// Build a stream from a seed string.
    ///
    /// The first 16 bytes of the seed's SHA-256 digest become the PCG state
    /// and stream selector, so every platform derives the same generator.
    pub fn new(seed: &str) -> Self {
        let digest = Sha256::digest(seed.as_bytes());
        let mut pcg_seed = [0u8; 16];
        pcg_seed.copy_from_slice(&digest[..16]);
        Self {
            rng: Pcg32::from_seed(pcg_seed),
        }
    }

    /// Uniform value in [0, 1)
    pub fn next(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    /// Integer in [min, max). Returns `min` when the range is empty.
    pub fn next_int(&mut self, min: i32, max: i32) -> i32 {
        let span = f64::from(max) - f64::from(min);
        let offset = (self.next() * span).floor();
        if offset <= 0.0 {
            return min;
        }
        min + offset as i32
    }

    /// Real in [min, max)
    pub fn next_float(&mut self, min: f64, max: f64) -> f64 {
        min + self.next() * (max - min)
    }

    /// True with the given probability
    pub fn chance(&mut self, probability: f64) -> bool {
        self.next() < probability
    }
}
