//! Random number generation for dungeon layouts
//!
//! Uses a seeded ChaCha RNG so a layout can be reproduced from its seed alone.
//! Every generation stage draws from the same stream, so the order of draws
//! is part of what a seed means.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Layout random number generator
///
/// Wraps ChaCha8Rng seeded from the bit pattern of a signed 32-bit seed.
/// Note: only the seed is serialized; deserializing restarts the stream.
#[derive(Debug, Clone)]
pub struct DungeonRng {
    rng: ChaCha8Rng,
    seed: i32,
    draws: u64,
}

// Custom serialization - only serialize seed, recreate RNG on deserialize
impl Serialize for DungeonRng {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.seed.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for DungeonRng {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let seed = i32::deserialize(deserializer)?;
        Ok(DungeonRng::new(seed))
    }
}

impl DungeonRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: i32) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(u64::from(seed as u32)),
            seed,
            draws: 0,
        }
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> i32 {
        self.seed
    }

    /// Number of values drawn so far
    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// Returns an integer in `lo..hi`.
    ///
    /// An empty range collapses to `lo` and consumes nothing from the stream.
    pub fn range(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        self.draws += 1;
        self.rng.gen_range(lo..hi)
    }

    /// Returns a float in `0.0..1.0`
    pub fn value(&mut self) -> f32 {
        self.draws += 1;
        self.rng.gen_range(0.0f32..1.0)
    }

    /// Fair coin flip
    pub fn coin(&mut self) -> bool {
        self.value() < 0.5
    }
}

/// Draw a fresh non-zero seed from the thread RNG.
///
/// Zero is reserved in configuration to mean "pick one for me".
#[cfg(feature = "std")]
pub fn random_seed() -> i32 {
    match rand::random::<i32>() {
        0 => 1,
        seed => seed,
    }
}
