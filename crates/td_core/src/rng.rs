//! Seeded random number generation for the simulation.
//!
//! The core carries its own tiny generator instead of pulling in a
//! randomness crate so a whole session replays from a single seed.
//! This is a splitmix64 step; statistical quality is far beyond what
//! spawn rolls need.

use serde::{Deserialize, Serialize};

/// Deterministic random number generator owned by the simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimRng {
    state: u64,
}

impl SimRng {
    /// Create a generator from a seed.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next raw 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform sample in `[0, 1)`.
    pub fn next_f32(&mut self) -> f32 {
        // 24 bits is the full f32 mantissa.
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }

    /// Uniform integer in `[min, max)`. Returns `min` for empty ranges.
    pub fn next_range(&mut self, min: i32, max: i32) -> i32 {
        if max <= min {
            return min;
        }
        let span = (max - min) as u64;
        min + (self.next_u64() % span) as i32
    }
}
