use crate::types::BlockId;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// Deterministic integer source built from an explicit seed.
///
/// The ChaCha stream does not depend on the platform or the process, so two
/// samplers created from the same seed hand out the same sequence of values.
#[derive(Debug, Clone)]
pub struct SeededSampler {
    rng: ChaCha8Rng,
}

impl SeededSampler {
    pub fn from_seed(seed: u64) -> Self {
        SeededSampler {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Draws a value uniformly from `[low, high]`.
    ///
    /// A collapsed range returns `low` without advancing the stream, and so
    /// does an empty one (`low > high`); callers are expected to check that a
    /// range is feasible before sampling from it.
    pub fn sample_inclusive(&mut self, low: u32, high: u32) -> u32 {
        if low >= high {
            return low;
        }

        self.rng.random_range(low..=high)
    }
}

/// Mixes a level seed with a block handle into a per-room seed.
///
/// Optional helper for callers that thread one top-level seed through a whole
/// partition; the result only depends on its two inputs.
pub fn derive_seed(level_seed: u64, block: BlockId) -> u64 {
    // SplitMix64 finaliser
    let mut z = level_seed
        ^ (block.0 as u64)
            .wrapping_add(1)
            .wrapping_mul(GOLDEN_GAMMA);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
