//! Noise seed and the generator that expands it.

use serde::{Deserialize, Serialize};

/// Multiplier of the 64-bit linear congruential generator.
const LCG_MULTIPLIER: i64 = 6_364_136_223_846_793_005;
/// Increment of the 64-bit linear congruential generator.
const LCG_INCREMENT: i64 = 1_442_695_040_888_963_407;

/// Seed for deterministic noise generation.
///
/// The permutation tables, and therefore every sampled value, derive from
/// this one number.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seed(i64);

impl Seed {
    /// Creates a new seed.
    #[inline]
    #[must_use]
    pub const fn new(seed: i64) -> Self {
        Self(seed)
    }

    /// Returns the raw seed value.
    #[inline]
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Advances the seed by one linear congruential step.
    ///
    /// Arithmetic wraps in two's complement, so the sequence is identical on
    /// every platform.
    #[inline]
    #[must_use]
    pub const fn advance(self) -> Self {
        Self(self.0.wrapping_mul(LCG_MULTIPLIER).wrapping_add(LCG_INCREMENT))
    }
}

impl From<i64> for Seed {
    fn from(seed: i64) -> Self {
        Self(seed)
    }
}
