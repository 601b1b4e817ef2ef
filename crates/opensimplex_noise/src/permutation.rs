//! # Permutation Tables
//!
//! Seed expansion into shuffled byte tables.
//!
//! ## Determinism Guarantee
//!
//! The shuffle is driven only by wrapping 64-bit integer arithmetic, so a
//! given `Seed` reproduces the same tables on any platform, any time.

use std::array;
use std::fmt;

use crate::gradient;
use crate::seed::Seed;

/// Number of entries in every permutation table.
pub const TABLE_SIZE: usize = 256;

/// Generator steps discarded before the shuffle starts.
const WARMUP_ROUNDS: usize = 4;

/// Offset added to the generator state before reducing it to a table index.
const SELECTION_OFFSET: i64 = 31;

/// Mask applied to lattice coordinates before indexing a table.
const INDEX_MASK: i32 = 0xFF;

/// Pre-computed permutation tables for one seed.
///
/// `base` is a bijection over `0..=255`. The folded tables map the same
/// shuffle onto gradient-vector indices for each dimensionality, which
/// decorrelates the axes without a second shuffle.
#[derive(Clone, PartialEq, Eq)]
pub struct PermutationTables {
    /// The shuffled identity table.
    base: [u8; TABLE_SIZE],
    /// Gradient indices for 2D (8 vectors).
    plane: [u8; TABLE_SIZE],
    /// Gradient indices for 3D (24 vectors).
    space: [u8; TABLE_SIZE],
    /// Gradient indices for 4D (64 vectors).
    hyper: [u8; TABLE_SIZE],
}

impl PermutationTables {
    /// Derives the tables for a seed.
    ///
    /// Selection-style Fisher-Yates: walking `i` from 255 down to 0, each
    /// step picks a remaining entry with `r = (state + 31) mod (i + 1)`,
    /// folded into `[0, i]` with a Euclidean remainder because the generator
    /// state is signed.
    #[must_use]
    pub fn derive(seed: Seed) -> Self {
        let mut source: [u8; TABLE_SIZE] = array::from_fn(|i| i as u8);
        let mut tables = Self {
            base: [0; TABLE_SIZE],
            plane: [0; TABLE_SIZE],
            space: [0; TABLE_SIZE],
            hyper: [0; TABLE_SIZE],
        };

        let mut state = seed;
        for _ in 0..WARMUP_ROUNDS {
            state = state.advance();
        }

        for i in (0..TABLE_SIZE).rev() {
            state = state.advance();
            let remaining = i as i64 + 1;
            let r = state
                .value()
                .wrapping_add(SELECTION_OFFSET)
                .rem_euclid(remaining) as usize;

            let value = source[r];
            tables.base[i] = value;
            tables.plane[i] = (value >> 1) & 0x07;
            tables.space[i] = value % gradient::SPACE.len() as u8;
            tables.hyper[i] = value >> 2;
            source[r] = source[i];
        }

        tables
    }

    /// The shuffled identity table.
    #[inline]
    #[must_use]
    pub const fn base(&self) -> &[u8; TABLE_SIZE] {
        &self.base
    }

    /// Gradient indices used by 2D noise.
    #[inline]
    #[must_use]
    pub const fn plane(&self) -> &[u8; TABLE_SIZE] {
        &self.plane
    }

    /// Gradient indices used by 3D noise.
    #[inline]
    #[must_use]
    pub const fn space(&self) -> &[u8; TABLE_SIZE] {
        &self.space
    }

    /// Gradient indices used by 4D noise.
    #[inline]
    #[must_use]
    pub const fn hyper(&self) -> &[u8; TABLE_SIZE] {
        &self.hyper
    }

    /// Hashes a lattice vertex to a gradient index.
    ///
    /// Axes are chained through the base table,
    /// `base[(base[(base[x] + y) & 255] + z) & 255]`, and the last axis
    /// lands in the folded table of the caller's dimensionality.
    #[inline]
    pub(crate) fn hash<const N: usize>(
        &self,
        vertex: [i32; N],
        folded: &[u8; TABLE_SIZE],
    ) -> usize {
        let mut hash = i32::from(self.base[wrap(vertex[0])]);
        for &coord in &vertex[1..N - 1] {
            hash = i32::from(self.base[wrap(hash.wrapping_add(coord))]);
        }
        usize::from(folded[wrap(hash.wrapping_add(vertex[N - 1]))])
    }
}

impl fmt::Debug for PermutationTables {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PermutationTables")
            .field("base", &&self.base[..8])
            .finish_non_exhaustive()
    }
}

#[inline]
fn wrap(coord: i32) -> usize {
    (coord & INDEX_MASK) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_bijection(table: &[u8; TABLE_SIZE]) {
        let mut seen = [false; TABLE_SIZE];
        for &value in table {
            assert!(!seen[usize::from(value)], "Value {value} appears twice");
            seen[usize::from(value)] = true;
        }
        assert!(seen.iter().all(|&s| s), "Every value 0..=255 must appear");
    }

    #[test]
    fn test_reference_vectors() {
        let zero = PermutationTables::derive(Seed::new(0));
        assert_eq!(
            zero.base()[..12],
            [36, 153, 14, 53, 35, 192, 31, 13, 5, 44, 232, 19]
        );
        assert_eq!(zero.base()[254..], [150, 18]);

        // Negative states exercise the remainder folding.
        let negative = PermutationTables::derive(Seed::new(-7777));
        assert_eq!(
            negative.base()[..12],
            [18, 2, 131, 6, 76, 22, 188, 136, 82, 51, 104, 193]
        );
        assert_eq!(negative.base()[254..], [10, 53]);

        let answer = PermutationTables::derive(Seed::new(42));
        assert_eq!(
            answer.base()[..12],
            [65, 125, 216, 213, 250, 174, 126, 39, 15, 37, 202, 164]
        );
    }

    #[test]
    fn test_base_is_bijection() {
        for seed in [0, 1, -1, 42, i64::MIN, i64::MAX, 0x5DEE_CE66_D] {
            assert_bijection(PermutationTables::derive(Seed::new(seed)).base());
        }
    }

    #[test]
    fn test_folded_tables_follow_base() {
        let tables = PermutationTables::derive(Seed::new(1234));
        for i in 0..TABLE_SIZE {
            let value = tables.base()[i];
            assert_eq!(tables.plane()[i], (value & 0x0E) >> 1);
            assert_eq!(tables.space()[i], value % 24);
            assert_eq!(tables.hyper()[i], (value & 0xFC) >> 2);
        }
        assert!(tables.plane().iter().all(|&g| usize::from(g) < gradient::PLANE.len()));
        assert!(tables.space().iter().all(|&g| usize::from(g) < gradient::SPACE.len()));
        assert!(tables.hyper().iter().all(|&g| usize::from(g) < gradient::HYPER.len()));
    }

    #[test]
    fn test_hash_chains_axes() {
        let tables = PermutationTables::derive(Seed::new(7));
        let base = tables.base();
        let at = |i: i32| i32::from(base[(i & 0xFF) as usize]);

        let (x, y, z) = (-3, 260, 17);
        let expected = tables.space()[((at(at(x) + y) + z) & 0xFF) as usize];
        assert_eq!(tables.hash([x, y, z], tables.space()), usize::from(expected));

        let expected = tables.plane()[((at(x) + y) & 0xFF) as usize];
        assert_eq!(tables.hash([x, y], tables.plane()), usize::from(expected));
    }

    #[test]
    fn test_hash_wraps_extreme_coordinates() {
        let tables = PermutationTables::derive(Seed::new(7));
        let index = tables.hash([i32::MAX, i32::MIN, i32::MAX, -1], tables.hyper());
        assert!(index < gradient::HYPER.len());
    }

    #[test]
    fn test_debug_is_compact() {
        let rendered = format!("{:?}", PermutationTables::derive(Seed::new(0)));
        assert!(rendered.starts_with("PermutationTables { base: [36, 153"));
        assert!(rendered.len() < 128);
    }
}
