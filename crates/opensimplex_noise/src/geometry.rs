//! # Simplex Geometry
//!
//! Per-dimensionality constants and cell classification.
//!
//! Input space is skewed ("stretched") onto a grid of unit hypercubes, each
//! split into simplices. Flooring gives the cell; the fractional position
//! inside it ("inside" coordinates, in skewed space) is classified into a
//! lookup key using comparisons between axes, the integer part of their sum,
//! and that sum plus each axis.

use crate::gradient;
use crate::lattice::{self, Lattice};
use crate::permutation::PermutationTables;

/// Constants and classification for one dimensionality.
pub trait Geometry<const N: usize> {
    /// Skew factor, `(1 / sqrt(N + 1) - 1) / N`.
    const STRETCH: f64;
    /// Unskew factor, `(sqrt(N + 1) - 1) / N`.
    const SQUISH: f64;
    /// Divisor bringing the accumulated sum close to `[-1, 1]`.
    const NORM: f64;

    /// The shared contribution lattice.
    fn lattice() -> &'static Lattice<N>;

    /// Maps an inside position and its coordinate sum to a lookup key.
    fn classify(inside: &[f64; N], in_sum: f64) -> usize;

    /// Gradient assigned to a lattice vertex.
    fn gradient(tables: &PermutationTables, vertex: [i32; N]) -> [i8; N];
}

/// 2D geometry (triangles).
#[derive(Clone, Copy, Debug)]
pub struct Plane;

/// 3D geometry (tetrahedra and octahedra).
#[derive(Clone, Copy, Debug)]
pub struct Space;

/// 4D geometry.
#[derive(Clone, Copy, Debug)]
pub struct Hyper;

impl Geometry<2> for Plane {
    const STRETCH: f64 = -0.211_324_865_405_187;
    const SQUISH: f64 = 0.366_025_403_784_439;
    const NORM: f64 = 47.0;

    #[inline]
    fn lattice() -> &'static Lattice<2> {
        lattice::plane()
    }

    #[inline]
    fn classify(&[x, y]: &[f64; 2], in_sum: f64) -> usize {
        key((x - y + 1.0) as i32
            | (in_sum as i32) << 1
            | ((in_sum + y) as i32) << 2
            | ((in_sum + x) as i32) << 4)
    }

    #[inline]
    fn gradient(tables: &PermutationTables, vertex: [i32; 2]) -> [i8; 2] {
        gradient::PLANE[tables.hash(vertex, tables.plane())]
    }
}

impl Geometry<3> for Space {
    const STRETCH: f64 = -1.0 / 6.0;
    const SQUISH: f64 = 1.0 / 3.0;
    const NORM: f64 = 103.0;

    #[inline]
    fn lattice() -> &'static Lattice<3> {
        lattice::space()
    }

    #[inline]
    fn classify(&[x, y, z]: &[f64; 3], in_sum: f64) -> usize {
        key((y - z + 1.0) as i32
            | ((x - y + 1.0) as i32) << 1
            | ((x - z + 1.0) as i32) << 2
            | (in_sum as i32) << 3
            | ((in_sum + z) as i32) << 5
            | ((in_sum + y) as i32) << 7
            | ((in_sum + x) as i32) << 9)
    }

    #[inline]
    fn gradient(tables: &PermutationTables, vertex: [i32; 3]) -> [i8; 3] {
        gradient::SPACE[tables.hash(vertex, tables.space())]
    }
}

impl Geometry<4> for Hyper {
    const STRETCH: f64 = -0.138_196_601_125_011;
    const SQUISH: f64 = 0.309_016_994_374_947;
    const NORM: f64 = 30.0;

    #[inline]
    fn lattice() -> &'static Lattice<4> {
        lattice::hyper()
    }

    #[inline]
    fn classify(&[x, y, z, w]: &[f64; 4], in_sum: f64) -> usize {
        key((z - w + 1.0) as i32
            | ((y - z + 1.0) as i32) << 1
            | ((y - w + 1.0) as i32) << 2
            | ((x - y + 1.0) as i32) << 3
            | ((x - z + 1.0) as i32) << 4
            | ((x - w + 1.0) as i32) << 5
            | (in_sum as i32) << 6
            | ((in_sum + w) as i32) << 8
            | ((in_sum + z) as i32) << 11
            | ((in_sum + y) as i32) << 14
            | ((in_sum + x) as i32) << 17)
    }

    #[inline]
    fn gradient(tables: &PermutationTables, vertex: [i32; 4]) -> [i8; 4] {
        gradient::HYPER[tables.hash(vertex, tables.hyper())]
    }
}

/// Negative keys only arise from non-finite input; they select no chain.
#[inline]
fn key(bits: i32) -> usize {
    usize::try_from(bits).unwrap_or(usize::MAX)
}

/// Fast floor function.
///
/// Faster than `f64::floor()` for our use case. Out-of-range and NaN input
/// never panic.
#[inline]
#[must_use]
pub fn fast_floor(x: f64) -> i32 {
    let xi = x as i32;
    if x < f64::from(xi) {
        xi.wrapping_sub(1)
    } else {
        xi
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_fast_floor() {
        assert_eq!(fast_floor(2.7), 2);
        assert_eq!(fast_floor(2.0), 2);
        assert_eq!(fast_floor(0.0), 0);
        assert_eq!(fast_floor(-0.0), 0);
        assert_eq!(fast_floor(-0.5), -1);
        assert_eq!(fast_floor(-1.0), -1);
        assert_eq!(fast_floor(-1.000_001), -2);
    }

    #[test]
    fn test_fast_floor_non_finite() {
        assert_eq!(fast_floor(f64::NAN), 0);
        assert_eq!(fast_floor(f64::INFINITY), i32::MAX);
        // Wraps rather than panicking; the value is meaningless either way.
        let _ = fast_floor(f64::NEG_INFINITY);
        let _ = fast_floor(-1e300);
    }

    #[test]
    fn test_constants_match_closed_forms() {
        let close = |a: f64, b: f64| (a - b).abs() < 1e-14;
        for (n, stretch, squish) in [
            (2.0_f64, Plane::STRETCH, Plane::SQUISH),
            (3.0, Space::STRETCH, Space::SQUISH),
            (4.0, Hyper::STRETCH, Hyper::SQUISH),
        ] {
            assert!(close(stretch, (1.0 / (n + 1.0).sqrt() - 1.0) / n));
            assert!(close(squish, ((n + 1.0).sqrt() - 1.0) / n));
        }
    }

    #[test]
    fn test_classify_cell_origin() {
        // All axes tie at zero: every comparison bit is set, sums are zero.
        assert_eq!(Plane::classify(&[0.0; 2], 0.0), 0b1);
        assert_eq!(Space::classify(&[0.0; 3], 0.0), 0b111);
        assert_eq!(Hyper::classify(&[0.0; 4], 0.0), 0b11_1111);
    }

    #[test]
    fn test_classify_upper_triangle() {
        let inside = [0.9, 0.3];
        assert_eq!(Plane::classify(&inside, 1.2), 39);
    }

    #[test]
    fn test_classified_keys_select_chains() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x5EED);
        for _ in 0..10_000 {
            let p: [f64; 2] = [rng.gen(), rng.gen()];
            assert!(!Plane::lattice().chain(Plane::classify(&p, p[0] + p[1])).is_empty());
            let s: [f64; 3] = [rng.gen(), rng.gen(), rng.gen()];
            assert!(!Space::lattice().chain(Space::classify(&s, s[0] + s[1] + s[2])).is_empty());
            let h: [f64; 4] = [rng.gen(), rng.gen(), rng.gen(), rng.gen()];
            let sum = h[0] + h[1] + h[2] + h[3];
            assert!(!Hyper::lattice().chain(Hyper::classify(&h, sum)).is_empty());
        }
    }

    #[test]
    fn test_non_finite_classification_is_harmless() {
        let key = Hyper::classify(&[f64::NAN, f64::INFINITY, 0.0, -1.0], f64::NAN);
        let _ = Hyper::lattice().chain(key);
    }
}
