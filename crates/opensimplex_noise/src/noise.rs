//! # OpenSimplex Evaluator
//!
//! Smooth, deterministic gradient noise over the skewed simplex lattice.
//!
//! Every dimensionality runs the same pipeline:
//!
//! 1. Stretch the point onto the skewed grid and floor it to find the cell
//! 2. Classify the position inside the cell into a lookup key
//! 3. Walk the chain of lattice points that key selects, summing the
//!    attenuated gradient ramp of each one
//! 4. Divide by the dimensionality's normalisation constant
//!
//! ## Determinism Guarantee
//!
//! Given the same `Seed`, this implementation produces exactly the same
//! values on any platform, any time. Queries do not mutate the generator.

use crate::geometry::{fast_floor, Geometry, Hyper, Plane, Space};
use crate::permutation::PermutationTables;
use crate::seed::Seed;

/// Radius squared of every lattice point's support.
const SUPPORT: f64 = 2.0;

/// OpenSimplex noise generator.
///
/// Produces smooth, continuous noise values close to `[-1, 1]`.
///
/// # Performance
///
/// - O(1) per sample: one key lookup and a walk over at most a few dozen
///   lattice points
/// - No allocations
/// - Shares the contribution lattices with every other generator
///
/// # Example
///
/// ```rust
/// use opensimplex_noise::OpenSimplex;
///
/// let noise = OpenSimplex::new(42);
/// let value = noise.noise3(100.5, 200.3, -7.0);
/// assert!(value.abs() <= 1.05);
/// assert_eq!(value, OpenSimplex::new(42).noise3(100.5, 200.3, -7.0));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OpenSimplex {
    seed: Seed,
    tables: PermutationTables,
}

impl OpenSimplex {
    /// Seed used by [`OpenSimplex::default`].
    pub const DEFAULT_SEED: i64 = 0;

    /// Creates a generator from a raw seed.
    #[must_use]
    pub fn new(seed: i64) -> Self {
        Self::with_seed(Seed::new(seed))
    }

    /// Creates a generator from a [`Seed`].
    #[must_use]
    pub fn with_seed(seed: Seed) -> Self {
        Self {
            seed,
            tables: PermutationTables::derive(seed),
        }
    }

    /// The seed this generator was built from.
    #[inline]
    #[must_use]
    pub const fn seed(&self) -> Seed {
        self.seed
    }

    /// The permutation tables derived from the seed.
    #[inline]
    #[must_use]
    pub const fn permutations(&self) -> &PermutationTables {
        &self.tables
    }

    /// Samples 2D noise.
    ///
    /// # Panics
    ///
    /// Panics only if this is the process's first 2D query and the shared
    /// lattice cannot be allocated. Use [`crate::prebuild`] to surface that
    /// as an error instead.
    #[must_use]
    pub fn noise2(&self, x: f64, y: f64) -> f64 {
        self.evaluate::<2, Plane>([x, y])
    }

    /// Samples 3D noise.
    ///
    /// # Panics
    ///
    /// See [`OpenSimplex::noise2`].
    #[must_use]
    pub fn noise3(&self, x: f64, y: f64, z: f64) -> f64 {
        self.evaluate::<3, Space>([x, y, z])
    }

    /// Samples 4D noise.
    ///
    /// # Panics
    ///
    /// See [`OpenSimplex::noise2`].
    #[must_use]
    pub fn noise4(&self, x: f64, y: f64, z: f64, w: f64) -> f64 {
        self.evaluate::<4, Hyper>([x, y, z, w])
    }

    fn evaluate<const N: usize, G: Geometry<N>>(&self, point: [f64; N]) -> f64 {
        // Skew onto the simplex grid and find the cell.
        let stretch = point.iter().fold(0.0, |sum, &c| sum + c) * G::STRETCH;
        let skewed = point.map(|c| c + stretch);
        let base = skewed.map(fast_floor);

        // Unskew the cell origin back into input space.
        let squish = f64::from(base.iter().fold(0i32, |sum, &b| sum.wrapping_add(b))) * G::SQUISH;
        let mut origin = [0.0; N];
        let mut inside = [0.0; N];
        for i in 0..N {
            let cell = f64::from(base[i]);
            origin[i] = point[i] - (cell + squish);
            inside[i] = skewed[i] - cell;
        }
        let in_sum = inside.iter().fold(0.0, |sum, &c| sum + c);

        let mut value = 0.0;
        for contribution in G::lattice().chain(G::classify(&inside, in_sum)) {
            let displacement = contribution.displacement();
            let mut delta = [0.0; N];
            for i in 0..N {
                delta[i] = origin[i] + displacement[i];
            }

            let attn = delta.iter().fold(SUPPORT, |a, &d| a - d * d);
            if attn > 0.0 {
                let offset = contribution.offset();
                let mut vertex = base;
                for i in 0..N {
                    vertex[i] = vertex[i].wrapping_add(offset[i]);
                }
                let gradient = G::gradient(&self.tables, vertex);
                let extrapolation = gradient
                    .iter()
                    .zip(&delta)
                    .fold(0.0, |sum, (&g, &d)| sum + f64::from(g) * d);

                let attn2 = attn * attn;
                value += attn2 * attn2 * extrapolation;
            }
        }

        value / G::NORM
    }
}

impl Default for OpenSimplex {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEED)
    }
}

/// Point sampling by coordinate array.
///
/// Lets code that is generic over dimensionality drive any of the
/// evaluators with `[f64; N]`.
pub trait Sample<const N: usize> {
    /// Samples the noise field at `point`.
    fn sample(&self, point: [f64; N]) -> f64;
}

impl Sample<2> for OpenSimplex {
    #[inline]
    fn sample(&self, [x, y]: [f64; 2]) -> f64 {
        self.noise2(x, y)
    }
}

impl Sample<3> for OpenSimplex {
    #[inline]
    fn sample(&self, [x, y, z]: [f64; 3]) -> f64 {
        self.noise3(x, y, z)
    }
}

impl Sample<4> for OpenSimplex {
    #[inline]
    fn sample(&self, [x, y, z, w]: [f64; 4]) -> f64 {
        self.noise4(x, y, z, w)
    }
}
