//! # OpenSimplex Noise
//!
//! Deterministic, seedable gradient noise in 2, 3 and 4 dimensions.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Same seed always produces the same field
//! 2. **Shared lattices**: Contribution chains are built once per process
//! 3. **Pure queries**: Once the lattices exist, sampling never allocates or locks
//!
//! ## Core Components
//!
//! - `PermutationTables`: seed expansion into shuffled lookup tables
//! - `Lattice`: precomputed neighbour chains addressed by a cell-zone key
//! - `OpenSimplex`: the evaluator, one generic pipeline for all dimensions
//! - `NoiseConfig`: TOML-driven construction with optional eager lattice builds
//!
//! ## Example
//!
//! ```rust
//! use opensimplex_noise::{OpenSimplex, Sample};
//!
//! let noise = OpenSimplex::new(42);
//!
//! let height = noise.noise2(12.5, -3.25);
//! let density = noise.sample([1.5, -2.25, 0.75]);
//! assert!(height.abs() <= 1.05 && density.abs() <= 1.05);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod error;
pub mod geometry;
pub mod gradient;
pub mod lattice;
pub mod noise;
pub mod permutation;
pub mod seed;

pub use config::NoiseConfig;
pub use error::{NoiseError, NoiseResult};
pub use lattice::{prebuild, prebuild_all, Contribution, Dimensions, Lattice};
pub use noise::{OpenSimplex, Sample};
pub use permutation::{PermutationTables, TABLE_SIZE};
pub use seed::Seed;
