//! # Contribution Lattice
//!
//! Precomputed neighbour chains, one lattice per dimensionality.
//!
//! A noise query classifies its position inside the skewed unit cell into a
//! small integer key. The key indexes a lookup array whose slot names a chain:
//! the contiguous run of lattice points whose gradients are summed for it.
//! The hot path is therefore one array index and a linear walk.
//!
//! ## Sharing
//!
//! Lattices depend on nothing but constants. Each is built at most once per
//! process, published through a `OnceLock` only when complete, and then read
//! without synchronisation by every generator. Every dimensionality has its
//! own build lock, so a slow 4D build never holds up a first 2D query.

mod tables;

use std::collections::TryReserveError;
use std::sync::OnceLock;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::error::{NoiseError, NoiseResult};
use crate::geometry::{Geometry, Hyper, Plane, Space};

/// Lookup slot value for keys no cell zone produces.
const NO_CHAIN: u16 = u16::MAX;

static PLANE: Shared<2> = Shared::new();
static SPACE: Shared<3> = Shared::new();
static HYPER: Shared<4> = Shared::new();

/// Supported dimensionalities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Dimensions {
    /// 2D noise.
    Two,
    /// 3D noise.
    Three,
    /// 4D noise.
    Four,
}

impl Dimensions {
    /// All supported dimensionalities, lowest first.
    pub const ALL: [Self; 3] = [Self::Two, Self::Three, Self::Four];

    /// Number of axes.
    #[inline]
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
        }
    }
}

impl TryFrom<u8> for Dimensions {
    type Error = NoiseError;

    fn try_from(axes: u8) -> Result<Self, Self::Error> {
        match axes {
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            other => Err(NoiseError::UnsupportedDimensions(other)),
        }
    }
}

impl From<Dimensions> for u8 {
    fn from(dimensions: Dimensions) -> Self {
        match dimensions {
            Dimensions::Two => 2,
            Dimensions::Three => 3,
            Dimensions::Four => 4,
        }
    }
}

/// Static description of a lattice, expanded by [`Lattice::build`].
pub(crate) struct ChainTable<const N: usize> {
    /// Size of the key space addressed by the classifier.
    key_space: usize,
    /// Simplex vertices per `floor(in_sum)` slice.
    slices: &'static [&'static [[i8; N]]],
    /// Chains as (slice, extra lattice offsets).
    chains: &'static [(u8, &'static [[i8; N]])],
    /// Reachable keys and the chain each selects.
    keys: &'static [(usize, u16)],
}

/// One candidate lattice point relative to the query's cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Contribution<const N: usize> {
    /// Integer offset from the cell origin, in skewed space.
    offset: [i32; N],
    /// Constant part of the displacement from the cell origin to this point.
    displacement: [f64; N],
}

impl<const N: usize> Contribution<N> {
    fn new(offset: [i8; N], squish: f64) -> Self {
        let offset = offset.map(i32::from);
        let multiplier = f64::from(offset.iter().sum::<i32>());
        Self {
            offset,
            displacement: offset.map(|c| f64::from(-c) - multiplier * squish),
        }
    }

    /// Lattice offset from the cell origin.
    #[inline]
    #[must_use]
    pub const fn offset(&self) -> [i32; N] {
        self.offset
    }

    /// Displacement to add to the query's offset from the unskewed cell origin.
    #[inline]
    #[must_use]
    pub const fn displacement(&self) -> [f64; N] {
        self.displacement
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Span {
    start: usize,
    len: usize,
}

/// Contribution chains for one dimensionality.
///
/// Nodes live in a single arena; chains are spans into it and the lookup
/// array maps every classification key to a chain.
#[derive(Debug, PartialEq)]
pub struct Lattice<const N: usize> {
    nodes: Vec<Contribution<N>>,
    chains: Vec<Span>,
    lookup: Vec<u16>,
}

impl<const N: usize> Lattice<N> {
    /// Expands a chain table. Every allocation is reserved up front and a
    /// failure returns before anything is published.
    pub(crate) fn build(table: &ChainTable<N>, squish: f64) -> NoiseResult<Self> {
        let node_count: usize = table
            .chains
            .iter()
            .map(|&(slice, extra)| table.slices[usize::from(slice)].len() + extra.len())
            .sum();

        let mut nodes: Vec<Contribution<N>> = Vec::new();
        reserve::<N, _>(&mut nodes, node_count)?;
        let mut chains: Vec<Span> = Vec::new();
        reserve::<N, _>(&mut chains, table.chains.len())?;
        let mut lookup: Vec<u16> = Vec::new();
        reserve::<N, _>(&mut lookup, table.key_space)?;

        for &(slice, extra) in table.chains {
            let start = nodes.len();
            let offsets = table.slices[usize::from(slice)].iter().chain(extra);
            nodes.extend(offsets.map(|&offset| Contribution::new(offset, squish)));
            chains.push(Span {
                start,
                len: nodes.len() - start,
            });
        }

        lookup.resize(table.key_space, NO_CHAIN);
        for &(key, chain) in table.keys {
            lookup[key] = chain;
        }

        Ok(Self {
            nodes,
            chains,
            lookup,
        })
    }

    /// Returns the chain selected by a classification key.
    ///
    /// Keys that no position inside a cell can produce, including anything
    /// outside the key space, select an empty chain.
    #[inline]
    #[must_use]
    pub fn chain(&self, key: usize) -> &[Contribution<N>] {
        match self.lookup.get(key) {
            Some(&chain) if chain != NO_CHAIN => {
                let span = self.chains[usize::from(chain)];
                &self.nodes[span.start..span.start + span.len]
            }
            _ => &[],
        }
    }

    /// Number of distinct chains.
    #[must_use]
    pub fn chain_count(&self) -> usize {
        self.chains.len()
    }

    /// Number of contribution nodes across all chains.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of keys that select a chain.
    #[must_use]
    pub fn key_count(&self) -> usize {
        self.lookup.iter().filter(|&&chain| chain != NO_CHAIN).count()
    }

    /// Size of the key space, reachable or not.
    #[must_use]
    pub fn key_space(&self) -> usize {
        self.lookup.len()
    }
}

fn reserve<const N: usize, T>(buffer: &mut Vec<T>, additional: usize) -> NoiseResult<()> {
    buffer
        .try_reserve_exact(additional)
        .map_err(|source: TryReserveError| NoiseError::LatticeAllocation {
            dimensions: N,
            source,
        })
}

/// A process-wide lattice slot with its own build lock.
struct Shared<const N: usize> {
    cell: OnceLock<Lattice<N>>,
    /// Serialises builds of this lattice so concurrent first use allocates once.
    build: Mutex<()>,
}

impl<const N: usize> Shared<N> {
    const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
            build: Mutex::new(()),
        }
    }

    /// Returns the lattice, building it from `table` on first use.
    fn get_or_build(
        &'static self,
        table: &ChainTable<N>,
        squish: f64,
    ) -> NoiseResult<&'static Lattice<N>> {
        if let Some(lattice) = self.cell.get() {
            return Ok(lattice);
        }

        let _guard = self.build.lock();
        if let Some(lattice) = self.cell.get() {
            return Ok(lattice);
        }

        let lattice = Lattice::build(table, squish)?;
        tracing::debug!(
            "built {}D contribution lattice: {} chains, {} nodes, {} keys",
            N,
            lattice.chain_count(),
            lattice.node_count(),
            lattice.key_count()
        );
        Ok(self.cell.get_or_init(|| lattice))
    }
}

/// Unwraps a lattice for the query path, where there is no error channel.
fn resolve<const N: usize>(lattice: NoiseResult<&'static Lattice<N>>) -> &'static Lattice<N> {
    match lattice {
        Ok(lattice) => lattice,
        Err(err) => {
            tracing::error!("contribution lattice unavailable: {}", err);
            panic!("{err}");
        }
    }
}

pub(crate) fn try_plane() -> NoiseResult<&'static Lattice<2>> {
    PLANE.get_or_build(&tables::PLANE, Plane::SQUISH)
}

pub(crate) fn try_space() -> NoiseResult<&'static Lattice<3>> {
    SPACE.get_or_build(&tables::SPACE, Space::SQUISH)
}

pub(crate) fn try_hyper() -> NoiseResult<&'static Lattice<4>> {
    HYPER.get_or_build(&tables::HYPER, Hyper::SQUISH)
}

/// The shared 2D lattice.
///
/// # Panics
///
/// Panics if the lattice has not been built yet and its allocation fails.
#[must_use]
pub fn plane() -> &'static Lattice<2> {
    resolve(try_plane())
}

/// The shared 3D lattice.
///
/// # Panics
///
/// Panics if the lattice has not been built yet and its allocation fails.
#[must_use]
pub fn space() -> &'static Lattice<3> {
    resolve(try_space())
}

/// The shared 4D lattice.
///
/// # Panics
///
/// Panics if the lattice has not been built yet and its allocation fails.
#[must_use]
pub fn hyper() -> &'static Lattice<4> {
    resolve(try_hyper())
}

/// Builds the shared lattice for `dimensions` now rather than on first query.
///
/// Call this before fanning out to worker threads to move the one-time cost
/// and its only failure mode out of the sampling path.
pub fn prebuild(dimensions: Dimensions) -> NoiseResult<()> {
    match dimensions {
        Dimensions::Two => try_plane().map(drop),
        Dimensions::Three => try_space().map(drop),
        Dimensions::Four => try_hyper().map(drop),
    }
}

/// Builds every shared lattice.
pub fn prebuild_all() -> NoiseResult<()> {
    Dimensions::ALL.into_iter().try_for_each(prebuild)
}
