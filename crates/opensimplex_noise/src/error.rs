//! # Noise Error Types
//!
//! Sampling itself is total; only lattice allocation and configuration can fail.

use std::collections::TryReserveError;

use thiserror::Error;

/// Errors that can occur while preparing a noise generator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NoiseError {
    /// The contribution lattice for a dimensionality could not be allocated.
    #[error("failed to allocate the {dimensions}D contribution lattice")]
    LatticeAllocation {
        /// Dimensionality of the lattice being built.
        dimensions: usize,
        /// Allocator failure.
        #[source]
        source: TryReserveError,
    },

    /// A dimensionality other than 2, 3 or 4 was requested.
    #[error("unsupported dimensionality: {0} (expected 2, 3 or 4)")]
    UnsupportedDimensions(u8),

    /// Invalid configuration text.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for noise setup operations.
pub type NoiseResult<T> = Result<T, NoiseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_problem() {
        assert_eq!(
            NoiseError::UnsupportedDimensions(5).to_string(),
            "unsupported dimensionality: 5 (expected 2, 3 or 4)"
        );
        assert_eq!(
            NoiseError::InvalidConfig("missing seed".into()).to_string(),
            "invalid configuration: missing seed"
        );
    }

    #[test]
    fn test_allocation_error_keeps_source() {
        use std::error::Error as _;

        let source = Vec::<u64>::new()
            .try_reserve_exact(usize::MAX)
            .expect_err("reserving usize::MAX elements must fail");
        let err = NoiseError::LatticeAllocation {
            dimensions: 4,
            source,
        };

        assert_eq!(err.to_string(), "failed to allocate the 4D contribution lattice");
        assert!(err.source().is_some());
    }
}
