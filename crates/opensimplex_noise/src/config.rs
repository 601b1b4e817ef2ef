//! Generator configuration.
//!
//! ```toml
//! seed = 1234
//! prebuild = [2, 3]
//! ```
//!
//! Every field is optional; unknown fields are rejected.

use serde::{Deserialize, Serialize};

use crate::error::{NoiseError, NoiseResult};
use crate::lattice::{self, Dimensions};
use crate::noise::OpenSimplex;

/// Settings for constructing an [`OpenSimplex`] generator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NoiseConfig {
    /// Seed for the permutation tables.
    pub seed: i64,
    /// Lattices to build before the generator is handed out.
    pub prebuild: Vec<Dimensions>,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            seed: OpenSimplex::DEFAULT_SEED,
            prebuild: Vec::new(),
        }
    }
}

impl NoiseConfig {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `NoiseError::InvalidConfig` on malformed TOML, unknown fields,
    /// or an unsupported dimensionality in `prebuild`.
    pub fn from_toml(text: &str) -> NoiseResult<Self> {
        toml::from_str(text).map_err(|e| NoiseError::InvalidConfig(e.to_string()))
    }

    /// Renders the configuration as TOML text.
    ///
    /// # Errors
    ///
    /// Returns `NoiseError::InvalidConfig` if serialization fails.
    pub fn to_toml(&self) -> NoiseResult<String> {
        toml::to_string(self).map_err(|e| NoiseError::InvalidConfig(e.to_string()))
    }

    /// Builds the requested lattices, then the generator.
    ///
    /// # Errors
    ///
    /// Returns `NoiseError::LatticeAllocation` if a lattice cannot be built.
    pub fn build(&self) -> NoiseResult<OpenSimplex> {
        for &dimensions in &self.prebuild {
            lattice::prebuild(dimensions)?;
        }
        tracing::debug!(
            "noise generator configured: seed {}, {} lattices prebuilt",
            self.seed,
            self.prebuild.len()
        );
        Ok(OpenSimplex::new(self.seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_default() {
        let config = NoiseConfig::from_toml("").expect("empty config");
        assert_eq!(config, NoiseConfig::default());
        assert_eq!(config.seed, 0);
    }

    #[test]
    fn test_parse_full_config() {
        let config = NoiseConfig::from_toml("seed = -42\nprebuild = [2, 4]\n").expect("valid config");
        assert_eq!(config.seed, -42);
        assert_eq!(config.prebuild, vec![Dimensions::Two, Dimensions::Four]);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = NoiseConfig::from_toml("seed = 1\noctaves = 6\n").unwrap_err();
        assert!(matches!(err, NoiseError::InvalidConfig(ref msg) if msg.contains("octaves")));
    }

    #[test]
    fn test_unsupported_dimensionality_rejected() {
        let err = NoiseConfig::from_toml("prebuild = [5]").unwrap_err();
        assert!(matches!(err, NoiseError::InvalidConfig(ref msg) if msg.contains('5')));
    }

    #[test]
    fn test_malformed_text_rejected() {
        assert!(matches!(
            NoiseConfig::from_toml("seed = "),
            Err(NoiseError::InvalidConfig(_))
        ));
        assert!(matches!(
            NoiseConfig::from_toml("seed = \"forty-two\""),
            Err(NoiseError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = NoiseConfig {
            seed: 77,
            prebuild: vec![Dimensions::Three],
        };
        let text = config.to_toml().expect("serializable");
        assert_eq!(NoiseConfig::from_toml(&text).expect("parsable"), config);
    }

    #[test]
    fn test_build_uses_seed_and_prebuilds() {
        let config = NoiseConfig {
            seed: 42,
            prebuild: Dimensions::ALL.to_vec(),
        };
        let noise = config.build().expect("generator");
        assert_eq!(noise, OpenSimplex::new(42));
        assert!(lattice::hyper().key_count() > 0);
    }
}
