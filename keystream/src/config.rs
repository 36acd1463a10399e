//! Generator configuration
//!
//! A small JSON document describing how to build a generator:
//!
//! ```json
//! { "seed": "my seed", "drop": 768 }
//! ```
//!
//! - `seed`: string or array of integers; omitted or `null` autoseeds from
//!   the operating system
//! - `drop`: number of initial keystream bytes to discard (default 0)

use crate::error::{GeneratorError, Result};
use crate::rng::{EntropySource, KeystreamGenerator, OsEntropy, Seed};
use serde::{Deserialize, Serialize};

/// How to construct a `KeystreamGenerator`
///
/// # Example
/// ```
/// use rc4_keystream::{GeneratorConfig, KeystreamRng};
///
/// let config = GeneratorConfig::from_json(r#"{"seed": [1, 2, 3]}"#).unwrap();
/// let mut rng = config.build().unwrap();
/// assert_eq!(rng.next_byte(), 151);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Seed key; `None` autoseeds
    #[serde(default)]
    pub seed: Option<Seed>,

    /// Initial keystream bytes to discard
    #[serde(default)]
    pub drop: usize,
}

impl GeneratorConfig {
    /// Config with a fixed seed and no discarded bytes
    pub fn seeded(seed: impl Into<Seed>) -> Self {
        Self {
            seed: Some(seed.into()),
            drop: 0,
        }
    }

    /// Parse a JSON config document
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| GeneratorError::Config(e.to_string()))
    }

    /// Build a generator, autoseeding from the OS when no seed is set
    pub fn build(&self) -> Result<KeystreamGenerator> {
        self.build_with_entropy(&mut OsEntropy)
    }

    /// Build a generator, autoseeding from `source` when no seed is set
    pub fn build_with_entropy<E: EntropySource + ?Sized>(
        &self,
        source: &mut E,
    ) -> Result<KeystreamGenerator> {
        let mut rng = match &self.seed {
            Some(seed) => KeystreamGenerator::new(seed.clone())?,
            None => KeystreamGenerator::with_entropy(source)?,
        };

        if self.drop > 0 {
            log::debug!("discarding first {} keystream bytes", self.drop);
            rng.discard(self.drop);
        }
        Ok(rng)
    }
}
