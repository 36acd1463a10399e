//! Full-width RC4 keystream generator
//!
//! # Algorithm
//!
//! Key scheduling shuffles the identity permutation of 0..=255 under the
//! seed key; every output step moves cursor `i` forward, moves `j` by the
//! entry under `i`, swaps the two entries and emits the entry indexed by
//! their sum.
//!
//! # Determinism
//!
//! Same seed → same sequence. `snapshot` and `restore` allow exact replay
//! and forking from any point in the stream.

use crate::error::{GeneratorError, Result};
use crate::rng::derived::KeystreamRng;
use crate::rng::entropy::{draw_key, EntropySource, OsEntropy};
use crate::rng::permutation::PermutationState;
use crate::rng::seed::Seed;
use crate::rng::state::{GeneratorState, TABLE_SIZE};

/// Deterministic byte/float generator over the RC4 keystream
///
/// # Example
/// ```
/// use rc4_keystream::{KeystreamGenerator, KeystreamRng};
///
/// let mut rng = KeystreamGenerator::new("lol").unwrap();
/// assert_eq!(rng.next_byte(), 65);
///
/// let saved = rng.snapshot();
/// let a = rng.next_float();
/// rng.restore(&saved).unwrap();
/// assert_eq!(rng.next_float(), a);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeystreamGenerator {
    state: PermutationState<TABLE_SIZE>,
}

impl KeystreamGenerator {
    /// Seed a generator from a key
    ///
    /// # Errors
    /// `InvalidSeed` if the key normalizes to nothing.
    pub fn new(seed: impl Into<Seed>) -> Result<Self> {
        let key = seed.into().key_bytes()?;
        log::debug!("seeding keystream generator from {}-byte key", key.len());
        Ok(Self::from_key(&key))
    }

    /// Seed a generator from operating system randomness
    pub fn from_entropy() -> Result<Self> {
        Self::with_entropy(&mut OsEntropy)
    }

    /// Seed a generator from a random key drawn out of `source`
    pub fn with_entropy<E: EntropySource + ?Sized>(source: &mut E) -> Result<Self> {
        let key = draw_key(source)?;
        log::debug!("autoseeding keystream generator from entropy source");
        Ok(Self::from_key(&key))
    }

    fn from_key(key: &[u8]) -> Self {
        Self {
            state: PermutationState::scheduled(key),
        }
    }

    /// Skip `count` keystream bytes
    pub fn discard(&mut self, count: usize) {
        for _ in 0..count {
            self.state.step();
        }
    }

    /// Independent copy of the current state
    pub fn snapshot(&self) -> GeneratorState {
        GeneratorState {
            i: self.state.i,
            j: self.state.j,
            permutation: self.state.s.to_vec(),
        }
    }

    /// Replace the current state with a copy of `state`
    ///
    /// # Errors
    /// `InvalidState` if the permutation is not a bijection of 0..=255. The
    /// generator is left untouched on error.
    pub fn restore(&mut self, state: &GeneratorState) -> Result<()> {
        *self = Self::from_state(state).map_err(|e| {
            log::warn!("rejected keystream state restore: {}", e);
            e
        })?;
        log::debug!("restored keystream state (i={}, j={})", state.i, state.j);
        Ok(())
    }

    /// Parse the JSON state form and restore from it atomically
    pub fn restore_json(&mut self, json: &str) -> Result<()> {
        let state = GeneratorState::from_json(json).map_err(|e| {
            log::warn!("rejected keystream state document: {}", e);
            e
        })?;
        self.restore(&state)
    }

    /// Build a generator directly from a saved state
    pub fn from_state(state: &GeneratorState) -> Result<Self> {
        let table = state.table()?;
        Ok(Self {
            state: PermutationState {
                s: table,
                i: state.i,
                j: state.j,
            },
        })
    }
}

impl KeystreamRng for KeystreamGenerator {
    fn next_byte(&mut self) -> u8 {
        self.state.step()
    }
}

impl TryFrom<&GeneratorState> for KeystreamGenerator {
    type Error = GeneratorError;

    fn try_from(state: &GeneratorState) -> Result<Self> {
        Self::from_state(state)
    }
}
