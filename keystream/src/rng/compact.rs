//! Compact (nibble) keystream generator
//!
//! The same state machine as the full-width generator, run over a 16-entry
//! permutation of nibbles with 4-bit cursors. Its whole state packs into
//! nine bytes, written as an 18-character hex string.
//!
//! # State string layout
//!
//! | Byte | Content                  |
//! |------|--------------------------|
//! | 0    | `(i << 4) \| j`          |
//! | 1..=8| `(S[2k-2] << 4) \| S[2k-1]` for k = 1..=8 |
//!
//! Output is lowercase. Input may use either case but must be exactly 18
//! hex characters and decode to a valid permutation of 0..16; the validation
//! policy matches full-width `restore`.

use crate::error::{GeneratorError, Result};
use crate::rng::derived::KeystreamRng;
use crate::rng::entropy::{draw_key, EntropySource, OsEntropy};
use crate::rng::permutation::{check_permutation, PermutationState};
use crate::rng::seed::Seed;

/// Number of entries in the compact permutation table
pub const COMPACT_TABLE_SIZE: usize = 16;

/// Length of the compact state string
pub const COMPACT_STATE_LEN: usize = 18;

/// Nibble-width keystream generator with a fixed-length string state
///
/// # Example
/// ```
/// use rc4_keystream::{CompactGenerator, KeystreamRng};
///
/// let mut rng = CompactGenerator::new("lol").unwrap();
/// let saved = rng.snapshot_compact();
/// assert_eq!(saved.len(), 18);
///
/// let a = rng.next_byte();
/// rng.restore_compact(&saved).unwrap();
/// assert_eq!(rng.next_byte(), a);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompactGenerator {
    state: PermutationState<COMPACT_TABLE_SIZE>,
}

impl CompactGenerator {
    /// Seed a compact generator from a key
    pub fn new(seed: impl Into<Seed>) -> Result<Self> {
        let key = seed.into().key_bytes()?;
        log::debug!("seeding compact generator from {}-byte key", key.len());
        Ok(Self {
            state: PermutationState::scheduled(&key),
        })
    }

    /// Seed a compact generator from operating system randomness
    pub fn from_entropy() -> Result<Self> {
        Self::with_entropy(&mut OsEntropy)
    }

    /// Seed a compact generator from a random key drawn out of `source`
    pub fn with_entropy<E: EntropySource + ?Sized>(source: &mut E) -> Result<Self> {
        let key = draw_key(source)?;
        log::debug!("autoseeding compact generator from entropy source");
        Ok(Self {
            state: PermutationState::scheduled(&key),
        })
    }

    /// Build a compact generator from a saved state string
    pub fn from_compact(encoded: &str) -> Result<Self> {
        Ok(Self {
            state: decode(encoded)?,
        })
    }

    /// Advance one step and return a value in 0..16
    pub fn next_nibble(&mut self) -> u8 {
        self.state.step()
    }

    /// Encode the full state as 18 lowercase hex characters
    pub fn snapshot_compact(&self) -> String {
        let mut packed = [0u8; COMPACT_STATE_LEN / 2];
        packed[0] = (self.state.i << 4) | self.state.j;
        for (slot, pair) in packed[1..].iter_mut().zip(self.state.s.chunks_exact(2)) {
            *slot = (pair[0] << 4) | pair[1];
        }
        hex::encode(packed)
    }

    /// Replace the current state with the one encoded in `encoded`
    ///
    /// # Errors
    /// `InvalidStateString` on a wrong length, a non-hex character or a
    /// table that is not a permutation. The generator is left untouched.
    pub fn restore_compact(&mut self, encoded: &str) -> Result<()> {
        self.state = decode(encoded).map_err(|e| {
            log::warn!("rejected compact state restore: {}", e);
            e
        })?;
        log::debug!("restored compact state {}", encoded);
        Ok(())
    }
}

fn decode(encoded: &str) -> Result<PermutationState<COMPACT_TABLE_SIZE>> {
    if encoded.len() != COMPACT_STATE_LEN {
        return Err(GeneratorError::InvalidStateString(format!(
            "expected {} hex characters, got {}",
            COMPACT_STATE_LEN,
            encoded.len()
        )));
    }

    let packed =
        hex::decode(encoded).map_err(|e| GeneratorError::InvalidStateString(e.to_string()))?;

    let nibbles: Vec<u8> = packed[1..]
        .iter()
        .flat_map(|&b| [b >> 4, b & 0x0f])
        .collect();
    let s = check_permutation::<COMPACT_TABLE_SIZE>(&nibbles)
        .map_err(GeneratorError::InvalidStateString)?;

    Ok(PermutationState {
        s,
        i: packed[0] >> 4,
        j: packed[0] & 0x0f,
    })
}

impl KeystreamRng for CompactGenerator {
    /// Two nibble steps, high nibble first
    fn next_byte(&mut self) -> u8 {
        let high = self.next_nibble();
        let low = self.next_nibble();
        (high << 4) | low
    }
}
