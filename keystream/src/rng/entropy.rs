//! Entropy sources for autoseeding
//!
//! Construction without a key draws a fresh random key from an
//! `EntropySource`. The source is injected so tests can substitute a fixed
//! byte pattern; `OsEntropy` is the production default.

use crate::error::{GeneratorError, Result};

/// Number of key bytes drawn when autoseeding
pub const AUTOSEED_KEY_LEN: usize = 32;

/// Anything that can fill a buffer with unpredictable bytes
pub trait EntropySource {
    /// Fill `buf` completely or fail with `GeneratorError::Entropy`
    fn fill(&mut self, buf: &mut [u8]) -> Result<()>;
}

/// Operating system randomness (via `getrandom`)
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
        getrandom::getrandom(buf).map_err(|e| GeneratorError::Entropy(e.to_string()))
    }
}

/// Draw an autoseed key from `source`
pub(crate) fn draw_key<E: EntropySource + ?Sized>(source: &mut E) -> Result<[u8; AUTOSEED_KEY_LEN]> {
    let mut key = [0u8; AUTOSEED_KEY_LEN];
    source.fill(&mut key)?;
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_entropy_fills_buffer() {
        let mut a = [0u8; 64];
        let mut b = [0u8; 64];
        OsEntropy.fill(&mut a).unwrap();
        OsEntropy.fill(&mut b).unwrap();
        assert_ne!(a, b, "two 64-byte OS draws should differ");
    }

    #[test]
    fn test_draw_key_propagates_failure() {
        struct Broken;
        impl EntropySource for Broken {
            fn fill(&mut self, _buf: &mut [u8]) -> Result<()> {
                Err(GeneratorError::Entropy("unavailable".to_string()))
            }
        }

        assert_eq!(
            draw_key(&mut Broken),
            Err(GeneratorError::Entropy("unavailable".to_string()))
        );
    }
}
