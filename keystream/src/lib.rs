//! RC4 Keystream Generator
//!
//! Deterministic pseudo-random bytes, floats and bounded integers driven by
//! the RC4 keystream state machine. This is a generator, not a cipher: no
//! confidentiality claims are made.
//!
//! # Architecture
//!
//! - **rng**: Key scheduling, the keystream step, derived outputs and
//!   snapshot/restore (full-width and compact nibble variant)
//! - **config**: JSON-driven generator construction
//! - **error**: Error taxonomy shared by every operation
//!
//! # Critical Invariants
//!
//! 1. The permutation table is a bijection at all times
//! 2. Same seed → same sequence, on every platform
//! 3. Restore operations validate fully before mutating

// Module declarations
pub mod config;
pub mod error;
pub mod rng;

// Re-exports for convenience
pub use config::GeneratorConfig;
pub use error::{GeneratorError, Result};
pub use rng::{
    CompactGenerator, EntropySource, GeneratorState, KeystreamGenerator, KeystreamRng, OsEntropy,
    Seed, AUTOSEED_KEY_LEN, COMPACT_STATE_LEN, TABLE_SIZE,
};
