//! Deterministic random number generation over the RC4 keystream
//!
//! `KeystreamGenerator` is the full-width generator (256-entry table);
//! `CompactGenerator` is the 16-entry nibble variant whose whole state fits
//! in an 18-character string. Both expose their outputs through the
//! `KeystreamRng` trait.

mod compact;
mod derived;
mod entropy;
mod keystream;
mod permutation;
mod seed;
mod state;

pub use compact::{CompactGenerator, COMPACT_STATE_LEN, COMPACT_TABLE_SIZE};
pub use derived::KeystreamRng;
pub use entropy::{EntropySource, OsEntropy, AUTOSEED_KEY_LEN};
pub use keystream::KeystreamGenerator;
pub use seed::Seed;
pub use state::{GeneratorState, TABLE_SIZE};
