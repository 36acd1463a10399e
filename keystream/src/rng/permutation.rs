//! Permutation-table state machine shared by the full-width and compact
//! generators
//!
//! `PermutationState<N>` is the whole generator: an N-entry bijection of
//! `0..N` plus two cursors. Key scheduling builds it, `step` advances it by
//! one keystream output. Both transitions only ever swap two entries, so the
//! bijection invariant can never be broken from inside this module.

/// Permutation table plus the two keystream cursors
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PermutationState<const N: usize> {
    pub(crate) s: [u8; N],
    pub(crate) i: u8,
    pub(crate) j: u8,
}

impl<const N: usize> PermutationState<N> {
    /// Run key scheduling over `key` and start both cursors at zero.
    ///
    /// The scheduling loop covers indices `0..N-1` (one short of the table
    /// size). Every published output depends on that exact iteration count.
    ///
    /// `key` must be non-empty; `Seed` normalization guarantees this.
    pub(crate) fn scheduled(key: &[u8]) -> Self {
        debug_assert!(!key.is_empty(), "key scheduling needs a non-empty key");

        let mut s = identity::<N>();
        let mut j = 0usize;
        for i in 0..N - 1 {
            j = (j + s[i] as usize + key[i % key.len()] as usize) % N;
            s.swap(i, j);
        }

        Self { s, i: 0, j: 0 }
    }

    /// Advance one step and return the next keystream value in `0..N`
    pub(crate) fn step(&mut self) -> u8 {
        let i = (self.i as usize + 1) % N;
        let j = (self.j as usize + self.s[i] as usize) % N;
        self.s.swap(i, j);
        self.i = i as u8;
        self.j = j as u8;

        self.s[(self.s[i] as usize + self.s[j] as usize) % N]
    }
}

fn identity<const N: usize>() -> [u8; N] {
    let mut s = [0u8; N];
    for (k, slot) in s.iter_mut().enumerate() {
        *slot = k as u8;
    }
    s
}

/// Check that `values` is a bijection of `0..N`.
///
/// Returns a human-readable reason on failure so callers can wrap it in the
/// error variant that fits their input format.
pub(crate) fn check_permutation<const N: usize>(values: &[u8]) -> Result<[u8; N], String> {
    if values.len() != N {
        return Err(format!(
            "permutation should have length {}, got {}",
            N,
            values.len()
        ));
    }

    let mut seen = [false; N];
    for &value in values {
        let slot = seen
            .get_mut(value as usize)
            .ok_or_else(|| format!("permutation value {} is outside 0..{}", value, N))?;
        if *slot {
            return Err(format!("permutation value {} appears more than once", value));
        }
        *slot = true;
    }

    let mut table = [0u8; N];
    table.copy_from_slice(values);
    Ok(table)
}
