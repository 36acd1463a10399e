//! Derived outputs
//!
//! Everything here is built from `next_byte` alone, so the full-width and
//! compact generators share one definition of floats and bounded integers.
//!
//! # Consumption per call
//!
//! | Call                     | Byte steps |
//! |--------------------------|------------|
//! | `next_byte`              | 1          |
//! | `next_u32` / `next_float`| 4          |
//! | `next_int*`              | 4 (one float) |
//! | `fill_bytes(buf)`        | `buf.len()` |
//!
//! Rejected calls consume nothing.

use crate::error::{GeneratorError, Result};
use crate::rng::seed::integral;

/// 2^32, the float divisor
const TWO_POW_32: f64 = 4_294_967_296.0;

/// Keystream-driven random outputs
///
/// # Example
/// ```
/// use rc4_keystream::{KeystreamGenerator, KeystreamRng};
///
/// let mut rng = KeystreamGenerator::new("my seed").unwrap();
/// let byte = rng.next_byte();
/// let p = rng.next_float();
/// assert!(p >= 0.0 && p < 1.0);
/// let die = rng.next_int_range(1, 6).unwrap();
/// assert!((1..=6).contains(&die));
/// # let _ = byte;
/// ```
pub trait KeystreamRng {
    /// Advance one keystream byte
    fn next_byte(&mut self) -> u8;

    /// Four bytes a, b, c, d composed big-endian: `((a*256+b)*256+c)*256+d`
    fn next_u32(&mut self) -> u32 {
        let a = self.next_byte();
        let b = self.next_byte();
        let c = self.next_byte();
        let d = self.next_byte();
        u32::from_be_bytes([a, b, c, d])
    }

    /// Float in [0, 1) with 2^-32 resolution
    fn next_float(&mut self) -> f64 {
        self.next_u32() as f64 / TWO_POW_32
    }

    /// Fill `dest` with consecutive keystream bytes
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for byte in dest.iter_mut() {
            *byte = self.next_byte();
        }
    }

    /// Uniform integer in [0, max]
    fn next_int(&mut self, max: i64) -> Result<i64> {
        self.next_int_range(0, max)
    }

    /// Uniform integer in [min, max]
    ///
    /// Computed as `min + floor(next_float() * (max - min + 1))`. Spans wider
    /// than 2^32 are reachable but not every value in them is.
    fn next_int_range(&mut self, min: i64, max: i64) -> Result<i64> {
        if min > max {
            return Err(GeneratorError::InvalidRange { min, max });
        }

        let span = (max as i128 - min as i128 + 1) as f64;
        let offset = (self.next_float() * span).floor() as i128;
        // f64 rounding on huge spans can land exactly on `span`
        Ok((min as i128 + offset).min(max as i128) as i64)
    }

    /// Bounded integer from loosely-typed bounds: `[max]` or `[min, max]`.
    ///
    /// Fails with `InvalidArgument` for any other arity or for a bound that
    /// is not a finite integer, and with `InvalidRange` when `min > max`.
    fn next_integer(&mut self, bounds: &[f64]) -> Result<i64> {
        let (min, max) = match bounds {
            [max] => (0, integer_bound(*max)?),
            [min, max] => (integer_bound(*min)?, integer_bound(*max)?),
            _ => {
                return Err(GeneratorError::InvalidArgument(format!(
                    "expected 1 or 2 bounds, got {}",
                    bounds.len()
                )))
            }
        };
        self.next_int_range(min, max)
    }
}

fn integer_bound(value: f64) -> Result<i64> {
    integral(value).ok_or_else(|| {
        GeneratorError::InvalidArgument(format!("bound {} is not an integer", value))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed byte sequence
    struct Scripted {
        bytes: Vec<u8>,
        pos: usize,
    }

    impl Scripted {
        fn new(bytes: &[u8]) -> Self {
            Self {
                bytes: bytes.to_vec(),
                pos: 0,
            }
        }
    }

    impl KeystreamRng for Scripted {
        fn next_byte(&mut self) -> u8 {
            let b = self.bytes[self.pos % self.bytes.len()];
            self.pos += 1;
            b
        }
    }

    #[test]
    fn test_u32_is_big_endian_in_call_order() {
        let mut rng = Scripted::new(&[0x12, 0x34, 0x56, 0x78]);
        assert_eq!(rng.next_u32(), 0x1234_5678);
    }

    #[test]
    fn test_float_extremes() {
        assert_eq!(Scripted::new(&[0]).next_float(), 0.0);

        let max = Scripted::new(&[0xff]).next_float();
        assert!(max < 1.0);
        assert_eq!(max, (TWO_POW_32 - 1.0) / TWO_POW_32);

        assert_eq!(Scripted::new(&[0x80, 0, 0, 0]).next_float(), 0.5);
    }

    #[test]
    fn test_int_range_endpoints() {
        assert_eq!(Scripted::new(&[0]).next_int_range(-5, 5).unwrap(), -5);
        assert_eq!(Scripted::new(&[0xff]).next_int_range(-5, 5).unwrap(), 5);
        assert_eq!(Scripted::new(&[0xff]).next_int_range(7, 7).unwrap(), 7);
    }

    #[test]
    fn test_int_range_full_i64_span_clamped() {
        let v = Scripted::new(&[0xff])
            .next_int_range(i64::MIN, i64::MAX)
            .unwrap();
        assert!(v <= i64::MAX);
    }

    #[test]
    fn test_int_consumes_exactly_four_bytes() {
        let mut rng = Scripted::new(&[1, 2, 3, 4, 5, 6, 7, 8, 9]);
        rng.next_int(10).unwrap();
        assert_eq!(rng.pos, 4);
    }

    #[test]
    fn test_rejected_calls_consume_nothing() {
        let mut rng = Scripted::new(&[1, 2, 3]);
        assert!(rng.next_int_range(3, 2).is_err());
        assert!(rng.next_integer(&[]).is_err());
        assert!(rng.next_integer(&[0.5]).is_err());
        assert_eq!(rng.pos, 0);
    }

    #[test]
    fn test_next_integer_arity_and_types() {
        let mut rng = Scripted::new(&[9, 8, 7]);
        assert!(matches!(
            rng.next_integer(&[]),
            Err(GeneratorError::InvalidArgument(_))
        ));
        assert!(matches!(
            rng.next_integer(&[1.0, 2.0, 3.0]),
            Err(GeneratorError::InvalidArgument(_))
        ));
        assert!(matches!(
            rng.next_integer(&[f64::NAN]),
            Err(GeneratorError::InvalidArgument(_))
        ));
        assert!(matches!(
            rng.next_integer(&[1.0, 2.5]),
            Err(GeneratorError::InvalidArgument(_))
        ));
        assert_eq!(
            rng.next_integer(&[5.0, 1.0]),
            Err(GeneratorError::InvalidRange { min: 5, max: 1 })
        );
        assert_eq!(
            rng.next_integer(&[-1.0]),
            Err(GeneratorError::InvalidRange { min: 0, max: -1 })
        );
    }
}
