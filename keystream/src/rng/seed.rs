//! Seed keys
//!
//! A seed is either text or an explicit list of integers. Both normalize to
//! a non-empty byte key (every value reduced modulo 256) that is consumed
//! once by key scheduling and not retained.
//!
//! Loosely-typed inputs (JSON documents, float arrays coming from scripting
//! front ends) are validated strictly here: non-finite, fractional and
//! non-numeric elements are rejected rather than coerced.

use crate::error::{GeneratorError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Largest magnitude at which every integer is exactly representable in f64
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Seed key for a keystream generator
///
/// # Example
/// ```
/// use rc4_keystream::Seed;
///
/// let text = Seed::from("my seed");
/// let ints = Seed::from(vec![1, 2, 3]);
/// assert_eq!(ints.key_bytes().unwrap(), vec![1, 2, 3]);
/// assert_eq!(text.key_bytes().unwrap().len(), 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub enum Seed {
    /// Each UTF-16 code unit contributes `unit % 256`
    Text(String),
    /// Each integer contributes `value mod 256` (Euclidean, so negatives wrap)
    Integers(Vec<i64>),
}

impl Seed {
    /// Build an integer seed from floating-point numbers.
    ///
    /// Every element must be a finite integer no larger in magnitude than
    /// 2^53 - 1. `NaN`, infinities and fractional values fail with
    /// `InvalidSeed`.
    pub fn from_numbers(values: &[f64]) -> Result<Self> {
        values
            .iter()
            .map(|&v| {
                integral(v).ok_or_else(|| {
                    GeneratorError::InvalidSeed(format!("not an array of integers: {}", v))
                })
            })
            .collect::<Result<Vec<_>>>()
            .map(Seed::Integers)
    }

    /// Normalize to the byte key consumed by key scheduling.
    ///
    /// Fails with `InvalidSeed` when the key would be empty.
    pub fn key_bytes(&self) -> Result<Vec<u8>> {
        let key: Vec<u8> = match self {
            Seed::Text(text) => text.encode_utf16().map(|unit| (unit % 256) as u8).collect(),
            Seed::Integers(values) => values.iter().map(|v| v.rem_euclid(256) as u8).collect(),
        };

        if key.is_empty() {
            return Err(GeneratorError::InvalidSeed("key must not be empty".to_string()));
        }
        Ok(key)
    }
}

/// Convert `v` to i64 when it is a finite integer in the exactly-representable range
pub(crate) fn integral(v: f64) -> Option<i64> {
    if v.is_finite() && v.fract() == 0.0 && v.abs() <= MAX_SAFE_INTEGER {
        Some(v as i64)
    } else {
        None
    }
}

impl From<&str> for Seed {
    fn from(text: &str) -> Self {
        Seed::Text(text.to_string())
    }
}

impl From<String> for Seed {
    fn from(text: String) -> Self {
        Seed::Text(text)
    }
}

impl From<Vec<i64>> for Seed {
    fn from(values: Vec<i64>) -> Self {
        Seed::Integers(values)
    }
}

impl From<&[u8]> for Seed {
    fn from(bytes: &[u8]) -> Self {
        Seed::Integers(bytes.iter().map(|&b| b as i64).collect())
    }
}

impl TryFrom<Value> for Seed {
    type Error = GeneratorError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::String(text) => Ok(Seed::Text(text)),
            Value::Array(items) => items
                .iter()
                .map(json_integer)
                .collect::<Result<Vec<_>>>()
                .map(Seed::Integers),
            other => Err(GeneratorError::InvalidSeed(format!(
                "expected a string or an array of integers, got {}",
                other
            ))),
        }
    }
}

fn json_integer(item: &Value) -> Result<i64> {
    let reject = || GeneratorError::InvalidSeed(format!("not an array of integers: {}", item));

    let number = match item {
        Value::Number(number) => number,
        _ => return Err(reject()),
    };
    if let Some(v) = number.as_i64() {
        return Ok(v);
    }
    if let Some(v) = number.as_u64() {
        // Only the residue matters to key scheduling
        return Ok((v % 256) as i64);
    }
    number.as_f64().and_then(integral).ok_or_else(reject)
}

impl From<Seed> for Value {
    fn from(seed: Seed) -> Self {
        match seed {
            Seed::Text(text) => Value::String(text),
            Seed::Integers(values) => Value::Array(values.into_iter().map(Value::from).collect()),
        }
    }
}
