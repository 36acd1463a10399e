//! Generator state snapshots
//!
//! `GeneratorState` is the save/resume contract: two cursors plus the
//! permutation table, always handed out and taken in as an owned copy.
//!
//! # JSON form
//!
//! ```json
//! {"i": 0, "j": 0, "s": [/* 256 integers */]}
//! ```
//!
//! Parsing is strict. Cursors must be integers in [0, 255] and `s` must be a
//! permutation of 0..=255; anything else fails with `InvalidState`.

use crate::error::{GeneratorError, Result};
use crate::rng::permutation::check_permutation;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Number of entries in the full-width permutation table
pub const TABLE_SIZE: usize = 256;

/// Snapshot of a full-width generator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct GeneratorState {
    pub i: u8,
    pub j: u8,
    #[serde(rename = "s")]
    pub permutation: Vec<u8>,
}

impl GeneratorState {
    /// Check that the permutation has 256 entries, each of 0..=255 exactly once
    pub fn validate(&self) -> Result<()> {
        self.table().map(|_| ())
    }

    /// Validated copy of the permutation as a fixed-size table
    pub(crate) fn table(&self) -> Result<[u8; TABLE_SIZE]> {
        check_permutation::<TABLE_SIZE>(&self.permutation).map_err(GeneratorError::InvalidState)
    }

    /// Parse and validate the JSON form
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| GeneratorError::InvalidState(format!("malformed JSON: {}", e)))?;
        Self::try_from(value)
    }

    /// Serialize to the JSON form
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| GeneratorError::InvalidState(e.to_string()))
    }
}

impl TryFrom<Value> for GeneratorState {
    type Error = GeneratorError;

    fn try_from(value: Value) -> Result<Self> {
        let i = cursor(&value, "i")?;
        let j = cursor(&value, "j")?;

        let permutation = value
            .get("s")
            .and_then(Value::as_array)
            .ok_or_else(|| {
                GeneratorError::InvalidState("state.s should be an array of length 256".to_string())
            })?
            .iter()
            .map(|entry| {
                entry
                    .as_u64()
                    .and_then(|v| u8::try_from(v).ok())
                    .ok_or_else(|| {
                        GeneratorError::InvalidState(format!(
                            "state.s entries should be integers [0, 255], got {}",
                            entry
                        ))
                    })
            })
            .collect::<Result<Vec<u8>>>()?;

        let state = GeneratorState { i, j, permutation };
        state.validate()?;
        Ok(state)
    }
}

fn cursor(value: &Value, name: &str) -> Result<u8> {
    value
        .get(name)
        .and_then(Value::as_u64)
        .and_then(|v| u8::try_from(v).ok())
        .ok_or_else(|| {
            GeneratorError::InvalidState(format!("state.{} should be integer [0, 255]", name))
        })
}
