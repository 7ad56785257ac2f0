//! Request types for [`Sampler`](super::Sampler) operations.

use serde::{Deserialize, Serialize};

/// Letter casing filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Casing {
    Upper,
    Lower,
}

/// Bounds and lattice step for [`Sampler::number`](super::Sampler::number).
///
/// A missing `min` defaults to `0`, a missing `max` to `100`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NumberOptions {
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Distance between candidate values, `1` when absent.
    pub precision: Option<f64>,
}

impl NumberOptions {
    /// Values on `[0, max]`.
    pub fn max(max: f64) -> Self {
        Self {
            max: Some(max),
            ..Self::default()
        }
    }

    /// Values on `[min, max]`.
    pub fn range(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            precision: None,
        }
    }

    pub fn with_precision(mut self, precision: f64) -> Self {
        self.precision = Some(precision);
        self
    }
}

/// Same shape as [`NumberOptions`]; the default step is `0.01`.
pub type FloatOptions = NumberOptions;

/// Character class selection for [`Sampler::character`](super::Sampler::character).
///
/// With no class flag set, letters and digits are used. An explicit `pool`
/// overrides every other option.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterOptions {
    #[serde(default)]
    pub alpha: bool,
    #[serde(default)]
    pub numeric: bool,
    #[serde(default)]
    pub symbols: bool,
    pub casing: Option<Casing>,
    pub pool: Option<String>,
}

impl CharacterOptions {
    /// Draw from exactly the characters of `pool`.
    pub fn pool(pool: impl Into<String>) -> Self {
        Self {
            pool: Some(pool.into()),
            ..Self::default()
        }
    }
}

/// Epoch millisecond bounds for [`Sampler::datetime`](super::Sampler::datetime).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateTimeOptions {
    pub min: Option<i64>,
    pub max: Option<i64>,
}

/// Options for [`Sampler::hash`](super::Sampler::hash).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashOptions {
    pub length: usize,
    pub casing: Option<Casing>,
}

impl Default for HashOptions {
    fn default() -> Self {
        Self {
            length: 40,
            casing: None,
        }
    }
}
