//! Sampling primitives built on top of the engine.
//!
//! A [`Sampler`] turns raw engine output into bounded integers, lattice
//! numbers, weighted booleans, pool selections, characters and dates. Every
//! primitive locks the engine only for the draws it makes, so samplers that
//! share one engine interleave at draw granularity.
//!
//! # Example
//!
//! ```rust
//! use datamock_core::sampling::{NumberOptions, Sampler};
//!
//! let sampler = Sampler::from_seed(Some(1));
//! let roll = sampler.integer(1, 6);
//! assert!((1..=6).contains(&roll));
//!
//! let price = sampler.float(NumberOptions::range(1.0, 5.0)).unwrap();
//! assert!((1.0..=5.0).contains(&price));
//! ```

mod options;

pub use options::{
    Casing, CharacterOptions, DateTimeOptions, FloatOptions, HashOptions, NumberOptions,
};

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use rand::RngCore;
use uuid::Uuid;

use crate::chars::{ALPHANUMERIC, CHARS_LOWER, CHARS_UPPER, HEX_POOL, NUMBERS, SYMBOLS};
use crate::error::{SampleError, SampleResult};
use crate::registry::{SeedRegistry, SharedEngine};

/// Half-width of the default [`Sampler::datetime`] window: ten years.
pub const DEFAULT_DATETIME_WINDOW_MS: i64 = 10 * 365 * 24 * 60 * 60 * 1000;

const DEFAULT_NUMBER_MAX: f64 = 100.0;
const DEFAULT_FLOAT_PRECISION: f64 = 0.01;
const LATTICE_EPSILON: f64 = 1e-9;
const MAX_DECIMALS: usize = 15;

/// Shapes engine output into typed values.
#[derive(Clone, Debug)]
pub struct Sampler {
    engine: SharedEngine,
    registry: Option<Arc<SeedRegistry>>,
}

impl Sampler {
    /// Sampler drawing from the registry's engine for `seed`.
    pub fn new(registry: Arc<SeedRegistry>, seed: Option<u32>) -> Self {
        let engine = registry.get_or_create(seed);
        Self {
            engine,
            registry: Some(registry),
        }
    }

    /// Sampler over a private engine. `None` uses a time-derived seed.
    pub fn from_seed(seed: Option<u32>) -> Self {
        Self::from_engine(private_engine(seed))
    }

    /// Sampler over an existing engine handle.
    pub fn from_engine(engine: SharedEngine) -> Self {
        Self {
            engine,
            registry: None,
        }
    }

    pub fn engine(&self) -> &SharedEngine {
        &self.engine
    }

    pub fn registry(&self) -> Option<&Arc<SeedRegistry>> {
        self.registry.as_ref()
    }

    /// Re-acquire the engine for `seed`.
    ///
    /// Registry-backed samplers get the registry's engine for that seed, so a
    /// seed seen before continues its existing stream. Standalone samplers get
    /// a brand new engine.
    pub fn seed(&mut self, seed: Option<u32>) {
        self.engine = match &self.registry {
            Some(registry) => registry.get_or_create(seed),
            None => private_engine(seed),
        };
    }

    /// Uniform integer on `[min, max]`, both ends inclusive.
    ///
    /// `min > max` returns `min` without drawing.
    pub fn integer(&self, min: i64, max: i64) -> i64 {
        if min >= max {
            return min;
        }
        // Widened so the full i64 range keeps both halves reachable.
        let span = i128::from(max) - i128::from(min) + 1;
        let unit = self.engine.with(|mt| mt.real_half_open());
        let offset = (unit * span as f64).floor() as i128;
        let value = (i128::from(min) + offset).min(i128::from(max));
        value as i64
    }

    /// Uniform pick among `min + k * precision` for every lattice point
    /// inside `[min, max]`, rounded to the step's decimal places.
    pub fn number(&self, options: NumberOptions) -> SampleResult<f64> {
        self.lattice(options, 1.0)
    }

    /// [`Sampler::number`] with a default precision of `0.01`.
    pub fn float(&self, options: FloatOptions) -> SampleResult<f64> {
        self.lattice(options, DEFAULT_FLOAT_PRECISION)
    }

    fn lattice(&self, options: NumberOptions, default_step: f64) -> SampleResult<f64> {
        let (min, max) = match (options.min, options.max) {
            (Some(min), Some(max)) => (min, max),
            (None, Some(max)) => (0.0, max),
            (Some(min), None) => (min, DEFAULT_NUMBER_MAX),
            (None, None) => (0.0, DEFAULT_NUMBER_MAX),
        };
        let step = options.precision.unwrap_or(default_step);
        if !step.is_finite() || step <= 0.0 {
            return Err(SampleError::InvalidPrecision(step));
        }

        let decimals = decimal_places(step).max(decimal_places(min));
        if min >= max {
            return Ok(round_to(min, decimals));
        }

        let steps = ((max - min) / step + LATTICE_EPSILON).floor() as i64;
        let k = self.integer(0, steps);
        let value = round_to(min + k as f64 * step, decimals);
        Ok(value.min(max))
    }

    /// `true` with `likelihood` percent probability.
    pub fn boolean(&self, likelihood: i64) -> SampleResult<bool> {
        if !(0..=100).contains(&likelihood) {
            return Err(SampleError::LikelihoodOutOfRange(likelihood));
        }
        Ok(self.integer(0, 99) < likelihood)
    }

    /// Always `false`. Draws nothing.
    pub fn falsy(&self) -> bool {
        false
    }

    /// One element of `pool`.
    pub fn pick_one<'a, T>(&self, pool: &'a [T]) -> SampleResult<&'a T> {
        if pool.is_empty() {
            return Err(SampleError::EmptyPool);
        }
        let index = self.integer(0, pool.len() as i64 - 1) as usize;
        pool.get(index).ok_or(SampleError::EmptyPool)
    }

    /// Up to `count` distinct positions of `pool`, in draw order.
    ///
    /// `count <= 0` gives an empty list; counts past the pool size are
    /// clamped to it.
    pub fn pick<T: Clone>(&self, pool: &[T], count: i64) -> Vec<T> {
        if count <= 0 || pool.is_empty() {
            return Vec::new();
        }
        let wanted = (count as usize).min(pool.len());
        let mut remaining: Vec<usize> = (0..pool.len()).collect();
        let mut picked = Vec::with_capacity(wanted);
        while picked.len() < wanted {
            let slot = self.integer(0, remaining.len() as i64 - 1) as usize;
            let index = remaining.remove(slot);
            picked.push(pool[index].clone());
        }
        picked
    }

    /// One character from the class described by `options`.
    pub fn character(&self, options: &CharacterOptions) -> SampleResult<char> {
        let pool = character_pool(options);
        self.pick_one(&pool).copied()
    }

    /// `length` characters from `pool`, letters and digits when absent.
    pub fn string(&self, length: usize, pool: Option<&str>) -> SampleResult<String> {
        let chars: Vec<char> = pool.unwrap_or(ALPHANUMERIC).chars().collect();
        if length > 0 && chars.is_empty() {
            return Err(SampleError::EmptyPool);
        }
        (0..length)
            .map(|_| self.pick_one(&chars).copied())
            .collect()
    }

    /// Hex digest-looking string.
    pub fn hash(&self, options: HashOptions) -> String {
        let chars: Vec<char> = HEX_POOL.chars().collect();
        let digest: String = (0..options.length)
            .map(|_| chars[self.integer(0, chars.len() as i64 - 1) as usize])
            .collect();
        match options.casing {
            Some(Casing::Upper) => digest.to_uppercase(),
            _ => digest,
        }
    }

    /// `0x` followed by `length` lowercase hex digits.
    pub fn hexadecimal(&self, length: usize) -> String {
        let digits = self.hash(HashOptions {
            length,
            casing: Some(Casing::Lower),
        });
        format!("0x{digits}")
    }

    /// Version 4 UUID built from engine bytes.
    pub fn uuid(&self) -> Uuid {
        let mut bytes = [0u8; 16];
        self.engine.with(|mt| mt.fill_bytes(&mut bytes));

        bytes[6] = (bytes[6] & 0x0f) | 0x40;
        bytes[8] = (bytes[8] & 0x3f) | 0x80;
        Uuid::from_bytes(bytes)
    }

    /// Uniform instant with millisecond resolution.
    ///
    /// A missing bound sits [`DEFAULT_DATETIME_WINDOW_MS`] away from the
    /// other bound, or from the present when both are missing.
    pub fn datetime(&self, options: DateTimeOptions) -> SampleResult<DateTime<Utc>> {
        let (min, max) = match (options.min, options.max) {
            (Some(min), Some(max)) => (min, max),
            (Some(min), None) => (min, min.saturating_add(DEFAULT_DATETIME_WINDOW_MS)),
            (None, Some(max)) => (max.saturating_sub(DEFAULT_DATETIME_WINDOW_MS), max),
            (None, None) => {
                let now = Utc::now().timestamp_millis();
                (
                    now - DEFAULT_DATETIME_WINDOW_MS,
                    now + DEFAULT_DATETIME_WINDOW_MS,
                )
            }
        };
        let millis = self.integer(min, max);
        Utc.timestamp_millis_opt(millis)
            .single()
            .ok_or(SampleError::TimestampOutOfRange(millis))
    }
}

fn private_engine(seed: Option<u32>) -> SharedEngine {
    match seed {
        Some(seed) => SharedEngine::seeded(seed),
        None => SharedEngine::new(crate::engine::Mt19937::with_default_seed()),
    }
}

fn character_pool(options: &CharacterOptions) -> Vec<char> {
    if let Some(pool) = &options.pool {
        return pool.chars().collect();
    }

    let any_class = options.alpha || options.numeric || options.symbols;
    let (alpha, numeric) = if any_class {
        (options.alpha, options.numeric)
    } else {
        (true, true)
    };

    let mut pool = String::new();
    if alpha {
        match options.casing {
            Some(Casing::Upper) => pool.push_str(CHARS_UPPER),
            Some(Casing::Lower) => pool.push_str(CHARS_LOWER),
            None => {
                pool.push_str(CHARS_LOWER);
                pool.push_str(CHARS_UPPER);
            }
        }
    }
    if numeric {
        pool.push_str(NUMBERS);
    }
    if options.symbols {
        pool.push_str(SYMBOLS);
    }
    pool.chars().collect()
}

/// Digits after the decimal point in the shortest representation of `value`.
fn decimal_places(value: f64) -> usize {
    let text = format!("{value}");
    text.split_once('.')
        .map(|(_, fraction)| fraction.len().min(MAX_DECIMALS))
        .unwrap_or(0)
}

fn round_to(value: f64, decimals: usize) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
