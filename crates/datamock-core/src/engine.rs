//! MT19937 pseudo-random number engine.
//!
//! A bit-exact implementation of the 32-bit Mersenne Twister (Matsumoto and
//! Nishimura, 1998). Every draw is pure integer arithmetic on `u32` words, so
//! a given seed produces the same stream on every platform.
//!
//! ```rust
//! use datamock_core::engine::Mt19937;
//!
//! let mut mt = Mt19937::new(1);
//! assert_eq!(mt.next_u32(), 1791095845);
//! ```

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use chrono::Utc;
use rand::{RngCore, SeedableRng};

/// Number of words in the state array.
pub const STATE_SIZE: usize = 624;

const SHIFT_SIZE: usize = 397;
const MATRIX_A: u32 = 0x9908_b0df;
const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7fff_ffff;

/// Seed used when drawing from an engine that was never initialized.
pub const DEFAULT_SEED: u32 = 5489;

/// Default exclusive upper bound of [`Mt19937::next_int_default`].
pub const DEFAULT_INT_MAX: i64 = 32768;

/// Cursor value marking an engine that has never been initialized.
const UNINITIALIZED: usize = STATE_SIZE + 1;

static SEED_COUNTER: AtomicU32 = AtomicU32::new(0);

/// Generate a fresh, time-derived seed.
///
/// Not high-entropy. Consecutive calls within one process always differ
/// because the clock reading is mixed with a process-wide counter.
pub fn default_seed() -> u32 {
    let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default() as u64;
    let clock = (nanos ^ (nanos >> 32)) as u32;
    let count = SEED_COUNTER.fetch_add(1, Ordering::Relaxed);
    clock ^ count.wrapping_mul(0x9e37_79b9).rotate_left(16) ^ count
}

/// Truncate an arbitrary integer seed to the engine's 32-bit seed space.
pub fn coerce_seed(seed: u64) -> u32 {
    seed as u32
}

/// Mersenne Twister MT19937 (32-bit variant).
#[derive(Clone)]
pub struct Mt19937 {
    state: [u32; STATE_SIZE],
    cursor: usize,
}

impl Mt19937 {
    /// Create an engine initialized with `seed`.
    pub fn new(seed: u32) -> Self {
        let mut mt = Self::unseeded();
        mt.init_gen_rand(seed);
        mt
    }

    /// Create an engine seeded from [`default_seed`].
    pub fn with_default_seed() -> Self {
        Self::new(default_seed())
    }

    /// Create an engine that will seed itself with [`DEFAULT_SEED`] on the
    /// first draw.
    pub const fn unseeded() -> Self {
        Self {
            state: [0; STATE_SIZE],
            cursor: UNINITIALIZED,
        }
    }

    /// Index of the next state word to be tempered.
    ///
    /// `624` means the state is due for regeneration, `625` means the engine
    /// was never initialized.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether any initialization has happened yet.
    pub fn is_initialized(&self) -> bool {
        self.cursor != UNINITIALIZED
    }

    /// Read-only view of the raw state array.
    pub fn state(&self) -> &[u32; STATE_SIZE] {
        &self.state
    }

    /// Initialize the state from a single 32-bit seed.
    pub fn init_gen_rand(&mut self, seed: u32) {
        self.state[0] = seed;
        for i in 1..STATE_SIZE {
            let prev = self.state[i - 1];
            self.state[i] = 1_812_433_253u32
                .wrapping_mul(prev ^ (prev >> 30))
                .wrapping_add(i as u32);
        }
        self.cursor = STATE_SIZE;
    }

    /// Initialize the state from a key of 32-bit words.
    ///
    /// An empty key behaves like a key holding a single zero word.
    pub fn init_by_array(&mut self, key: &[u32]) {
        let key: &[u32] = if key.is_empty() { &[0] } else { key };
        self.init_gen_rand(19_650_218);

        let mut i = 1usize;
        let mut j = 0usize;
        for _ in 0..STATE_SIZE.max(key.len()) {
            let prev = self.state[i - 1];
            self.state[i] = (self.state[i] ^ (prev ^ (prev >> 30)).wrapping_mul(1_664_525))
                .wrapping_add(key[j])
                .wrapping_add(j as u32);
            i += 1;
            j += 1;
            if i >= STATE_SIZE {
                self.state[0] = self.state[STATE_SIZE - 1];
                i = 1;
            }
            if j >= key.len() {
                j = 0;
            }
        }
        for _ in 0..STATE_SIZE - 1 {
            let prev = self.state[i - 1];
            self.state[i] = (self.state[i]
                ^ (prev ^ (prev >> 30)).wrapping_mul(1_566_083_941))
            .wrapping_sub(i as u32);
            i += 1;
            if i >= STATE_SIZE {
                self.state[0] = self.state[STATE_SIZE - 1];
                i = 1;
            }
        }

        // MSB is 1, assuring a non-zero initial array
        self.state[0] = 0x8000_0000;
    }

    /// Regenerate the whole state array.
    fn twist(&mut self) {
        for k in 0..STATE_SIZE {
            let y = (self.state[k] & UPPER_MASK) | (self.state[(k + 1) % STATE_SIZE] & LOWER_MASK);
            let mag = if y & 1 == 1 { MATRIX_A } else { 0 };
            self.state[k] = self.state[(k + SHIFT_SIZE) % STATE_SIZE] ^ (y >> 1) ^ mag;
        }
        self.cursor = 0;
    }

    fn extract(&mut self) -> u32 {
        if self.cursor >= STATE_SIZE {
            if self.cursor == UNINITIALIZED {
                self.init_gen_rand(DEFAULT_SEED);
            }
            self.twist();
        }

        let mut y = self.state[self.cursor];
        self.cursor += 1;

        y ^= y >> 11;
        y ^= (y << 7) & 0x9d2c_5680;
        y ^= (y << 15) & 0xefc6_0000;
        y ^ (y >> 18)
    }

    /// Next tempered word on `[0, 0xffffffff]`.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        self.extract()
    }

    /// Next value on `[0, 0x7fffffff]`.
    #[inline]
    pub fn next_i31(&mut self) -> u32 {
        self.extract() >> 1
    }

    /// Real on the closed interval `[0, 1]`.
    pub fn real_closed(&mut self) -> f64 {
        f64::from(self.extract()) * (1.0 / 4_294_967_295.0)
    }

    /// Real on the half-open interval `[0, 1)`.
    pub fn real_half_open(&mut self) -> f64 {
        f64::from(self.extract()) * (1.0 / 4_294_967_296.0)
    }

    /// Real on the open interval `(0, 1)`.
    pub fn real_open(&mut self) -> f64 {
        (f64::from(self.extract()) + 0.5) * (1.0 / 4_294_967_296.0)
    }

    /// Real on `[0, 1)` with 53-bit resolution. Consumes two words.
    pub fn res53(&mut self) -> f64 {
        let a = f64::from(self.extract() >> 5);
        let b = f64::from(self.extract() >> 6);
        (a * 67_108_864.0 + b) * (1.0 / 9_007_199_254_740_992.0)
    }

    /// Integer computed as `floor(real_half_open() * (max - min) + min)`.
    ///
    /// With `min == max` this returns `min`. With `min > max` the result lands
    /// in `[max, min]`; callers that need ordering must sort their bounds.
    pub fn next_int(&mut self, max: i64, min: i64) -> i64 {
        let span = (max as f64) - (min as f64);
        (self.real_half_open() * span + min as f64).floor() as i64
    }

    /// [`Mt19937::next_int`] over `[0, 32768)`.
    pub fn next_int_default(&mut self) -> i64 {
        self.next_int(DEFAULT_INT_MAX, 0)
    }
}

impl Default for Mt19937 {
    fn default() -> Self {
        Self::unseeded()
    }
}

impl fmt::Debug for Mt19937 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mt19937")
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}

impl RngCore for Mt19937 {
    fn next_u32(&mut self) -> u32 {
        self.extract()
    }

    fn next_u64(&mut self) -> u64 {
        let hi = u64::from(self.extract());
        let lo = u64::from(self.extract());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let word = self.extract().to_le_bytes();
            chunk.copy_from_slice(&word[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Mt19937 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }

    /// Truncates instead of expanding, so `seed_from_u64(s)` and
    /// `Mt19937::new(s as u32)` agree.
    fn seed_from_u64(state: u64) -> Self {
        Self::new(coerce_seed(state))
    }
}
