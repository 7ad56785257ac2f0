//! Deterministic randomness core for datamock.
//!
//! This crate provides:
//!
//! - [`Mt19937`] - Bit-exact 32-bit Mersenne Twister engine
//! - [`SeedRegistry`] - One shared engine per seed
//! - [`Sampler`] - Bounded integers, lattice numbers, pool selection, dates
//!
//! # Architecture
//!
//! ```text
//! datamock-core (this crate)
//!    │
//!    ├─── datamock-generator  (consumers, locale data, DataMock facade)
//!    │
//!    └─── datamock            (command-line front-end)
//! ```
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use datamock_core::{Sampler, SeedRegistry};
//!
//! let registry = Arc::new(SeedRegistry::new());
//! let a = Sampler::new(Arc::clone(&registry), Some(42));
//! let b = Sampler::new(Arc::clone(&registry), Some(42));
//!
//! // Same seed, same engine
//! assert!(a.engine().ptr_eq(b.engine()));
//! ```

pub mod chars;
pub mod engine;
pub mod error;
pub mod registry;
pub mod sampling;

pub use engine::{coerce_seed, default_seed, Mt19937};
pub use error::{SampleError, SampleResult};
pub use registry::{SeedRegistry, SharedEngine};
pub use sampling::{
    Casing, CharacterOptions, DateTimeOptions, FloatOptions, HashOptions, NumberOptions, Sampler,
};
