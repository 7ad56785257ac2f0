//! datamock command-line front-end.
//!
//! Prints seeded fake values on top of [`datamock_generator`].
//!
//! # CLI Usage
//!
//! ```bash
//! # Five reproducible email addresses
//! datamock sample email --count 5 --seed 42
//!
//! # Names drawn from a custom locale file
//! datamock sample name --locale pirate.yaml
//! ```

pub mod args;
pub mod config;
pub mod sample;

pub use args::{SampleArgs, SeedArgs};
pub use sample::{run_sample, sample_value, SampleKind};
