//! CLI argument definitions.

use clap::Args;
use std::path::PathBuf;

use crate::sample::SampleKind;

/// Engine seed, from the flag or the environment.
#[derive(Args, Clone, Debug)]
pub struct SeedArgs {
    /// Seed for deterministic generation (same seed = same data).
    /// Values above u32::MAX are truncated to their low 32 bits.
    #[arg(long, env = "DATAMOCK_SEED")]
    pub seed: Option<u64>,
}

impl SeedArgs {
    /// Seed in the engine's 32-bit seed space.
    pub fn engine_seed(&self) -> Option<u32> {
        self.seed.map(datamock_core::coerce_seed)
    }
}

/// Arguments for `datamock sample`.
#[derive(Args, Clone, Debug)]
pub struct SampleArgs {
    /// Kind of value to print
    #[arg(value_enum)]
    pub kind: SampleKind,

    /// Number of values to print, one per line
    #[arg(long, short = 'n', default_value = "1")]
    pub count: u64,

    /// YAML locale file overriding the built-in English data
    #[arg(long)]
    pub locale: Option<PathBuf>,

    #[command(flatten)]
    pub seed: SeedArgs,
}
