//! Command-line interface for datamock
//!
//! # Usage Examples
//!
//! ```bash
//! # Print ten user names
//! datamock sample user-name --count 10
//!
//! # Same values on every run
//! DATAMOCK_SEED=7 datamock sample sentence -n 3
//! ```

use clap::{Parser, Subcommand};
use datamock::{run_sample, SampleArgs};

#[derive(Parser)]
#[command(name = "datamock")]
#[command(about = "Deterministic fake data generator")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print values of one kind, one per line
    Sample {
        #[command(flatten)]
        args: SampleArgs,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Sample { args } => {
            let stdout = std::io::stdout();
            let mut out = std::io::BufWriter::new(stdout.lock());
            run_sample(&args, &mut out)?;
        }
    }

    Ok(())
}
