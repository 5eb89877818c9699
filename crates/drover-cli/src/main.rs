use std::path::PathBuf;

use clap::Parser;
use drover_core::engine::{GenerateOptions, MovementEngine};
use drover_core::errors::GenerationError;
use drover_core::output::write_movements_csv;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "drover",
    version,
    about = "Generate synthetic livestock movement data for England, Wales, and Scotland"
)]
struct Cli {
    /// Number of movement rows to generate.
    #[arg(short = 'n', long, default_value_t = 10_000)]
    num_rows: u64,
    /// Random seed for reproducibility.
    #[arg(long, default_value_t = 42, conflicts_with = "no_seed")]
    seed: u64,
    /// Seed from the OS instead of a fixed seed.
    #[arg(long, default_value_t = false)]
    no_seed: bool,
    /// Directory containing country.csv, county.csv, parish.csv, animal-types.csv.
    #[arg(short = 'i', long, default_value = ".")]
    input_dir: PathBuf,
    /// Output CSV filename.
    #[arg(short = 'o', long, default_value = "movements.csv")]
    output: PathBuf,
}

fn main() -> Result<(), GenerationError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let options = GenerateOptions {
        rows: cli.num_rows,
        seed: (!cli.no_seed).then_some(cli.seed),
    };

    let movements = MovementEngine::new(options).run(&cli.input_dir)?;
    write_movements_csv(&cli.output, &movements)?;

    println!("Wrote {} rows to {}", movements.len(), cli.output.display());
    Ok(())
}
