//! Biathlon results binary.
//!
//! Reads a race configuration and an event log, prints the ranked results
//! table to stdout and leaves two files in the output directory: the event
//! log (`RACE_EVENT_LOG`) and a copy of the table (`RACE_RESULT_TABLE`).
//!
//! ```bash
//! biathlon config.json events
//! RUST_LOG=debug biathlon --output-dir out config.toml events
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use race_runtime::{RaceRuntime, RuntimeConfig, setup_logging};

#[derive(Parser)]
#[command(name = "biathlon")]
#[command(about = "Biathlon race results from an event log", long_about = None)]
struct Cli {
    /// Race configuration (JSON, or TOML with a `.toml` extension)
    config: PathBuf,
    /// Event log, one event per line
    events: PathBuf,
    /// Directory for the event log and results table
    #[arg(long, env = "RACE_OUTPUT_DIR")]
    output_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // 1. Runtime settings: environment first, flags override
    let mut config = RuntimeConfig::from_env();
    if let Some(dir) = cli.output_dir {
        config = config.with_output_dir(dir);
    }

    // 2. Logging; the guard flushes the event log on drop
    let _guard = setup_logging(&config)?;
    tracing::info!("Starting biathlon run");

    // 3. Load, reduce, report
    let runtime = RaceRuntime::new(config);
    let summary = runtime.run_files(&cli.config, &cli.events)?;

    for line in summary.lines() {
        println!("{line}");
    }

    tracing::info!("Run complete");
    Ok(())
}
