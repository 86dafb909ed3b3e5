//! beccs-rdm - batch valuation of BECCS invest/wait decisions
//!
//! Reads a JSON file holding one world state or an array of them, evaluates
//! every SOW and writes the batch report as JSON. Logs go to stderr; set
//! `RUST_LOG` to change verbosity.

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use beccs_rdm_core::{run_batch, BatchConfig, ExecutionMode, PlantDesign, Strategy, WorldState};
use clap::Parser;
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "beccs-rdm")]
#[command(about = "Evaluate invest-vs-wait NPV and regret for a set of states of the world")]
struct Cli {
    /// JSON file with a world state or an array of world states.
    /// Without it, the reference case is evaluated for both strategies.
    input: Option<PathBuf>,

    /// Global seed; SOW i draws from substream i of this seed
    #[arg(long, default_value = "42")]
    seed: u64,

    /// JSON file with a plant design overriding the reference plant
    #[arg(long)]
    plant: Option<PathBuf>,

    /// Write the report here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Only emit the robustness summary and run metadata
    #[arg(long)]
    summary_only: bool,

    /// Evaluate SOWs on the current thread
    #[arg(long)]
    sequential: bool,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SowInput {
    Many(Vec<WorldState>),
    One(WorldState),
}

fn load_worlds(path: Option<&Path>) -> Result<Vec<WorldState>, String> {
    let Some(path) = path else {
        return Ok(vec![
            WorldState::reference(Strategy::Wait),
            WorldState::reference(Strategy::Invest),
        ]);
    };
    let text = fs::read_to_string(path).map_err(|e| format!("{}: {}", path.display(), e))?;
    let input: SowInput =
        serde_json::from_str(&text).map_err(|e| format!("{}: {}", path.display(), e))?;
    Ok(match input {
        SowInput::Many(worlds) => worlds,
        SowInput::One(world) => vec![world],
    })
}

fn load_design(path: Option<&Path>) -> Result<PlantDesign, String> {
    match path {
        None => Ok(PlantDesign::reference()),
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|e| format!("{}: {}", path.display(), e))?;
            serde_json::from_str(&text).map_err(|e| format!("{}: {}", path.display(), e))
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let worlds = load_worlds(cli.input.as_deref())?;
    let design = load_design(cli.plant.as_deref())?;
    info!(sows = worlds.len(), seed = cli.seed, "Loaded states of the world");

    let config = BatchConfig {
        global_seed: cli.seed,
        mode: if cli.sequential {
            ExecutionMode::Sequential
        } else {
            ExecutionMode::Parallel
        },
        design,
    };
    let report = run_batch(&worlds, &config).map_err(|e| e.to_string())?;

    info!(
        run_id = %report.run_id,
        config_hash = %report.config_hash,
        min_max_regret = ?report.robustness.min_max_regret_strategy(),
        "Batch complete"
    );

    let rendered = if cli.summary_only {
        serde_json::to_string_pretty(&json!({
            "run_id": report.run_id,
            "global_seed": report.global_seed,
            "config_hash": report.config_hash,
            "robustness": report.robustness,
        }))
    } else {
        serde_json::to_string_pretty(&report)
    }
    .map_err(|e| e.to_string())?;

    match &cli.output {
        Some(path) => {
            fs::write(path, rendered).map_err(|e| format!("{}: {}", path.display(), e))?;
            info!("Report written to {}", path.display());
        }
        None => println!("{}", rendered),
    }
    Ok(())
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        error!("{}", e);
        process::exit(1);
    }
}
