//! Headless lane-defense runner.
//!
//! Runs the simulation without graphics for scripted playtesting,
//! balance checks, and CI.
//!
//! # Usage
//!
//! ```bash
//! # Play one level with the scripted auto-player
//! cargo run -p td_headless -- run --level 1 --auto-play
//!
//! # Reproduce a specific session
//! cargo run -p td_headless -- run --level 3 --difficulty hard --seed 12345
//! ```
//!
//! Output (stdout): one JSON summary per run.
//! Logs (stderr): tick diagnostics, controlled by `RUST_LOG`.

mod runner;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use td_core::config::Difficulty;

use crate::runner::{run, Outcome, RunConfig};

#[derive(Parser)]
#[command(name = "td_headless")]
#[command(about = "Headless lane-defense runner for playtesting and CI")]
#[command(version)]
struct Cli {
    /// Enable verbose logging to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a single level to completion, defeat, or a tick cap
    Run {
        /// Level to play
        #[arg(short, long, default_value = "1")]
        level: u32,

        /// Difficulty tier: easy, normal, or hard
        #[arg(short, long, default_value = "normal")]
        difficulty: Difficulty,

        /// Simulation seed
        #[arg(short, long, default_value = "0")]
        seed: u64,

        /// Maximum ticks before the run is cut off
        #[arg(short, long, default_value = "108000")]
        ticks: u64,

        /// Directory for save records
        #[arg(long, default_value = "td_data")]
        data_dir: PathBuf,

        /// Let the scripted player place defenders and collect pickups
        #[arg(long)]
        auto_play: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the JSON summary.
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Run {
            level,
            difficulty,
            seed,
            ticks,
            data_dir,
            auto_play,
        } => cmd_run(&RunConfig {
            level,
            difficulty,
            seed,
            max_ticks: ticks,
            data_dir,
            auto_play,
        }),
    }
}

fn cmd_run(config: &RunConfig) -> ExitCode {
    tracing::info!(
        level = config.level,
        difficulty = %config.difficulty,
        seed = config.seed,
        max_ticks = config.max_ticks,
        auto_play = config.auto_play,
        "starting headless run"
    );

    let summary = match run(config) {
        Ok(summary) => summary,
        Err(error) => {
            tracing::error!(%error, "run failed");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(
        outcome = ?summary.outcome,
        ticks_run = summary.ticks_run,
        kills = summary.kills,
        "run finished"
    );

    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(error) => {
            tracing::error!(%error, "failed to encode summary");
            return ExitCode::FAILURE;
        }
    }

    if summary.outcome == Outcome::Defeat {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
