//! TicTacGrid command-line entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, play_overrides};
use std::path::{Path, PathBuf};
use tictacgrid::{PartialConfig, run_replay, run_tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            player_one,
            player_two,
            size,
            log_file,
        } => run_play(
            config,
            play_overrides(player_one, player_two, size),
            &log_file,
        ),
        Command::Replay { size, first, moves } => {
            init_stderr_logging();
            let mut stdout = std::io::stdout().lock();
            run_replay(size, first.into(), &moves, &mut stdout)?;
            Ok(())
        }
    }
}

/// Runs the terminal game, logging to a file to keep the screen clean.
#[instrument(skip(overrides))]
fn run_play(config: Option<PathBuf>, overrides: PartialConfig, log_file: &Path) -> Result<()> {
    init_file_logging(log_file)?;

    let partial = match config {
        Some(path) => {
            let from_file = PartialConfig::from_file(&path)
                .with_context(|| format!("Loading {}", path.display()))?;
            overrides.or(from_file)
        }
        None => overrides,
    };

    info!("Starting TicTacGrid");
    run_tui(partial)
}

fn init_file_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Creating log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

fn init_stderr_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
