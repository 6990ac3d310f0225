//! Strictly Territory - Unified CLI
//!
//! Local two-player TUI and a replay command for scripted games.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::Path;
use strictly_territory::{Game, GameConfig, GameSnapshot, Position};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Play { config, log_file } => run_play(config.as_deref(), &log_file),
        Command::Replay {
            config,
            json,
            moves,
        } => run_replay(config.as_deref(), json, &moves),
    }
}

/// Loads the config file if one was given, otherwise the defaults.
fn load_config(path: Option<&Path>) -> Result<GameConfig> {
    match path {
        Some(path) => GameConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(GameConfig::default()),
    }
}

/// `RUST_LOG` wins over the configured filter.
fn env_filter(config: &GameConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

/// Run the terminal UI
fn run_play(config: Option<&Path>, log_file: &Path) -> Result<()> {
    let config = load_config(config)?;

    // Setup logging to file to avoid interfering with TUI
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(&config))
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .init();

    tui::run_tui(&config)
}

/// Replay moves and print the final board
fn run_replay(config: Option<&Path>, json: bool, moves: &[Position]) -> Result<()> {
    let config = load_config(config)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(&config))
        .with_writer(std::io::stderr)
        .init();

    info!(max_moves = *config.max_moves(), moves = moves.len(), "Replaying game");
    let game = Game::replay(*config.max_moves(), moves).context("Replay stopped on an illegal move")?;
    let snapshot = GameSnapshot::capture(&game);

    if json {
        println!("{}", snapshot.to_json().context("Failed to serialize snapshot")?);
    } else {
        print!("{}", snapshot.text);
        println!("Score: {}", snapshot.score);
        match snapshot.state.outcome {
            Some(outcome) => println!("Result: {}", outcome),
            None => println!(
                "Moves left: {} | Turn: {}",
                snapshot.state.remaining_moves(),
                snapshot.state.current_player
            ),
        }
    }

    Ok(())
}
