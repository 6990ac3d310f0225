//! Command-line interface for strictly_territory.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_territory::Position;

/// Strictly Territory - three-in-a-row territory game
#[derive(Parser, Debug)]
#[command(name = "strictly_territory")]
#[command(about = "Two-player territory game on a 9x9 board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a local two-player game in the terminal UI
    Play {
        /// Path to a TOML game config
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Log file for the TUI session
        #[arg(long, default_value = "strictly_territory.log")]
        log_file: PathBuf,
    },

    /// Replay a move sequence and print the resulting board
    Replay {
        /// Path to a TOML game config
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print a JSON snapshot instead of text
        #[arg(long)]
        json: bool,

        /// Moves as `row,col`, alternating players starting with player 1
        #[arg(value_parser = parse_position, required = true)]
        moves: Vec<Position>,
    },
}

fn parse_position(s: &str) -> Result<Position, String> {
    Position::parse(s).ok_or_else(|| format!("expected `row,col` with both in 0..9, got `{}`", s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_replay() {
        let cli = Cli::try_parse_from(["strictly_territory", "replay", "--json", "0,0", "4,4"]).unwrap();
        match cli.command {
            Command::Replay { config, json, moves } => {
                assert!(config.is_none());
                assert!(json);
                assert_eq!(moves, vec![Position::new(0, 0).unwrap(), Position::new(4, 4).unwrap()]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_off_board_move() {
        assert!(Cli::try_parse_from(["strictly_territory", "replay", "9,9"]).is_err());
    }
}
