//! Command-line interface for tictacgrid.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tictacgrid_rules::Player;

use tictacgrid::PartialConfig;

/// TicTacGrid - three in a row on boards from 3x3 to 5x5
#[derive(Parser, Debug)]
#[command(name = "tictacgrid")]
#[command(about = "Two-player tic-tac-toe on N x N boards", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// TOML file with player names and board size
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Name for player one (X)
        #[arg(long)]
        player_one: Option<String>,

        /// Name for player two (O)
        #[arg(long)]
        player_two: Option<String>,

        /// Board side length (3, 4 or 5)
        #[arg(short, long)]
        size: Option<usize>,

        /// File that receives the log output
        #[arg(long, default_value = "tictacgrid.log")]
        log_file: PathBuf,
    },

    /// Apply a list of moves headlessly and print the final board
    Replay {
        /// Board side length
        #[arg(short, long, default_value = "3")]
        size: usize,

        /// Player who moves first
        #[arg(long, value_enum, default_value_t = FirstPlayer::X)]
        first: FirstPlayer,

        /// Moves as row,col (zero-based)
        #[arg(allow_hyphen_values = true)]
        moves: Vec<String>,
    },
}

/// Player selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FirstPlayer {
    /// X moves first
    X,
    /// O moves first
    O,
}

impl From<FirstPlayer> for Player {
    fn from(first: FirstPlayer) -> Self {
        match first {
            FirstPlayer::X => Player::X,
            FirstPlayer::O => Player::O,
        }
    }
}

/// Collects the `play` flags into a partial configuration.
pub fn play_overrides(
    player_one: Option<String>,
    player_two: Option<String>,
    size: Option<usize>,
) -> PartialConfig {
    PartialConfig::new(player_one, player_two, size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play() {
        let cli = Cli::parse_from([
            "tictacgrid",
            "play",
            "--player-one",
            "Ana",
            "--size",
            "4",
        ]);
        match cli.command {
            Command::Play {
                player_one,
                player_two,
                size,
                log_file,
                config,
            } => {
                assert_eq!(player_one.as_deref(), Some("Ana"));
                assert_eq!(player_two, None);
                assert_eq!(size, Some(4));
                assert_eq!(log_file, PathBuf::from("tictacgrid.log"));
                assert_eq!(config, None);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_replay() {
        let cli = Cli::parse_from(["tictacgrid", "replay", "--size", "5", "--first", "o", "--", "0,0", "-1,2"]);
        match cli.command {
            Command::Replay { size, first, moves } => {
                assert_eq!(size, 5);
                assert_eq!(Player::from(first), Player::O);
                assert_eq!(moves, vec!["0,0".to_string(), "-1,2".to_string()]);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
