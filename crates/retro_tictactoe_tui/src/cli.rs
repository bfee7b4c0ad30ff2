//! Command-line interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Two-player tic-tac-toe on one keyboard
#[derive(Parser, Debug)]
#[command(name = "retro_tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Settings file (TOML). Defaults to ./retro_tictactoe.toml if present.
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Replay 0-based cell indices from an empty board and print the result
    Replay {
        /// Cell indices (0-8) in play order
        moves: Vec<usize>,

        /// Print the final state as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play { config: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_play() {
        let cli = Cli::try_parse_from(["retro_tictactoe"]).unwrap();
        assert_eq!(cli.command.unwrap_or_default(), Command::default());
    }

    #[test]
    fn test_replay_args() {
        let cli = Cli::try_parse_from(["retro_tictactoe", "replay", "0", "4", "1", "--json"])
            .unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Replay {
                moves: vec![0, 4, 1],
                json: true
            })
        );
    }

    #[test]
    fn test_play_with_config() {
        let cli = Cli::try_parse_from(["retro_tictactoe", "play", "--config", "arcade.toml"])
            .unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Play {
                config: Some(PathBuf::from("arcade.toml"))
            })
        );
    }
}
