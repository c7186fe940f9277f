//! Command-line interface for strictly_tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_tictactoe::{GameVariant, Position};

/// Tic-tac-toe with time travel, in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_tictactoe")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (default: tictactoe.toml, if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Game variant
        #[arg(long, value_enum)]
        variant: Option<GameVariant>,

        /// List moves newest first
        #[arg(long)]
        descending: bool,
    },

    /// Apply moves without a UI and print the result
    Replay {
        /// Squares to click, as 1-9 or labels such as "center"
        #[arg(required = true)]
        positions: Vec<Position>,

        /// Game variant
        #[arg(long, value_enum)]
        variant: Option<GameVariant>,

        /// History step to display after replaying
        #[arg(long)]
        jump: Option<usize>,

        /// List moves newest first
        #[arg(long)]
        descending: bool,

        /// Print the game state as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["strictly_tictactoe"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_replay_parses_positions_and_flags() {
        let cli = Cli::try_parse_from([
            "strictly_tictactoe",
            "replay",
            "1",
            "center",
            "9",
            "--variant",
            "classic",
            "--jump",
            "1",
        ])
        .unwrap();

        match cli.command {
            Some(Command::Replay {
                positions,
                variant,
                jump,
                ..
            }) => {
                assert_eq!(
                    positions,
                    [Position::TopLeft, Position::Center, Position::BottomRight]
                );
                assert_eq!(variant, Some(GameVariant::Classic));
                assert_eq!(jump, Some(1));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_replay_rejects_bad_position() {
        assert!(Cli::try_parse_from(["strictly_tictactoe", "replay", "10"]).is_err());
    }
}
