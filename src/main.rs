//! Strictly Tic-Tac-Toe - CLI
//!
//! Plays in the terminal, or replays a move list headlessly.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::sync::Arc;
use strictly_tictactoe::{AnyGame, GameConfig, Position, run_tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = GameConfig::load(cli.config.as_deref())?;

    match cli.command.unwrap_or(Command::Play {
        variant: None,
        descending: false,
    }) {
        Command::Play {
            variant,
            descending,
        } => run_play(config.with_variant(variant).with_descending(descending)),
        Command::Replay {
            positions,
            variant,
            jump,
            descending,
            json,
        } => run_replay(
            config.with_variant(variant).with_descending(descending),
            &positions,
            jump,
            json,
        ),
    }
}

/// Run the terminal UI, logging to the configured file.
fn run_play(config: GameConfig) -> Result<()> {
    // Logs go to a file so they do not draw over the board.
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(&config))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(variant = ?config.variant(), "Starting Strictly Tic-Tac-Toe");
    run_tui(&config)
}

/// Apply `positions` without a UI and print the outcome.
fn run_replay(
    config: GameConfig,
    positions: &[Position],
    jump: Option<usize>,
    json: bool,
) -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(&config))
        .with_writer(std::io::stderr)
        .try_init();

    print!("{}", replay_report(&config, positions, jump, json)?);
    Ok(())
}

/// Text (or pretty JSON) that `replay` prints for `positions`.
fn replay_report(
    config: &GameConfig,
    positions: &[Position],
    jump: Option<usize>,
    json: bool,
) -> Result<String> {
    let mut game = AnyGame::replay(*config.variant(), positions);
    if let Some(step) = jump {
        game = game
            .jump_to(step)
            .with_context(|| format!("Cannot jump to step {}", step))?;
    }
    info!(step = game.step(), status = %game.status(), "Replay finished");

    if json {
        Ok(serde_json::to_string_pretty(&game)? + "\n")
    } else {
        Ok(game.summary(*config.move_order()))
    }
}

/// `RUST_LOG` if set, else the configured filter.
fn env_filter(config: &GameConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}
