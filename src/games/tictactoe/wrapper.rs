//! Either game variant behind one interface, for the host UI.

use super::action::{JumpError, MoveError};
use super::classic::ClassicGame;
use super::history::{MoveEntry, MoveOrder, TimeTravelGame};
use super::rules::Line;
use super::{Board, Player, Position, Status};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Which game variant to play.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum GameVariant {
    /// Single board, no history.
    Classic,
    /// Full history with jump-to-move.
    #[default]
    TimeTravel,
}

impl GameVariant {
    /// Display name.
    pub fn label(self) -> &'static str {
        match self {
            GameVariant::Classic => "Classic",
            GameVariant::TimeTravel => "Time travel",
        }
    }
}

/// A game of either variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::From)]
#[serde(tag = "variant", rename_all = "kebab-case")]
pub enum AnyGame {
    /// Single-board game.
    Classic(ClassicGame),
    /// History-keeping game.
    TimeTravel(TimeTravelGame),
}

impl AnyGame {
    /// Starts a new game of `variant`.
    #[instrument]
    pub fn new(variant: GameVariant) -> Self {
        match variant {
            GameVariant::Classic => AnyGame::Classic(ClassicGame::new()),
            GameVariant::TimeTravel => AnyGame::TimeTravel(TimeTravelGame::new()),
        }
    }

    /// Applies `positions` as clicks to a new game of `variant`.
    #[instrument]
    pub fn replay(variant: GameVariant, positions: &[Position]) -> Self {
        match variant {
            GameVariant::Classic => AnyGame::Classic(ClassicGame::replay(positions)),
            GameVariant::TimeTravel => AnyGame::TimeTravel(TimeTravelGame::replay(positions)),
        }
    }

    /// The variant of this game.
    pub fn variant(&self) -> GameVariant {
        match self {
            AnyGame::Classic(_) => GameVariant::Classic,
            AnyGame::TimeTravel(_) => GameVariant::TimeTravel,
        }
    }

    /// The displayed board.
    pub fn board(&self) -> &Board {
        match self {
            AnyGame::Classic(game) => game.board(),
            AnyGame::TimeTravel(game) => game.current(),
        }
    }

    /// The player to move on the displayed board.
    pub fn to_move(&self) -> Player {
        match self {
            AnyGame::Classic(game) => game.to_move(),
            AnyGame::TimeTravel(game) => game.to_move(),
        }
    }

    /// Status line for the displayed board.
    pub fn status(&self) -> Status {
        match self {
            AnyGame::Classic(game) => game.status(),
            AnyGame::TimeTravel(game) => game.status(),
        }
    }

    /// The completed line on the displayed board, if any.
    pub fn winning_line(&self) -> Option<Line> {
        match self {
            AnyGame::Classic(game) => game.winning_line(),
            AnyGame::TimeTravel(game) => game.winning_line(),
        }
    }

    /// Clicks the square at `pos`, reporting why a click was refused.
    ///
    /// # Errors
    ///
    /// Propagates the variant's [`MoveError`].
    pub fn try_click(&self, pos: Position) -> Result<Self, MoveError> {
        Ok(match self {
            AnyGame::Classic(game) => AnyGame::Classic(game.try_click(pos)?),
            AnyGame::TimeTravel(game) => AnyGame::TimeTravel(game.try_click(pos)?),
        })
    }

    /// Clicks the square at `pos`; a refused click leaves the game unchanged.
    pub fn click(&self, pos: Position) -> Self {
        match self {
            AnyGame::Classic(game) => AnyGame::Classic(game.click(pos)),
            AnyGame::TimeTravel(game) => AnyGame::TimeTravel(game.click(pos)),
        }
    }

    /// Jumps to history step `step`.
    ///
    /// The classic variant only has step 0 (its current board).
    ///
    /// # Errors
    ///
    /// Returns [`JumpError::StepOutOfRange`] for a step with no snapshot.
    pub fn jump_to(&self, step: usize) -> Result<Self, JumpError> {
        match self {
            AnyGame::Classic(_) if step == 0 => Ok(self.clone()),
            AnyGame::Classic(_) => Err(JumpError::StepOutOfRange { step, len: 1 }),
            AnyGame::TimeTravel(game) => Ok(AnyGame::TimeTravel(game.jump_to(step)?)),
        }
    }

    /// Index of the displayed snapshot (always 0 for the classic variant).
    pub fn step(&self) -> usize {
        match self {
            AnyGame::Classic(_) => 0,
            AnyGame::TimeTravel(game) => game.step(),
        }
    }

    /// Index of the newest snapshot (always 0 for the classic variant).
    pub fn latest_step(&self) -> usize {
        match self {
            AnyGame::Classic(_) => 0,
            AnyGame::TimeTravel(game) => game.latest_step(),
        }
    }

    /// The jump-to-move list; empty for the classic variant.
    pub fn moves(&self, order: MoveOrder) -> Vec<MoveEntry> {
        match self {
            AnyGame::Classic(_) => Vec::new(),
            AnyGame::TimeTravel(game) => game.moves(order),
        }
    }

    /// Plain-text report of the board, the status line and the move list.
    ///
    /// The displayed step is marked with `>`.
    pub fn summary(&self, order: MoveOrder) -> String {
        let mut out = format!("{}\n\n{}\n", self.board().display(), self.status());
        let moves = self.moves(order);
        if !moves.is_empty() {
            out.push('\n');
            for entry in moves {
                let marker = if entry.current { ">" } else { " " };
                out.push_str(&format!("{} {}\n", marker, entry));
            }
        }
        out
    }
}
