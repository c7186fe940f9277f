//! History-keeping game with time travel between past boards.

use super::action::{JumpError, Move, MoveError, StateError};
use super::invariants::{InvariantSet, TimeTravelInvariants};
use super::rules::{Line, check_winner, winning_line};
use super::{Board, Player, Position, Square, Status};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Order in which the move list is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl MoveOrder {
    /// Returns the other order.
    pub fn toggle(self) -> Self {
        match self {
            MoveOrder::Ascending => MoveOrder::Descending,
            MoveOrder::Descending => MoveOrder::Ascending,
        }
    }

    /// Short label for the sort control.
    pub fn label(self) -> &'static str {
        match self {
            MoveOrder::Ascending => "ascending",
            MoveOrder::Descending => "descending",
        }
    }
}

/// One entry of the jump-to-move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    /// History index this entry jumps to.
    pub step: usize,
    /// The move that produced this snapshot; `None` for the game start.
    pub action: Option<Move>,
    /// True if this is the snapshot currently displayed.
    pub current: bool,
}

impl MoveEntry {
    /// Text of the jump control.
    pub fn label(&self) -> String {
        if self.step == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", self.step)
        }
    }

    /// 1-based `(col, row)` of the square filled by this move.
    pub fn location(&self) -> Option<(usize, usize)> {
        self.action
            .map(|action| (action.position.col() + 1, action.position.row() + 1))
    }
}

impl std::fmt::Display for MoveEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())?;
        if let Some((col, row)) = self.location() {
            write!(f, " ({}, {})", col, row)?;
        }
        Ok(())
    }
}

/// Game that keeps every board snapshot and a pointer to the one shown.
///
/// `history[0]` is the empty board and `history[i]` holds exactly `i`
/// marks. The player to move follows from the parity of `step`.
/// Deserialized games must satisfy [`TimeTravelInvariants`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTimeTravelGame")]
pub struct TimeTravelGame {
    pub(crate) history: Vec<Board>,
    pub(crate) step: usize,
}

/// Unchecked wire form of [`TimeTravelGame`].
#[derive(Deserialize)]
struct RawTimeTravelGame {
    history: Vec<Board>,
    step: usize,
}

impl TryFrom<RawTimeTravelGame> for TimeTravelGame {
    type Error = StateError;

    fn try_from(raw: RawTimeTravelGame) -> Result<Self, Self::Error> {
        if raw.history.is_empty() {
            return Err(StateError("history has no snapshots".to_string()));
        }
        let game = Self {
            history: raw.history,
            step: raw.step,
        };
        TimeTravelInvariants::check_summary(&game).map_err(StateError)?;
        Ok(game)
    }
}

impl TimeTravelGame {
    /// Creates a game whose history holds only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            step: 0,
        }
    }

    /// Applies `positions` as clicks, in order, to a new game.
    #[instrument]
    pub fn replay(positions: &[Position]) -> Self {
        positions
            .iter()
            .fold(Self::new(), |game, &pos| game.click(pos))
    }

    /// All stored snapshots.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Index of the displayed snapshot.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Index of the newest snapshot.
    pub fn latest_step(&self) -> usize {
        self.history.len() - 1
    }

    /// The displayed snapshot.
    pub fn current(&self) -> &Board {
        &self.history[self.step]
    }

    /// Returns the player to move on the displayed snapshot.
    pub fn to_move(&self) -> Player {
        Player::for_move(self.step)
    }

    /// Status line for the displayed snapshot.
    pub fn status(&self) -> Status {
        Status::of(self.current(), self.to_move())
    }

    /// The completed line on the displayed snapshot, if any.
    pub fn winning_line(&self) -> Option<Line> {
        winning_line(self.current()).map(|(_, line)| line)
    }

    /// Places the current player's mark on the displayed snapshot.
    ///
    /// Snapshots after the step pointer are discarded before the new one
    /// is appended, and the pointer moves to the new snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] if the displayed board is won and
    /// [`MoveError::SquareOccupied`] for a taken square.
    #[instrument(skip(self), fields(position = ?pos, step = self.step))]
    pub fn try_click(&self, pos: Position) -> Result<Self, MoveError> {
        let current = self.current();
        if let Some(winner) = check_winner(current) {
            return Err(MoveError::GameOver(winner));
        }
        if !current.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let action = Move::new(self.to_move(), pos);
        let mut history = self.history[..=self.step].to_vec();
        let discarded = self.history.len() - history.len();
        history.push(current.with_mark(action.position, action.player));
        let next = Self {
            step: history.len() - 1,
            history,
        };

        #[cfg(debug_assertions)]
        TimeTravelInvariants::check_summary(&next).map_err(MoveError::InvariantViolation)?;

        debug!(%action, discarded, step = next.step, "Move applied");
        Ok(next)
    }

    /// Like [`TimeTravelGame::try_click`], but a rejected click yields an
    /// unchanged copy of the game.
    pub fn click(&self, pos: Position) -> Self {
        self.try_click(pos).unwrap_or_else(|e| {
            debug!(error = %e, "Click ignored");
            self.clone()
        })
    }

    /// Displays snapshot `step` without altering the stored history.
    ///
    /// # Errors
    ///
    /// Returns [`JumpError::StepOutOfRange`] if `step` is past the newest
    /// snapshot.
    #[instrument(skip(self), fields(from = self.step))]
    pub fn jump_to(&self, step: usize) -> Result<Self, JumpError> {
        if step >= self.history.len() {
            return Err(JumpError::StepOutOfRange {
                step,
                len: self.history.len(),
            });
        }
        debug!(step, "Jumped");
        Ok(Self {
            history: self.history.clone(),
            step,
        })
    }

    /// The jump-to-move list, one entry per snapshot.
    pub fn moves(&self, order: MoveOrder) -> Vec<MoveEntry> {
        let start = MoveEntry {
            step: 0,
            action: None,
            current: self.step == 0,
        };
        let mut entries: Vec<_> = std::iter::once(start)
            .chain(self.history.windows(2).enumerate().map(|(i, pair)| {
                let step = i + 1;
                MoveEntry {
                    step,
                    action: placed(&pair[0], &pair[1]),
                    current: self.step == step,
                }
            }))
            .collect();

        if order == MoveOrder::Descending {
            entries.reverse();
        }
        entries
    }
}

impl Default for TimeTravelGame {
    fn default() -> Self {
        Self::new()
    }
}

/// The mark present in `after` but not in `before`.
fn placed(before: &Board, after: &Board) -> Option<Move> {
    Position::ALL.iter().find_map(|&pos| match (before.get(pos), after.get(pos)) {
        (Square::Empty, Square::Occupied(player)) => Some(Move::new(player, pos)),
        _ => None,
    })
}
