//! Single-board game: one board plus a turn flag.

use super::action::{Move, MoveError, StateError};
use super::invariants::{ClassicInvariants, InvariantSet};
use super::rules::{Line, check_winner, winning_line};
use super::{Board, Player, Position, Status};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Game without history: the board and whose turn it is.
///
/// Every accepted click returns a fresh `ClassicGame`; the receiver is
/// never modified. Deserialized games must satisfy [`ClassicInvariants`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawClassicGame")]
pub struct ClassicGame {
    pub(crate) board: Board,
    pub(crate) x_is_next: bool,
}

/// Unchecked wire form of [`ClassicGame`].
#[derive(Deserialize)]
struct RawClassicGame {
    board: Board,
    x_is_next: bool,
}

impl TryFrom<RawClassicGame> for ClassicGame {
    type Error = StateError;

    fn try_from(raw: RawClassicGame) -> Result<Self, Self::Error> {
        let game = Self {
            board: raw.board,
            x_is_next: raw.x_is_next,
        };
        ClassicInvariants::check_summary(&game).map_err(StateError)?;
        Ok(game)
    }
}

impl ClassicGame {
    /// Creates a new game with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            x_is_next: true,
        }
    }

    /// Applies `positions` as clicks, in order, to a new game.
    #[instrument]
    pub fn replay(positions: &[Position]) -> Self {
        positions
            .iter()
            .fold(Self::new(), |game, &pos| game.click(pos))
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns true if X moves next.
    pub fn x_is_next(&self) -> bool {
        self.x_is_next
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        if self.x_is_next { Player::X } else { Player::O }
    }

    /// Status line for the board.
    pub fn status(&self) -> Status {
        Status::of(&self.board, self.to_move())
    }

    /// The completed line, if the game has been won.
    pub fn winning_line(&self) -> Option<Line> {
        winning_line(&self.board).map(|(_, line)| line)
    }

    /// Places the current player's mark at `pos`, returning the new game.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] once someone has won and
    /// [`MoveError::SquareOccupied`] for a taken square.
    #[instrument(skip(self), fields(position = ?pos, player = ?self.to_move()))]
    pub fn try_click(&self, pos: Position) -> Result<Self, MoveError> {
        if let Some(winner) = check_winner(&self.board) {
            return Err(MoveError::GameOver(winner));
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let action = Move::new(self.to_move(), pos);
        let next = Self {
            board: self.board.with_mark(action.position, action.player),
            x_is_next: !self.x_is_next,
        };

        #[cfg(debug_assertions)]
        ClassicInvariants::check_summary(&next).map_err(MoveError::InvariantViolation)?;

        debug!(%action, "Move applied");
        Ok(next)
    }

    /// Like [`ClassicGame::try_click`], but a rejected click yields an
    /// unchanged copy of the game.
    pub fn click(&self, pos: Position) -> Self {
        self.try_click(pos).unwrap_or_else(|e| {
            debug!(error = %e, "Click ignored");
            self.clone()
        })
    }
}

impl Default for ClassicGame {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Square;

    #[test]
    fn test_new_game_x_first() {
        let game = ClassicGame::new();
        assert!(game.x_is_next());
        assert_eq!(game.status().to_string(), "Next player: X");
    }

    #[test]
    fn test_click_returns_new_state() {
        let game = ClassicGame::new();
        let next = game.click(Position::Center);

        assert_eq!(game, ClassicGame::new());
        assert_eq!(next.board().get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(next.to_move(), Player::O);
    }

    #[test]
    fn test_occupied_square_rejected() {
        let game = ClassicGame::new().click(Position::Center);
        assert_eq!(
            game.try_click(Position::Center),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(game.click(Position::Center), game);
    }

    #[test]
    fn test_deserialize_checks_turn_flag() {
        let game = ClassicGame::replay(&[Position::Center]);
        let json = serde_json::to_string(&game).unwrap();
        assert_eq!(serde_json::from_str::<ClassicGame>(&json).unwrap(), game);

        let flipped = json.replace("\"x_is_next\":false", "\"x_is_next\":true");
        let err = serde_json::from_str::<ClassicGame>(&flipped).unwrap_err();
        assert!(err.to_string().contains("Turn flag agrees"));
    }

    #[test]
    fn test_click_after_win_rejected() {
        let game = ClassicGame::replay(&[
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ]);
        assert_eq!(game.status(), Status::Winner(Player::X));
        assert_eq!(
            game.try_click(Position::BottomRight),
            Err(MoveError::GameOver(Player::X))
        );
        assert_eq!(game.click(Position::BottomRight), game);
    }
}
