//! Status line derived from a board snapshot.

use super::rules::{check_winner, is_full};
use super::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// What the status line says about the displayed board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// A player holds a complete line.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// Every square is taken and nobody won.
    #[display("This game is a tie!")]
    Tie,
    /// The game continues with this player to move.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

impl Status {
    /// Derives the status of `board` when `to_move` would play next.
    #[instrument(skip(board))]
    pub fn of(board: &Board, to_move: Player) -> Self {
        if let Some(winner) = check_winner(board) {
            Status::Winner(winner)
        } else if is_full(board) {
            Status::Tie
        } else {
            Status::NextPlayer(to_move)
        }
    }

    /// Returns true once the game has been won or tied.
    pub fn is_over(&self) -> bool {
        !matches!(self, Status::NextPlayer(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Position;

    #[test]
    fn test_empty_board_status() {
        let status = Status::of(&Board::new(), Player::X);
        assert_eq!(status, Status::NextPlayer(Player::X));
        assert_eq!(status.to_string(), "Next player: X");
        assert!(!status.is_over());
    }

    #[test]
    fn test_winner_status_text() {
        let board = Board::new()
            .with_mark(Position::TopLeft, Player::O)
            .with_mark(Position::Center, Player::O)
            .with_mark(Position::BottomRight, Player::O);
        let status = Status::of(&board, Player::X);
        assert_eq!(status.to_string(), "Winner: O");
        assert!(status.is_over());
    }

    #[test]
    fn test_tie_status_text() {
        assert_eq!(Status::Tie.to_string(), "This game is a tie!");
    }
}
