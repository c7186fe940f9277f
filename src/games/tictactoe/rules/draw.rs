//! Tie detection logic for tic-tac-toe.

use super::super::{Board, Square};
use super::win::check_winner;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A full board with no winner is a tie.
#[instrument(skip(board))]
pub fn is_tie(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::super::super::{Player, Position};
    use super::*;

    fn board_from(rows: &str) -> Board {
        rows.chars()
            .filter(|c| !c.is_whitespace())
            .zip(Position::ALL)
            .fold(Board::new(), |board, (c, pos)| match c {
                'X' => board.with_mark(pos, Player::X),
                'O' => board.with_mark(pos, Player::O),
                _ => board,
            })
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
        assert!(!is_tie(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = board_from("XO. ... ...");
        assert!(!is_full(&board));
    }

    #[test]
    fn test_tie_detection() {
        let board = board_from("XOX OXX OXO");
        assert!(is_full(&board));
        assert!(is_tie(&board));
    }

    #[test]
    fn test_full_board_with_winner_is_not_tie() {
        let board = board_from("XXX OOX OXO");
        assert!(is_full(&board));
        assert!(!is_tie(&board));
    }
}
