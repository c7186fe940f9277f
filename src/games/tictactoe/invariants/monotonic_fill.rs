//! Monotonic fill invariant: snapshot `i` is snapshot `i - 1` plus one mark.

use super::super::{Square, TimeTravelGame};
use super::Invariant;

/// Invariant: history entry `i` has exactly `i` occupied squares, and each
/// entry keeps every mark of the entry before it.
pub struct MonotonicFillInvariant;

impl Invariant<TimeTravelGame> for MonotonicFillInvariant {
    fn holds(game: &TimeTravelGame) -> bool {
        let history = game.history();

        let counts_match = history
            .iter()
            .enumerate()
            .all(|(i, board)| board.occupied_count() == i);

        let extends_previous = history.windows(2).all(|pair| {
            pair[0]
                .squares()
                .iter()
                .zip(pair[1].squares())
                .all(|(before, after)| *before == Square::Empty || before == after)
        });

        counts_match && extends_previous
    }

    fn description() -> &'static str {
        "History entry i holds exactly i marks and extends entry i - 1"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Board, Player, Position};

    #[test]
    fn test_empty_history_holds() {
        assert!(MonotonicFillInvariant::holds(&TimeTravelGame::new()));
    }

    #[test]
    fn test_replayed_history_holds() {
        let game = TimeTravelGame::replay(&[
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
            Position::BottomLeft,
        ]);
        assert!(MonotonicFillInvariant::holds(&game));
    }

    #[test]
    fn test_overwritten_mark_violates() {
        let mut game = TimeTravelGame::replay(&[Position::Center, Position::TopLeft]);
        // Same count, but the center mark was replaced.
        game.history[2] = Board::new()
            .with_mark(Position::Center, Player::O)
            .with_mark(Position::TopLeft, Player::X);
        assert!(!MonotonicFillInvariant::holds(&game));
    }

    #[test]
    fn test_skipped_snapshot_violates() {
        let mut game = TimeTravelGame::replay(&[Position::Center, Position::TopLeft]);
        game.history.remove(1);
        assert!(!MonotonicFillInvariant::holds(&game));
    }
}
