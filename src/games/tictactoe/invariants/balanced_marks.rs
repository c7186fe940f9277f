//! Balanced marks invariant: X is never behind O, and never more than one ahead.

use super::super::{Board, ClassicGame, Player, TimeTravelGame};
use super::Invariant;

/// Invariant: on every stored board, X's count minus O's count is 0 or 1.
pub struct BalancedMarksInvariant;

impl BalancedMarksInvariant {
    fn balanced(board: &Board) -> bool {
        let x = board.count(Player::X);
        let o = board.count(Player::O);
        x == o || x == o + 1
    }
}

impl Invariant<ClassicGame> for BalancedMarksInvariant {
    fn holds(game: &ClassicGame) -> bool {
        Self::balanced(game.board())
    }

    fn description() -> &'static str {
        "X has the same number of marks as O, or one more"
    }
}

impl Invariant<TimeTravelGame> for BalancedMarksInvariant {
    fn holds(game: &TimeTravelGame) -> bool {
        game.history().iter().all(Self::balanced)
    }

    fn description() -> &'static str {
        "Every snapshot has as many X marks as O marks, or one more"
    }
}
