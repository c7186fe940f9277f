//! Turn flag invariant for the single-board game.

use super::super::ClassicGame;
use super::Invariant;

/// Invariant: X is next exactly when an even number of squares is taken.
pub struct TurnFlagInvariant;

impl Invariant<ClassicGame> for TurnFlagInvariant {
    fn holds(game: &ClassicGame) -> bool {
        game.x_is_next() == (game.board().occupied_count() % 2 == 0)
    }

    fn description() -> &'static str {
        "Turn flag agrees with the number of marks on the board"
    }
}
