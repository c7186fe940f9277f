//! Step pointer invariant.

use super::super::TimeTravelGame;
use super::Invariant;

/// Invariant: the step pointer always selects a stored snapshot.
pub struct StepInRangeInvariant;

impl Invariant<TimeTravelGame> for StepInRangeInvariant {
    fn holds(game: &TimeTravelGame) -> bool {
        game.step() < game.history().len()
    }

    fn description() -> &'static str {
        "Step pointer selects a stored snapshot"
    }
}
