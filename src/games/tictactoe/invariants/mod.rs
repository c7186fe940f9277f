//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties of a game state. They are checked in
//! debug builds after every accepted click and can be tested on their own.

pub mod balanced_marks;
pub mod monotonic_fill;
pub mod step_in_range;
pub mod turn_flag;

pub use balanced_marks::BalancedMarksInvariant;
pub use monotonic_fill::MonotonicFillInvariant;
pub use step_in_range::StepInRangeInvariant;
pub use turn_flag::TurnFlagInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
///
/// Implemented for tuples of invariants over the same state.
pub trait InvariantSet<S> {
    /// Checks every invariant, collecting all violations.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;

    /// Like [`InvariantSet::check_all`], folded into one message.
    fn check_summary(state: &S) -> Result<(), String> {
        Self::check_all(state).map_err(|violations| {
            violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ")
        })
    }
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let violations: Vec<_> = [$(($inv::holds(state), $inv::description())),+]
                    .into_iter()
                    .filter(|(holds, _)| !holds)
                    .map(|(_, description)| InvariantViolation::new(description))
                    .collect();

                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);

/// Invariants of the single-board game.
pub type ClassicInvariants = (BalancedMarksInvariant, TurnFlagInvariant);

/// Invariants of the history-keeping game.
pub type TimeTravelInvariants = (
    BalancedMarksInvariant,
    MonotonicFillInvariant,
    StepInRangeInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Player, Position, Square, TimeTravelGame};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let game = TimeTravelGame::new();
        assert!(TimeTravelInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let game = TimeTravelGame::replay(&[Position::TopLeft, Position::Center, Position::TopRight]);
        assert!(TimeTravelInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_collects_every_violation() {
        let mut game = TimeTravelGame::replay(&[Position::Center]);
        // Two O marks on the latest board: unbalanced and overfilled.
        game.history[1] = game.history[1]
            .with_mark(Position::TopLeft, Player::O)
            .with_mark(Position::TopRight, Player::O);
        game.step = 5;

        let violations = TimeTravelInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 3);
        assert_eq!(game.history[1].get(Position::Center), Square::Occupied(Player::X));
    }

    #[test]
    fn test_check_summary_joins_descriptions() {
        let mut game = TimeTravelGame::new();
        game.step = 1;

        let summary = TimeTravelInvariants::check_summary(&game).unwrap_err();
        assert_eq!(
            summary,
            <StepInRangeInvariant as Invariant<TimeTravelGame>>::description()
        );
    }
}
