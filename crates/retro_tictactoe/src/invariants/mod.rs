//! Reachability checks over [`GameState`](crate::GameState).
//!
//! A state built by play always passes these. One parsed from text may not:
//! the engine keeps moves from such a state legal but does not pretend it was
//! reached by alternating play. Deserialization rejects states that fail.

mod alternation;
mod mark_balance;
mod single_winner;
mod winner_moved_last;

pub use alternation::AlternationInvariant;
pub use mark_balance::MarkBalanceInvariant;
pub use single_winner::SingleWinnerInvariant;
pub use winner_moved_last::WinnerMovedLastInvariant;

/// One property of a reachable game state.
pub trait Invariant<S> {
    /// True if `state` has the property.
    fn holds(state: &S) -> bool;

    /// Short sentence naming the property, used in error messages.
    fn description() -> &'static str;
}

/// A failed check, carrying the invariant's description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// What should have held.
    pub description: String,
}

impl InvariantViolation {
    /// Wraps a description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Tuples of invariants, checked in order.
pub trait InvariantSet<S> {
    /// Runs every check and returns all failures, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($name:ident),+) => {
        impl<S, $($name),+> InvariantSet<S> for ($($name,)+)
        where
            $($name: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let violations: Vec<InvariantViolation> = [
                    $(($name::holds(state), $name::description()),)+
                ]
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

impl_invariant_set!(A, B);
impl_invariant_set!(A, B, C);
impl_invariant_set!(A, B, C, D);

/// Joins violation descriptions into one line for error values.
pub(crate) fn describe(violations: &[InvariantViolation]) -> String {
    violations
        .iter()
        .map(|v| v.description.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Everything a state reached by legal play satisfies.
pub type GameInvariants = (
    AlternationInvariant,
    MarkBalanceInvariant,
    SingleWinnerInvariant,
    WinnerMovedLastInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{play_move, reset_game, GameState, Position};

    #[test]
    fn test_invariant_set_holds_for_empty_game() {
        assert!(GameInvariants::check_all(&reset_game()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let state = [Position::TopLeft, Position::Center, Position::TopRight]
            .into_iter()
            .fold(reset_game(), |state, position| play_move(&state, position));
        assert!(GameInvariants::check_all(&state).is_ok());
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (AlternationInvariant, MarkBalanceInvariant);
        assert!(TwoInvariants::check_all(&reset_game()).is_ok());
    }

    #[test]
    fn test_all_failures_are_reported() {
        // O ahead, and both marks hold a line.
        let state: GameState = "XXX|OOO|O..".parse().unwrap();
        let violations = GameInvariants::check_all(&state).unwrap_err();
        assert_eq!(
            violations,
            vec![
                InvariantViolation::new(MarkBalanceInvariant::description()),
                InvariantViolation::new(SingleWinnerInvariant::description()),
                InvariantViolation::new(WinnerMovedLastInvariant::description()),
            ]
        );
        assert_eq!(
            describe(&violations[..1]),
            "X leads O by at most one mark"
        );
    }
}
