//! Logical properties that must hold for every reachable session.
//!
//! Invariants are testable independently and are checked after each
//! accepted move in debug builds.

mod mark_balance;
mod turn_consistency;

pub use mark_balance::MarkBalanceInvariant;
pub use turn_consistency::TurnConsistencyInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", description)]
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

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// All session invariants as a composable set.
pub type SessionInvariants = (MarkBalanceInvariant, TurnConsistencyInvariant);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameSession;

    #[test]
    fn test_invariant_set_holds_for_new_session() {
        assert!(SessionInvariants::check_all(&GameSession::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_through_a_round() {
        let mut session = GameSession::new();
        for index in [4, 0, 8, 2, 1, 7, 6, 3, 5] {
            session.play_move(index);
            assert!(SessionInvariants::check_all(&session).is_ok());
        }
    }

    #[test]
    fn test_violation_display() {
        let violation = InvariantViolation::new("X and O counts differ by at most one");
        assert_eq!(
            violation.to_string(),
            "Invariant violated: X and O counts differ by at most one"
        );
    }
}
