//! Turn consistency: the mark to move matches the board while a round is open.

use super::Invariant;
use crate::{GameSession, Mark, Phase};

/// Invariant: during play, X is to move exactly when both marks have been
/// placed equally often.
///
/// After a win or draw the finishing mark stays active, so the check only
/// applies while the round is in progress.
pub struct TurnConsistencyInvariant;

impl Invariant<GameSession> for TurnConsistencyInvariant {
    fn holds(session: &GameSession) -> bool {
        if session.phase() != Phase::InProgress {
            return true;
        }
        let board = session.board();
        let expected = if board.count(Mark::X) == board.count(Mark::O) {
            Mark::X
        } else {
            Mark::O
        };
        session.to_move() == expected
    }

    fn description() -> &'static str {
        "Mark to move agrees with the number of marks on the board"
    }
}
