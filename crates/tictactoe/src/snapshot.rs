//! Read-only projection of a session for hosts to re-read after each mutation.

use crate::{GameSession, Mark, Phase, Score, Square};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Everything a host needs to draw the game, computed from a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Snapshot {
    /// Squares in row-major order; `None` for empty.
    cells: [Option<Mark>; 9],
    /// Mark to move, or the mark that finished the round.
    to_move: Mark,
    /// Phase of the current round.
    phase: Phase,
    /// Status line ("Turn: X", "Winner: O", "It's a draw.").
    status: String,
    /// Indices of the winning line, if the round was won.
    winning_line: Option<[usize; 3]>,
    /// Indices that currently accept a move.
    playable: Vec<usize>,
    /// Running score.
    score: Score,
}

impl From<&GameSession> for Snapshot {
    fn from(session: &GameSession) -> Self {
        Self {
            cells: (*session.board().squares()).map(Square::mark),
            to_move: session.to_move(),
            phase: session.phase(),
            status: session.status().to_string(),
            winning_line: session.outcome().line().map(|line| line.indices()),
            playable: session
                .valid_moves()
                .into_iter()
                .map(|pos| pos.to_index())
                .collect(),
            score: *session.score(),
        }
    }
}

impl GameSession {
    /// Captures the current projection.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(self)
    }
}
