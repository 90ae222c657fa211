//! Outcome evaluation for a board snapshot.

use crate::rules::{Line, is_full, winning_line};
use crate::{Board, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Nobody has won and there are empty squares left.
    NoResult,
    /// A mark filled a line.
    Win {
        /// The winning mark.
        mark: Mark,
        /// The completed line.
        line: Line,
    },
    /// Board is full with no completed line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win { mark, .. } => Some(*mark),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn line(&self) -> Option<Line> {
        match self {
            Outcome::Win { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// True for a win or a draw.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::NoResult)
    }

    /// Whether `pos` is part of the winning line.
    pub fn highlights(&self, pos: Position) -> bool {
        self.line().is_some_and(|line| line.contains(pos))
    }
}

/// Evaluates a board.
///
/// Total over every 9-square board, including ones unreachable by legal
/// play. Lines are checked rows first, then columns, then the two
/// diagonals; the first complete line is reported.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    let outcome = if let Some((mark, line)) = winning_line(board) {
        Outcome::Win { mark, line }
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::NoResult
    };
    trace!(?outcome, "Evaluated board");
    outcome
}
