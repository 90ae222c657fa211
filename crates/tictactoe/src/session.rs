//! A game session: one board, turn order and a running score.

use crate::invariants::{InvariantSet, SessionInvariants};
use crate::{Board, Mark, MoveError, Outcome, Position, Score, Square, evaluate};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Phase of the current round, derived from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Moves are accepted.
    InProgress,
    /// The round was won by a mark.
    Won(Mark),
    /// The round ended in a draw.
    Drawn,
}

/// Status line shown to players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Status {
    /// A mark won the round.
    #[display("Winner: {}", _0)]
    Winner(Mark),
    /// The round is a draw.
    #[display("It's a draw.")]
    Draw,
    /// Waiting on a mark to move.
    #[display("Turn: {}", _0)]
    Turn(Mark),
}

/// Mutable state for a run of rounds sharing one score.
///
/// Only the board, the mark to move and the score are stored. Phase,
/// status, highlights and playable squares are recomputed from them on
/// every read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    board: Board,
    to_move: Mark,
    score: Score,
}

impl GameSession {
    /// Creates a session with an empty board, X to move and zero score.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating new game session");
        Self {
            board: Board::new(),
            to_move: Mark::X,
            score: Score::default(),
        }
    }

    /// Places the active mark at `index`, ignoring illegal moves.
    ///
    /// Out-of-range indices, occupied squares and moves after the round
    /// has ended leave the session untouched.
    #[instrument(skip(self))]
    pub fn play_move(&mut self, index: usize) {
        if let Err(e) = self.try_play_move(index) {
            debug!(error = %e, "Move ignored");
        }
    }

    /// Places the active mark at `index` and reports the resulting outcome.
    ///
    /// On a win or draw the score is updated and the active mark stays put;
    /// otherwise the turn passes to the opponent.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] and leaves the session untouched if the
    /// round is over, `index` is outside 0-8, or the square is occupied.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn try_play_move(&mut self, index: usize) -> Result<Outcome, MoveError> {
        if !self.can_play() {
            return Err(MoveError::GameOver);
        }
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        self.board.set(pos, Square::Occupied(self.to_move));
        let outcome = evaluate(&self.board);
        if outcome.is_terminal() {
            info!(?outcome, "Round finished");
            self.score.record(&outcome);
        } else {
            self.to_move = self.to_move.opponent();
        }
        debug!(position = %pos, "Move applied");

        debug_assert!(
            SessionInvariants::check_all(&*self).is_ok(),
            "session invariants violated after move at {}",
            pos
        );
        Ok(outcome)
    }

    /// Clears the board for a new round; the score is kept.
    #[instrument(skip(self))]
    pub fn reset_round(&mut self) {
        info!("Resetting round");
        self.board = Board::new();
        self.to_move = Mark::X;
    }

    /// Clears the board and zeroes the score.
    #[instrument(skip(self))]
    pub fn reset_all(&mut self) {
        self.reset_round();
        info!("Resetting score");
        self.score.clear();
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mark that moves next, or that made the final move once the round is over.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the running score.
    pub fn score(&self) -> &Score {
        &self.score
    }

    /// Evaluates the current board.
    pub fn outcome(&self) -> Outcome {
        evaluate(&self.board)
    }

    /// Returns the phase of the current round.
    pub fn phase(&self) -> Phase {
        match self.outcome() {
            Outcome::NoResult => Phase::InProgress,
            Outcome::Win { mark, .. } => Phase::Won(mark),
            Outcome::Draw => Phase::Drawn,
        }
    }

    /// Returns the status line for the current round.
    pub fn status(&self) -> Status {
        match self.phase() {
            Phase::InProgress => Status::Turn(self.to_move),
            Phase::Won(mark) => Status::Winner(mark),
            Phase::Drawn => Status::Draw,
        }
    }

    /// True while the round accepts moves.
    pub fn can_play(&self) -> bool {
        self.phase() == Phase::InProgress
    }

    /// Whether a move at `index` would be accepted.
    pub fn is_playable(&self, index: usize) -> bool {
        Position::from_index(index).is_some_and(|pos| self.can_play() && self.board.is_empty(pos))
    }

    /// Whether `index` lies on the winning line.
    pub fn is_highlighted(&self, index: usize) -> bool {
        Position::from_index(index).is_some_and(|pos| self.outcome().highlights(pos))
    }

    /// Empty positions while the round is in progress.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.can_play() {
            self.board.empty_positions()
        } else {
            Vec::new()
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
