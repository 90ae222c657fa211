//! Running scoreboard across rounds.

use crate::{Mark, Outcome};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Wins per mark and draws accumulated over a session.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, new,
)]
pub struct Score {
    /// Rounds won by X.
    x_wins: u32,
    /// Rounds won by O.
    o_wins: u32,
    /// Rounds ending in a draw.
    draws: u32,
}

impl Score {
    /// Label for the X counter.
    pub const X_WINS_LABEL: &'static str = "X wins";
    /// Label for the O counter.
    pub const O_WINS_LABEL: &'static str = "O wins";
    /// Label for the draw counter.
    pub const DRAWS_LABEL: &'static str = "Draws";

    /// Wins recorded for `mark`.
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        }
    }

    /// Total rounds finished.
    pub fn rounds(&self) -> u32 {
        self.x_wins
            .saturating_add(self.o_wins)
            .saturating_add(self.draws)
    }

    /// Counts a finished round. `NoResult` leaves the score untouched.
    #[instrument(skip(self))]
    pub(crate) fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Win { mark: Mark::X, .. } => self.x_wins = self.x_wins.saturating_add(1),
            Outcome::Win { mark: Mark::O, .. } => self.o_wins = self.o_wins.saturating_add(1),
            Outcome::Draw => self.draws = self.draws.saturating_add(1),
            Outcome::NoResult => return,
        }
        debug!(score = %self, "Score updated");
    }

    /// Zeroes every counter.
    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}  {}: {}  {}: {}",
            Self::X_WINS_LABEL,
            self.x_wins,
            Self::O_WINS_LABEL,
            self.o_wins,
            Self::DRAWS_LABEL,
            self.draws
        )
    }
}
