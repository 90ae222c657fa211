//! Line-based commands for interactive play.

use derive_more::{Display, Error};
use tictactoe::Position;
use tracing::instrument;

/// A single command typed by a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Place the active mark.
    Place(Position),
    /// Clear the board, keep the score.
    ResetRound,
    /// Clear the board and the score.
    ResetAll,
    /// Leave the game.
    Quit,
}

/// Input that could not be understood.
#[derive(Debug, Clone, Display, Error)]
#[display("Input error: {} at {}:{}", message, file, line)]
pub struct InputError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl InputError {
    /// Creates a new input error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Parses one line of input.
///
/// Cells are numbered 1-9 to match the rendered board.
#[instrument]
pub fn parse_action(line: &str) -> Result<Action, InputError> {
    let line = line.trim().to_lowercase();
    match line.as_str() {
        "r" | "round" => Ok(Action::ResetRound),
        "a" | "all" => Ok(Action::ResetAll),
        "q" | "quit" => Ok(Action::Quit),
        other => {
            let cell: usize = other
                .parse()
                .map_err(|_| InputError::new(format!("Unknown command '{}'", other)))?;
            cell.checked_sub(1)
                .and_then(Position::from_index)
                .map(Action::Place)
                .ok_or_else(|| InputError::new(format!("Cell {} is not between 1 and 9", cell)))
        }
    }
}
