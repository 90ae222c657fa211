//! Move rejection reasons.

use crate::Position;

/// Why a move was not applied.
///
/// [`GameSession::play_move`](crate::GameSession::play_move) swallows these;
/// [`GameSession::try_play_move`](crate::GameSession::try_play_move) hands
/// them back to hosts that want to report them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Index outside 0-8.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The square is already taken.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The round has been won or drawn.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
