//! Tic-tac-toe round logic with a running scoreboard.
//!
//! # Architecture
//!
//! - **Rules**: pure win/draw detection over a board snapshot
//! - **Outcome**: [`evaluate`] folds the rules into a single [`Outcome`]
//! - **Session**: [`GameSession`] drives turn order, applies moves and keeps score
//! - **Snapshot**: serializable projection hosts re-read after each mutation
//!
//! # Example
//!
//! ```
//! use tictactoe::{GameSession, Mark, Phase};
//!
//! let mut session = GameSession::new();
//! for index in [0, 3, 1, 4, 2] {
//!     session.play_move(index);
//! }
//! assert_eq!(session.phase(), Phase::Won(Mark::X));
//! assert_eq!(session.status().to_string(), "Winner: X");
//!
//! session.reset_round();
//! assert_eq!(*session.score().x_wins(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod invariants;
mod outcome;
mod position;
pub mod rules;
mod score;
mod session;
mod snapshot;
mod types;

pub use action::MoveError;
pub use outcome::{Outcome, evaluate};
pub use position::Position;
pub use rules::Line;
pub use score::Score;
pub use session::{GameSession, Phase, Status};
pub use snapshot::Snapshot;
pub use types::{Board, Mark, Square};
