//! Interactive word ladder game state
//!
//! Sessions live in memory only; storing history is left to the caller.

mod analytics;
mod puzzle;
mod session;

pub use analytics::{Analytics, game_analytics};
pub use puzzle::{MAX_PUZZLE_ATTEMPTS, Puzzle};
pub use session::{GameSession, MoveError, MoveOutcome, SessionSummary};
