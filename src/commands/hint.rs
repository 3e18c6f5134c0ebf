//! Hint command
//!
//! Suggests the next word on a shortest ladder.

use crate::core::Word;
use crate::solver::{Hint, Solver};

/// Result of asking for a hint
pub struct HintResult {
    pub current: Word,
    pub target: String,
    pub hint: Option<Hint>,
    /// Moves remaining on the shortest ladder
    pub remaining: Option<usize>,
}

/// Compute a hint from `current` toward `target`
///
/// # Errors
///
/// Returns an error if `current` is not a valid word.
pub fn hint_word(current: &str, target: &str, solver: &Solver) -> Result<HintResult, String> {
    let current_word = Word::new(current).map_err(|e| format!("Invalid word: {e}"))?;

    Ok(HintResult {
        current: current_word,
        target: target.trim().to_ascii_uppercase(),
        hint: solver.hint(current, target),
        remaining: solver.optimal_moves(current, target),
    })
}
