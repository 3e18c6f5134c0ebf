//! Ladder solving command
//!
//! Finds the shortest ladder between two words.

use crate::core::Word;
use crate::solver::Solver;

/// Configuration for solving a ladder
pub struct SolveConfig {
    pub start: String,
    pub target: String,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(start: String, target: String) -> Self {
        Self { start, target }
    }

    /// Word length implied by the start word
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.start.trim().chars().count()
    }
}

/// Result of solving a ladder
pub struct SolveResult {
    pub start: String,
    pub target: String,
    /// Shortest ladder, empty if none exists
    pub path: Vec<Word>,
}

impl SolveResult {
    #[must_use]
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of moves on the ladder
    #[must_use]
    pub fn moves(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Start and target name the same word
    #[must_use]
    pub fn is_trivial(&self) -> bool {
        self.path.len() == 1
    }
}

/// Solve a ladder with the given solver
///
/// Unknown words and disconnected pairs produce a result with an empty path.
#[must_use]
pub fn solve_ladder(config: SolveConfig, solver: &Solver) -> SolveResult {
    let path = solver.find_shortest_path(&config.start, &config.target);

    if path.is_empty() {
        log::debug!("No ladder from {} to {}", config.start, config.target);
    }

    SolveResult {
        start: config.start,
        target: config.target,
        path,
    }
}
