//! A single play-through of a word ladder puzzle

use thiserror::Error;

use crate::core::{Word, WordError};
use crate::solver::{Hint, Solver};

/// Why a move was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("please enter a word")]
    Empty,

    #[error("the game is already over")]
    GameOver,

    #[error("{0}")]
    InvalidWord(WordError),

    #[error("{0} is the current word")]
    SameWord(Word),

    #[error("word length must be {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("you must change exactly one letter (changed {changed})")]
    NotOneLetter { changed: usize },

    #[error("{0} is not in the dictionary")]
    NotInDictionary(Word),
}

/// Result of an accepted move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The target has not been reached yet
    Continue,
    /// The move landed on the target word
    Reached,
}

/// State of one game: the words visited so far and hints taken
#[derive(Debug, Clone)]
pub struct GameSession {
    player: String,
    start: Word,
    target: Word,
    moves: Vec<Word>,
    hints_used: usize,
    optimal_moves: usize,
}

/// End-of-game report
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    pub player: String,
    pub start: Word,
    pub target: Word,
    pub path: Vec<Word>,
    pub moves: usize,
    pub optimal_moves: usize,
    pub hints_used: usize,
    pub completed: bool,
    /// Optimal moves as a percentage of moves played
    pub efficiency: Option<f64>,
}

impl GameSession {
    #[must_use]
    pub fn new(player: impl Into<String>, start: Word, target: Word, optimal_moves: usize) -> Self {
        Self {
            player: player.into(),
            moves: vec![start.clone()],
            start,
            target,
            hints_used: 0,
            optimal_moves,
        }
    }

    #[must_use]
    pub fn player(&self) -> &str {
        &self.player
    }

    #[must_use]
    pub const fn start(&self) -> &Word {
        &self.start
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    /// Every word visited, starting with the start word
    #[must_use]
    pub fn moves(&self) -> &[Word] {
        &self.moves
    }

    /// The most recently visited word
    #[must_use]
    pub fn current_word(&self) -> &Word {
        self.moves.last().unwrap_or(&self.start)
    }

    /// Number of moves made (the start word is not a move)
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.moves.len().saturating_sub(1)
    }

    #[must_use]
    pub const fn hints_used(&self) -> usize {
        self.hints_used
    }

    #[must_use]
    pub const fn optimal_moves(&self) -> usize {
        self.optimal_moves
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.current_word() == &self.target
    }

    /// Validate and apply a move to `input`
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] describing the first rule the move breaks; the
    /// session is unchanged in that case.
    pub fn try_move(&mut self, input: &str, solver: &Solver) -> Result<MoveOutcome, MoveError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(MoveError::Empty);
        }
        if self.is_complete() {
            return Err(MoveError::GameOver);
        }

        let word = Word::new(input).map_err(MoveError::InvalidWord)?;
        let current = self.current_word();

        if &word == current {
            return Err(MoveError::SameWord(word));
        }

        let changed = word
            .differing_positions(current)
            .ok_or(MoveError::LengthMismatch {
                expected: current.len(),
                actual: word.len(),
            })?
            .len();
        if changed != 1 {
            return Err(MoveError::NotOneLetter { changed });
        }

        if !solver.graph().contains(&word) {
            return Err(MoveError::NotInDictionary(word));
        }

        log::debug!("{} moved {current} -> {word}", self.player);
        self.moves.push(word);

        if self.is_complete() {
            Ok(MoveOutcome::Reached)
        } else {
            Ok(MoveOutcome::Continue)
        }
    }

    /// Ask for the next step toward the target
    ///
    /// Only counts against the player when a hint is actually available.
    pub fn request_hint(&mut self, solver: &Solver) -> Option<Hint> {
        if self.is_complete() {
            return None;
        }

        let hint = solver.hint(self.current_word().text(), self.target.text())?;
        self.hints_used += 1;
        Some(hint)
    }

    #[must_use]
    pub fn summary(&self) -> SessionSummary {
        let moves = self.move_count();
        let efficiency =
            (moves > 0).then(|| self.optimal_moves as f64 / moves as f64 * 100.0);

        SessionSummary {
            player: self.player.clone(),
            start: self.start.clone(),
            target: self.target.clone(),
            path: self.moves.clone(),
            moves,
            optimal_moves: self.optimal_moves,
            hints_used: self.hints_used,
            completed: self.is_complete(),
            efficiency,
        }
    }
}
