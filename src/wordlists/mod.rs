//! Word lists for word ladders
//!
//! Provides the embedded dictionary, file loading, and the [`Dictionary`]
//! bundle of a word list with the solver built over it.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use std::fmt;
use std::path::PathBuf;

use crate::core::Word;
use crate::error::{LadderError, Result};
use crate::graph::GraphBuilder;
use crate::solver::Solver;

/// Where dictionary words come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionarySource {
    /// The list compiled into the binary
    Embedded,
    /// A whitespace-separated word file
    File(PathBuf),
}

impl DictionarySource {
    /// Parse a CLI value: `"embedded"` or a path
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "embedded" | "default" => Self::Embedded,
            path => Self::File(PathBuf::from(path)),
        }
    }

    /// Load the words of a given length (0 = all lengths)
    ///
    /// # Errors
    ///
    /// Returns [`LadderError::Io`] if a file source cannot be read.
    pub fn load(&self, length: usize) -> Result<Vec<Word>> {
        match self {
            Self::Embedded => Ok(loader::words_from_slice(WORDS, length)),
            Self::File(path) => loader::load_from_file(path, length),
        }
    }
}

impl fmt::Display for DictionarySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded => write!(f, "embedded dictionary"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// A word list of one length together with its solver
///
/// Switching word length means loading a new `Dictionary` and replacing the old
/// one; solvers handed out earlier keep answering against their own graph.
#[derive(Debug, Clone)]
pub struct Dictionary {
    source: DictionarySource,
    length: usize,
    words: Vec<Word>,
    solver: Solver,
}

impl Dictionary {
    /// Load words from `source` and build their graph
    ///
    /// # Errors
    ///
    /// Returns [`LadderError::Io`] if the source cannot be read, or
    /// [`LadderError::EmptyDictionary`] if it has no words of `length`.
    pub fn load(source: DictionarySource, length: usize) -> Result<Self> {
        let words = source.load(length)?;
        if words.is_empty() {
            return Err(LadderError::EmptyDictionary { length });
        }

        log::info!("Loaded {} words of length {length} from {source}", words.len());
        Ok(Self::from_words(source, length, words))
    }

    /// Build a dictionary from words already in memory
    #[must_use]
    pub fn from_words(source: DictionarySource, length: usize, words: Vec<Word>) -> Self {
        let graph = GraphBuilder::new().build_graph(&words);
        Self {
            source,
            length,
            words,
            solver: Solver::new(graph),
        }
    }

    /// Load the same source at a different word length
    ///
    /// # Errors
    ///
    /// See [`Dictionary::load`].
    pub fn with_length(&self, length: usize) -> Result<Self> {
        Self::load(self.source.clone(), length)
    }

    #[must_use]
    pub const fn source(&self) -> &DictionarySource {
        &self.source
    }

    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Words in source order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub const fn solver(&self) -> &Solver {
        &self.solver
    }
}
