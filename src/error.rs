//! Error types for dictionary loading and graph construction
//!
//! Query operations never fail: an unknown word or a missing ladder is an empty
//! result. Only getting words into the system can go wrong.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::core::WordError;

/// Errors produced by the word ladder library
#[derive(Error, Debug)]
pub enum LadderError {
    /// The dictionary file could not be opened or read
    #[error("could not read dictionary {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A reader-backed word source failed mid-stream
    #[error("failed to read word source: {0}")]
    Read(#[from] io::Error),

    /// A word could not be constructed
    #[error("invalid word: {0}")]
    InvalidWord(#[from] WordError),

    /// No word of the requested length exists in the dictionary
    #[error("dictionary has no words of length {length}")]
    EmptyDictionary { length: usize },
}

impl LadderError {
    /// Wrap an I/O error with the path that produced it
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for word ladder operations
pub type Result<T> = std::result::Result<T, LadderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_mentions_path() {
        let err = LadderError::io(
            "missing.txt",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        let message = err.to_string();
        assert!(message.contains("missing.txt"));
        assert!(message.contains("no such file"));
    }

    #[test]
    fn word_error_converts() {
        let err: LadderError = WordError::Empty.into();
        assert!(matches!(err, LadderError::InvalidWord(WordError::Empty)));
    }

    #[test]
    fn empty_dictionary_message() {
        let err = LadderError::EmptyDictionary { length: 9 };
        assert_eq!(err.to_string(), "dictionary has no words of length 9");
    }
}
