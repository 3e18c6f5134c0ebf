//! Word list loading utilities
//!
//! Provides functions to load word lists from files or from embedded constants.

use crate::core::Word;
use crate::error::{LadderError, Result};
use crate::graph::GraphBuilder;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load words of a given length from a file
///
/// A `length` of 0 keeps words of every length.
///
/// # Errors
///
/// Returns [`LadderError::Io`] if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use word_ladder::wordlists::loader::load_from_file;
///
/// let words = load_from_file("dictionary.txt", 4).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, length: usize) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| LadderError::io(path, e))?;

    GraphBuilder::load_words(BufReader::new(file), length).map_err(|e| match e {
        LadderError::Read(source) => LadderError::io(path, source),
        other => other,
    })
}

/// Convert an embedded string slice to words of a given length
///
/// # Examples
/// ```
/// use word_ladder::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["cat", "cold", "dog"], 3);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], length: usize) -> Vec<Word> {
    slice
        .iter()
        .filter(|s| length == 0 || s.chars().count() == length)
        .filter_map(|&s| Word::new(s).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["cat", "cot", "cog"], 3);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "CAT");
        assert_eq!(words[1].text(), "COT");
        assert_eq!(words[2].text(), "COG");
    }

    #[test]
    fn words_from_slice_filters_length() {
        let words = words_from_slice(&["cat", "cold", "ox", "dog"], 3);
        assert_eq!(words.len(), 2);
        assert_eq!(words[1].text(), "DOG");

        let all = words_from_slice(&["cat", "cold", "ox", "dog"], 0);
        assert_eq!(all.len(), 4);
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["cat", "c4t", "dog"], 3);
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn load_from_file_reads_words() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "cat\nCOT\n cog  cold").unwrap();

        let words = load_from_file(file.path(), 3).unwrap();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["CAT", "COT", "COG"]);
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let err = load_from_file(&path, 3).unwrap_err();
        match err {
            LadderError::Io { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn read_failure_reports_path() {
        // Opening a directory succeeds on Unix; reading it does not
        let dir = tempfile::tempdir().unwrap();

        let err = load_from_file(dir.path(), 3).unwrap_err();
        match err {
            LadderError::Io { path, .. } => assert_eq!(path, dir.path()),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn load_from_file_skips_latin1_words() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"cat\ncaf\xe9\ndog\n").unwrap();

        let words = load_from_file(file.path(), 0).unwrap();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["CAT", "DOG"]);
    }
}
