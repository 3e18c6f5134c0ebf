//! Word ladder word representation
//!
//! A Word is an immutable sequence of ASCII letters stored in canonical uppercase.

use std::fmt;
use std::str::FromStr;

/// Marker written into the blanked position of a wildcard pattern
pub const BLANK: char = '*';

/// A dictionary word in canonical (uppercase) form
///
/// Equality and ordering are plain byte-sequence comparisons of the canonical text,
/// so `Word` can key ordered and hashed collections alike.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must contain at least one letter"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is trimmed and normalized to uppercase.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The input is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Word;
    ///
    /// let word = Word::new("cat").unwrap();
    /// assert_eq!(word.text(), "CAT");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("c4t").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self {
            text: text.to_ascii_uppercase(),
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    #[allow(clippy::len_without_is_empty)] // A Word is never empty
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> u8 {
        self.as_bytes()[position]
    }

    /// Positions at which two equal-length words differ
    ///
    /// Returns `None` if the lengths differ.
    #[must_use]
    pub fn differing_positions(&self, other: &Self) -> Option<Vec<usize>> {
        if self.len() != other.len() {
            return None;
        }

        Some(
            self.as_bytes()
                .iter()
                .zip(other.as_bytes())
                .enumerate()
                .filter_map(|(i, (a, b))| (a != b).then_some(i))
                .collect(),
        )
    }

    /// First position at which two equal-length words differ
    #[must_use]
    pub fn first_difference(&self, other: &Self) -> Option<usize> {
        if self.len() != other.len() {
            return None;
        }

        self.as_bytes()
            .iter()
            .zip(other.as_bytes())
            .position(|(a, b)| a != b)
    }

    /// Check whether two words are one substitution apart
    #[must_use]
    pub fn is_adjacent(&self, other: &Self) -> bool {
        self.differing_positions(other)
            .is_some_and(|positions| positions.len() == 1)
    }

    /// Wildcard key with `position` replaced by [`BLANK`]
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[must_use]
    pub fn wildcard(&self, position: usize) -> String {
        let mut pattern = String::with_capacity(self.len());
        pattern.push_str(&self.text[..position]);
        pattern.push(BLANK);
        pattern.push_str(&self.text[position + 1..]);
        pattern
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
