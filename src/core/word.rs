//! Word representation
//!
//! A `Word` stores an uppercase alphabetic word of any length along with its
//! per-letter occurrence counts, which the pattern matcher and the constraint
//! model both lean on.

use std::fmt;
use thiserror::Error;

/// Number of letters in the alphabet (A-Z)
pub const ALPHABET_SIZE: usize = 26;

/// An uppercase, ASCII-alphabetic word with letter-count tracking
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
    counts: [u8; ALPHABET_SIZE],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must not be empty")]
    Empty,
    #[error("'{0}' must contain only the letters A-Z")]
    NonAlphabetic(String),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is ignored and the text is normalized to uppercase.
    ///
    /// # Errors
    /// Returns `WordError` if the word is empty or contains anything other than
    /// ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_battle::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("sh0rt").is_err());
    /// assert!(Word::new("").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let trimmed = text.as_ref().trim();

        if trimmed.is_empty() {
            return Err(WordError::Empty);
        }

        if !trimmed.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(WordError::NonAlphabetic(trimmed.to_string()));
        }

        let text = trimmed.to_ascii_uppercase();

        let mut counts = [0u8; ALPHABET_SIZE];
        for &b in text.as_bytes() {
            counts[letter_index(b)] = counts[letter_index(b)].saturating_add(1);
        }

        Ok(Self { text, counts })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as uppercase ASCII bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn length(&self) -> usize {
        self.text.len()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.length()`
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> u8 {
        self.text.as_bytes()[position]
    }

    /// How many times `letter` occurs in the word
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: u8) -> usize {
        if letter.is_ascii_uppercase() {
            usize::from(self.counts[letter_index(letter)])
        } else {
            0
        }
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.count_of(letter) > 0
    }

    /// Number of distinct letters
    #[must_use]
    pub fn distinct_letters(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// True when at least one letter appears more than once
    #[must_use]
    pub fn has_repeated_letters(&self) -> bool {
        self.distinct_letters() < self.length()
    }

    /// Occurrence count of every letter, indexed A=0..Z=25
    #[inline]
    pub(crate) const fn letter_counts(&self) -> [u8; ALPHABET_SIZE] {
        self.counts
    }
}

/// Index of an uppercase ASCII letter (A=0..Z=25)
#[inline]
pub(crate) fn letter_index(letter: u8) -> usize {
    usize::from(letter - b'A')
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
