//! Errors raised by rounds and battles
//!
//! Every variant is recoverable: the caller reports it and prompts again.

use thiserror::Error;

/// Rejected requests against a round or battle
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("word length {length} is outside the available range {min}-{max}")]
    LengthUnavailable { length: usize, min: usize, max: usize },

    #[error("no words of length {0} in the word list")]
    NoWordsOfLength(usize),

    #[error("expected a {expected}-letter word, got {actual} letters")]
    WrongLength { expected: usize, actual: usize },

    #[error("'{0}' is not in the word list")]
    UnknownWord(String),

    #[error("'{0}' was already guessed")]
    AlreadyGuessed(String),

    #[error("no round in progress")]
    RoundNotActive,

    #[error("the word list is empty")]
    EmptyCorpus,
}

impl GameError {
    /// True for input mistakes that count as a strike in battle mode
    #[must_use]
    pub const fn is_strike(&self) -> bool {
        matches!(self, Self::WrongLength { .. } | Self::UnknownWord(_))
    }
}
