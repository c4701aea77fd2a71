//! Single-player round
//!
//! `NotStarted → InProgress → {Won, Lost}`. The round never prints; every
//! verdict goes back to the caller.

use super::GameError;
use crate::core::{Pattern, Word};
use crate::wordlists::Corpus;
use log::{debug, info};
use rand::Rng;

/// Lifecycle of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundState {
    #[default]
    NotStarted,
    InProgress,
    Won,
    Lost,
}

/// One secret word and the guesses made against it
#[derive(Debug, Clone)]
pub struct Round<'a> {
    corpus: &'a Corpus,
    state: RoundState,
    secret: Option<&'a Word>,
    history: Vec<(Word, Pattern)>,
    max_attempts: usize,
}

impl<'a> Round<'a> {
    /// Create an idle round over `corpus`
    #[must_use]
    pub const fn new(corpus: &'a Corpus) -> Self {
        Self {
            corpus,
            state: RoundState::NotStarted,
            secret: None,
            history: Vec::new(),
            max_attempts: 0,
        }
    }

    /// Start a round with a random secret of `length` letters
    ///
    /// Returns the secret's length.
    ///
    /// # Errors
    ///
    /// Returns `EmptyCorpus`, `LengthUnavailable` or `NoWordsOfLength` when no
    /// secret of that length can be drawn. The round is left untouched.
    pub fn start<R: Rng + ?Sized>(&mut self, length: usize, rng: &mut R) -> Result<usize, GameError> {
        let secret = pick_secret(self.corpus, length, rng)?;
        Ok(self.begin(secret))
    }

    /// Start a round with a chosen secret
    ///
    /// # Errors
    ///
    /// Returns `UnknownWord` if the secret is not in the corpus.
    pub fn start_with(&mut self, secret: &str) -> Result<usize, GameError> {
        let secret = self
            .corpus
            .lookup(secret)
            .ok_or_else(|| GameError::UnknownWord(secret.trim().to_ascii_uppercase()))?;
        Ok(self.begin(secret))
    }

    fn begin(&mut self, secret: &'a Word) -> usize {
        let length = secret.length();
        self.secret = Some(secret);
        self.history.clear();
        self.max_attempts = attempt_budget(length);
        self.state = RoundState::InProgress;

        info!("Round started: {length} letters, {} attempts", self.max_attempts);
        debug!("Secret: {secret}");
        length
    }

    /// Judge a guess against the secret
    ///
    /// Accepted guesses use up one attempt and may end the round.
    ///
    /// # Errors
    ///
    /// Returns `RoundNotActive` outside a round, `WrongLength` when the guess
    /// has the wrong number of letters, and `UnknownWord` when it is not in the
    /// corpus. Rejected guesses leave the round unchanged.
    pub fn check(&mut self, guess: &str) -> Result<Pattern, GameError> {
        let secret = match (self.state, self.secret) {
            (RoundState::InProgress, Some(secret)) => secret,
            _ => return Err(GameError::RoundNotActive),
        };

        let word = validate_guess(self.corpus, secret.length(), guess)?;
        let pattern = Pattern::calculate(word, secret);
        self.history.push((word.clone(), pattern.clone()));

        if pattern.is_perfect() {
            self.state = RoundState::Won;
            info!("Round won in {} attempts", self.history.len());
        } else if self.remaining_attempts() == 0 {
            self.state = RoundState::Lost;
            info!("Round lost: secret was {secret}");
        }

        Ok(pattern)
    }

    /// Attempts left in the current round
    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        self.max_attempts.saturating_sub(self.history.len())
    }

    /// Attempt budget of the current round
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// True once the secret has been guessed
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.state == RoundState::Won
    }

    /// True after a win or loss
    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.state, RoundState::Won | RoundState::Lost)
    }

    /// Current lifecycle state
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// The secret, while a round is started
    #[must_use]
    pub const fn secret(&self) -> Option<&'a Word> {
        self.secret
    }

    /// Length of the secret, while a round is started
    #[must_use]
    pub fn word_length(&self) -> Option<usize> {
        self.secret.map(Word::length)
    }

    /// Accepted guesses in order
    #[must_use]
    pub fn history(&self) -> &[(Word, Pattern)] {
        &self.history
    }

    /// Abandon the round and return to `NotStarted`
    pub fn end(&mut self) {
        if self.state != RoundState::NotStarted {
            info!("Round ended after {} guesses", self.history.len());
        }
        self.secret = None;
        self.history.clear();
        self.max_attempts = 0;
        self.state = RoundState::NotStarted;
    }
}

/// Attempts allowed for a secret of `length` letters
#[must_use]
pub const fn attempt_budget(length: usize) -> usize {
    length + 1
}

/// Draw a random secret of exactly `length` letters
pub(crate) fn pick_secret<'a, R: Rng + ?Sized>(
    corpus: &'a Corpus,
    length: usize,
    rng: &mut R,
) -> Result<&'a Word, GameError> {
    let (min, max) = corpus.bounds().ok_or(GameError::EmptyCorpus)?;
    if length < min || length > max {
        return Err(GameError::LengthUnavailable { length, min, max });
    }
    corpus
        .random_word(length, rng)
        .ok_or(GameError::NoWordsOfLength(length))
}

/// Resolve a typed guess to a corpus word of the expected length
pub(crate) fn validate_guess<'a>(
    corpus: &'a Corpus,
    expected: usize,
    guess: &str,
) -> Result<&'a Word, GameError> {
    let text = guess.trim().to_ascii_uppercase();
    let actual = text.chars().count();
    if actual != expected {
        return Err(GameError::WrongLength { expected, actual });
    }
    corpus.lookup(&text).ok_or(GameError::UnknownWord(text))
}
