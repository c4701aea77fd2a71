//! What one player has learned during a round

use super::{CandidateSet, Constraints, narrow};
use crate::core::{Pattern, Word};
use rustc_hash::FxHashSet;

/// Observation log: constraints plus every word guessed so far
///
/// Each strategy owns one, and in battle mode it also records the opponent's
/// guesses since both sides see all feedback.
#[derive(Debug, Clone, Default)]
pub struct Knowledge {
    constraints: Constraints,
    guessed: FxHashSet<String>,
    history: Vec<(Word, Pattern)>,
}

impl Knowledge {
    /// Fresh knowledge for a new round
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one guess and its feedback
    pub fn observe(&mut self, guess: &Word, pattern: &Pattern) {
        self.constraints.observe(guess, pattern);
        self.guessed.insert(guess.text().to_string());
        self.history.push((guess.clone(), pattern.clone()));
    }

    /// Forget everything
    pub fn reset(&mut self) {
        self.constraints = Constraints::new();
        self.guessed.clear();
        self.history.clear();
    }

    /// Accumulated constraints
    #[must_use]
    pub const fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    /// Texts of guessed words
    #[must_use]
    pub const fn guessed(&self) -> &FxHashSet<String> {
        &self.guessed
    }

    /// Observations in order
    #[must_use]
    pub fn history(&self) -> &[(Word, Pattern)] {
        &self.history
    }

    /// True before the first observation
    #[must_use]
    pub fn is_fresh(&self) -> bool {
        self.history.is_empty()
    }

    /// Check whether `word` was guessed already
    #[must_use]
    pub fn has_guessed(&self, word: &Word) -> bool {
        self.guessed.contains(word.text())
    }

    /// Narrow `partition` to the current candidates, with fallback
    #[must_use]
    pub fn candidates<'a>(&self, partition: &'a [Word]) -> CandidateSet<'a> {
        narrow(partition, &self.constraints, &self.guessed)
    }

    /// Words of `partition` not guessed yet, in corpus order
    pub fn unguessed<'p>(&self, partition: &'p [Word]) -> impl Iterator<Item = &'p Word> {
        partition.iter().filter(|word| !self.has_guessed(word))
    }
}
