//! Guess selection strategies
//!
//! Defines the Strategy trait and the difficulty-tiered implementations.

use super::{AdaptiveStrategy, FrequencyStrategy, InformationStrategy};
use crate::config::Config;
use crate::core::{Pattern, Word};
use crate::wordlists::Corpus;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fmt;
use std::str::FromStr;

/// A player that proposes guesses and learns from feedback
///
/// Implementations own their observations; the caller feeds every verdict it
/// wants the player to know about through [`Strategy::observe`].
pub trait Strategy<'a> {
    /// Propose the next guess for a secret of `word_length` letters
    ///
    /// Returns `None` only when the corpus has no words of that length.
    fn next_guess(&mut self, word_length: usize, remaining_attempts: usize) -> Option<&'a Word>;

    /// Learn from a guess and its pattern
    fn observe(&mut self, guess: &Word, pattern: &Pattern);

    /// Forget every observation
    fn reset(&mut self);

    /// Display name
    fn name(&self) -> &'static str;
}

/// Computer opponent strength
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    /// Frequency scoring
    Easy,
    /// Information gain
    #[default]
    Medium,
    /// Adaptive search
    Hard,
}

impl Difficulty {
    /// All difficulties, weakest first
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        };
        f.write_str(name)
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" | "beginner" | "1" => Ok(Self::Easy),
            "medium" | "intermediate" | "2" => Ok(Self::Medium),
            "hard" | "advanced" | "3" => Ok(Self::Hard),
            other => Err(format!("Unknown difficulty: {other}")),
        }
    }
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType<'a> {
    /// Frequency scoring (easy)
    Frequency(FrequencyStrategy<'a>),
    /// Entropy over a sampled pool (medium)
    InformationGain(InformationStrategy<'a>),
    /// Composite scoring, simulation and minimax (hard)
    Adaptive(Box<AdaptiveStrategy<'a>>),
}

impl<'a> StrategyType<'a> {
    /// Build the computer opponent for `difficulty`
    ///
    /// `stream` separates RNG streams when several players share one seed.
    #[must_use]
    pub fn for_difficulty(
        difficulty: Difficulty,
        corpus: &'a Corpus,
        config: &Config,
        stream: u64,
    ) -> Self {
        let rng = config.rng(stream);
        match difficulty {
            Difficulty::Easy => Self::Frequency(FrequencyStrategy::new(corpus, rng)),
            Difficulty::Medium => Self::InformationGain(InformationStrategy::new(
                corpus,
                config.limits.clone(),
                rng,
            )),
            Difficulty::Hard => Self::Adaptive(Box::new(AdaptiveStrategy::new(
                corpus,
                config.limits.clone(),
                rng,
            ))),
        }
    }

    fn inner(&mut self) -> &mut dyn Strategy<'a> {
        match self {
            Self::Frequency(s) => s,
            Self::InformationGain(s) => s,
            Self::Adaptive(s) => &mut **s,
        }
    }
}

impl<'a> Strategy<'a> for StrategyType<'a> {
    fn next_guess(&mut self, word_length: usize, remaining_attempts: usize) -> Option<&'a Word> {
        self.inner().next_guess(word_length, remaining_attempts)
    }

    fn observe(&mut self, guess: &Word, pattern: &Pattern) {
        self.inner().observe(guess, pattern);
    }

    fn reset(&mut self) {
        self.inner().reset();
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Frequency(s) => s.name(),
            Self::InformationGain(s) => s.name(),
            Self::Adaptive(s) => s.name(),
        }
    }
}

/// Pick uniformly among the first `count` of `ranked` (at least one)
pub(crate) fn choose_top<'a, T, R>(ranked: &[(&'a Word, T)], count: usize, rng: &mut R) -> Option<&'a Word>
where
    R: Rng + ?Sized,
{
    let take = count.max(1).min(ranked.len());
    ranked[..take].choose(rng).map(|(word, _)| *word)
}

/// Uniform pick from `words`
pub(crate) fn choose_any<'a, R>(words: &[&'a Word], rng: &mut R) -> Option<&'a Word>
where
    R: Rng + ?Sized,
{
    words.choose(rng).copied()
}
