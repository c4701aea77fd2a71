//! Information-gain opponent
//!
//! Opens with the highest frequency word without repeated letters. While
//! attempts are plentiful it maximizes entropy over a sampled pool; near the end
//! it guesses the most likely answer instead.

use super::entropy;
use super::scoring::LetterStats;
use super::strategy::{Strategy, choose_any};
use super::Knowledge;
use crate::config::SearchLimits;
use crate::core::{Pattern, Word};
use crate::wordlists::Corpus;
use log::debug;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

/// Bonus per confirmed position a candidate matches
const CONFIRMED_BONUS: usize = 100;
/// Bonus per required letter a candidate contains
const REQUIRED_BONUS: usize = 50;

/// Medium computer opponent
pub struct InformationStrategy<'a> {
    corpus: &'a Corpus,
    stats: LetterStats,
    limits: SearchLimits,
    knowledge: Knowledge,
    rng: StdRng,
}

impl<'a> InformationStrategy<'a> {
    /// Create an information-gain opponent over `corpus`
    #[must_use]
    pub fn new(corpus: &'a Corpus, limits: SearchLimits, rng: StdRng) -> Self {
        Self {
            corpus,
            stats: LetterStats::from_corpus(corpus),
            limits,
            knowledge: Knowledge::new(),
            rng,
        }
    }

    /// Highest frequency sum among words without repeated letters
    fn opening(&mut self, partition: &'a [Word]) -> Option<&'a Word> {
        let mut best: Option<(&Word, usize)> = None;
        for word in partition.iter().filter(|w| !w.has_repeated_letters()) {
            let score = self.stats.frequency_sum(word);
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((word, score));
            }
        }
        best.map(|(word, _)| word)
            .or_else(|| partition.choose(&mut self.rng))
    }

    /// Entropy over a sample of candidates, testing the first unguessed words
    ///
    /// Ties go to the alphabetically first word.
    fn max_information(&mut self, partition: &'a [Word], candidates: &[&'a Word]) -> Option<&'a Word> {
        if candidates.len() <= self.limits.info_random_below {
            return choose_any(candidates, &mut self.rng);
        }

        let sample = &candidates[..candidates.len().min(self.limits.info_sample_candidates)];
        let tests: Vec<&'a Word> = self
            .knowledge
            .unguessed(partition)
            .take(self.limits.info_test_words)
            .collect();

        let best = entropy::select_best_guess(&tests, sample);
        debug!("{}: best entropy {:?}", self.name(), best.map(|(_, e)| e));

        best.map(|(word, _)| word)
            .or_else(|| choose_any(candidates, &mut self.rng))
    }

    /// Frequency sum plus bonuses for agreeing with known letters
    fn best_answer(&self, candidates: &[&'a Word]) -> Option<&'a Word> {
        let constraints = self.knowledge.constraints();
        let mut best: Option<(&'a Word, usize)> = None;
        for &word in candidates {
            let score = self.stats.frequency_sum(word)
                + CONFIRMED_BONUS * constraints.confirmed_matches(word)
                + REQUIRED_BONUS * constraints.required_present(word);
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((word, score));
            }
        }
        best.map(|(word, _)| word)
    }
}

impl<'a> Strategy<'a> for InformationStrategy<'a> {
    fn next_guess(&mut self, word_length: usize, remaining_attempts: usize) -> Option<&'a Word> {
        let partition = self.corpus.words(word_length);
        if partition.is_empty() {
            return None;
        }
        if self.knowledge.is_fresh() {
            return self.opening(partition);
        }

        let candidates = self.knowledge.candidates(partition);
        if !candidates.is_consistent() || candidates.len() <= 2 {
            return choose_any(candidates.words(), &mut self.rng);
        }

        if remaining_attempts > 2 {
            self.max_information(partition, candidates.words())
        } else {
            self.best_answer(candidates.words())
        }
    }

    fn observe(&mut self, guess: &Word, pattern: &Pattern) {
        self.knowledge.observe(guess, pattern);
    }

    fn reset(&mut self) {
        self.knowledge.reset();
    }

    fn name(&self) -> &'static str {
        "Medium AI"
    }
}
