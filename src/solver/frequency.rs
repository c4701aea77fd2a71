//! Frequency-scoring opponent
//!
//! Opens with a word rich in common letters, then scores surviving candidates
//! by letter diversity and frequency rank, picking randomly from the top third.

use super::scoring::{basic_score, common_letter_count, rank_descending};
use super::strategy::{Strategy, choose_any, choose_top};
use super::Knowledge;
use crate::core::{Pattern, Word};
use crate::wordlists::Corpus;
use log::debug;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

/// Minimum distinct common letters in an opening word
const OPENING_COMMON_LETTERS: usize = 3;

/// Easy computer opponent
pub struct FrequencyStrategy<'a> {
    corpus: &'a Corpus,
    knowledge: Knowledge,
    rng: StdRng,
}

impl<'a> FrequencyStrategy<'a> {
    /// Create a frequency opponent over `corpus`
    #[must_use]
    pub fn new(corpus: &'a Corpus, rng: StdRng) -> Self {
        Self {
            corpus,
            knowledge: Knowledge::new(),
            rng,
        }
    }

    fn opening(&mut self, partition: &'a [Word]) -> Option<&'a Word> {
        let starters: Vec<&Word> = partition
            .iter()
            .filter(|word| common_letter_count(word) >= OPENING_COMMON_LETTERS)
            .collect();
        choose_any(&starters, &mut self.rng).or_else(|| partition.choose(&mut self.rng))
    }
}

impl<'a> Strategy<'a> for FrequencyStrategy<'a> {
    fn next_guess(&mut self, word_length: usize, _remaining_attempts: usize) -> Option<&'a Word> {
        let partition = self.corpus.words(word_length);
        if partition.is_empty() {
            return None;
        }
        if self.knowledge.is_fresh() {
            return self.opening(partition);
        }

        let candidates = self.knowledge.candidates(partition);
        if !candidates.is_consistent() {
            return choose_any(candidates.words(), &mut self.rng);
        }

        let mut ranked: Vec<(&Word, usize)> = candidates
            .words()
            .iter()
            .map(|&word| (word, basic_score(word)))
            .collect();
        rank_descending(&mut ranked);
        debug!("{}: {} candidates", self.name(), ranked.len());

        let top = ranked.len() / 3;
        choose_top(&ranked, top, &mut self.rng)
    }

    fn observe(&mut self, guess: &Word, pattern: &Pattern) {
        self.knowledge.observe(guess, pattern);
    }

    fn reset(&mut self) {
        self.knowledge.reset();
    }

    fn name(&self) -> &'static str {
        "Easy AI"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::strategy::testing::{config, corpus};

    #[test]
    fn opening_uses_common_letters() {
        let corpus = corpus();
        let mut strategy = FrequencyStrategy::new(&corpus, config(1).rng(0));
        for _ in 0..10 {
            let guess = strategy.next_guess(5, 6).unwrap();
            assert!(common_letter_count(guess) >= OPENING_COMMON_LETTERS);
        }
    }

    #[test]
    fn follow_up_is_a_consistent_candidate() {
        let corpus = corpus();
        let secret = corpus.lookup("stone").unwrap();
        let first = corpus.lookup("crane").unwrap();

        let mut strategy = FrequencyStrategy::new(&corpus, config(2).rng(0));
        let pattern = Pattern::calculate(first, secret);
        strategy.observe(first, &pattern);

        let mut knowledge = Knowledge::new();
        knowledge.observe(first, &pattern);
        let candidates = knowledge.candidates(corpus.words(5));

        let guess = strategy.next_guess(5, 5).unwrap();
        assert!(candidates.contains(guess));
        assert_ne!(guess, first);
    }

    #[test]
    fn follow_up_comes_from_the_top_third() {
        // Six candidates survive, so the pick is one of the best two
        let corpus = corpus();
        let secret = corpus.lookup("irate").unwrap();
        let first = corpus.lookup("shore").unwrap();
        let pattern = Pattern::calculate(first, secret);

        let mut knowledge = Knowledge::new();
        knowledge.observe(first, &pattern);
        let mut ranked: Vec<(&Word, usize)> = knowledge
            .candidates(corpus.words(5))
            .words()
            .iter()
            .map(|&word| (word, basic_score(word)))
            .collect();
        rank_descending(&mut ranked);
        let cutoff = ranked[(ranked.len() / 3).max(1) - 1].1;

        for seed in 0..10 {
            let mut strategy = FrequencyStrategy::new(&corpus, config(seed).rng(0));
            strategy.observe(first, &pattern);
            let guess = strategy.next_guess(5, 5).unwrap();
            assert!(basic_score(guess) >= cutoff, "{guess} is outside the top third");
        }
    }

    #[test]
    fn single_candidate_is_returned() {
        let corpus = corpus();
        let secret = corpus.lookup("phone").unwrap();
        let mut strategy = FrequencyStrategy::new(&corpus, config(3).rng(0));
        for text in ["stone", "drone"] {
            let guess = corpus.lookup(text).unwrap();
            strategy.observe(guess, &Pattern::calculate(guess, secret));
        }
        // Only PHONE and PRONE remain; PRONE is ruled out by DRONE's R
        assert_eq!(strategy.next_guess(5, 4).unwrap().text(), "PHONE");
    }
}
