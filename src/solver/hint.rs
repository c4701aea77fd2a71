//! Hint engine for the human player
//!
//! Scores consistent words by the frequency of the letters still unknown and
//! suggests one of the top fifth.

use super::{CandidateSet, Knowledge};
use super::scoring::{rank_descending, rank_score};
use super::strategy::{Strategy, choose_any, choose_top};
use crate::core::{Pattern, Word};
use crate::wordlists::Corpus;
use log::debug;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

/// Bonus per distinct letter
const DISTINCT_BONUS: i64 = 10;
/// Penalty per position a letter is already known not to occupy
const EXCLUDED_PENALTY: i64 = 2;

/// Suggests guesses from the human player's own feedback
pub struct HintStrategy<'a> {
    corpus: &'a Corpus,
    knowledge: Knowledge,
    rng: StdRng,
}

impl<'a> HintStrategy<'a> {
    /// Create a hint engine over `corpus`
    #[must_use]
    pub fn new(corpus: &'a Corpus, rng: StdRng) -> Self {
        Self {
            corpus,
            knowledge: Knowledge::new(),
            rng,
        }
    }

    /// Words of `word_length` letters still consistent with the feedback
    #[must_use]
    pub fn candidates(&self, word_length: usize) -> CandidateSet<'a> {
        self.knowledge.candidates(self.corpus.words(word_length))
    }

    /// Score of `word` given what is known so far
    #[must_use]
    #[allow(clippy::cast_possible_wrap)] // Letter counts and ranks are tiny
    pub fn score(&self, word: &Word) -> i64 {
        let constraints = self.knowledge.constraints();

        let unknown: usize = word
            .letters()
            .iter()
            .enumerate()
            .filter(|&(position, _)| constraints.confirmed_at(position).is_none())
            .map(|(_, &letter)| rank_score(letter))
            .sum();

        let excluded: usize = constraints
            .excluded()
            .iter()
            .filter(|(letter, _)| word.has_letter(**letter))
            .map(|(_, positions)| positions.len())
            .sum();

        unknown as i64 + DISTINCT_BONUS * word.distinct_letters() as i64
            - EXCLUDED_PENALTY * excluded as i64
    }
}

impl<'a> Strategy<'a> for HintStrategy<'a> {
    fn next_guess(&mut self, word_length: usize, _remaining_attempts: usize) -> Option<&'a Word> {
        let partition = self.corpus.words(word_length);
        if self.knowledge.is_fresh() {
            return partition.choose(&mut self.rng);
        }

        let candidates = self.candidates(word_length);
        if !candidates.is_consistent() {
            debug!("Hint: no consistent words, falling back to {:?}", candidates.source());
            return choose_any(candidates.words(), &mut self.rng);
        }

        let mut ranked: Vec<(&'a Word, i64)> = candidates
            .words()
            .iter()
            .map(|&word| (word, self.score(word)))
            .collect();
        rank_descending(&mut ranked);

        let top = ranked.len() / 5;
        choose_top(&ranked, top, &mut self.rng)
    }

    fn observe(&mut self, guess: &Word, pattern: &Pattern) {
        self.knowledge.observe(guess, pattern);
    }

    fn reset(&mut self) {
        self.knowledge.reset();
    }

    fn name(&self) -> &'static str {
        "Hint"
    }
}
