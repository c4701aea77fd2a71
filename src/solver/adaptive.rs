//! Adaptive opponent
//!
//! Adjusts tactics based on the number of remaining candidates and attempts.

use super::entropy::{EntropyCache, compare_scored};
use super::scoring::{LetterStats, rank_descending};
use super::strategy::{Strategy, choose_any, choose_top};
use super::{Knowledge, minimax, simulation};
use crate::config::SearchLimits;
use crate::core::{Pattern, Word};
use crate::wordlists::Corpus;
use log::debug;
use rand::Rng;
use rand::rngs::StdRng;
use rustc_hash::FxHashMap;

/// Opening bonus for words without repeated letters
const DISTINCT_OPENING_BONUS: f64 = 50.0;
/// Opening bonus per vowel in the second or third position
const EARLY_VOWEL_BONUS: f64 = 15.0;
/// Opening bonus for a leading vowel
const LEADING_VOWEL_BONUS: f64 = 10.0;
/// Opening bonus per consonant cluster
const CLUSTER_BONUS: f64 = 8.0;
/// Opening penalty for words a human would expect
const OBVIOUS_PENALTY: f64 = 20.0;

const VOWELS: &[u8] = b"AEIOU";
const CONSONANT_CLUSTERS: &[&str] = &["ST", "TR", "CR", "BR", "FL", "PL", "CL"];
const OBVIOUS_OPENINGS: &[&str] = &["ABOUT", "HOUSE", "WORLD", "PLACE", "THINK", "GREAT", "FIRST"];

/// Entropy bonus for guesses that could be the answer
const CANDIDATE_ENTROPY_BONUS: f64 = 0.5;

/// The current phase of the adaptive strategy
///
/// Phases use cascading comparisons:
/// ```text
/// if candidates <= 1               → Solved
/// else if candidates <= 3          → Endgame
/// else if remaining_attempts > 3   → Midgame
/// else if remaining_attempts > 1   → LateGame
/// else                             → FinalGuess
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdaptivePhase {
    /// One candidate left: guess it
    Solved,
    /// Two or three candidates: minimax over the candidates
    Endgame,
    /// Plenty of attempts: randomized lookahead search
    Midgame,
    /// Two or three attempts: blend entropy with the most likely answer
    LateGame,
    /// Last attempt: the single most likely answer
    FinalGuess,
}

impl AdaptivePhase {
    /// Phase for a consistent candidate set
    #[must_use]
    pub const fn select(candidates: usize, remaining_attempts: usize) -> Self {
        if candidates <= 1 {
            Self::Solved
        } else if candidates <= 3 {
            Self::Endgame
        } else if remaining_attempts > 3 {
            Self::Midgame
        } else if remaining_attempts > 1 {
            Self::LateGame
        } else {
            Self::FinalGuess
        }
    }
}

/// Hard computer opponent
pub struct AdaptiveStrategy<'a> {
    corpus: &'a Corpus,
    stats: LetterStats,
    base_scores: FxHashMap<&'a str, f64>,
    limits: SearchLimits,
    knowledge: Knowledge,
    cache: EntropyCache,
    rng: StdRng,
}

impl<'a> AdaptiveStrategy<'a> {
    /// Create an adaptive opponent, precomputing a composite score per word
    #[must_use]
    pub fn new(corpus: &'a Corpus, limits: SearchLimits, rng: StdRng) -> Self {
        let stats = LetterStats::from_corpus(corpus);
        let base_scores = corpus
            .iter()
            .map(|word| (word.text(), stats.composite(word)))
            .collect();
        let cache = EntropyCache::new(limits.entropy_cache_limit);

        Self {
            corpus,
            stats,
            base_scores,
            limits,
            knowledge: Knowledge::new(),
            cache,
            rng,
        }
    }

    /// Precomputed composite score of `word`
    #[must_use]
    pub fn base_score(&self, word: &Word) -> f64 {
        self.base_scores
            .get(word.text())
            .copied()
            .unwrap_or_else(|| self.stats.composite(word))
    }

    /// Extra score a word earns as an opening guess
    #[must_use]
    pub fn opening_bonus(word: &Word) -> f64 {
        let mut bonus = 0.0;
        if !word.has_repeated_letters() {
            bonus += DISTINCT_OPENING_BONUS;
        }
        for (position, letter) in word.letters().iter().enumerate() {
            if VOWELS.contains(letter) {
                match position {
                    1 | 2 => bonus += EARLY_VOWEL_BONUS,
                    0 => bonus += LEADING_VOWEL_BONUS,
                    _ => {}
                }
            }
        }
        bonus += CONSONANT_CLUSTERS
            .iter()
            .filter(|cluster| word.text().contains(*cluster))
            .count() as f64
            * CLUSTER_BONUS;
        if OBVIOUS_OPENINGS.contains(&word.text()) {
            bonus -= OBVIOUS_PENALTY;
        }
        bonus
    }

    /// Random pick among the top tenth of the partition (3 to 10 words)
    fn opening(&mut self, partition: &'a [Word]) -> Option<&'a Word> {
        let mut ranked: Vec<(&'a Word, f64)> = partition
            .iter()
            .map(|word| (word, self.base_score(word) + Self::opening_bonus(word)))
            .collect();
        rank_descending(&mut ranked);

        let top = (ranked.len() / 10).clamp(3, 10);
        choose_top(&ranked, top, &mut self.rng)
    }

    fn endgame(&mut self, candidates: &[&'a Word], remaining_attempts: usize) -> Option<&'a Word> {
        if remaining_attempts <= 1 {
            return self.most_likely(candidates);
        }
        minimax::select_best_guess(candidates, candidates)
            .map(|(word, _)| word)
            .or_else(|| choose_any(candidates, &mut self.rng))
    }

    fn midgame(
        &mut self,
        partition: &'a [Word],
        candidates: &[&'a Word],
        remaining_attempts: usize,
    ) -> Option<&'a Word> {
        simulation::select_best_guess(
            partition,
            candidates,
            self.knowledge.guessed(),
            remaining_attempts,
            &self.limits,
            &mut self.rng,
        )
        .map(|(word, _)| word)
        .or_else(|| self.max_information(partition, candidates))
    }

    fn late_game(
        &mut self,
        partition: &'a [Word],
        candidates: &[&'a Word],
        remaining_attempts: usize,
    ) -> Option<&'a Word> {
        if candidates.len() <= remaining_attempts {
            return self.most_likely(candidates);
        }

        if let Some(word) = self.max_information(partition, candidates) {
            let is_candidate = candidates.iter().any(|c| c.text() == word.text());
            if is_candidate || self.rng.random::<f64>() < self.limits.information_weight {
                return Some(word);
            }
        }
        self.most_likely(candidates)
    }

    /// Entropy over the full candidate set, candidates earning a small bonus
    fn max_information(&mut self, partition: &'a [Word], candidates: &[&'a Word]) -> Option<&'a Word> {
        if candidates.len() <= 3 {
            return choose_any(candidates, &mut self.rng);
        }

        let mut pool: Vec<&'a Word> = candidates.to_vec();
        for word in partition.iter().take(self.limits.adaptive_test_words) {
            if !self.knowledge.has_guessed(word) && !pool.iter().any(|p| p.text() == word.text()) {
                pool.push(word);
            }
        }

        self.cache
            .entropies(&pool, candidates)
            .into_iter()
            .map(|(word, entropy)| {
                let is_candidate = candidates.iter().any(|c| c.text() == word.text());
                let bonus = if is_candidate { CANDIDATE_ENTROPY_BONUS } else { 0.0 };
                (word, entropy + bonus)
            })
            .max_by(|a, b| compare_scored(*a, *b))
            .map(|(word, _)| word)
    }

    /// Composite score plus agreement with the known constraints
    fn most_likely(&self, candidates: &[&'a Word]) -> Option<&'a Word> {
        let constraints = self.knowledge.constraints();
        let required = constraints.required().len();

        candidates
            .iter()
            .map(|&word| {
                let mut score = self.base_score(word);
                score += 100.0 * constraints.confirmed_matches(word) as f64;
                if constraints.required_present(word) == required {
                    score += 50.0;
                }
                score -= 200.0 * constraints.misplaced(word) as f64;
                (word, score)
            })
            .max_by(|a, b| compare_scored(*a, *b))
            .map(|(word, _)| word)
    }

    /// Heavily favor candidates that agree with every known letter
    fn final_guess(&self, candidates: &[&'a Word]) -> Option<&'a Word> {
        let constraints = self.knowledge.constraints();

        candidates
            .iter()
            .map(|&word| {
                let score = self.stats.weighted_sum(word)
                    + self.stats.positional_sum(word)
                    + 1000.0 * constraints.confirmed_matches(word) as f64
                    + 500.0 * constraints.required_present(word) as f64;
                (word, score)
            })
            .max_by(|a, b| compare_scored(*a, *b))
            .map(|(word, _)| word)
    }
}

impl<'a> Strategy<'a> for AdaptiveStrategy<'a> {
    fn next_guess(&mut self, word_length: usize, remaining_attempts: usize) -> Option<&'a Word> {
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

        let phase = AdaptivePhase::select(candidates.len(), remaining_attempts);
        debug!(
            "{}: {phase:?} with {} candidates, {remaining_attempts} attempts",
            self.name(),
            candidates.len()
        );

        let words = candidates.words();
        match phase {
            AdaptivePhase::Solved => words.first().copied(),
            AdaptivePhase::Endgame => self.endgame(words, remaining_attempts),
            AdaptivePhase::Midgame => self.midgame(partition, words, remaining_attempts),
            AdaptivePhase::LateGame => self.late_game(partition, words, remaining_attempts),
            AdaptivePhase::FinalGuess => self.final_guess(words),
        }
    }

    fn observe(&mut self, guess: &Word, pattern: &Pattern) {
        self.knowledge.observe(guess, pattern);
    }

    fn reset(&mut self) {
        self.knowledge.reset();
        self.cache.clear();
    }

    fn name(&self) -> &'static str {
        "Hard AI"
    }
}
