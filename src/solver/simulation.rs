//! Randomized lookahead search
//!
//! Each guess in a bounded pool is played against randomly drawn answers from
//! the candidate set. Every run is scored by how far it shrinks the candidates
//! plus a discounted look at the position it leaves behind.

use super::entropy::compare_scored;
use crate::config::SearchLimits;
use crate::core::{Pattern, Word};
use log::debug;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// Score for a run whose guess was the answer
const SOLVED: f64 = 1000.0;
/// Score for missing on the final attempt
const FAILED: f64 = -1000.0;
/// Bonus for guesses that could themselves be the answer
const CANDIDATE_BONUS: f64 = 50.0;
/// Discount applied to the follow-up position
const LOOKAHEAD_WEIGHT: f64 = 0.3;

/// Pick the guess with the best average simulated outcome
///
/// The pool holds up to `simulation_candidate_cap` candidates plus unguessed
/// words from the first `simulation_pool_words` of `partition`. Returns `None`
/// when there are no candidates.
pub fn select_best_guess<'a, R: Rng + ?Sized>(
    partition: &'a [Word],
    candidates: &[&'a Word],
    guessed: &FxHashSet<String>,
    remaining_attempts: usize,
    limits: &SearchLimits,
    rng: &mut R,
) -> Option<(&'a Word, f64)> {
    let answers = &candidates[..candidates.len().min(limits.simulation_candidate_cap)];
    if answers.is_empty() {
        return None;
    }

    let pool = guess_pool(partition, answers, guessed, limits.simulation_pool_words);
    let runs = limits.simulations_per_guess(pool.len());
    debug!(
        "Simulating {} guesses × {runs} runs over {} answers",
        pool.len(),
        answers.len()
    );

    // One seed per guess keeps the parallel search reproducible
    let seeded: Vec<(&'a Word, u64)> = pool.into_iter().map(|g| (g, rng.random())).collect();

    seeded
        .into_par_iter()
        .map(|(guess, seed)| {
            let mut local = StdRng::seed_from_u64(seed);
            let total: f64 = (0..runs)
                .filter_map(|_| answers.choose(&mut local))
                .map(|answer| simulate(guess, answer, answers, remaining_attempts))
                .sum();
            let mut score = total / runs.max(1) as f64;
            if answers.iter().any(|a| a.text() == guess.text()) {
                score += CANDIDATE_BONUS;
            }
            (guess, score)
        })
        .max_by(|a, b| compare_scored(*a, *b))
}

/// Candidates first, then unguessed corpus words, without duplicates
fn guess_pool<'a>(
    partition: &'a [Word],
    answers: &[&'a Word],
    guessed: &FxHashSet<String>,
    extra: usize,
) -> Vec<&'a Word> {
    let mut seen: FxHashSet<&str> = answers.iter().map(|w| w.text()).collect();
    let mut pool = answers.to_vec();
    for word in partition.iter().take(extra) {
        if !guessed.contains(word.text()) && seen.insert(word.text()) {
            pool.push(word);
        }
    }
    pool
}

/// Outcome of playing `guess` when the secret is `answer`
#[must_use]
pub fn simulate(guess: &Word, answer: &Word, candidates: &[&Word], remaining_attempts: usize) -> f64 {
    if guess.text() == answer.text() {
        return SOLVED;
    }
    if remaining_attempts <= 1 {
        return FAILED;
    }

    let pattern = Pattern::calculate(guess, answer);
    let left = candidates
        .iter()
        .filter(|c| Pattern::calculate(guess, c) == pattern)
        .count();

    let mut score = candidates.len().saturating_sub(left) as f64;
    if left > 1 {
        score += LOOKAHEAD_WEIGHT * position_value(left, remaining_attempts - 1);
    }
    score
}

/// Rough quality of a position with `candidates` left and `attempts` to go
#[must_use]
pub fn position_value(candidates: usize, attempts: usize) -> f64 {
    if candidates <= 1 {
        100.0
    } else if attempts == 0 {
        -100.0
    } else if (candidates as f64).log2() <= attempts as f64 {
        50.0
    } else {
        -50.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn position_value_levels() {
        assert!((position_value(1, 0) - 100.0).abs() < f64::EPSILON);
        assert!((position_value(4, 0) + 100.0).abs() < f64::EPSILON);
        assert!((position_value(4, 2) - 50.0).abs() < f64::EPSILON);
        assert!((position_value(9, 3) + 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn simulate_rewards_solving_and_punishes_last_miss() {
        let words = words_from_slice(&["crane", "slate", "trace"]);
        let refs: Vec<&Word> = words.iter().collect();

        assert!((simulate(&words[0], &words[0], &refs, 1) - SOLVED).abs() < f64::EPSILON);
        assert!((simulate(&words[0], &words[1], &refs, 1) - FAILED).abs() < f64::EPSILON);
    }

    #[test]
    fn simulate_counts_reduction() {
        let words = words_from_slice(&["crane", "slate", "trace", "grace"]);
        let refs: Vec<&Word> = words.iter().collect();

        // TRACE against CRANE isolates CRANE: three candidates eliminated
        let score = simulate(&words[2], &words[0], &refs, 4);
        assert!((score - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn pool_starts_with_candidates_and_skips_guessed() {
        let words = words_from_slice(&["crane", "slate", "trace", "grace"]);
        let answers = [&words[2]];
        let guessed = FxHashSet::from_iter(["SLATE".to_string()]);

        let pool = guess_pool(&words, &answers, &guessed, 10);
        let texts: Vec<&str> = pool.iter().map(|w| w.text()).collect();
        assert_eq!(texts, vec!["TRACE", "CRANE", "GRACE"]);
    }

    #[test]
    fn search_is_reproducible_and_returns_pool_word() {
        let words = words_from_slice(&["crane", "slate", "trace", "grace", "brace", "crate"]);
        let refs: Vec<&Word> = words.iter().collect();
        let limits = SearchLimits::default();
        let guessed = FxHashSet::default();

        let first =
            select_best_guess(&words, &refs, &guessed, 5, &limits, &mut StdRng::seed_from_u64(3));
        let second =
            select_best_guess(&words, &refs, &guessed, 5, &limits, &mut StdRng::seed_from_u64(3));

        let (a, score_a) = first.unwrap();
        let (b, score_b) = second.unwrap();
        assert_eq!(a.text(), b.text());
        assert!((score_a - score_b).abs() < f64::EPSILON);
        assert!(refs.iter().any(|w| w.text() == a.text()));
    }

    #[test]
    fn no_candidates_no_guess() {
        let words = words_from_slice(&["crane"]);
        let limits = SearchLimits::default();
        let result = select_best_guess(
            &words,
            &[],
            &FxHashSet::default(),
            5,
            &limits,
            &mut StdRng::seed_from_u64(1),
        );
        assert!(result.is_none());
    }
}
