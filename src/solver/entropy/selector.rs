//! Pure entropy-based word selection
//!
//! Selects words that maximize Shannon entropy (expected information gain).

use super::calculator::calculate_entropy;
use crate::core::Word;
use rayon::prelude::*;
use std::cmp::Ordering;

/// Select best guess by maximizing entropy
///
/// Returns the word with highest entropy and its entropy value, or `None` if
/// the guess pool is empty. Ties go to the alphabetically first word.
///
/// # Examples
/// ```
/// use wordle_battle::core::Word;
/// use wordle_battle::solver::entropy::select_best_guess;
///
/// let guesses = vec![
///     Word::new("aaaaa").unwrap(),
///     Word::new("aeros").unwrap(),
/// ];
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("irate").unwrap(),
/// ];
///
/// let guess_refs: Vec<&Word> = guesses.iter().collect();
/// let candidate_refs: Vec<&Word> = candidates.iter().collect();
///
/// let (best, entropy) = select_best_guess(&guess_refs, &candidate_refs).unwrap();
/// assert_eq!(best.text(), "AEROS");
/// assert!(entropy > 0.0);
/// ```
#[must_use]
pub fn select_best_guess<'a>(
    guess_pool: &[&'a Word],
    candidates: &[&Word],
) -> Option<(&'a Word, f64)> {
    guess_pool
        .par_iter()
        .map(|&guess| (guess, calculate_entropy(guess, candidates)))
        .max_by(|a, b| compare_scored(*a, *b))
}

/// Order `(word, score)` pairs by score, preferring the earlier word on ties
pub(crate) fn compare_scored(a: (&Word, f64), b: (&Word, f64)) -> Ordering {
    a.1.total_cmp(&b.1).then_with(|| b.0.text().cmp(a.0.text()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(t).unwrap()).collect()
    }

    #[test]
    fn selects_highest_entropy() {
        let guesses = words(&["aaaaa", "aeros"]);
        let candidates = words(&["slate", "irate", "crate", "grate"]);

        let guess_refs: Vec<&Word> = guesses.iter().collect();
        let candidate_refs: Vec<&Word> = candidates.iter().collect();

        let (best, entropy) = select_best_guess(&guess_refs, &candidate_refs).unwrap();
        assert_eq!(best.text(), "AEROS");
        assert!(entropy > 0.5);
    }

    #[test]
    fn single_guess_returns_that_guess() {
        let guesses = words(&["crane"]);
        let candidates = words(&["slate"]);

        let guess_refs: Vec<&Word> = guesses.iter().collect();
        let candidate_refs: Vec<&Word> = candidates.iter().collect();

        let (best, _) = select_best_guess(&guess_refs, &candidate_refs).unwrap();
        assert_eq!(best.text(), "CRANE");
    }

    #[test]
    fn ties_go_to_first_alphabetically() {
        let guesses = words(&["bbbbb", "aaaaa", "ddddd"]);
        let candidates = words(&["ccccc"]);

        let guess_refs: Vec<&Word> = guesses.iter().collect();
        let candidate_refs: Vec<&Word> = candidates.iter().collect();

        for _ in 0..5 {
            let (best, entropy) = select_best_guess(&guess_refs, &candidate_refs).unwrap();
            assert_eq!(best.text(), "AAAAA");
            assert!(entropy.abs() < 0.001);
        }
    }

    #[test]
    fn returns_none_on_empty_guess_pool() {
        let candidates = words(&["slate"]);
        let candidate_refs: Vec<&Word> = candidates.iter().collect();

        assert!(select_best_guess(&[], &candidate_refs).is_none());
    }
}
