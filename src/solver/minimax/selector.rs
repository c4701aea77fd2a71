//! Minimax-based guess selection
//!
//! Selects the guess that minimizes the worst-case remaining candidates.

use super::calculator::calculate_max_remaining;
use crate::core::Word;
use rayon::prelude::*;

/// Select best guess by minimizing worst-case remaining candidates
///
/// Returns the word with the lowest maximum remaining candidates and that value,
/// or `None` if the guess pool is empty. Ties prefer guesses that are
/// themselves candidates, then the alphabetically first word.
///
/// # Examples
/// ```
/// use wordle_battle::core::Word;
/// use wordle_battle::solver::minimax::select_best_guess;
///
/// let guesses = vec![
///     Word::new("aaaaa").unwrap(),
///     Word::new("crane").unwrap(),
/// ];
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("irate").unwrap(),
/// ];
///
/// let guess_refs: Vec<&Word> = guesses.iter().collect();
/// let candidate_refs: Vec<&Word> = candidates.iter().collect();
///
/// let (_, max_remaining) = select_best_guess(&guess_refs, &candidate_refs).unwrap();
/// assert!(max_remaining <= 2);
/// ```
#[must_use]
pub fn select_best_guess<'a>(
    guess_pool: &[&'a Word],
    candidates: &[&Word],
) -> Option<(&'a Word, usize)> {
    guess_pool
        .par_iter()
        .map(|&guess| {
            let max_remaining = calculate_max_remaining(guess, candidates);
            let is_candidate = candidates.iter().any(|c| c.text() == guess.text());
            (guess, max_remaining, is_candidate)
        })
        .min_by(|a, b| {
            a.1.cmp(&b.1)
                .then_with(|| b.2.cmp(&a.2))
                .then_with(|| a.0.text().cmp(b.0.text()))
        })
        .map(|(guess, max_remaining, _)| (guess, max_remaining))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(t).unwrap()).collect()
    }

    #[test]
    fn selects_lowest_max_remaining() {
        let guesses = words(&["zzzzz", "crane"]);
        let candidates = words(&["slate", "irate", "crate", "grate"]);

        let guess_refs: Vec<&Word> = guesses.iter().collect();
        let candidate_refs: Vec<&Word> = candidates.iter().collect();

        let (best, max_remaining) = select_best_guess(&guess_refs, &candidate_refs).unwrap();
        assert_eq!(best.text(), "CRANE");
        assert!(max_remaining < 4);
    }

    #[test]
    fn two_candidates_resolve_within_two_guesses() {
        let candidates = words(&["crane", "crate"]);
        let candidate_refs: Vec<&Word> = candidates.iter().collect();

        let (best, max_remaining) = select_best_guess(&candidate_refs, &candidate_refs).unwrap();
        assert!(max_remaining <= 1);
        assert_eq!(best.text(), "CRANE");
    }

    #[test]
    fn prefers_actual_candidates_when_equal() {
        let candidates = words(&["slate", "crate"]);
        let guesses = words(&["zzzzz", "slate"]);

        let guess_refs: Vec<&Word> = guesses.iter().collect();
        let candidate_refs: Vec<&Word> = candidates.iter().collect();

        // SLATE leaves at most CRATE; ZZZZZ leaves both
        let (best, _) = select_best_guess(&guess_refs, &candidate_refs).unwrap();
        assert_eq!(best.text(), "SLATE");
    }

    #[test]
    fn returns_none_on_empty_guess_pool() {
        let candidates = words(&["slate"]);
        let candidate_refs: Vec<&Word> = candidates.iter().collect();

        assert!(select_best_guess(&[], &candidate_refs).is_none());
    }
}
