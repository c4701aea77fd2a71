//! Minimax worst-case calculation for verdict patterns
//!
//! Given a guess and set of candidates, computes the maximum remaining candidates
//! for any possible pattern.

use crate::core::Word;
use crate::solver::entropy::group_by_pattern;

/// Calculate the maximum remaining candidates for a guess
///
/// Returns the worst-case number of remaining candidates after this guess. A
/// candidate equal to the guess counts as resolved, so guessing the only
/// remaining word scores 0.
///
/// # Examples
/// ```
/// use wordle_battle::core::Word;
/// use wordle_battle::solver::minimax::calculate_max_remaining;
///
/// let guess = Word::new("crane").unwrap();
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("irate").unwrap(),
/// ];
/// let candidate_refs: Vec<&Word> = candidates.iter().collect();
///
/// let max_remaining = calculate_max_remaining(&guess, &candidate_refs);
/// assert!(max_remaining <= 2); // Can't be more than total candidates
/// ```
#[must_use]
pub fn calculate_max_remaining(guess: &Word, candidates: &[&Word]) -> usize {
    group_by_pattern(guess, candidates)
        .into_iter()
        .map(|(pattern, count)| if pattern.is_perfect() { 0 } else { count })
        .max()
        .unwrap_or(0)
}
