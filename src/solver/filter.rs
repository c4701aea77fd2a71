//! Candidate filtering
//!
//! Narrows a corpus partition to the words consistent with the accumulated
//! constraints, broadening the scope when nothing survives.

use super::Constraints;
use crate::core::Word;
use log::debug;
use rustc_hash::FxHashSet;

/// Where a candidate set came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateSource {
    /// Words consistent with every constraint and not yet guessed
    Consistent,
    /// Nothing was consistent: every unguessed word of the length
    Unguessed,
    /// Every word of the length was guessed already: the whole partition
    Exhausted,
}

/// Surviving candidates plus the fallback level that produced them
#[derive(Debug, Clone)]
pub struct CandidateSet<'a> {
    words: Vec<&'a Word>,
    source: CandidateSource,
}

impl<'a> CandidateSet<'a> {
    /// The candidate words, in corpus order
    #[must_use]
    pub fn words(&self) -> &[&'a Word] {
        &self.words
    }

    /// Fallback level used
    #[must_use]
    pub const fn source(&self) -> CandidateSource {
        self.source
    }

    /// True when the words satisfy every constraint
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.source == CandidateSource::Consistent
    }

    /// Number of candidates
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when the partition itself was empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Check membership by text
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.iter().any(|w| w.text() == word.text())
    }
}

/// Keep the words that satisfy `constraints` and were not guessed
///
/// Accepts either a corpus slice or an already filtered set, so refiltering is
/// a plain second call.
///
/// # Examples
/// ```
/// use wordle_battle::core::{Pattern, Word};
/// use wordle_battle::solver::{Constraints, filter_candidates};
/// use rustc_hash::FxHashSet;
///
/// let words: Vec<Word> = ["crane", "slate", "trace", "grace"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let guess = Word::new("trace").unwrap();
/// let pattern = Pattern::calculate(&guess, &words[0]);
/// let constraints = Constraints::from_history([(&guess, &pattern)]);
///
/// let guessed = FxHashSet::from_iter([guess.text().to_string()]);
/// let survivors = filter_candidates(&words, &constraints, &guessed);
/// assert_eq!(survivors.len(), 1);
/// assert_eq!(survivors[0].text(), "CRANE");
/// ```
pub fn filter_candidates<'a, I>(
    words: I,
    constraints: &Constraints,
    guessed: &FxHashSet<String>,
) -> Vec<&'a Word>
where
    I: IntoIterator<Item = &'a Word>,
{
    words
        .into_iter()
        .filter(|word| !guessed.contains(word.text()) && constraints.matches(word))
        .collect()
}

/// Filter with fallback so a selector always has something to pick from
///
/// Returns consistent words when any exist, otherwise every unguessed word,
/// otherwise the whole partition.
#[must_use]
pub fn narrow<'a>(
    partition: &'a [Word],
    constraints: &Constraints,
    guessed: &FxHashSet<String>,
) -> CandidateSet<'a> {
    let consistent = filter_candidates(partition, constraints, guessed);
    if !consistent.is_empty() {
        return CandidateSet {
            words: consistent,
            source: CandidateSource::Consistent,
        };
    }

    let unguessed: Vec<&Word> = partition
        .iter()
        .filter(|word| !guessed.contains(word.text()))
        .collect();
    if !unguessed.is_empty() {
        debug!(
            "No consistent candidates, falling back to {} unguessed words",
            unguessed.len()
        );
        return CandidateSet {
            words: unguessed,
            source: CandidateSource::Unguessed,
        };
    }

    debug!("Partition exhausted, allowing repeated guesses");
    CandidateSet {
        words: partition.iter().collect(),
        source: CandidateSource::Exhausted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Pattern;
    use crate::wordlists::loader::words_from_slice;
    use proptest::prelude::*;

    fn scenario() -> Vec<Word> {
        words_from_slice(&["crane", "slate", "trace", "grace"])
    }

    fn guessed(words: &[&str]) -> FxHashSet<String> {
        words.iter().map(|w| w.to_ascii_uppercase()).collect()
    }

    #[test]
    fn empty_constraints_keep_unguessed() {
        let words = scenario();
        let survivors = filter_candidates(&words, &Constraints::new(), &guessed(&["slate"]));
        let texts: Vec<&str> = survivors.iter().map(|w| w.text()).collect();
        assert_eq!(texts, vec!["CRANE", "TRACE", "GRACE"]);
    }

    #[test]
    fn narrow_prefers_consistent_words() {
        let words = scenario();
        let secret = &words[0];
        let guess = &words[2];
        let constraints = Constraints::from_history([(guess, &Pattern::calculate(guess, secret))]);

        let set = narrow(&words, &constraints, &guessed(&["trace"]));
        assert_eq!(set.source(), CandidateSource::Consistent);
        assert_eq!(set.len(), 1);
        assert!(set.contains(secret));
    }

    #[test]
    fn narrow_falls_back_to_unguessed() {
        let words = scenario();
        // Feedback no word satisfies
        let guess = Word::new("zzzzz").unwrap();
        let constraints = Constraints::from_history([(&guess, &Pattern::perfect(5))]);

        let set = narrow(&words, &constraints, &guessed(&["crane"]));
        assert_eq!(set.source(), CandidateSource::Unguessed);
        assert_eq!(set.len(), 3);
        assert!(!set.contains(&words[0]));
    }

    #[test]
    fn narrow_falls_back_to_partition() {
        let words = scenario();
        let guess = Word::new("zzzzz").unwrap();
        let constraints = Constraints::from_history([(&guess, &Pattern::perfect(5))]);

        let set = narrow(&words, &constraints, &guessed(&["crane", "slate", "trace", "grace"]));
        assert_eq!(set.source(), CandidateSource::Exhausted);
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn narrow_on_empty_partition_is_empty() {
        let set = narrow(&[], &Constraints::new(), &FxHashSet::default());
        assert!(set.is_empty());
    }

    proptest! {
        /// Filtering a filtered set with the same constraints changes nothing
        #[test]
        fn prop_filter_idempotent(
            secret in "[A-D]{4}",
            guesses in proptest::collection::vec("[A-D]{4}", 1..4),
            corpus in proptest::collection::vec("[A-D]{4}", 1..40),
        ) {
            let secret = Word::new(&secret).unwrap();
            let words: Vec<Word> = corpus.iter().filter_map(|w| Word::new(w).ok()).collect();
            let mut constraints = Constraints::new();
            let mut seen = FxHashSet::default();
            for guess in &guesses {
                let guess = Word::new(guess).unwrap();
                constraints.observe(&guess, &Pattern::calculate(&guess, &secret));
                seen.insert(guess.text().to_string());
            }

            let once = filter_candidates(&words, &constraints, &seen);
            let twice = filter_candidates(once.iter().copied(), &constraints, &seen);
            prop_assert_eq!(once, twice);
        }
    }
}
