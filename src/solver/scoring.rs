//! Letter statistics and word scores shared by the guess selectors

use crate::core::{ALPHABET_SIZE, Word, letter_index};
use crate::wordlists::Corpus;
use rustc_hash::FxHashMap;
use std::cmp::Ordering;

/// English letters from most to least common
pub const FREQUENCY_ORDER: &[u8; ALPHABET_SIZE] = b"ETAOINSHRDLCUMWFGYPBVKJXQZ";

/// The eleven most common letters
pub const COMMON_LETTERS: &[u8] = b"ETAOINSHRDL";

/// Substrings common in English words
pub const COMMON_SUBSTRINGS: &[&str] = &["ST", "ER", "ED", "ING", "ION", "TH", "HE", "AN", "RE", "ND"];

/// Rank weight of `letter` in [`FREQUENCY_ORDER`]: 26 for E down to 1 for Z
#[must_use]
pub fn rank_score(letter: u8) -> usize {
    FREQUENCY_ORDER
        .iter()
        .position(|&l| l == letter)
        .map_or(1, |rank| ALPHABET_SIZE - rank)
}

/// Number of distinct [`COMMON_LETTERS`] in `word`
#[must_use]
pub fn common_letter_count(word: &Word) -> usize {
    COMMON_LETTERS
        .iter()
        .filter(|&&letter| word.has_letter(letter))
        .count()
}

/// Distinct letters × 10 plus the rank weight of every letter
///
/// # Examples
/// ```
/// use wordle_battle::core::Word;
/// use wordle_battle::solver::scoring::basic_score;
///
/// // E(26) + A(24) + T(25) = 75, three distinct letters = 30
/// assert_eq!(basic_score(&Word::new("eat").unwrap()), 105);
/// ```
#[must_use]
pub fn basic_score(word: &Word) -> usize {
    word.distinct_letters() * 10 + word.letters().iter().map(|&l| rank_score(l)).sum::<usize>()
}

/// True when `word` contains one of [`COMMON_SUBSTRINGS`]
#[must_use]
pub fn has_common_substring(word: &Word) -> bool {
    COMMON_SUBSTRINGS.iter().any(|s| word.text().contains(s))
}

/// Letter, positional and bigram statistics over a whole corpus
#[derive(Debug, Clone)]
pub struct LetterStats {
    raw: [usize; ALPHABET_SIZE],
    weighted: [f64; ALPHABET_SIZE],
    positional: Vec<[f64; ALPHABET_SIZE]>,
    bigrams: FxHashMap<[u8; 2], usize>,
}

impl LetterStats {
    /// Gather statistics from every word in `corpus`
    ///
    /// The weighted frequency blends raw counts (70%) with counts where first and
    /// last letters weigh 1.0 and inner letters 0.9 (30%). Positional frequencies
    /// are normalized to probabilities per position.
    #[must_use]
    pub fn from_corpus(corpus: &Corpus) -> Self {
        Self::from_words(corpus.iter())
    }

    /// Gather statistics from an arbitrary word sequence
    pub fn from_words<'a, I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'a Word>,
    {
        let mut raw = [0usize; ALPHABET_SIZE];
        let mut edge_weighted = [0f64; ALPHABET_SIZE];
        let mut positional_counts: Vec<[usize; ALPHABET_SIZE]> = Vec::new();
        let mut bigrams: FxHashMap<[u8; 2], usize> = FxHashMap::default();

        for word in words {
            let last = word.length().saturating_sub(1);
            for (position, &letter) in word.letters().iter().enumerate() {
                let index = letter_index(letter);
                raw[index] += 1;
                edge_weighted[index] += if position == 0 || position == last { 1.0 } else { 0.9 };

                if positional_counts.len() <= position {
                    positional_counts.resize(position + 1, [0; ALPHABET_SIZE]);
                }
                positional_counts[position][index] += 1;
            }
            for pair in word.letters().windows(2) {
                *bigrams.entry([pair[0], pair[1]]).or_insert(0) += 1;
            }
        }

        let mut weighted = [0f64; ALPHABET_SIZE];
        for (index, slot) in weighted.iter_mut().enumerate() {
            *slot = raw[index] as f64 * 0.7 + edge_weighted[index] * 0.3;
        }

        let positional = positional_counts
            .into_iter()
            .map(|counts| {
                let total = counts.iter().sum::<usize>() as f64;
                let mut probabilities = [0f64; ALPHABET_SIZE];
                if total > 0.0 {
                    for (p, &count) in probabilities.iter_mut().zip(&counts) {
                        *p = count as f64 / total;
                    }
                }
                probabilities
            })
            .collect();

        Self {
            raw,
            weighted,
            positional,
            bigrams,
        }
    }

    /// Occurrences of `letter` across the corpus
    #[must_use]
    pub fn frequency(&self, letter: u8) -> usize {
        self.raw[letter_index(letter)]
    }

    /// Position-weighted frequency of `letter`
    #[must_use]
    pub fn weighted(&self, letter: u8) -> f64 {
        self.weighted[letter_index(letter)]
    }

    /// Probability of `letter` at `position` (0 beyond the longest word)
    #[must_use]
    pub fn positional(&self, position: usize, letter: u8) -> f64 {
        self.positional
            .get(position)
            .map_or(0.0, |probabilities| probabilities[letter_index(letter)])
    }

    /// Occurrences of the adjacent pair `first`,`second`
    #[must_use]
    pub fn bigram(&self, first: u8, second: u8) -> usize {
        self.bigrams.get(&[first, second]).copied().unwrap_or(0)
    }

    /// Raw frequency summed over every letter of `word`
    #[must_use]
    pub fn frequency_sum(&self, word: &Word) -> usize {
        word.letters().iter().map(|&l| self.frequency(l)).sum()
    }

    /// Weighted frequency summed over every letter of `word`
    #[must_use]
    pub fn weighted_sum(&self, word: &Word) -> f64 {
        word.letters().iter().map(|&l| self.weighted(l)).sum()
    }

    /// Positional probability summed over `word`
    #[must_use]
    pub fn positional_sum(&self, word: &Word) -> f64 {
        word.letters()
            .iter()
            .enumerate()
            .map(|(position, &letter)| self.positional(position, letter))
            .sum()
    }

    /// Composite linguistic score of `word`
    ///
    /// Weighted frequency of distinct letters × 0.3, positional probability × 100,
    /// bigram counts × 0.1, distinct letters × 5, and 10 more when the word
    /// contains a common substring.
    #[must_use]
    pub fn composite(&self, word: &Word) -> f64 {
        let mut seen = [false; ALPHABET_SIZE];
        let mut letters = 0.0;
        for &letter in word.letters() {
            let index = letter_index(letter);
            if !seen[index] {
                seen[index] = true;
                letters += self.weighted[index] * 0.3;
            }
        }

        let bigrams: usize = word
            .letters()
            .windows(2)
            .map(|pair| self.bigram(pair[0], pair[1]))
            .sum();

        let patterns = if has_common_substring(word) { 10.0 } else { 0.0 };

        letters
            + self.positional_sum(word) * 100.0
            + bigrams as f64 * 0.1
            + word.distinct_letters() as f64 * 5.0
            + patterns
    }
}

/// Sort `scored` best first; equal scores keep their input order
pub fn rank_descending<T, S>(scored: &mut [(T, S)])
where
    S: PartialOrd,
{
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn rank_scores_follow_frequency_order() {
        assert_eq!(rank_score(b'E'), 26);
        assert_eq!(rank_score(b'T'), 25);
        assert_eq!(rank_score(b'Z'), 1);
    }

    #[test]
    fn common_letters_counted_once() {
        assert_eq!(common_letter_count(&word("eerie")), 3);
        assert_eq!(common_letter_count(&word("jazz")), 0);
    }

    #[test]
    fn basic_score_counts_every_letter() {
        // distinct 1 → 10; E ×3 → 78
        assert_eq!(basic_score(&word("eee")), 88);
    }

    #[test]
    fn common_substrings_detected() {
        assert!(has_common_substring(&word("sting")));
        assert!(has_common_substring(&word("other")));
        assert!(!has_common_substring(&word("jazz")));
    }

    #[test]
    fn stats_from_small_corpus() {
        let words = words_from_slice(&["abc", "abd", "xa"]);
        let stats = LetterStats::from_words(&words);

        assert_eq!(stats.frequency(b'A'), 3);
        assert_eq!(stats.frequency(b'Z'), 0);
        assert_eq!(stats.bigram(b'A', b'B'), 2);
        assert_eq!(stats.bigram(b'B', b'A'), 0);
        assert!((stats.positional(0, b'A') - 2.0 / 3.0).abs() < 1e-9);
        assert!((stats.positional(2, b'C') - 0.5).abs() < 1e-9);
        assert!(stats.positional(7, b'A').abs() < f64::EPSILON);

        // Every A sits on an edge; inner B weighs 0.9
        assert!((stats.weighted(b'A') - 3.0).abs() < 1e-9);
        assert!((stats.weighted(b'B') - (1.4 + 0.54)).abs() < 1e-9);
    }

    #[test]
    fn positional_rows_sum_to_one() {
        let words = words_from_slice(&["crane", "slate", "trace", "grace", "cat"]);
        let stats = LetterStats::from_words(&words);
        for position in 0..5 {
            let total: f64 = FREQUENCY_ORDER.iter().map(|&l| stats.positional(position, l)).sum();
            assert!((total - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn composite_prefers_diverse_common_words() {
        let words = words_from_slice(&["crane", "slate", "trace", "jazzy", "fuzzy"]);
        let stats = LetterStats::from_words(&words);
        assert!(stats.composite(&word("trace")) > stats.composite(&word("fuzzy")));
    }

    #[test]
    fn rank_descending_is_stable() {
        let mut scored = vec![("a", 1.0), ("b", 3.0), ("c", 1.0), ("d", 3.0)];
        rank_descending(&mut scored);
        let order: Vec<&str> = scored.iter().map(|(w, _)| *w).collect();
        assert_eq!(order, vec!["b", "d", "a", "c"]);
    }
}
