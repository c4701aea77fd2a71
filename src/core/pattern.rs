//! Feedback pattern calculation and representation
//!
//! A pattern is the per-position verdict produced by comparing a guess to the
//! secret word:
//! - `Exact`   = letter matches the secret at this position
//! - `Present` = letter occurs elsewhere among the secret's unmatched letters
//! - `Absent`  = letter does not occur among the secret's unmatched letters

use super::Word;
use super::word::{ALPHABET_SIZE, letter_index};
use std::fmt;

/// Judgment for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Verdict {
    Absent,
    Present,
    Exact,
}

impl Verdict {
    /// True for `Exact` and `Present`
    #[inline]
    #[must_use]
    pub const fn is_hit(self) -> bool {
        matches!(self, Self::Exact | Self::Present)
    }

    /// Single-character code used by `Pattern::from_str` and `Display`
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Exact => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }
}

/// Feedback pattern for a guess, aligned to the guessed word's letters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern(Box<[Verdict]>);

impl Pattern {
    /// All-`Exact` pattern for a word of `length` letters
    #[must_use]
    pub fn perfect(length: usize) -> Self {
        Self(vec![Verdict::Exact; length].into_boxed_slice())
    }

    /// Calculate the pattern when `guess` is guessed and `answer` is the target
    ///
    /// # Algorithm
    /// 1. First pass: mark all exact matches and remove them from the available pool
    /// 2. Second pass: left to right, mark `Present` while the pool still holds the
    ///    letter, otherwise `Absent`
    ///
    /// A repeated letter is therefore never credited more often than it occurs in
    /// the answer.
    ///
    /// # Examples
    /// ```
    /// use wordle_battle::core::{Pattern, Verdict, Word};
    ///
    /// let guess = Word::new("trace").unwrap();
    /// let answer = Word::new("crane").unwrap();
    /// let pattern = Pattern::calculate(&guess, &answer);
    ///
    /// assert_eq!(
    ///     pattern.verdicts(),
    ///     &[Verdict::Absent, Verdict::Exact, Verdict::Exact, Verdict::Present, Verdict::Exact]
    /// );
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        debug_assert_eq!(
            guess.length(),
            answer.length(),
            "guess and answer must have the same length"
        );

        let guess_letters = guess.letters();
        let answer_letters = answer.letters();
        let mut result = vec![Verdict::Absent; guess_letters.len()];
        let mut available: [u8; ALPHABET_SIZE] = answer.letter_counts();

        // First pass: exact position matches
        for (i, (&g, &a)) in guess_letters.iter().zip(answer_letters).enumerate() {
            if g == a {
                result[i] = Verdict::Exact;
                let slot = &mut available[letter_index(g)];
                *slot = slot.saturating_sub(1);
            }
        }

        // Second pass: wrong position, but an unmatched copy remains
        for (i, &g) in guess_letters.iter().enumerate() {
            if result[i] == Verdict::Exact {
                continue;
            }
            let slot = &mut available[letter_index(g)];
            if *slot > 0 {
                result[i] = Verdict::Present;
                *slot -= 1;
            }
        }

        Self(result.into_boxed_slice())
    }

    /// Per-position verdicts
    #[inline]
    #[must_use]
    pub fn verdicts(&self) -> &[Verdict] {
        &self.0
    }

    /// Number of positions covered
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for a zero-length pattern
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if this is a perfect match (every position `Exact`)
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&v| v == Verdict::Exact)
    }

    /// Parse a pattern from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for exact
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/⬜ for absent
    ///
    /// # Examples
    /// ```
    /// use wordle_battle::core::Pattern;
    ///
    /// let p1 = Pattern::from_str("GY-GY").unwrap();
    /// let p2 = Pattern::from_str("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Provides ergonomic Option API; FromStr trait also implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        let verdicts = s
            .chars()
            .map(|ch| match ch {
                'G' | 'g' | '🟩' => Some(Verdict::Exact),
                'Y' | 'y' | '🟨' => Some(Verdict::Present),
                '-' | '_' | '⬜' => Some(Verdict::Absent),
                _ => None,
            })
            .collect::<Option<Vec<_>>>()?;

        if verdicts.is_empty() {
            return None;
        }

        Some(Self(verdicts.into_boxed_slice()))
    }

    /// Convert pattern to emoji string
    ///
    /// # Examples
    /// ```
    /// use wordle_battle::core::Pattern;
    ///
    /// let p = Pattern::from_str("GY-GY").unwrap();
    /// assert_eq!(p.to_emoji(), "🟩🟨⬜🟩🟨");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0
            .iter()
            .map(|v| match v {
                Verdict::Exact => '🟩',
                Verdict::Present => '🟨',
                Verdict::Absent => '⬜',
            })
            .collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|v| write!(f, "{}", v.code()))
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid pattern string: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use Verdict::{Absent, Exact, Present};

    fn pattern(guess: &str, answer: &str) -> Pattern {
        Pattern::calculate(&Word::new(guess).unwrap(), &Word::new(answer).unwrap())
    }

    #[test]
    fn pattern_perfect_constructor() {
        let p = Pattern::perfect(5);
        assert!(p.is_perfect());
        assert_eq!(p.verdicts(), &[Exact; 5]);
        assert!(!Pattern::perfect(0).is_perfect());
    }

    #[test]
    fn pattern_all_absent() {
        let p = pattern("abcde", "fghij");
        assert_eq!(p.verdicts(), &[Absent; 5]);
        assert!(!p.is_perfect());
    }

    #[test]
    fn pattern_all_exact() {
        let p = pattern("crane", "crane");
        assert_eq!(p, Pattern::perfect(5));
    }

    #[test]
    fn pattern_trace_against_crane() {
        let p = pattern("trace", "crane");
        assert_eq!(p.verdicts(), &[Absent, Exact, Exact, Present, Exact]);
    }

    #[test]
    fn pattern_robot_against_error() {
        // ERROR's single O is taken by the exact match, so the first O gets nothing
        let p = pattern("robot", "error");
        assert_eq!(p.verdicts(), &[Present, Absent, Absent, Exact, Absent]);

        let answer = Word::new("error").unwrap();
        let guess = Word::new("robot").unwrap();
        for letter in [b'R', b'O'] {
            let credited = guess
                .letters()
                .iter()
                .zip(p.verdicts())
                .filter(|(l, v)| **l == letter && v.is_hit())
                .count();
            assert!(credited <= answer.count_of(letter));
        }
    }

    #[test]
    fn pattern_duplicate_letters_exact_takes_priority() {
        // SPEED vs ERASE: both Es are present, S present
        let p = pattern("speed", "erase");
        assert_eq!(p.verdicts(), &[Present, Absent, Present, Present, Absent]);

        // ROBOT vs FLOOR: second O is exact, first O present
        let p = pattern("robot", "floor");
        assert_eq!(p.verdicts(), &[Present, Present, Absent, Exact, Absent]);
    }

    #[test]
    fn pattern_extra_copies_are_absent() {
        // PLATE's only L and A are consumed by exact matches
        let p = pattern("llama", "plate");
        assert_eq!(p.verdicts(), &[Absent, Exact, Exact, Absent, Absent]);
    }

    #[test]
    fn pattern_other_lengths() {
        let p = pattern("cat", "act");
        assert_eq!(p.verdicts(), &[Present, Present, Exact]);

        let p = pattern("letters", "settler");
        assert_eq!(p.len(), 7);
        assert!(p.verdicts().iter().all(|v| v.is_hit()));
    }

    #[test]
    fn pattern_from_str_valid() {
        let p1 = Pattern::from_str("GYG--").unwrap();
        let p2 = Pattern::from_str("🟩🟨🟩⬜⬜").unwrap();
        let p3 = Pattern::from_str("gyg__").unwrap();

        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        assert_eq!(p1.verdicts(), &[Exact, Present, Exact, Absent, Absent]);
    }

    #[test]
    fn pattern_from_str_invalid() {
        assert!(Pattern::from_str("GXGGY").is_none());
        assert!(Pattern::from_str("").is_none());
        assert!("nope".parse::<Pattern>().is_err());
    }

    #[test]
    fn pattern_display_round_trips_through_codes() {
        let p = pattern("trace", "crane");
        assert_eq!(p.to_string(), "-GGYG");
        assert_eq!(p.to_emoji(), "⬜🟩🟩🟨🟩");
    }

    fn same_length_words() -> impl Strategy<Value = (String, String)> {
        (1usize..9).prop_flat_map(|len| {
            (
                proptest::string::string_regex(&format!("[A-F]{{{len}}}")).unwrap(),
                proptest::string::string_regex(&format!("[A-F]{{{len}}}")).unwrap(),
            )
        })
    }

    proptest! {
        /// A letter is never credited more often than it occurs in the answer
        #[test]
        fn prop_hits_bounded_by_answer_counts((guess, answer) in same_length_words()) {
            let guess = Word::new(&guess).unwrap();
            let answer = Word::new(&answer).unwrap();
            let p = Pattern::calculate(&guess, &answer);

            for letter in b'A'..=b'F' {
                let credited = guess
                    .letters()
                    .iter()
                    .zip(p.verdicts())
                    .filter(|(l, v)| **l == letter && v.is_hit())
                    .count();
                prop_assert!(credited <= answer.count_of(letter));
            }
        }

        /// Exact marks exactly the positions where the letters agree
        #[test]
        fn prop_exact_iff_same_letter((guess, answer) in same_length_words()) {
            let guess = Word::new(&guess).unwrap();
            let answer = Word::new(&answer).unwrap();
            let p = Pattern::calculate(&guess, &answer);

            for (i, v) in p.verdicts().iter().enumerate() {
                prop_assert_eq!(*v == Verdict::Exact, guess.letter_at(i) == answer.letter_at(i));
            }
        }

        /// A word compared with itself is always perfect
        #[test]
        fn prop_self_match_is_perfect((word, _) in same_length_words()) {
            let word = Word::new(&word).unwrap();
            prop_assert!(Pattern::calculate(&word, &word).is_perfect());
        }
    }
}
