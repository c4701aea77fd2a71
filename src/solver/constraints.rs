//! Constraint model accumulated from guess feedback
//!
//! Folding every `(guess, pattern)` pair of a round into a `Constraints` value
//! yields the rules any remaining candidate must satisfy. Constraints only ever
//! tighten: observing more feedback can never re-admit a rejected word.

use crate::core::{Pattern, Verdict, Word};
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::BTreeMap;

/// Allowed occurrence count for a letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterBounds {
    /// At least this many copies
    pub min: usize,
    /// At most this many copies (`None` = unbounded)
    pub max: Option<usize>,
}

impl LetterBounds {
    /// Check whether `count` lies within the bounds
    #[inline]
    #[must_use]
    pub fn admits(self, count: usize) -> bool {
        count >= self.min && self.max.is_none_or(|max| count <= max)
    }
}

impl Default for LetterBounds {
    fn default() -> Self {
        Self { min: 0, max: None }
    }
}

/// Positions of one letter within a single guess, split by verdict
#[derive(Debug, Default)]
struct LetterFeedback {
    exact: Vec<usize>,
    present: Vec<usize>,
    absent: Vec<usize>,
}

/// Rules extracted from the guess history of a round
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraints {
    confirmed: FxHashMap<usize, u8>,
    required: FxHashSet<u8>,
    forbidden: FxHashSet<u8>,
    excluded: FxHashMap<u8, FxHashSet<usize>>,
    bounds: FxHashMap<u8, LetterBounds>,
}

impl Constraints {
    /// Empty constraint set (admits every word)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a whole guess history into a constraint set
    ///
    /// # Examples
    /// ```
    /// use wordle_battle::core::{Pattern, Word};
    /// use wordle_battle::solver::Constraints;
    ///
    /// let secret = Word::new("crane").unwrap();
    /// let guess = Word::new("trace").unwrap();
    /// let pattern = Pattern::calculate(&guess, &secret);
    ///
    /// let constraints = Constraints::from_history([(&guess, &pattern)]);
    /// assert!(constraints.matches(&secret));
    /// assert!(!constraints.matches(&Word::new("grace").unwrap()));
    /// ```
    pub fn from_history<'a, I>(history: I) -> Self
    where
        I: IntoIterator<Item = (&'a Word, &'a Pattern)>,
    {
        let mut constraints = Self::new();
        for (guess, pattern) in history {
            constraints.observe(guess, pattern);
        }
        constraints
    }

    /// Tighten the constraints with one more piece of feedback
    ///
    /// Letters are processed in alphabetical order; within a letter, `Exact`
    /// positions are applied before `Present`, then `Absent`.
    pub fn observe(&mut self, guess: &Word, pattern: &Pattern) {
        debug_assert_eq!(guess.length(), pattern.len());

        let mut per_letter: BTreeMap<u8, LetterFeedback> = BTreeMap::new();
        for (position, (&letter, &verdict)) in guess
            .letters()
            .iter()
            .zip(pattern.verdicts())
            .enumerate()
        {
            let feedback = per_letter.entry(letter).or_default();
            match verdict {
                Verdict::Exact => feedback.exact.push(position),
                Verdict::Present => feedback.present.push(position),
                Verdict::Absent => feedback.absent.push(position),
            }
        }

        for (letter, feedback) in per_letter {
            self.apply(letter, &feedback);
        }
    }

    fn apply(&mut self, letter: u8, feedback: &LetterFeedback) {
        for &position in &feedback.exact {
            self.confirmed.insert(position, letter);
            self.required.insert(letter);
        }

        if !feedback.present.is_empty() {
            self.required.insert(letter);
            self.excluded
                .entry(letter)
                .or_default()
                .extend(feedback.present.iter().copied());
        }

        let hits = feedback.exact.len() + feedback.present.len();

        if !feedback.absent.is_empty() {
            if hits == 0 {
                self.forbidden.insert(letter);
            } else {
                // Extra copies came back absent: the letter occurs exactly `hits` times
                self.excluded
                    .entry(letter)
                    .or_default()
                    .extend(feedback.absent.iter().copied());
                let bounds = self.bounds.entry(letter).or_default();
                bounds.max = Some(bounds.max.map_or(hits, |max| max.min(hits)));
            }
        }

        if hits > 0 {
            let bounds = self.bounds.entry(letter).or_default();
            bounds.min = bounds.min.max(hits);
        }
    }

    /// Check whether `word` satisfies every rule
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        let length = word.length();

        self.confirmed
            .iter()
            .all(|(&position, &letter)| position < length && word.letter_at(position) == letter)
            && self.required.iter().all(|&letter| word.has_letter(letter))
            && !self.forbidden.iter().any(|&letter| word.has_letter(letter))
            && self.excluded.iter().all(|(&letter, positions)| {
                positions
                    .iter()
                    .all(|&position| position >= length || word.letter_at(position) != letter)
            })
            && self
                .bounds
                .iter()
                .all(|(&letter, bounds)| bounds.admits(word.count_of(letter)))
    }

    /// True when nothing has been observed yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.confirmed.is_empty()
            && self.required.is_empty()
            && self.forbidden.is_empty()
            && self.excluded.is_empty()
            && self.bounds.is_empty()
    }

    /// Letter confirmed at `position`, if any
    #[must_use]
    pub fn confirmed_at(&self, position: usize) -> Option<u8> {
        self.confirmed.get(&position).copied()
    }

    /// All confirmed `(position, letter)` pairs
    pub fn confirmed(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.confirmed.iter().map(|(&p, &l)| (p, l))
    }

    /// Letters known to occur in the secret
    #[must_use]
    pub const fn required(&self) -> &FxHashSet<u8> {
        &self.required
    }

    /// Letters known not to occur anywhere
    #[must_use]
    pub const fn forbidden(&self) -> &FxHashSet<u8> {
        &self.forbidden
    }

    /// Per-letter positions the letter cannot occupy
    #[must_use]
    pub const fn excluded(&self) -> &FxHashMap<u8, FxHashSet<usize>> {
        &self.excluded
    }

    /// Occurrence bounds recorded for `letter`
    #[must_use]
    pub fn bounds(&self, letter: u8) -> LetterBounds {
        self.bounds.get(&letter).copied().unwrap_or_default()
    }

    /// How many confirmed positions `word` agrees with
    #[must_use]
    pub fn confirmed_matches(&self, word: &Word) -> usize {
        self.confirmed
            .iter()
            .filter(|&(&position, &letter)| {
                position < word.length() && word.letter_at(position) == letter
            })
            .count()
    }

    /// How many required letters `word` contains
    #[must_use]
    pub fn required_present(&self, word: &Word) -> usize {
        self.required
            .iter()
            .filter(|&&letter| word.has_letter(letter))
            .count()
    }

    /// How many letters of `word` sit in a position excluded for them
    #[must_use]
    pub fn misplaced(&self, word: &Word) -> usize {
        self.excluded
            .iter()
            .map(|(&letter, positions)| {
                positions
                    .iter()
                    .filter(|&&position| {
                        position < word.length() && word.letter_at(position) == letter
                    })
                    .count()
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn observed(secret: &str, guesses: &[&str]) -> Constraints {
        let secret = word(secret);
        let mut constraints = Constraints::new();
        for guess in guesses {
            let guess = word(guess);
            let pattern = Pattern::calculate(&guess, &secret);
            constraints.observe(&guess, &pattern);
        }
        constraints
    }

    #[test]
    fn empty_constraints_admit_everything() {
        let constraints = Constraints::new();
        assert!(constraints.is_empty());
        assert!(constraints.matches(&word("crane")));
        assert!(constraints.matches(&word("zz")));
    }

    #[test]
    fn exact_present_absent_recorded() {
        // TRACE vs CRANE: T absent, R/A/E exact, C present
        let c = observed("crane", &["trace"]);

        assert_eq!(c.confirmed_at(1), Some(b'R'));
        assert_eq!(c.confirmed_at(2), Some(b'A'));
        assert_eq!(c.confirmed_at(4), Some(b'E'));
        assert_eq!(c.confirmed_at(0), None);
        assert!(c.required().contains(&b'C'));
        assert!(c.forbidden().contains(&b'T'));
        assert!(c.excluded()[&b'C'].contains(&3));
        assert_eq!(c.bounds(b'C').min, 1);
        assert_eq!(c.bounds(b'C').max, None);
    }

    #[test]
    fn duplicate_absent_caps_letter_count() {
        // SPEED vs ABIDE: first E present, second E absent -> exactly one E
        let c = observed("abide", &["speed"]);

        assert!(!c.forbidden().contains(&b'E'));
        assert_eq!(c.bounds(b'E'), LetterBounds { min: 1, max: Some(1) });
        assert!(c.excluded()[&b'E'].contains(&2));
        assert!(c.excluded()[&b'E'].contains(&3));
        assert!(c.matches(&word("abide")));
        assert!(!c.matches(&word("eerie")));
    }

    #[test]
    fn repeated_exact_raises_minimum() {
        // GEESE vs THEME: E exact at 2 and 4, E at 1 absent -> exactly two Es
        let c = observed("theme", &["geese"]);

        assert_eq!(c.bounds(b'E'), LetterBounds { min: 2, max: Some(2) });
        assert!(c.matches(&word("theme")));
    }

    #[test]
    fn filters_the_scenario_corpus() {
        let c = observed("crane", &["trace"]);
        let survivors: Vec<&str> = ["CRANE", "SLATE", "TRACE", "GRACE"]
            .into_iter()
            .filter(|w| c.matches(&word(w)))
            .collect();
        assert_eq!(survivors, vec!["CRANE"]);
    }

    #[test]
    fn scoring_helpers() {
        let c = observed("crane", &["trace"]);
        assert_eq!(c.confirmed_matches(&word("crane")), 3);
        assert_eq!(c.confirmed_matches(&word("slate")), 1);
        assert_eq!(c.required_present(&word("crane")), 4);
        assert_eq!(c.misplaced(&word("pouch")), 1);
        assert_eq!(c.misplaced(&word("crane")), 0);
    }

    #[test]
    fn from_history_equals_incremental() {
        let secret = word("error");
        let guesses = [word("robot"), word("terror")];
        let history: Vec<(Word, Pattern)> = guesses[..1]
            .iter()
            .map(|g| (g.clone(), Pattern::calculate(g, &secret)))
            .collect();

        let folded = Constraints::from_history(history.iter().map(|(g, p)| (g, p)));
        let incremental = observed("error", &["robot"]);
        assert_eq!(folded, incremental);
        assert!(folded.matches(&secret));
    }

    fn game() -> impl Strategy<Value = (String, Vec<String>)> {
        let five = || proptest::string::string_regex("[A-E]{5}").unwrap();
        (five(), proptest::collection::vec(five(), 1..5))
    }

    proptest! {
        /// Honest feedback never rules out the secret
        #[test]
        fn prop_secret_always_admitted((secret, guesses) in game()) {
            let secret = word(&secret);
            let mut constraints = Constraints::new();
            for guess in &guesses {
                let guess = word(guess);
                constraints.observe(&guess, &Pattern::calculate(&guess, &secret));
                prop_assert!(constraints.matches(&secret));
            }
        }

        /// Each extra observation can only shrink the admitted set
        #[test]
        fn prop_constraints_never_relax((secret, guesses) in game()) {
            let secret = word(&secret);
            let universe: Vec<Word> = guesses.iter().map(|g| word(g)).chain([secret.clone()]).collect();
            let mut constraints = Constraints::new();
            let mut admitted = universe.len();

            for guess in &universe[..universe.len() - 1] {
                let before: Vec<bool> = universe.iter().map(|w| constraints.matches(w)).collect();
                constraints.observe(guess, &Pattern::calculate(guess, &secret));
                let after: Vec<bool> = universe.iter().map(|w| constraints.matches(w)).collect();

                for (was, is) in before.iter().zip(&after) {
                    prop_assert!(*was || !*is, "a rejected word was re-admitted");
                }
                let count = after.iter().filter(|&&m| m).count();
                prop_assert!(count <= admitted);
                admitted = count;
            }
        }
    }
}
