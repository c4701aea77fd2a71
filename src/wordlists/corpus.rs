//! Word corpus partitioned by length
//!
//! Loaded once and never mutated afterwards.

use super::loader::parse_line;
use crate::core::Word;
use log::{debug, info};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::io;
use std::path::Path;

/// All playable words, grouped by length
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    partitions: BTreeMap<usize, Vec<Word>>,
    index: FxHashMap<String, (usize, usize)>,
}

impl Corpus {
    /// Build a corpus from dictionary lines
    ///
    /// Lines are trimmed; only purely alphabetic lines of at least `min_length`
    /// letters are kept. Words are uppercased and duplicates dropped, keeping the
    /// first occurrence.
    ///
    /// # Examples
    /// ```
    /// use wordle_battle::wordlists::Corpus;
    ///
    /// let corpus = Corpus::from_lines(["crane", "slate", "cat", "it", "x-ray"], 3);
    /// assert_eq!(corpus.len(), 3);
    /// assert_eq!(corpus.words(5).len(), 2);
    /// assert_eq!(corpus.bounds(), Some((3, 5)));
    /// ```
    pub fn from_lines<I, S>(lines: I, min_length: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut corpus = Self::default();
        let mut skipped = 0usize;

        for line in lines {
            match parse_line(line.as_ref(), min_length) {
                Some(word) => corpus.insert(word),
                None => skipped += 1,
            }
        }

        info!(
            "Loaded {} words across {} lengths ({skipped} lines skipped)",
            corpus.len(),
            corpus.partitions.len()
        );
        debug!("Corpus length bounds: {:?}", corpus.bounds());

        corpus
    }

    /// Build a corpus from the embedded dictionary
    #[must_use]
    pub fn embedded(min_length: usize) -> Self {
        Self::from_lines(super::WORDS.iter(), min_length)
    }

    /// Load a corpus from a dictionary file with one word per line
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn load<P: AsRef<Path>>(path: P, min_length: usize) -> io::Result<Self> {
        super::loader::load_from_file(path, min_length)
    }

    fn insert(&mut self, word: Word) {
        if self.index.contains_key(word.text()) {
            return;
        }
        let length = word.length();
        let partition = self.partitions.entry(length).or_default();
        self.index
            .insert(word.text().to_string(), (length, partition.len()));
        partition.push(word);
    }

    /// All words of exactly `length` letters, in load order
    #[must_use]
    pub fn words(&self, length: usize) -> &[Word] {
        self.partitions.get(&length).map_or(&[], Vec::as_slice)
    }

    /// Find a word by its text (case-insensitive)
    #[must_use]
    pub fn lookup(&self, text: &str) -> Option<&Word> {
        let key = text.trim().to_ascii_uppercase();
        let &(length, position) = self.index.get(&key)?;
        self.partitions.get(&length)?.get(position)
    }

    /// Check whether a word belongs to the corpus
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains_key(word.text())
    }

    /// Shortest and longest word lengths present
    #[must_use]
    pub fn bounds(&self) -> Option<(usize, usize)> {
        let min = *self.partitions.keys().next()?;
        let max = *self.partitions.keys().next_back()?;
        Some((min, max))
    }

    /// All word lengths present, ascending
    #[must_use]
    pub fn lengths(&self) -> Vec<usize> {
        self.partitions.keys().copied().collect()
    }

    /// Total number of words
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// True when no words were loaded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Every word across all lengths
    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.partitions.values().flatten()
    }

    /// Pick a word of `length` letters uniformly at random
    pub fn random_word<R: Rng + ?Sized>(&self, length: usize, rng: &mut R) -> Option<&Word> {
        self.words(length).choose(rng)
    }
}
