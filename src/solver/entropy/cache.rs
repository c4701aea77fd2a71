//! Bounded memo of entropy values
//!
//! Keyed by the guess and the candidate set it was evaluated against. Once the
//! cache is full, new values are computed but no longer stored.

use super::calculator::calculate_entropy;
use crate::core::Word;
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHasher};
use std::hash::{Hash, Hasher};

/// Entropy cache with a fixed capacity
#[derive(Debug, Clone)]
pub struct EntropyCache {
    limit: usize,
    entries: FxHashMap<(String, u64), f64>,
}

impl EntropyCache {
    /// Create an empty cache holding at most `limit` values
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            entries: FxHashMap::default(),
        }
    }

    /// Entropy of `guess` over `candidates`, computed at most once per pair
    pub fn entropy(&mut self, guess: &Word, candidates: &[&Word]) -> f64 {
        let key = (guess.text().to_string(), fingerprint(candidates));
        if let Some(&entropy) = self.entries.get(&key) {
            return entropy;
        }
        let entropy = calculate_entropy(guess, candidates);
        self.store(key, entropy);
        entropy
    }

    /// Entropy of every word of `pool` over `candidates`
    ///
    /// Misses are evaluated in parallel; results keep the order of `pool`.
    pub fn entropies<'a>(&mut self, pool: &[&'a Word], candidates: &[&Word]) -> Vec<(&'a Word, f64)> {
        let set = fingerprint(candidates);

        let computed: Vec<(&'a Word, f64, bool)> = pool
            .par_iter()
            .map(|&guess| {
                match self.entries.get(&(guess.text().to_string(), set)) {
                    Some(&entropy) => (guess, entropy, true),
                    None => (guess, calculate_entropy(guess, candidates), false),
                }
            })
            .collect();

        computed
            .into_iter()
            .map(|(guess, entropy, hit)| {
                if !hit {
                    self.store((guess.text().to_string(), set), entropy);
                }
                (guess, entropy)
            })
            .collect()
    }

    fn store(&mut self, key: (String, u64), entropy: f64) {
        if self.entries.len() < self.limit {
            self.entries.insert(key, entropy);
        }
    }

    /// Number of stored values
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every stored value
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Order-independent identity of a candidate set
fn fingerprint(candidates: &[&Word]) -> u64 {
    let mut texts: Vec<&str> = candidates.iter().map(|w| w.text()).collect();
    texts.sort_unstable();
    let mut hasher = FxHasher::default();
    texts.hash(&mut hasher);
    hasher.finish()
}
