//! Word lists for the game
//!
//! Provides the length-partitioned corpus plus an embedded default dictionary.

mod corpus;
mod embedded;
pub mod loader;

pub use corpus::Corpus;
pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_alphabetic() {
        for &word in WORDS {
            assert!(
                word.chars().all(|c| c.is_ascii_alphabetic()),
                "Word '{word}' contains non-alphabetic chars"
            );
        }
    }

    #[test]
    fn embedded_covers_common_lengths() {
        let corpus = Corpus::embedded(3);
        for length in 3..=8 {
            assert!(
                corpus.words(length).len() > 100,
                "expected a healthy partition for length {length}"
            );
        }
    }
}
