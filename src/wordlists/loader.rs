//! Word list loading utilities
//!
//! Provides functions to load a corpus from files or use the embedded list.

use super::Corpus;
use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Parse a single dictionary line
///
/// A line qualifies when, after trimming, it is purely alphabetic and at least
/// `min_length` letters long. Anything else is skipped silently.
///
/// # Examples
/// ```
/// use wordle_battle::wordlists::loader::parse_line;
///
/// assert_eq!(parse_line("  crane\n", 3).unwrap().text(), "CRANE");
/// assert!(parse_line("it", 3).is_none());
/// assert!(parse_line("don't", 3).is_none());
/// ```
#[must_use]
pub fn parse_line(line: &str, min_length: usize) -> Option<Word> {
    let trimmed = line.trim();
    if trimmed.len() < min_length {
        return None;
    }
    Word::new(trimmed).ok()
}

/// Load a corpus from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_battle::wordlists::loader::load_from_file;
///
/// let corpus = load_from_file("data/words.txt", 3).unwrap();
/// println!("Loaded {} words", corpus.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, min_length: usize) -> io::Result<Corpus> {
    let content = fs::read_to_string(path)?;
    Ok(Corpus::from_lines(content.lines(), min_length))
}

/// Convert a string slice to a Word vector, skipping invalid entries
///
/// # Examples
/// ```
/// use wordle_battle::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "sh0rt", "slate"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_line_accepts_alphabetic() {
        assert_eq!(parse_line("crane", 3).unwrap().text(), "CRANE");
        assert_eq!(parse_line("\tCat  ", 3).unwrap().text(), "CAT");
    }

    #[test]
    fn parse_line_rejects_short_and_malformed() {
        assert!(parse_line("ox", 3).is_none());
        assert!(parse_line("", 3).is_none());
        assert!(parse_line("x-ray", 3).is_none());
        assert!(parse_line("abc1", 3).is_none());
        assert!(parse_line("two words", 3).is_none());
    }

    #[test]
    fn parse_line_respects_min_length() {
        assert!(parse_line("cat", 4).is_none());
        assert!(parse_line("cats", 4).is_some());
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "", "abc", "sl@te", "slate"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "CRANE");
        assert_eq!(words[1].text(), "ABC");
        assert_eq!(words[2].text(), "SLATE");
    }

    #[test]
    fn load_from_missing_file_errors() {
        assert!(load_from_file("definitely/not/here.txt", 3).is_err());
    }
}
