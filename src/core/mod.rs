//! Core domain types for the word game
//!
//! This module contains the fundamental domain types with no I/O.
//! All types here are pure, testable, and have clear mathematical properties.

mod pattern;
mod word;

pub use pattern::{Pattern, Verdict};
pub use word::{ALPHABET_SIZE, Word, WordError};

pub(crate) use word::letter_index;
