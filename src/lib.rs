//! Wordle Battle
//!
//! A word-guessing game of any word length, with computer opponents ranging
//! from letter-frequency heuristics to entropy search, minimax and randomized
//! lookahead.
//!
//! # Quick Start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use wordle_battle::game::Round;
//! use wordle_battle::wordlists::Corpus;
//!
//! let corpus = Corpus::from_lines(["crane", "slate", "trace"], 3);
//! let mut round = Round::new(&corpus);
//! round.start(5, &mut StdRng::seed_from_u64(1)).unwrap();
//!
//! let pattern = round.check("trace").unwrap();
//! println!("{}", pattern.to_emoji());
//! ```

// Runtime configuration
pub mod config;

// Core domain types
pub mod core;

// Rounds and battles
pub mod game;

// Computer players
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
