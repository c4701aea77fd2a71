//! Game state machines
//!
//! A single-player [`Round`] and the human-vs-computer [`Battle`]. Both are
//! driven one guess at a time and never touch the terminal.

mod battle;
mod error;
mod round;

pub use battle::{Battle, BattleOutcome, MAX_STRIKES, Side, Turn};
pub use error::GameError;
pub use round::{Round, RoundState, attempt_budget};
