//! Minimax-based endgame selection
//!
//! Implements worst-case minimization for small candidate sets.

mod calculator;
mod selector;

pub use calculator::calculate_max_remaining;
pub use selector::select_best_guess;
