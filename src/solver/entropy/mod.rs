//! Entropy-based guess evaluation
//!
//! Implements Shannon entropy calculation for verdict pattern distributions.
//! This is the foundation of information-theoretic guessing.

mod cache;
mod calculator;
mod selector;

pub use cache::EntropyCache;
pub use calculator::{
    GuessMetrics, calculate_entropy, calculate_metrics, group_by_pattern, shannon_entropy,
};
pub(crate) use selector::compare_scored;
pub use selector::select_best_guess;
