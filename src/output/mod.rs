//! Terminal output formatting
//!
//! Colored verdict rows and result summaries.

pub mod display;
pub mod formatters;

pub use display::{
    print_banner, print_battle_result, print_guess, print_round_result, print_simulation_result,
    print_turn,
};
