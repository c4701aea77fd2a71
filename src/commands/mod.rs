//! Command implementations

pub mod battle;
pub mod input;
pub mod play;
pub mod simulate;

pub use battle::{FirstMove, run_battle};
pub use play::{PlaySummary, run_play};
pub use simulate::{SimulationResult, run_simulation};
