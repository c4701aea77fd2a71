//! Computer players
//!
//! Constraint tracking, candidate filtering and the difficulty-tiered guess
//! selectors built on top of them.

pub mod adaptive;
mod constraints;
pub mod entropy;
mod filter;
pub mod frequency;
pub mod hint;
pub mod information;
mod knowledge;
pub mod minimax;
pub mod scoring;
pub mod simulation;
pub mod strategy;

pub use adaptive::{AdaptivePhase, AdaptiveStrategy};
pub use constraints::{Constraints, LetterBounds};
pub use filter::{CandidateSet, CandidateSource, filter_candidates, narrow};
pub use frequency::FrequencyStrategy;
pub use hint::HintStrategy;
pub use information::InformationStrategy;
pub use knowledge::Knowledge;
pub use strategy::{Difficulty, Strategy, StrategyType};
