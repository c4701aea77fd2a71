//! Runtime configuration
//!
//! Built once by the CLI and handed to the components that need it.

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Default minimum word length accepted into the corpus
pub const DEFAULT_MIN_WORD_LENGTH: usize = 3;

/// Game-wide settings
#[derive(Debug, Clone)]
pub struct Config {
    /// Words shorter than this are never loaded
    pub min_word_length: usize,

    /// Reveal the secret to the presentation layer
    pub debug: bool,

    /// Fixed RNG seed; `None` seeds from the OS
    pub seed: Option<u64>,

    /// Sampling caps for the guess selectors
    pub limits: SearchLimits,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_word_length: DEFAULT_MIN_WORD_LENGTH,
            debug: false,
            seed: None,
            limits: SearchLimits::default(),
        }
    }
}

impl Config {
    /// Create a random number generator honoring the configured seed
    ///
    /// `stream` separates generators derived from the same seed so that two
    /// players seeded together do not mirror each other.
    #[must_use]
    pub fn rng(&self, stream: u64) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed ^ stream.wrapping_mul(0x9E37_79B9_7F4A_7C15)),
            None => StdRng::from_os_rng(),
        }
    }
}

/// Bounds on search effort, keeping each guess interactive
#[derive(Debug, Clone, PartialEq)]
pub struct SearchLimits {
    /// Information tier: corpus words tested for entropy (default: 50)
    pub info_test_words: usize,

    /// Information tier: candidates sampled per entropy evaluation (default: 20)
    pub info_sample_candidates: usize,

    /// Information tier: pick randomly at or below this many candidates (default: 5)
    pub info_random_below: usize,

    /// Adaptive tier: non-candidate corpus words tested for entropy (default: 50)
    pub adaptive_test_words: usize,

    /// Simulation: candidates considered as possible answers (default: 50)
    pub simulation_candidate_cap: usize,

    /// Simulation: non-candidate corpus words added to the guess pool (default: 100)
    pub simulation_pool_words: usize,

    /// Simulation: fewest simulated answers per guess (default: 20)
    pub simulation_min_runs: usize,

    /// Simulation: most simulated answers per guess (default: 100)
    pub simulation_max_runs: usize,

    /// Simulation: total runs shared across the pool (default: 1000)
    pub simulation_budget: usize,

    /// Entropy cache capacity (default: 1000)
    pub entropy_cache_limit: usize,

    /// Adaptive late game: probability of the information guess over the
    /// most-likely answer (default: 0.7)
    pub information_weight: f64,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            info_test_words: 50,
            info_sample_candidates: 20,
            info_random_below: 5,
            adaptive_test_words: 50,
            simulation_candidate_cap: 50,
            simulation_pool_words: 100,
            simulation_min_runs: 20,
            simulation_max_runs: 100,
            simulation_budget: 1000,
            entropy_cache_limit: 1000,
            information_weight: 0.7,
        }
    }
}

impl SearchLimits {
    /// Simulations to run per guess for a pool of `pool_size` guesses
    ///
    /// The budget is split across the pool, clamped to `[min_runs, max_runs]`.
    #[must_use]
    pub fn simulations_per_guess(&self, pool_size: usize) -> usize {
        let share = self.simulation_budget / pool_size.max(1);
        let floor = self.simulation_min_runs.min(self.simulation_max_runs);
        share.clamp(floor, self.simulation_max_runs)
    }
}
