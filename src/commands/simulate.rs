//! AI self-play
//!
//! Plays a computer opponent against random secrets and collects statistics.

use crate::config::Config;
use crate::game::Round;
use crate::solver::{Difficulty, Strategy, StrategyType};
use crate::wordlists::Corpus;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Statistics from a self-play run
#[derive(Debug, Clone)]
pub struct SimulationResult {
    pub difficulty: Difficulty,
    pub word_length: usize,
    pub rounds: usize,
    pub wins: usize,
    /// Guesses summed over won rounds
    pub total_guesses: usize,
    /// Won rounds by number of guesses
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
}

impl SimulationResult {
    /// Percentage of rounds won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.rounds == 0 {
            0.0
        } else {
            self.wins as f64 / self.rounds as f64 * 100.0
        }
    }

    /// Mean guesses per won round
    #[must_use]
    pub fn average_guesses(&self) -> Option<f64> {
        (self.wins > 0).then(|| self.total_guesses as f64 / self.wins as f64)
    }

    /// Rounds lost
    #[must_use]
    pub const fn failed(&self) -> usize {
        self.rounds - self.wins
    }
}

/// Play `rounds` games of `length` letters with the `difficulty` opponent
///
/// # Errors
///
/// Returns an error if no round of `length` letters can be started or the
/// opponent runs out of words.
pub fn run_simulation(
    corpus: &Corpus,
    config: &Config,
    difficulty: Difficulty,
    length: usize,
    rounds: usize,
    show_progress: bool,
) -> Result<SimulationResult> {
    let mut rng = config.rng(0);
    let mut ai = StrategyType::for_difficulty(difficulty, corpus, config, 1);
    let mut round = Round::new(corpus);

    let pb = if show_progress {
        ProgressBar::new(rounds as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut wins = 0;
    let mut total_guesses = 0;
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();

    for played in 1..=rounds {
        round
            .start(length, &mut rng)
            .with_context(|| format!("Cannot start a {length}-letter round"))?;
        ai.reset();

        while !round.is_over() {
            let guess = ai
                .next_guess(length, round.remaining_attempts())
                .with_context(|| format!("{} has no {length}-letter words", ai.name()))?;
            let pattern = round.check(guess.text())?;
            ai.observe(guess, &pattern);
        }

        if round.is_won() {
            let guesses = round.history().len();
            wins += 1;
            total_guesses += guesses;
            *distribution.entry(guesses).or_insert(0) += 1;
        }
        round.end();

        pb.set_message(format!("Won: {:.1}%", wins as f64 / played as f64 * 100.0));
        pb.inc(1);
    }
    pb.finish_and_clear();

    let result = SimulationResult {
        difficulty,
        word_length: length,
        rounds,
        wins,
        total_guesses,
        distribution,
        duration: start.elapsed(),
    };
    info!(
        "{difficulty} AI won {wins}/{rounds} rounds of {length} letters in {:.2}s",
        result.duration.as_secs_f64()
    );
    Ok(result)
}
