//! Human-vs-computer battle mode

use super::input::read_line;
use crate::config::Config;
use crate::game::{Battle, BattleOutcome, MAX_STRIKES, Side, Turn};
use crate::output::{print_banner, print_battle_result, print_turn};
use crate::solver::{Difficulty, Strategy, StrategyType};
use crate::wordlists::Corpus;
use anyhow::{Context, Result};
use clap::ValueEnum;
use colored::Colorize;
use indicatif::ProgressBar;
use std::io::BufRead;
use std::time::Duration;

/// Who opens the battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum FirstMove {
    Player,
    Computer,
    #[default]
    Random,
}

/// Play one battle against the computer
///
/// Returns `None` when the player leaves before the end.
///
/// # Errors
///
/// Returns an error if no battle of `length` letters can be started, the
/// terminal cannot be read, or the computer cannot produce a guess.
pub fn run_battle<R: BufRead>(
    corpus: &Corpus,
    config: &Config,
    difficulty: Difficulty,
    length: usize,
    first: FirstMove,
    input: &mut R,
) -> Result<Option<BattleOutcome>> {
    let mut rng = config.rng(0);
    let first = match first {
        FirstMove::Player => Side::Player,
        FirstMove::Computer => Side::Computer,
        FirstMove::Random => Side::random(&mut rng),
    };

    let mut battle = Battle::start(corpus, length, first, &mut rng)
        .with_context(|| format!("Cannot start a {length}-letter battle"))?;
    let mut ai = StrategyType::for_difficulty(difficulty, corpus, config, 1);
    let opponent = ai.name();

    print_banner(&format!("BATTLE: You vs {opponent}"));
    println!(
        "{length} letters, {} attempts each. {first} first. {} to quit.",
        battle.remaining(Side::Player),
        "/exit".red()
    );
    if config.debug {
        println!("🔍 {}", battle.secret().text().bright_yellow());
    }

    while !battle.is_over() {
        let turn = match battle.to_move() {
            Side::Player => {
                let prompt = format!("You [{} left] > ", battle.remaining(Side::Player));
                let line = read_line(input, &prompt).context("Failed to read guess")?;
                let Some(line) = line.filter(|l| l != "/exit") else {
                    print_battle_result(&battle, opponent);
                    return Ok(None);
                };
                if line.is_empty() {
                    continue;
                }
                match battle.submit(&line) {
                    Ok(turn) => turn,
                    Err(err) if err.is_strike() => {
                        println!(
                            "{} [{}/{MAX_STRIKES}]",
                            err.to_string().red(),
                            battle.strikes()
                        );
                        continue;
                    }
                    Err(err) => {
                        println!("{}", err.to_string().yellow());
                        continue;
                    }
                }
            }
            Side::Computer => computer_turn(&mut battle, &mut ai, opponent)?,
        };

        print_turn(&turn, opponent);
        ai.observe(&turn.guess, &turn.pattern);
    }

    print_battle_result(&battle, opponent);
    Ok(battle.outcome())
}

fn computer_turn<'a>(
    battle: &mut Battle<'a>,
    ai: &mut StrategyType<'a>,
    opponent: &str,
) -> Result<Turn> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(format!("{opponent} is thinking..."));
    spinner.enable_steady_tick(Duration::from_millis(80));
    let guess = ai.next_guess(battle.word_length(), battle.remaining(Side::Computer));
    spinner.finish_and_clear();

    let guess = guess.with_context(|| {
        format!("{opponent} has no {}-letter words", battle.word_length())
    })?;
    battle
        .submit(guess.text())
        .with_context(|| format!("{opponent} played an illegal guess {guess}"))
}
