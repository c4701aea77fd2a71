//! Single-player mode
//!
//! The player guesses a random secret, with `/hint` suggestions drawn from
//! their own feedback.

use super::input::{is_yes, read_line};
use crate::config::Config;
use crate::game::Round;
use crate::output::formatters::hint_line;
use crate::output::{print_banner, print_guess, print_round_result};
use crate::solver::entropy::calculate_metrics;
use crate::solver::{HintStrategy, Strategy};
use crate::wordlists::Corpus;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::BufRead;

/// Rounds played during one session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaySummary {
    pub rounds: usize,
    pub won: usize,
}

fn print_help(debug: bool) {
    println!("Commands: {} suggest a word, {} quit", "/hint".cyan(), "/exit".red());
    if debug {
        println!("          {} reveal the secret", "/word".cyan());
    }
}

/// Run interactive rounds until the player quits
///
/// # Errors
///
/// Returns an error if no round of `length` letters can be started or the
/// terminal cannot be read.
pub fn run_play<R: BufRead>(
    corpus: &Corpus,
    config: &Config,
    length: usize,
    input: &mut R,
) -> Result<PlaySummary> {
    let mut rng = config.rng(0);
    let mut hint = HintStrategy::new(corpus, config.rng(2));
    let mut round = Round::new(corpus);
    let mut summary = PlaySummary::default();

    print_banner("WORDLE");
    print_help(config.debug);

    loop {
        round
            .start(length, &mut rng)
            .with_context(|| format!("Cannot start a {length}-letter round"))?;
        hint.reset();
        summary.rounds += 1;
        println!(
            "\nGuess the {length}-letter word in {} attempts.",
            round.max_attempts()
        );

        while !round.is_over() {
            let prompt = format!("[{}/{}] > ", round.history().len() + 1, round.max_attempts());
            let Some(line) = read_line(input, &prompt).context("Failed to read guess")? else {
                round.end();
                return Ok(summary);
            };

            match line.as_str() {
                "" => {}
                "/exit" => {
                    round.end();
                    return Ok(summary);
                }
                "/help" => print_help(config.debug),
                "/hint" => match hint.next_guess(length, round.remaining_attempts()) {
                    Some(word) => {
                        let candidates = hint.candidates(length);
                        let metrics = calculate_metrics(word, candidates.words());
                        println!("{}", hint_line(word, candidates.len(), &metrics));
                    }
                    None => println!("No hint available"),
                },
                "/word" => match round.secret() {
                    Some(secret) if config.debug => {
                        println!("🔍 {}", secret.text().bright_yellow());
                    }
                    _ => println!("{}", "/word needs --debug".bright_black()),
                },
                guess => match round.check(guess) {
                    Ok(pattern) => {
                        let attempt = round.history().len();
                        if let Some((word, _)) = round.history().last() {
                            print_guess(attempt, word, &pattern);
                            hint.observe(word, &pattern);
                        }
                    }
                    Err(err) => println!("{}", err.to_string().red()),
                },
            }
        }

        if round.is_won() {
            summary.won += 1;
        }
        print_round_result(&round);
        round.end();

        match read_line(input, "\nPlay again? (y/n) ").context("Failed to read answer")? {
            Some(answer) if is_yes(&answer) => {}
            _ => return Ok(summary),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn config() -> Config {
        Config {
            seed: Some(1),
            ..Config::default()
        }
    }

    #[test]
    fn solving_a_round_counts_a_win() {
        let corpus = Corpus::from_lines(["crane", "cat"], 3);
        let mut input = Cursor::new("/hint\nzzzzz\ncat\ncrane\nn\n");
        let summary = run_play(&corpus, &config(), 5, &mut input).unwrap();
        assert_eq!(summary, PlaySummary { rounds: 1, won: 1 });
    }

    #[test]
    fn replaying_starts_another_round() {
        let corpus = Corpus::from_lines(["crane", "cat"], 3);
        let mut input = Cursor::new("crane\ny\n/exit\n");
        let summary = run_play(&corpus, &config(), 5, &mut input).unwrap();
        assert_eq!(summary, PlaySummary { rounds: 2, won: 1 });
    }

    #[test]
    fn exit_and_eof_end_the_session() {
        let corpus = Corpus::from_lines(["crane", "slate"], 3);
        let mut input = Cursor::new("/word\n/exit\n");
        let summary = run_play(&corpus, &config(), 5, &mut input).unwrap();
        assert_eq!(summary, PlaySummary { rounds: 1, won: 0 });

        let mut input = Cursor::new("");
        assert_eq!(run_play(&corpus, &config(), 5, &mut input).unwrap().won, 0);
    }

    #[test]
    fn unavailable_length_is_an_error() {
        let corpus = Corpus::from_lines(["crane", "slate"], 3);
        let mut input = Cursor::new("");
        assert!(run_play(&corpus, &config(), 8, &mut input).is_err());
    }
}
