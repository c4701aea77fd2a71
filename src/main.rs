//! Wordle Battle - CLI
//!
//! Play word-guessing rounds, battle a computer opponent, or watch the
//! opponents play themselves.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use wordle_battle::{
    commands::{FirstMove, run_battle, run_play, run_simulation},
    config::{Config, DEFAULT_MIN_WORD_LENGTH},
    output::print_simulation_result,
    solver::Difficulty,
    wordlists::Corpus,
};

#[derive(Parser)]
#[command(
    name = "wordle_battle",
    about = "Word-guessing game with entropy-driven computer opponents",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line (default: embedded list)
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Shortest word loaded from the word list
    #[arg(long, global = true, default_value_t = DEFAULT_MIN_WORD_LENGTH)]
    min_length: usize,

    /// Verbose logging and the /word command
    #[arg(short, long, global = true)]
    debug: bool,

    /// Seed for reproducible games
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Hard AI late game: chance of the information guess over the likeliest answer
    #[arg(long, global = true, value_parser = parse_blend)]
    blend: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Guess the secret word yourself (default)
    Play {
        /// Letters in the secret word
        #[arg(short, long, default_value_t = 5)]
        length: usize,
    },

    /// Race a computer opponent to the same secret word
    Battle {
        /// Opponent strength: easy, medium, hard
        #[arg(short = 'D', long, default_value_t = Difficulty::Medium)]
        difficulty: Difficulty,

        /// Letters in the secret word
        #[arg(short, long, default_value_t = 5)]
        length: usize,

        /// Who moves first
        #[arg(short, long, value_enum, default_value_t = FirstMove::Random)]
        first: FirstMove,
    },

    /// Let a computer opponent play many rounds and report statistics
    Simulate {
        /// Opponent strength: easy, medium, hard
        #[arg(short = 'D', long, default_value_t = Difficulty::Hard)]
        difficulty: Difficulty,

        /// Letters in the secret word
        #[arg(short, long, default_value_t = 5)]
        length: usize,

        /// Rounds to play
        #[arg(short = 'n', long, default_value_t = 100)]
        rounds: usize,
    },
}

/// Accept a probability in [0, 1]
fn parse_blend(value: &str) -> Result<f64, String> {
    let blend: f64 = value.parse().map_err(|_| format!("`{value}` is not a number"))?;
    if (0.0..=1.0).contains(&blend) {
        Ok(blend)
    } else {
        Err(format!("{blend} is outside 0.0..=1.0"))
    }
}

fn init_logging(debug: bool) {
    let default = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

fn build_config(cli: &Cli) -> Config {
    let mut config = Config {
        min_word_length: cli.min_length,
        debug: cli.debug,
        seed: cli.seed,
        ..Config::default()
    };
    if let Some(blend) = cli.blend {
        config.limits.information_weight = blend;
    }
    config
}

/// Load the word list named by `--words`, or the embedded one
fn load_corpus(path: Option<&PathBuf>, min_length: usize) -> Result<Corpus> {
    let corpus = match path {
        Some(path) => Corpus::load(path, min_length)
            .with_context(|| format!("Failed to read word list {}", path.display()))?,
        None => Corpus::embedded(min_length),
    };
    anyhow::ensure!(!corpus.is_empty(), "The word list has no usable words");
    Ok(corpus)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let config = build_config(&cli);
    let corpus = load_corpus(cli.words.as_ref(), config.min_word_length)?;
    let mut input = io::stdin().lock();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { length: 5 });

    match command {
        Commands::Play { length } => {
            let summary = run_play(&corpus, &config, length, &mut input)?;
            println!("\n👋 Won {} of {} rounds. Thanks for playing!", summary.won, summary.rounds);
        }
        Commands::Battle {
            difficulty,
            length,
            first,
        } => {
            run_battle(&corpus, &config, difficulty, length, first, &mut input)?;
        }
        Commands::Simulate {
            difficulty,
            length,
            rounds,
        } => {
            let result = run_simulation(&corpus, &config, difficulty, length, rounds, true)?;
            print_simulation_result(&result);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_accepts_probabilities() {
        let cli = Cli::try_parse_from(["wordle_battle", "--blend", "0.25", "simulate"]).unwrap();
        assert!((build_config(&cli).limits.information_weight - 0.25).abs() < f64::EPSILON);
        assert!(parse_blend("0").is_ok());
        assert!(parse_blend("1.0").is_ok());
    }

    #[test]
    fn blend_rejects_out_of_range_values() {
        assert!(Cli::try_parse_from(["wordle_battle", "--blend", "7"]).is_err());
        assert!(Cli::try_parse_from(["wordle_battle", "--blend", "-0.1"]).is_err());
        assert!(parse_blend("often").is_err());
        assert!(parse_blend("NaN").is_err());
    }
}
