//! Display functions for game events and command results

use super::formatters::{colored_row, create_progress_bar, percent};
use crate::commands::SimulationResult;
use crate::core::{Pattern, Word};
use crate::game::{Battle, BattleOutcome, Round, Side, Turn};
use colored::Colorize;

/// Print a boxed title
pub fn print_banner(title: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", title.bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
}

/// Print one guess with its attempt number
pub fn print_guess(attempt: usize, word: &Word, pattern: &Pattern) {
    println!(
        "  {} {}  {}",
        format!("{attempt:>2}.").bright_black(),
        colored_row(word, pattern),
        pattern.to_emoji()
    );
}

/// Print a battle turn, labelled by side
pub fn print_turn(turn: &Turn, opponent: &str) {
    let label = match turn.side {
        Side::Player => format!("{:>10}", "You").bright_yellow().bold(),
        Side::Computer => format!("{opponent:>10}").bright_blue().bold(),
    };
    println!("  {label}  {}", colored_row(&turn.guess, &turn.pattern));
}

/// Print the end of a single-player round
pub fn print_round_result(round: &Round<'_>) {
    let secret = round.secret().map_or_else(String::new, |w| w.text().to_string());
    println!();
    if round.is_won() {
        let guesses = round.history().len();
        println!(
            "{}",
            format!(
                "🎉 Solved in {guesses} {}!",
                if guesses == 1 { "guess" } else { "guesses" }
            )
            .green()
            .bold()
        );
    } else {
        println!("{}", "❌ Out of attempts".red().bold());
    }
    println!("   The word was {}", secret.bright_yellow().bold());
}

/// Print how a battle ended
pub fn print_battle_result(battle: &Battle<'_>, opponent: &str) {
    let secret = battle.secret().text().bright_yellow().bold();
    println!();
    match battle.outcome() {
        Some(BattleOutcome::Winner(Side::Player)) => {
            println!("{}", "🎉 You won!".green().bold());
        }
        Some(BattleOutcome::Winner(Side::Computer)) => {
            println!("{}", format!("💻 {opponent} won!").red().bold());
        }
        Some(BattleOutcome::Forfeit) => {
            println!(
                "{}",
                format!("💻 {opponent} won! Too many invalid inputs.").red().bold()
            );
        }
        Some(BattleOutcome::Draw) => println!("{}", "🤝 Draw: nobody found it".yellow().bold()),
        None => println!("{}", "Battle abandoned".bright_black()),
    }
    println!("   The word was {secret}");
}

/// Print the result of an AI self-play run
pub fn print_simulation_result(result: &SimulationResult) {
    print_banner(&format!("SIMULATION: {} AI", result.difficulty));

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Rounds played:    {}", result.rounds);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate()).bright_yellow().bold()
    );
    match result.average_guesses() {
        Some(average) => println!(
            "   Average guesses:  {}",
            format!("{average:.2}").bright_yellow().bold()
        ),
        None => println!("   Average guesses:  {}", "n/a".bright_black()),
    }
    println!("   Failed:           {}", result.failed().to_string().red());
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&guesses, &count) in &result.distribution {
        let pct = percent(count, result.rounds);
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guesses:>2}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
    let failed = result.failed();
    if failed > 0 {
        let pct = percent(failed, result.rounds);
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("    ✗: {} {failed:4} ({pct:5.1}%)", bar.red());
    }
}
