//! Formatting utilities for terminal output

use crate::core::{Pattern, Verdict, Word};
use crate::solver::entropy::GuessMetrics;
use colored::{ColoredString, Colorize};

/// One letter tile colored by its verdict
#[must_use]
pub fn tile(letter: char, verdict: Verdict) -> ColoredString {
    let text = format!(" {letter} ");
    match verdict {
        Verdict::Exact => text.black().on_green().bold(),
        Verdict::Present => text.black().on_yellow().bold(),
        Verdict::Absent => text.white().on_bright_black(),
    }
}

/// A guess rendered as a row of colored tiles
#[must_use]
pub fn colored_row(word: &Word, pattern: &Pattern) -> String {
    word.text()
        .chars()
        .zip(pattern.verdicts())
        .map(|(letter, &verdict)| tile(letter, verdict).to_string())
        .collect()
}

/// Suggested word with the split it makes of `candidates` remaining words
#[must_use]
pub fn hint_line(word: &Word, candidates: usize, metrics: &GuessMetrics) -> String {
    format!(
        "💡 Try {} ({candidates} candidates, {:.2} bits, ~{:.1} left on average, worst case {})",
        word.text().bright_cyan().bold(),
        metrics.entropy,
        metrics.expected_remaining,
        metrics.max_partition
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Percentage of `part` in `total`, zero for an empty total
#[must_use]
pub fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colored_row_keeps_letters_in_order() {
        colored::control::set_override(false);
        let word = Word::new("crane").unwrap();
        let pattern = "GY-GY".parse::<Pattern>().unwrap();
        assert_eq!(colored_row(&word, &pattern), " C  R  A  N  E ");
    }

    #[test]
    fn hint_line_reports_every_metric() {
        colored::control::set_override(false);
        let word = Word::new("crane").unwrap();
        let metrics = GuessMetrics {
            entropy: 1.5,
            expected_remaining: 2.5,
            max_partition: 3,
        };
        assert_eq!(
            hint_line(&word, 6, &metrics),
            "💡 Try CRANE (6 candidates, 1.50 bits, ~2.5 left on average, worst case 3)"
        );
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn percent_handles_empty_total() {
        assert!((percent(1, 4) - 25.0).abs() < f64::EPSILON);
        assert!(percent(3, 0).abs() < f64::EPSILON);
    }
}
