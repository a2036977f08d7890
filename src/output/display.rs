//! Display functions for command results

use super::formatters::letter_row;
use crate::core::scoring::{is_pangram, score_word};
use crate::puzzle::Puzzle;
use crate::session::SubmitOutcome;
use colored::Colorize;

/// Print a spoiler-free summary of a puzzle
pub fn print_puzzle_summary(puzzle: &Puzzle) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Puzzle for seed: {}", puzzle.seed().bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    println!(
        "\n  Letters:    {}",
        letter_row(puzzle.letters().letters(), puzzle.center())
            .bright_white()
            .bold()
    );
    println!(
        "  Center:     {}",
        puzzle
            .center()
            .to_ascii_uppercase()
            .to_string()
            .bright_yellow()
            .bold()
    );
    println!("  Words:      {}", puzzle.word_count());
    println!("  Max score:  {}", puzzle.max_score());

    println!("\n  {}", "Tiers:".bright_cyan().bold());
    for tier in puzzle.tiers() {
        println!("    {:<12} {:>4}", tier.title, tier.threshold);
    }
    println!();
}

/// Print every valid word with its score (spoilers!)
pub fn print_word_list(puzzle: &Puzzle) {
    println!(
        "\n{} valid words for {} (center {}):\n",
        puzzle.word_count(),
        letter_row(puzzle.letters().letters(), puzzle.center()),
        puzzle.center().to_ascii_uppercase()
    );

    for word in puzzle.valid_words() {
        let score = score_word(word);
        if is_pangram(word) {
            println!(
                "  {:<16} {:>3}  {}",
                word.bright_yellow().bold(),
                score,
                "pangram".bright_yellow()
            );
        } else {
            println!("  {word:<16} {score:>3}");
        }
    }

    println!("\nMaximum score: {}", puzzle.max_score().to_string().bold());
}

/// Print a submit outcome as a feedback line
pub fn print_outcome(outcome: &SubmitOutcome) {
    let message = outcome.message();
    if outcome.is_accepted() {
        println!("{}", format!("✅ {message}").green().bold());
    } else {
        println!("{}", format!("❌ {message}").red());
    }
}
