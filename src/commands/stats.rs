//! Puzzle scan statistics
//!
//! Generates the puzzles for a run of consecutive dates and reports how the
//! generator behaves at scale: word counts, score spread, and which pangrams
//! get picked. Doubles as a determinism exercise across many seeds.

use crate::dictionary::Dictionary;
use crate::puzzle::{self, GeneratorConfig, PuzzleError};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use time::Date;

/// Generation outcome for one date
#[derive(Debug, Clone)]
pub struct DayStats {
    pub seed: String,
    pub pangram: String,
    pub center: char,
    pub word_count: usize,
    pub max_score: u32,
}

/// Aggregated results of a multi-day scan
#[derive(Debug)]
pub struct StatsResult {
    pub days: Vec<DayStats>,
    pub pangram_frequency: HashMap<String, usize>,
    pub min_words: usize,
    pub max_words: usize,
    pub average_words: f64,
    pub min_score: u32,
    pub max_score: u32,
    pub duration: Duration,
}

/// Generate puzzles for `count` consecutive dates starting at `start`
///
/// # Errors
/// Propagates the first `PuzzleError` encountered (empty dictionary or no
/// pangram candidates make every date fail identically).
pub fn run_stats(
    dictionary: &Dictionary,
    config: &GeneratorConfig,
    start: Date,
    count: u32,
) -> Result<StatsResult, PuzzleError> {
    let pb = ProgressBar::new(u64::from(count));
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let total_start = Instant::now();

    let days: Result<Vec<DayStats>, PuzzleError> = (0..i64::from(count))
        .into_par_iter()
        .map(|offset| {
            let date = start.saturating_add(time::Duration::days(offset));
            let seed = puzzle::seed_for_date(date);
            let generated = puzzle::generate(dictionary, &seed, config)?;

            pb.inc(1);
            Ok(DayStats {
                seed,
                pangram: generated.pangram().to_string(),
                center: generated.center(),
                word_count: generated.word_count(),
                max_score: generated.max_score(),
            })
        })
        .collect();
    let days = days?;

    pb.finish_and_clear();

    let mut pangram_frequency: HashMap<String, usize> = HashMap::new();
    for day in &days {
        *pangram_frequency.entry(day.pangram.clone()).or_insert(0) += 1;
    }

    let total_words: usize = days.iter().map(|d| d.word_count).sum();

    Ok(StatsResult {
        min_words: days.iter().map(|d| d.word_count).min().unwrap_or(0),
        max_words: days.iter().map(|d| d.word_count).max().unwrap_or(0),
        average_words: if days.is_empty() {
            0.0
        } else {
            total_words as f64 / days.len() as f64
        },
        min_score: days.iter().map(|d| d.max_score).min().unwrap_or(0),
        max_score: days.iter().map(|d| d.max_score).max().unwrap_or(0),
        pangram_frequency,
        days,
        duration: total_start.elapsed(),
    })
}

/// Print a stats scan report
pub fn print_stats_result(result: &StatsResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "PUZZLE SCAN".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Across all days:".bright_cyan().bold());
    println!("   Days scanned:     {}", result.days.len());
    println!(
        "   Words per puzzle: {} to {} (avg {:.1})",
        result.min_words, result.max_words, result.average_words
    );
    println!(
        "   Max score range:  {} to {}",
        result.min_score, result.max_score
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    println!("\n📈 {}", "Pangrams picked:".bright_cyan().bold());
    let mut frequency: Vec<(&String, &usize)> = result.pangram_frequency.iter().collect();
    frequency.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    for (pangram, count) in frequency {
        println!("   {pangram:<16} {count:>4}");
    }

    println!("\n📅 {}", "First days:".bright_cyan().bold());
    for day in result.days.iter().take(10) {
        println!(
            "   {:<12} {:<12} center {}  {:>3} words, max {:>4}",
            day.seed,
            day.pangram,
            day.center.to_ascii_uppercase(),
            day.word_count,
            day.max_score
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Month;

    #[test]
    fn scan_covers_every_requested_day() {
        let dict = Dictionary::embedded();
        let start = Date::from_calendar_date(2026, Month::January, 1).unwrap();

        let result = run_stats(&dict, &GeneratorConfig::default(), start, 14).unwrap();
        assert_eq!(result.days.len(), 14);
        assert!(result.min_words >= 1);
        assert!(result.max_words >= result.min_words);

        let frequency_total: usize = result.pangram_frequency.values().sum();
        assert_eq!(frequency_total, 14);
    }

    #[test]
    fn scan_is_deterministic() {
        let dict = Dictionary::embedded();
        let start = Date::from_calendar_date(2026, Month::March, 1).unwrap();
        let config = GeneratorConfig::default();

        let a = run_stats(&dict, &config, start, 7).unwrap();
        let b = run_stats(&dict, &config, start, 7).unwrap();

        for (day_a, day_b) in a.days.iter().zip(&b.days) {
            assert_eq!(day_a.seed, day_b.seed);
            assert_eq!(day_a.pangram, day_b.pangram);
            assert_eq!(day_a.center, day_b.center);
            assert_eq!(day_a.max_score, day_b.max_score);
        }
    }

    #[test]
    fn scan_fails_fast_without_pangrams() {
        let dict = Dictionary::new(vec!["atone".to_string()]);
        let start = Date::from_calendar_date(2026, Month::January, 1).unwrap();

        assert_eq!(
            run_stats(&dict, &GeneratorConfig::default(), start, 3).unwrap_err(),
            PuzzleError::NoPangrams
        );
    }
}
