//! Spelling Bee - CLI
//!
//! Deterministic daily Spelling Bee puzzles with TUI and line modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use spelling_bee::{
    commands::{print_stats_result, run_show, run_simple, run_stats, run_words},
    dictionary::{Dictionary, loader::load_from_file},
    puzzle::{self, GeneratorConfig, Puzzle},
    session::{FileStore, Session},
};
use std::path::PathBuf;
use time::{Date, OffsetDateTime, format_description::well_known::Iso8601};

#[derive(Parser)]
#[command(
    name = "spelling_bee",
    about = "Spelling Bee puzzles generated deterministically from the date",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Explicit seed string (overrides --date)
    #[arg(short, long, global = true)]
    seed: Option<String>,

    /// Puzzle date, ISO format (default: today)
    #[arg(short, long, global = true)]
    date: Option<String>,

    /// Path to a custom dictionary file (default: embedded list)
    #[arg(short = 'w', long, global = true)]
    dictionary: Option<PathBuf>,

    /// Allow pangrams ending in common suffixes (ing/ed/tion/s)
    #[arg(long, global = true)]
    all_pangrams: bool,

    /// Path to the found-words store
    #[arg(long, global = true)]
    store: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Line-oriented CLI mode (no TUI)
    Simple,

    /// Print the puzzle's letters and tiers without revealing answers
    Show,

    /// List every valid word with its score (spoilers!)
    Words,

    /// Generate puzzles for a run of dates and report statistics
    Stats {
        /// Number of consecutive days to scan
        #[arg(short = 'n', long, default_value = "30")]
        days: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = load_dictionary(cli.dictionary.as_deref())?;
    let config = if cli.all_pangrams {
        GeneratorConfig::all_pangrams()
    } else {
        GeneratorConfig::default()
    };

    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let puzzle = generate_puzzle(&dictionary, &config, &cli.seed, &cli.date)?;
            run_play_command(&dictionary, puzzle, cli.store)
        }
        Commands::Simple => {
            let puzzle = generate_puzzle(&dictionary, &config, &cli.seed, &cli.date)?;
            run_simple_command(&dictionary, puzzle, cli.store)
        }
        Commands::Show => {
            let puzzle = generate_puzzle(&dictionary, &config, &cli.seed, &cli.date)?;
            run_show(&puzzle);
            Ok(())
        }
        Commands::Words => {
            let puzzle = generate_puzzle(&dictionary, &config, &cli.seed, &cli.date)?;
            run_words(&puzzle);
            Ok(())
        }
        Commands::Stats { days } => {
            let start = match &cli.date {
                Some(date) => parse_date(date)?,
                None => today(),
            };
            let result = run_stats(&dictionary, &config, start, days)?;
            print_stats_result(&result);
            Ok(())
        }
    }
}

/// Load the dictionary from a custom file or fall back to the embedded list
fn load_dictionary(path: Option<&std::path::Path>) -> Result<Dictionary> {
    match path {
        Some(path) => {
            let words = load_from_file(path)
                .with_context(|| format!("failed to load dictionary from {}", path.display()))?;
            Ok(Dictionary::new(words))
        }
        None => Ok(Dictionary::embedded()),
    }
}

/// Resolve the seed string: explicit seed wins, then --date, then today
fn resolve_seed(seed: &Option<String>, date: &Option<String>) -> Result<String> {
    if let Some(seed) = seed {
        return Ok(seed.clone());
    }

    let date = match date {
        Some(date) => parse_date(date)?,
        None => today(),
    };

    Ok(puzzle::seed_for_date(date))
}

fn generate_puzzle(
    dictionary: &Dictionary,
    config: &GeneratorConfig,
    seed: &Option<String>,
    date: &Option<String>,
) -> Result<Puzzle> {
    let seed = resolve_seed(seed, date)?;
    puzzle::generate(dictionary, &seed, config)
        .with_context(|| format!("failed to generate puzzle for seed '{seed}'"))
}

fn parse_date(input: &str) -> Result<Date> {
    Date::parse(input, &Iso8601::DATE)
        .with_context(|| format!("invalid date '{input}', expected ISO format like 2026-08-25"))
}

fn today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}

fn default_store_path() -> PathBuf {
    std::env::var_os("HOME").map_or_else(
        || PathBuf::from(".spelling_bee.json"),
        |home| PathBuf::from(home).join(".spelling_bee.json"),
    )
}

fn open_store(path: Option<PathBuf>) -> Result<FileStore> {
    let path = path.unwrap_or_else(default_store_path);
    FileStore::open(&path)
        .with_context(|| format!("failed to open found-words store at {}", path.display()))
}

fn run_play_command(dictionary: &Dictionary, puzzle: Puzzle, store: Option<PathBuf>) -> Result<()> {
    use spelling_bee::interactive::{App, run_tui};

    let store = open_store(store)?;
    let session = Session::new(dictionary, puzzle, store);
    run_tui(App::new(session))
}

fn run_simple_command(
    dictionary: &Dictionary,
    puzzle: Puzzle,
    store: Option<PathBuf>,
) -> Result<()> {
    let store = open_store(store)?;
    let mut session = Session::new(dictionary, puzzle, store);
    run_simple(&mut session).map_err(|e| anyhow::anyhow!(e))
}
