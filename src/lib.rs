//! Spelling Bee
//!
//! A deterministic Spelling Bee puzzle engine: seven letters, one center,
//! score points for valid dictionary words. The daily puzzle is a pure
//! function of its seed string, so everyone playing the same date sees the
//! same letters.
//!
//! # Quick Start
//!
//! ```rust
//! use spelling_bee::dictionary::Dictionary;
//! use spelling_bee::puzzle::{GeneratorConfig, generate};
//!
//! let dictionary = Dictionary::embedded();
//! let puzzle = generate(&dictionary, "8/25/2026", &GeneratorConfig::default()).unwrap();
//!
//! println!("Letters: {} (center {})", puzzle.letters(), puzzle.center());
//! println!("{} words, max score {}", puzzle.word_count(), puzzle.max_score());
//! ```

// Core domain logic
pub mod core;

// Dictionary of known words
pub mod dictionary;

// Puzzle type and deterministic generator
pub mod puzzle;

// Session state and persistence
pub mod session;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
