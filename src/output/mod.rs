//! Terminal output formatting

pub mod display;
pub mod formatters;

pub use display::{print_outcome, print_puzzle_summary, print_word_list};
