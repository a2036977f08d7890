//! Words command
//!
//! Spoiler listing of every valid word for a puzzle.

use crate::output::print_word_list;
use crate::puzzle::Puzzle;

/// Print every valid word with its score
pub fn run_words(puzzle: &Puzzle) {
    print_word_list(puzzle);
}
