//! Show command
//!
//! Prints a spoiler-free summary of the puzzle for a seed.

use crate::output::print_puzzle_summary;
use crate::puzzle::Puzzle;

/// Print the puzzle's letters, center, counts, and tier ladder
pub fn run_show(puzzle: &Puzzle) {
    print_puzzle_summary(puzzle);
}
