//! Puzzle type and deterministic generator
//!
//! A puzzle is fully determined by its seed string and the dictionary: the
//! seeded randomizer picks a pangram, shuffles its distinct letters, and the
//! center letter falls out of the difficulty heuristic. Identical seeds yield
//! identical puzzles across platforms and runs.

mod generator;

pub use generator::{GeneratorConfig, PuzzleError, generate, pangram_candidates};

use crate::core::tiers::{self, Tier};
use crate::core::{LetterSet, RandomError, Randomizer};
use time::Date;

/// An immutable puzzle: seven letters, one center, and the derived word universe
///
/// The valid-word universe and maximum score are computed once at generation
/// time and memoized here; they never change for the life of the puzzle.
#[derive(Debug, Clone)]
pub struct Puzzle {
    seed: String,
    pangram: String,
    letters: LetterSet,
    center: char,
    valid_words: Vec<String>,
    max_score: u32,
}

impl Puzzle {
    pub(crate) fn new(
        seed: String,
        pangram: String,
        letters: LetterSet,
        center: char,
        valid_words: Vec<String>,
        max_score: u32,
    ) -> Self {
        Self {
            seed,
            pangram,
            letters,
            center,
            valid_words,
            max_score,
        }
    }

    /// The seed string this puzzle was generated from
    #[must_use]
    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// The pangram the letters were drawn from
    #[must_use]
    pub fn pangram(&self) -> &str {
        &self.pangram
    }

    /// The seven available letters, in generated display order
    #[must_use]
    pub fn letters(&self) -> &LetterSet {
        &self.letters
    }

    /// The required center letter
    #[must_use]
    pub fn center(&self) -> char {
        self.center
    }

    /// Every dictionary word valid for this puzzle, in dictionary order
    #[must_use]
    pub fn valid_words(&self) -> &[String] {
        &self.valid_words
    }

    /// Number of valid words
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.valid_words.len()
    }

    /// Maximum achievable score
    #[must_use]
    pub fn max_score(&self) -> u32 {
        self.max_score
    }

    /// Tier ladder for this puzzle's maximum score
    #[must_use]
    pub fn tiers(&self) -> Vec<Tier> {
        tiers::tiers_for(self.max_score)
    }

    /// Persistence key identifying this puzzle
    ///
    /// Keyed by center letter and sorted letters so display order does not
    /// split a puzzle's found words.
    #[must_use]
    pub fn storage_key(&self) -> String {
        format!("{}:{}:found", self.center, self.letters.sorted_string())
    }

    /// Letters rearranged for display, center letter in the middle slot
    ///
    /// Each distinct `display_seed` gives a fresh arrangement (the Shuffle
    /// action); the puzzle itself is untouched.
    ///
    /// # Errors
    /// `RandomError::NotFound` would mean the center letter is missing from
    /// the letter set, which generation rules out; treat it as a fatal bug,
    /// not user input.
    pub fn display_order(&self, display_seed: &str) -> Result<Vec<char>, RandomError> {
        let mut randomizer = Randomizer::new(display_seed);
        randomizer.shuffle_around(self.letters.letters(), &self.center)
    }
}

/// Render a calendar date as the daily seed string
///
/// Uses the `M/D/YYYY` form (no zero padding) so existing daily puzzles keep
/// their letters.
#[must_use]
pub fn seed_for_date(date: Date) -> String {
    format!("{}/{}/{}", u8::from(date.month()), date.day(), date.year())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Month;

    #[test]
    fn date_seed_has_no_zero_padding() {
        let date = Date::from_calendar_date(2026, Month::August, 5).unwrap();
        assert_eq!(seed_for_date(date), "8/5/2026");

        let date = Date::from_calendar_date(2025, Month::December, 31).unwrap();
        assert_eq!(seed_for_date(date), "12/31/2025");
    }
}
