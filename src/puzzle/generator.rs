//! Deterministic puzzle generation
//!
//! Seed + dictionary in, puzzle out. The center letter uses the
//! minimum-achievable-score heuristic: every letter of the set is evaluated as
//! a candidate center and the one yielding the lowest total score wins, which
//! biases daily puzzles toward the hard end.

use crate::core::scoring::{find_words, score_words};
use crate::core::{LETTER_COUNT, LetterSet, Randomizer, distinct_count, distinct_letters};
use crate::dictionary::Dictionary;
use std::fmt;

/// Fatal generation errors
///
/// Both mean no valid puzzle can be constructed from the configured
/// dictionary; generation aborts rather than picking nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    EmptyDictionary,
    NoPangrams,
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDictionary => write!(f, "Dictionary is empty; no puzzle can be generated"),
            Self::NoPangrams => {
                write!(f, "Dictionary contains no pangram candidates; no puzzle can be generated")
            }
        }
    }
}

impl std::error::Error for PuzzleError {}

/// Tunables for pangram candidate selection
///
/// The suffix filter is a content-quality knob, not a correctness one:
/// pangrams ending in bland inflections make for duller puzzles.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Pangram candidates ending in any of these suffixes are skipped
    pub excluded_suffixes: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            excluded_suffixes: ["ing", "ed", "tion", "s"]
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

impl GeneratorConfig {
    /// Configuration with the suffix filter disabled
    #[must_use]
    pub fn all_pangrams() -> Self {
        Self {
            excluded_suffixes: Vec::new(),
        }
    }
}

/// Dictionary words usable as pangrams, in dictionary order
///
/// A candidate uses exactly 7 distinct letters and does not end in an
/// excluded suffix.
#[must_use]
pub fn pangram_candidates(dictionary: &Dictionary, config: &GeneratorConfig) -> Vec<String> {
    dictionary
        .words()
        .iter()
        .filter(|word| distinct_count(word) == LETTER_COUNT)
        .filter(|word| !config.excluded_suffixes.iter().any(|s| word.ends_with(s)))
        .cloned()
        .collect()
}

/// Generate the puzzle for a seed string
///
/// # Errors
/// `PuzzleError::EmptyDictionary` if the dictionary has no words at all,
/// `PuzzleError::NoPangrams` if nothing qualifies as a pangram candidate.
pub fn generate(
    dictionary: &Dictionary,
    seed: &str,
    config: &GeneratorConfig,
) -> Result<super::Puzzle, PuzzleError> {
    if dictionary.is_empty() {
        return Err(PuzzleError::EmptyDictionary);
    }

    let candidates = pangram_candidates(dictionary, config);
    if candidates.is_empty() {
        return Err(PuzzleError::NoPangrams);
    }

    let mut randomizer = Randomizer::new(seed);

    // Candidate list is non-empty, so choose_from cannot fail
    let pangram = randomizer
        .choose_from(&candidates)
        .map_err(|_| PuzzleError::NoPangrams)?
        .clone();

    let shuffled = randomizer.shuffle(&distinct_letters(&pangram));
    let letters = LetterSet::new(shuffled)
        .expect("pangram candidates have exactly 7 distinct lowercase letters");

    let center = choose_center(dictionary, &letters);

    let valid_words = find_words(dictionary, &letters, center);
    let max_score = score_words(&valid_words);

    Ok(super::Puzzle::new(
        seed.to_string(),
        pangram,
        letters,
        center,
        valid_words,
        max_score,
    ))
}

/// Center letter yielding the minimum achievable score
///
/// Ties break toward the earliest letter in shuffled order. Every candidate
/// admits at least the pangram itself, so the chosen puzzle is never empty.
fn choose_center(dictionary: &Dictionary, letters: &LetterSet) -> char {
    let mut best: Option<(char, u32)> = None;

    for &candidate in letters.letters() {
        let total = score_words(&find_words(dictionary, letters, candidate));
        match best {
            Some((_, lowest)) if total >= lowest => {}
            _ => best = Some((candidate, total)),
        }
    }

    // Letter sets always hold 7 letters
    best.map_or('a', |(c, _)| c)
}
