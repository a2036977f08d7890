//! Puzzle letter set
//!
//! A `LetterSet` holds the exactly-7 distinct lowercase letters available in a
//! puzzle. Order is meaningful only for display (it is what the generator
//! shuffled); membership checks go through a hash index.

use rustc_hash::FxHashSet;
use std::fmt;

/// Number of distinct letters in every puzzle
pub const LETTER_COUNT: usize = 7;

/// Error type for invalid letter sets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LetterSetError {
    /// Distinct-letter count was not exactly 7
    WrongCount(usize),
    /// A letter outside a-z was supplied
    NotLowercase(char),
}

impl fmt::Display for LetterSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongCount(count) => {
                write!(f, "Letter set must have exactly {LETTER_COUNT} distinct letters, got {count}")
            }
            Self::NotLowercase(c) => write!(f, "Letter '{c}' is not a lowercase ASCII letter"),
        }
    }
}

impl std::error::Error for LetterSetError {}

/// The 7 distinct letters of a puzzle, in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterSet {
    letters: Vec<char>,
    index: FxHashSet<char>,
}

impl LetterSet {
    /// Create a letter set from letters in display order
    ///
    /// # Errors
    /// Returns `LetterSetError` if the letters are not exactly 7 distinct
    /// lowercase ASCII letters.
    pub fn new(letters: Vec<char>) -> Result<Self, LetterSetError> {
        if let Some(&bad) = letters.iter().find(|c| !c.is_ascii_lowercase()) {
            return Err(LetterSetError::NotLowercase(bad));
        }

        let index: FxHashSet<char> = letters.iter().copied().collect();
        if index.len() != LETTER_COUNT || letters.len() != LETTER_COUNT {
            return Err(LetterSetError::WrongCount(index.len()));
        }

        Ok(Self { letters, index })
    }

    /// Derive a letter set from a pangram word, keeping first-occurrence order
    ///
    /// # Errors
    /// Returns `LetterSetError::WrongCount` if the word does not use exactly 7
    /// distinct letters.
    pub fn from_pangram(word: &str) -> Result<Self, LetterSetError> {
        Self::new(distinct_letters(word))
    }

    /// Letters in display order
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Whether `letter` is available in this puzzle
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.index.contains(&letter)
    }

    /// Whether every letter of `word` is available
    #[must_use]
    pub fn contains_word(&self, word: &str) -> bool {
        word.chars().all(|c| self.contains(c))
    }

    /// Letters sorted alphabetically, joined into a string
    ///
    /// Used for puzzle identity (persistence keys): two puzzles with the same
    /// letters but different display orders share found words.
    #[must_use]
    pub fn sorted_string(&self) -> String {
        let mut sorted = self.letters.clone();
        sorted.sort_unstable();
        sorted.into_iter().collect()
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.letters {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// Distinct letters of a word in first-occurrence order
#[must_use]
pub fn distinct_letters(word: &str) -> Vec<char> {
    let mut seen = FxHashSet::default();
    word.chars().filter(|&c| seen.insert(c)).collect()
}

/// Number of distinct letters in a word
#[must_use]
pub fn distinct_count(word: &str) -> usize {
    let set: FxHashSet<char> = word.chars().collect();
    set.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_set_from_pangram() {
        let set = LetterSet::from_pangram("notable").unwrap();
        assert_eq!(set.letters(), &['n', 'o', 't', 'a', 'b', 'l', 'e']);
        assert!(set.contains('n'));
        assert!(!set.contains('z'));
    }

    #[test]
    fn letter_set_rejects_wrong_count() {
        assert_eq!(
            LetterSet::from_pangram("cat"),
            Err(LetterSetError::WrongCount(3))
        );
        assert_eq!(
            LetterSet::from_pangram("educator"),
            Err(LetterSetError::WrongCount(8))
        );
    }

    #[test]
    fn letter_set_rejects_non_lowercase() {
        assert_eq!(
            LetterSet::new(vec!['A', 'b', 'c', 'd', 'e', 'f', 'g']),
            Err(LetterSetError::NotLowercase('A'))
        );
    }

    #[test]
    fn letter_set_accepts_repeated_letters_in_pangram() {
        // "notable" has no repeats; "balloon" repeats but only 5 distinct
        assert!(LetterSet::from_pangram("thimble").is_ok());
        assert_eq!(
            LetterSet::from_pangram("balloon"),
            Err(LetterSetError::WrongCount(5))
        );
    }

    #[test]
    fn contains_word_checks_every_letter() {
        let set = LetterSet::from_pangram("notable").unwrap();
        assert!(set.contains_word("atone"));
        assert!(set.contains_word("ballot"));
        assert!(!set.contains_word("notables")); // 's' unavailable
    }

    #[test]
    fn sorted_string_is_order_independent() {
        let a = LetterSet::from_pangram("notable").unwrap();
        let b = LetterSet::new(vec!['b', 'a', 'e', 'l', 'n', 'o', 't']).unwrap();
        assert_eq!(a.sorted_string(), "abelnot");
        assert_eq!(a.sorted_string(), b.sorted_string());
    }

    #[test]
    fn distinct_letters_keeps_first_occurrence_order() {
        assert_eq!(distinct_letters("notable"), vec!['n', 'o', 't', 'a', 'b', 'l', 'e']);
        assert_eq!(distinct_letters("bottle"), vec!['b', 'o', 't', 'l', 'e']);
        assert_eq!(distinct_count("balloon"), 5);
        assert_eq!(distinct_count("notable"), 7);
    }
}
