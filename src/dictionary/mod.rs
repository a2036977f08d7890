//! Dictionary of known words
//!
//! The dictionary is a static, read-only input: an ordered sequence of
//! lowercase words with a hash index for membership checks. A word is "known"
//! iff it is present here, case-sensitively.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};

use rustc_hash::FxHashSet;

/// An ordered word list with O(1) membership lookup
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<String>,
    index: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from owned words, preserving order
    #[must_use]
    pub fn new(words: Vec<String>) -> Self {
        let index = words.iter().cloned().collect();
        Self { words, index }
    }

    /// The embedded dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(loader::words_from_slice(DICTIONARY))
    }

    /// Whether `word` is a known word
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    /// Words in dictionary order
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_dictionary() -> Dictionary {
        Dictionary::new(
            ["atone", "ballot", "notable"]
                .iter()
                .map(ToString::to_string)
                .collect(),
        )
    }

    #[test]
    fn membership_is_case_sensitive() {
        let dict = small_dictionary();
        assert!(dict.contains("atone"));
        assert!(!dict.contains("Atone"));
        assert!(!dict.contains("tones"));
    }

    #[test]
    fn order_is_preserved() {
        let dict = small_dictionary();
        assert_eq!(dict.words()[0], "atone");
        assert_eq!(dict.words()[2], "notable");
        assert_eq!(dict.len(), 3);
    }

    #[test]
    fn embedded_dictionary_matches_const() {
        let dict = Dictionary::embedded();
        assert_eq!(dict.len(), DICTIONARY_COUNT);
        assert!(!dict.is_empty());
    }

    #[test]
    fn embedded_words_are_playable() {
        for &word in DICTIONARY {
            assert!(
                loader::is_playable(word),
                "Word '{word}' is not playable"
            );
        }
    }

    #[test]
    fn embedded_words_are_unique() {
        let dict = Dictionary::embedded();
        let distinct: FxHashSet<&String> = dict.words().iter().collect();
        assert_eq!(distinct.len(), dict.len());
    }
}
