//! Word validation and scoring
//!
//! Pure functions deciding which words count for a puzzle and what they are
//! worth. `find_words` over the whole dictionary establishes the maximum
//! achievable score; the same predicate validates individual attempts.

use crate::core::letters::{LETTER_COUNT, LetterSet, distinct_count};
use crate::dictionary::Dictionary;

/// Minimum length of a playable word
pub const MIN_WORD_LENGTH: usize = 4;

/// Whether a word uses exactly 7 distinct letters
///
/// Inside a puzzle this can only happen when the word uses the full letter
/// set, since `is_valid` already constrains every letter to the set.
#[inline]
#[must_use]
pub fn is_pangram(word: &str) -> bool {
    distinct_count(word) == LETTER_COUNT
}

/// Whether `word` counts for the puzzle defined by `letters` and `center`
///
/// All four conditions must hold: length >= 4, the center letter appears,
/// every letter is in the set, and the word is known to the dictionary.
#[must_use]
pub fn is_valid(word: &str, letters: &LetterSet, center: char, dictionary: &Dictionary) -> bool {
    word.len() >= MIN_WORD_LENGTH
        && word.contains(center)
        && letters.contains_word(word)
        && dictionary.contains(word)
}

/// Every dictionary word valid for the given letters and center
///
/// Dictionary order is preserved. This is the full valid-word universe, used
/// once per puzzle to compute the maximum achievable score.
#[must_use]
pub fn find_words(dictionary: &Dictionary, letters: &LetterSet, center: char) -> Vec<String> {
    dictionary
        .words()
        .iter()
        .filter(|word| is_valid(word, letters, center, dictionary))
        .cloned()
        .collect()
}

/// Point value of a single valid word
///
/// Length 4 scores a flat 1; a pangram scores length + 7; anything else
/// scores its length.
#[must_use]
pub fn score_word(word: &str) -> u32 {
    if word.len() == MIN_WORD_LENGTH {
        return 1;
    }

    if is_pangram(word) {
        return word.len() as u32 + LETTER_COUNT as u32;
    }

    word.len() as u32
}

/// Total score of a word sequence; 0 for an empty sequence
#[must_use]
pub fn score_words<S: AsRef<str>>(words: &[S]) -> u32 {
    words.iter().map(|w| score_word(w.as_ref())).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Dictionary {
        Dictionary::new(
            ["able", "atone", "ballot", "bane", "notable", "tale", "zebra"]
                .iter()
                .map(ToString::to_string)
                .collect(),
        )
    }

    fn letters() -> LetterSet {
        LetterSet::from_pangram("notable").unwrap()
    }

    #[test]
    fn four_letter_word_scores_one() {
        assert_eq!(score_word("bane"), 1);
        assert_eq!(score_word("tale"), 1);
    }

    #[test]
    fn pangram_scores_length_plus_seven() {
        assert_eq!(score_word("notable"), 14);
        assert_eq!(score_word("machine"), 14);
        assert_eq!(score_word("gunpoint"), 15); // 8 letters, 7 distinct ('n' repeats)
    }

    #[test]
    fn other_words_score_their_length() {
        assert_eq!(score_word("atone"), 5);
        assert_eq!(score_word("ballot"), 6); // 6 letters, 5 distinct
    }

    #[test]
    fn score_words_sums_and_handles_empty() {
        assert_eq!(score_words(&["bane", "atone", "notable"]), 1 + 5 + 14);
        let none: [&str; 0] = [];
        assert_eq!(score_words(&none), 0);
    }

    #[test]
    fn valid_word_passes_all_checks() {
        assert!(is_valid("ballot", &letters(), 'b', &dictionary()));
        assert!(is_valid("notable", &letters(), 'b', &dictionary()));
    }

    #[test]
    fn too_short_word_is_invalid() {
        // "cat" fails on length before anything else
        assert!(!is_valid("cat", &letters(), 'b', &dictionary()));
    }

    #[test]
    fn word_missing_center_letter_is_invalid() {
        // "atone" is known and within the letters, but has no 'b'
        assert!(!is_valid("atone", &letters(), 'b', &dictionary()));
        assert!(is_valid("atone", &letters(), 'a', &dictionary()));
    }

    #[test]
    fn word_with_letter_outside_set_is_invalid() {
        assert!(!is_valid("zebra", &letters(), 'b', &dictionary()));
    }

    #[test]
    fn unknown_word_is_invalid() {
        // "bloat" fits the letters but is not in this tiny dictionary
        assert!(!is_valid("bloat", &letters(), 'b', &dictionary()));
    }

    #[test]
    fn find_words_keeps_dictionary_order() {
        let words = find_words(&dictionary(), &letters(), 'b');
        assert_eq!(words, vec!["able", "ballot", "bane", "notable"]);
    }

    #[test]
    fn find_words_respects_center_letter() {
        let words = find_words(&dictionary(), &letters(), 'a');
        assert_eq!(words, vec!["able", "atone", "ballot", "bane", "notable", "tale"]);
    }

    #[test]
    fn max_score_from_found_universe() {
        let words = find_words(&dictionary(), &letters(), 'b');
        // able 1 + ballot 6 + bane 1 + notable 14
        assert_eq!(score_words(&words), 22);
    }
}
