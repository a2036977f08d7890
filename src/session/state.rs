//! Player session state
//!
//! Tracks the in-progress attempt and the found words for the active puzzle,
//! and drives the validator on submit. All transitions are synchronous; one
//! input event, one state change.

use crate::core::scoring::{self, MIN_WORD_LENGTH};
use crate::core::tiers;
use crate::dictionary::Dictionary;
use crate::puzzle::Puzzle;
use crate::session::store::{self, WordStore};

/// Outcome of submitting an attempt, in check priority order
///
/// Rejections are user-visible feedback, not errors; the attempt is cleared
/// either way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    TooShort,
    MissingCenterLetter,
    AlreadyFound,
    BadLetters,
    NotAWord,
    Accepted { score: u32, pangram: bool },
}

impl SubmitOutcome {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// Feedback line for the notification channel
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::TooShort => "Too short".to_string(),
            Self::MissingCenterLetter => "Missing center letter".to_string(),
            Self::AlreadyFound => "Already found".to_string(),
            Self::BadLetters => "Bad letters".to_string(),
            Self::NotAWord => "Not a word".to_string(),
            Self::Accepted { score, pangram } => {
                if *pangram {
                    format!("Pangram! +{score}!")
                } else {
                    format!("+{score}!")
                }
            }
        }
    }
}

/// Live state for one puzzle: attempt, found words, and persistence
///
/// Found words load from the store on activation and are written back on
/// every successful submit, keyed by the puzzle's identity so words never
/// leak between puzzles.
pub struct Session<'a, S: WordStore> {
    dictionary: &'a Dictionary,
    puzzle: Puzzle,
    store: S,
    attempt: String,
    found: Vec<String>,
}

impl<'a, S: WordStore> Session<'a, S> {
    /// Activate a puzzle, loading any previously found words
    pub fn new(dictionary: &'a Dictionary, puzzle: Puzzle, store: S) -> Self {
        let found = store::load_found(&store, &puzzle.storage_key());

        Self {
            dictionary,
            puzzle,
            store,
            attempt: String::new(),
            found,
        }
    }

    /// Switch to a different puzzle, re-keying found words
    ///
    /// The old puzzle's words are already persisted (written on each submit);
    /// this just discards in-memory state and loads the new key.
    pub fn switch_puzzle(&mut self, puzzle: Puzzle) {
        self.puzzle = puzzle;
        self.attempt.clear();
        self.found = store::load_found(&self.store, &self.puzzle.storage_key());
    }

    #[must_use]
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    #[must_use]
    pub fn attempt(&self) -> &str {
        &self.attempt
    }

    /// Found words, kept sorted
    #[must_use]
    pub fn found(&self) -> &[String] {
        &self.found
    }

    /// Current score, always recomputed from found words
    #[must_use]
    pub fn score(&self) -> u32 {
        scoring::score_words(&self.found)
    }

    /// Current tier title for the score
    #[must_use]
    pub fn title(&self) -> &'static str {
        tiers::current_title(self.score(), &self.puzzle.tiers())
    }

    /// Append a letter to the attempt; non-letters are ignored
    pub fn push_letter(&mut self, letter: char) {
        if letter.is_ascii_alphabetic() {
            self.attempt.push(letter.to_ascii_lowercase());
        }
    }

    /// Remove the last letter of the attempt
    pub fn backspace(&mut self) {
        self.attempt.pop();
    }

    /// Discard the attempt
    pub fn clear(&mut self) {
        self.attempt.clear();
    }

    /// Submit the current attempt
    ///
    /// Checks run in fixed priority order so the player always sees the most
    /// useful rejection. The attempt is cleared whatever the outcome; found
    /// words only change on acceptance.
    pub fn submit(&mut self) -> SubmitOutcome {
        let word = std::mem::take(&mut self.attempt);

        if word.len() < MIN_WORD_LENGTH {
            return SubmitOutcome::TooShort;
        }

        if !word.contains(self.puzzle.center()) {
            return SubmitOutcome::MissingCenterLetter;
        }

        if self.found.iter().any(|f| *f == word) {
            return SubmitOutcome::AlreadyFound;
        }

        if !self.puzzle.letters().contains_word(&word) {
            return SubmitOutcome::BadLetters;
        }

        if !self.dictionary.contains(&word) {
            return SubmitOutcome::NotAWord;
        }

        let score = scoring::score_word(&word);
        let pangram = scoring::is_pangram(&word);

        self.found.push(word);
        self.found.sort_unstable();
        store::save_found(&mut self.store, &self.puzzle.storage_key(), &self.found);

        SubmitOutcome::Accepted { score, pangram }
    }

    /// Submit a whole word, as the line-oriented interfaces do
    pub fn submit_word(&mut self, word: &str) -> SubmitOutcome {
        self.clear();
        for letter in word.chars() {
            self.push_letter(letter);
        }
        self.submit()
    }
}
