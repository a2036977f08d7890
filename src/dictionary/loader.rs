//! Dictionary loading utilities
//!
//! Provides functions to load a dictionary from a file or use the embedded
//! word list.

use std::fs;
use std::io;
use std::path::Path;

/// Whether a line qualifies as a playable dictionary word
///
/// Words are lowercase ASCII and at least 4 letters; anything else is skipped
/// by the loaders rather than treated as an error.
#[must_use]
pub fn is_playable(word: &str) -> bool {
    word.len() >= 4 && word.chars().all(|c| c.is_ascii_lowercase())
}

/// Load dictionary words from a file, one word per line
///
/// Blank lines and non-playable entries are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use spelling_bee::dictionary::loader::load_from_file;
///
/// let words = load_from_file("data/dictionary.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if is_playable(trimmed) {
                Some(trimmed.to_string())
            } else {
                None
            }
        })
        .collect();

    Ok(words)
}

/// Convert an embedded string slice to owned words
///
/// # Examples
/// ```
/// use spelling_bee::dictionary::loader::words_from_slice;
/// use spelling_bee::dictionary::DICTIONARY;
///
/// let words = words_from_slice(DICTIONARY);
/// assert_eq!(words.len(), DICTIONARY.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice
        .iter()
        .filter(|s| is_playable(s))
        .map(|&s| s.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn playable_words() {
        assert!(is_playable("atone"));
        assert!(is_playable("quad"));
        assert!(!is_playable("cat")); // too short
        assert!(!is_playable("Atone")); // uppercase
        assert!(!is_playable("don't")); // punctuation
        assert!(!is_playable(""));
    }

    #[test]
    fn words_from_slice_skips_non_playable() {
        let input = &["atone", "cat", "ballot", "UPPER"];
        let words = words_from_slice(input);

        assert_eq!(words, vec!["atone".to_string(), "ballot".to_string()]);
    }

    #[test]
    fn load_from_file_skips_blank_and_invalid_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "atone").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  ballot  ").unwrap();
        writeln!(file, "xy").unwrap();
        file.flush().unwrap();

        let words = load_from_file(file.path()).unwrap();
        assert_eq!(words, vec!["atone".to_string(), "ballot".to_string()]);
    }

    #[test]
    fn load_from_missing_file_is_an_error() {
        assert!(load_from_file("/no/such/dictionary.txt").is_err());
    }
}
