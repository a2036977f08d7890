//! Formatting utilities for terminal output

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        width
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format the score as a bar against the maximum achievable score
#[must_use]
pub fn score_bar(score: u32, max_score: u32, width: usize) -> String {
    create_progress_bar(f64::from(score), f64::from(max_score), width)
}

/// Uppercase letter row with the center letter bracketed
///
/// Example: `N L E [B] T A O`
#[must_use]
pub fn letter_row(letters: &[char], center: char) -> String {
    letters
        .iter()
        .map(|&c| {
            let upper = c.to_ascii_uppercase();
            if c == center {
                format!("[{upper}]")
            } else {
                upper.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max_is_full() {
        let bar = create_progress_bar(0.0, 0.0, 4);
        assert_eq!(bar, "████");
    }

    #[test]
    fn letter_row_brackets_center() {
        let letters = vec!['n', 'l', 'e', 'b', 't', 'a', 'o'];
        assert_eq!(letter_row(&letters, 'b'), "N L E [B] T A O");
    }
}
