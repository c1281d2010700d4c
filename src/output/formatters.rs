//! Formatting utilities for terminal output

use crate::core::{LetterStatus, ScoredGuess};
use colored::{ColoredString, Colorize};

/// A single letter tile, coloured by status
#[must_use]
pub fn letter_tile(letter: char, status: LetterStatus) -> ColoredString {
    let tile = format!(" {} ", letter.to_ascii_uppercase()).bold();
    match status {
        LetterStatus::Correct => tile.black().on_green(),
        LetterStatus::Misplaced => tile.black().on_yellow(),
        LetterStatus::Incorrect => tile.white().on_bright_black(),
    }
}

/// A scored guess as a row of coloured tiles
#[must_use]
pub fn scored_row(scored: &ScoredGuess) -> String {
    scored
        .letters()
        .iter()
        .map(|l| letter_tile(l.letter, l.status).to_string())
        .collect()
}

/// Placeholder row for a guess not made yet
#[must_use]
pub fn empty_row(word_length: usize) -> String {
    " · ".repeat(word_length).bright_black().to_string()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { 0 } else { value * width / max };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Word, score};

    #[test]
    fn scored_row_plain() {
        colored::control::set_override(false);

        let scored = score(&Word::new("trace").unwrap(), &Word::new("crane").unwrap());
        assert_eq!(scored_row(&scored), " T  R  A  C  E ");
    }

    #[test]
    fn empty_row_plain() {
        colored::control::set_override(false);
        assert_eq!(empty_row(3), " ·  ·  · ");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0, 100, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100, 100, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50, 100, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3, 0, 4), "░░░░");
    }
}
