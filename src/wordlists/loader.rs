//! Word list loading utilities
//!
//! Reads raw entries only; [`Dictionary::new`](crate::dictionary::Dictionary::new)
//! decides what is valid.

use std::fs;
use std::io;
use std::path::Path;

/// Load entries from a file, one word per line
///
/// Blank lines and lines starting with `#` are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_entries(&content))
}

/// Split word list text into trimmed entries
#[must_use]
pub fn parse_entries(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
