//! Core domain types for the game
//!
//! Words and the scoring rule. No I/O, no randomness, no session state:
//! everything here is a pure function of its inputs.

mod score;
mod word;

pub use score::{LetterResult, LetterStatus, ScoredGuess, score};
pub use word::{ALPHABET_SIZE, Word, WordError};
