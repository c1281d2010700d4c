//! Error types for setup and misuse
//!
//! Rejected guesses are not errors; they come back as
//! [`GuessOutcome::WrongWord`](crate::game::GuessOutcome::WrongWord).

use crate::core::WordError;
use thiserror::Error;

/// Invalid game setup: bad configuration or an unusable dictionary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Dictionary must contain at least one word")]
    EmptyDictionary,
    #[error("Dictionary word '{word}' has {actual} letters, expected {expected}")]
    InconsistentLength {
        word: String,
        expected: usize,
        actual: usize,
    },
    #[error("Dictionary entry '{word}' is not a valid word: {source}")]
    InvalidWord { word: String, source: WordError },
    #[error("Dictionary holds {dictionary}-letter words but the game is configured for {config}")]
    LengthMismatch { dictionary: usize, config: usize },
    #[error("Word length must be greater than zero")]
    InvalidWordLength,
    #[error("Maximum guesses must be greater than zero")]
    InvalidMaxGuesses,
}

/// A guess was submitted after the session reached a terminal state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Session is over; start a new game before guessing again")]
pub struct SessionOverError;

/// A fixed answer was requested that the dictionary does not contain
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not in the dictionary")]
pub struct UnknownAnswerError(pub String);
