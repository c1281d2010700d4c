//! Game configuration

use crate::error::ConfigError;

/// Default number of letters per word
pub const WORD_LENGTH: usize = 5;

/// Default number of scored guesses allowed per session
pub const MAX_GUESSES: usize = 6;

/// Per-engine game settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub word_length: usize,
    pub max_guesses: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: WORD_LENGTH,
            max_guesses: MAX_GUESSES,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub const fn new(word_length: usize, max_guesses: usize) -> Self {
        Self {
            word_length,
            max_guesses,
        }
    }

    /// # Errors
    /// Returns `ConfigError` if either value is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.word_length == 0 {
            return Err(ConfigError::InvalidWordLength);
        }
        if self.max_guesses == 0 {
            return Err(ConfigError::InvalidMaxGuesses);
        }
        Ok(())
    }
}
