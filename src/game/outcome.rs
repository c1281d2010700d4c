//! Result of submitting a guess

use crate::core::ScoredGuess;

/// What happened to a submitted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Wrong length, not in the dictionary, or already guessed. Nothing changed.
    WrongWord,
    /// Scored and recorded; the session continues
    TryAgain(ScoredGuess),
    /// The guess was the answer
    Won(ScoredGuess),
    /// Scored and recorded, and no guesses remain
    Lost(ScoredGuess),
}

impl GuessOutcome {
    /// The score recorded for this guess, if it was accepted
    #[must_use]
    pub const fn scored_guess(&self) -> Option<&ScoredGuess> {
        match self {
            Self::WrongWord => None,
            Self::TryAgain(scored) | Self::Won(scored) | Self::Lost(scored) => Some(scored),
        }
    }

    /// Whether this outcome ended the session
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Won(_) | Self::Lost(_))
    }
}
