//! Game engine: one session at a time

use super::{GameConfig, GuessOutcome};
use crate::core::{ScoredGuess, Word, score};
use crate::dictionary::Dictionary;
use crate::error::{ConfigError, SessionOverError, UnknownAnswerError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, trace, warn};

/// Drives a single-player session against a hidden answer
///
/// A session starts as soon as the engine is built. It stays in progress
/// until a guess matches the answer or `max_guesses` guesses have been
/// scored, after which only [`start_new_game`](Self::start_new_game) is
/// accepted.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use wordle_game::dictionary::Dictionary;
/// use wordle_game::game::{GameConfig, GameEngine, GuessOutcome};
///
/// let dictionary = Dictionary::new(["crane"], 5).unwrap();
/// let mut engine =
///     GameEngine::with_rng(dictionary, GameConfig::default(), StdRng::seed_from_u64(1)).unwrap();
///
/// let outcome = engine.evaluate_guess("crane").unwrap();
/// assert!(matches!(outcome, GuessOutcome::Won(_)));
/// assert!(engine.is_over());
/// ```
#[derive(Debug)]
pub struct GameEngine<R: Rng = StdRng> {
    dictionary: Dictionary,
    config: GameConfig,
    rng: R,
    answer: Word,
    history: Vec<ScoredGuess>,
    over: bool,
}

impl GameEngine<StdRng> {
    /// Create an engine seeded from the operating system
    ///
    /// # Errors
    /// Returns `ConfigError` if the config is invalid or the dictionary's
    /// word length differs from `config.word_length`.
    pub fn new(dictionary: Dictionary, config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_rng(dictionary, config, StdRng::from_os_rng())
    }
}

impl<R: Rng> GameEngine<R> {
    /// Create an engine drawing answers from `rng`
    ///
    /// # Errors
    /// Returns `ConfigError` if the config is invalid or the dictionary's
    /// word length differs from `config.word_length`.
    pub fn with_rng(
        dictionary: Dictionary,
        config: GameConfig,
        mut rng: R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        if dictionary.word_length() != config.word_length {
            return Err(ConfigError::LengthMismatch {
                dictionary: dictionary.word_length(),
                config: config.word_length,
            });
        }

        let answer = dictionary.pick_random(&mut rng).clone();
        trace!(%answer, "first answer chosen");

        Ok(Self {
            dictionary,
            config,
            rng,
            answer,
            history: Vec::with_capacity(config.max_guesses),
            over: false,
        })
    }

    /// Discard the current session and start another with a random answer
    pub fn start_new_game(&mut self) {
        let answer = self.dictionary.pick_random(&mut self.rng).clone();
        self.reset(answer);
    }

    /// Start a new session with a chosen answer
    ///
    /// # Errors
    /// Returns `UnknownAnswerError` if `answer` is not in the dictionary; the
    /// current session is left untouched.
    pub fn start_with_answer(&mut self, answer: &str) -> Result<(), UnknownAnswerError> {
        let answer = self
            .dictionary
            .get(answer)
            .cloned()
            .ok_or_else(|| UnknownAnswerError(answer.to_string()))?;
        self.reset(answer);
        Ok(())
    }

    fn reset(&mut self, answer: Word) {
        trace!(%answer, "answer chosen");
        self.answer = answer;
        self.history.clear();
        self.over = false;
        debug!(
            word_length = self.config.word_length,
            max_guesses = self.config.max_guesses,
            "new game started"
        );
    }

    /// Score a guess and advance the session
    ///
    /// Malformed, unknown and repeated guesses return
    /// [`GuessOutcome::WrongWord`] without touching any state.
    ///
    /// # Errors
    /// Returns `SessionOverError` if the session has already been won or lost.
    pub fn evaluate_guess(&mut self, guess: &str) -> Result<GuessOutcome, SessionOverError> {
        if self.over {
            warn!(guess, "guess submitted after the session ended");
            return Err(SessionOverError);
        }

        let Some(word) = self.accept(guess) else {
            debug!(guess, "guess rejected");
            return Ok(GuessOutcome::WrongWord);
        };

        let scored = score(&word, &self.answer);
        self.history.push(scored.clone());
        debug!(
            guess = %word,
            attempt = self.history.len(),
            result = %scored,
            "guess scored"
        );

        if word == self.answer {
            self.over = true;
            info!(attempts = self.history.len(), "game won");
            return Ok(GuessOutcome::Won(scored));
        }

        if self.history.len() >= self.config.max_guesses {
            self.over = true;
            info!(answer = %self.answer, "game lost");
            return Ok(GuessOutcome::Lost(scored));
        }

        Ok(GuessOutcome::TryAgain(scored))
    }

    /// Validate a guess: right length, known word, not already scored
    fn accept(&self, guess: &str) -> Option<Word> {
        let word = Word::new(guess).ok()?;

        if word.len() != self.config.word_length || !self.dictionary.contains(word.text()) {
            return None;
        }

        if self.history.iter().any(|scored| scored.spells(&word)) {
            return None;
        }

        Some(word)
    }

    /// Scored guesses of the current session, in submission order
    #[must_use]
    pub fn history(&self) -> &[ScoredGuess] {
        &self.history
    }

    /// Whether the current session has been won or lost
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.over
    }

    /// The answer, once the session is over
    #[must_use]
    pub const fn reveal_answer(&self) -> Option<&Word> {
        if self.over { Some(&self.answer) } else { None }
    }

    /// Guesses left before the session is lost
    #[must_use]
    pub fn guesses_remaining(&self) -> usize {
        self.config.max_guesses.saturating_sub(self.history.len())
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }
}
