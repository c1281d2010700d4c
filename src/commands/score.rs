//! Guess replay command
//!
//! Plays a list of guesses against a chosen answer and records each outcome.

use crate::error::UnknownAnswerError;
use crate::game::{GameEngine, GuessOutcome};
use rand::Rng;

/// Result of replaying guesses
pub struct ScoreReport {
    pub answer: String,
    pub steps: Vec<ScoreStep>,
    /// Guesses left over after the game ended
    pub unplayed: Vec<String>,
}

/// One submitted guess and what the engine made of it
pub struct ScoreStep {
    pub guess: String,
    pub outcome: GuessOutcome,
}

impl ScoreReport {
    /// Whether the replay ended in a win
    #[must_use]
    pub fn won(&self) -> bool {
        self.steps
            .last()
            .is_some_and(|step| matches!(step.outcome, GuessOutcome::Won(_)))
    }
}

/// Start a game with `answer` and submit `guesses` in order
///
/// # Errors
///
/// Returns an error if `answer` is not in the engine's dictionary.
pub fn score_guesses<R: Rng, S: AsRef<str>>(
    engine: &mut GameEngine<R>,
    answer: &str,
    guesses: &[S],
) -> Result<ScoreReport, UnknownAnswerError> {
    engine.start_with_answer(answer)?;

    let mut steps = Vec::with_capacity(guesses.len());
    let mut unplayed = Vec::new();

    for guess in guesses {
        let guess = guess.as_ref();
        match engine.evaluate_guess(guess) {
            Ok(outcome) => steps.push(ScoreStep {
                guess: guess.to_string(),
                outcome,
            }),
            Err(_) => unplayed.push(guess.to_string()),
        }
    }

    Ok(ScoreReport {
        answer: answer.to_lowercase(),
        steps,
        unplayed,
    })
}
