//! Game session state machine
//!
//! A [`GameEngine`] owns one live session: the hidden answer, the scored
//! guesses so far, and whether the session has ended.

mod config;
mod engine;
mod outcome;
mod stats;

pub use config::{GameConfig, MAX_GUESSES, WORD_LENGTH};
pub use engine::GameEngine;
pub use outcome::GuessOutcome;
pub use stats::Statistics;
