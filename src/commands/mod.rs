//! Command implementations

pub mod score;
pub mod simple;

pub use score::{ScoreReport, ScoreStep, score_guesses};
pub use simple::{run_simple, run_simple_with};
