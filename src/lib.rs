//! Wordle Game
//!
//! A single-player Wordle: a hidden answer is drawn from a dictionary and
//! each guess is scored letter by letter, with duplicate letters counted
//! against what actually remains in the answer.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::dictionary::Dictionary;
//! use wordle_game::game::{GameConfig, GameEngine, GuessOutcome};
//!
//! let dictionary = Dictionary::new(["crane", "trace", "slate"], 5).unwrap();
//! let mut engine = GameEngine::new(dictionary, GameConfig::default()).unwrap();
//! engine.start_with_answer("crane").unwrap();
//!
//! match engine.evaluate_guess("trace").unwrap() {
//!     GuessOutcome::TryAgain(scored) => assert_eq!(scored.to_emoji(), "⬜🟩🟩🟨🟩"),
//!     other => panic!("unexpected outcome: {other:?}"),
//! }
//! ```

// Core domain types
pub mod core;

// Valid-word set and answer selection
pub mod dictionary;

// Setup and misuse errors
pub mod error;

// Session state machine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
