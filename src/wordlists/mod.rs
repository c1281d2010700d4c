//! Word lists for the game
//!
//! Provides the default list compiled into the binary, and file loading for
//! custom lists.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
