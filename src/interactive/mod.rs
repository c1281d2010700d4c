//! Interactive TUI interface

mod app;
pub mod rendering;

pub use app::{App, GameStatus, Message, MessageStyle, run_tui};
