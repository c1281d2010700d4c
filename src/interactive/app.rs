//! TUI application state and logic

use crate::game::{GameEngine, GuessOutcome, Statistics};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<R: Rng = StdRng> {
    pub engine: GameEngine<R>,
    pub input: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

/// Where the current session stands, as shown to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<R: Rng> App<R> {
    #[must_use]
    pub fn new(engine: GameEngine<R>) -> Self {
        let config = *engine.config();

        Self {
            engine,
            input: String::new(),
            messages: vec![
                Message {
                    text: format!(
                        "Guess the {}-letter word in {} tries.",
                        config.word_length, config.max_guesses
                    ),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type a word and press Enter.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::new(config.max_guesses),
            should_quit: false,
        }
    }

    /// Derived from the engine; a finished session is won iff its last guess is all Correct
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if !self.engine.is_over() {
            GameStatus::Playing
        } else if self
            .engine
            .history()
            .last()
            .is_some_and(crate::core::ScoredGuess::is_all_correct)
        {
            GameStatus::Won
        } else {
            GameStatus::Lost
        }
    }

    pub fn push_letter(&mut self, c: char) {
        if self.status() == GameStatus::Playing
            && c.is_ascii_alphabetic()
            && self.input.len() < self.engine.config().word_length
        {
            self.input.push(c.to_ascii_lowercase());
        }
    }

    pub fn pop_letter(&mut self) {
        self.input.pop();
    }

    pub fn submit(&mut self) {
        if self.status() != GameStatus::Playing {
            return;
        }

        let word_length = self.engine.config().word_length;
        if self.input.len() < word_length {
            self.add_message(
                &format!("Word must be exactly {word_length} letters!"),
                MessageStyle::Error,
            );
            return;
        }

        let outcome = match self.engine.evaluate_guess(&self.input) {
            Ok(outcome) => outcome,
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                return;
            }
        };

        if outcome != GuessOutcome::WrongWord {
            self.input.clear();
        }

        let attempts = self.engine.history().len();
        match &outcome {
            GuessOutcome::WrongWord => {
                self.add_message(
                    &format!(
                        "'{}' is not in the word list or was already tried",
                        self.input.to_uppercase()
                    ),
                    MessageStyle::Error,
                );
            }
            GuessOutcome::TryAgain(_) => {
                let left = self.engine.guesses_remaining();
                self.add_message(
                    &format!("{left} {} left", if left == 1 { "guess" } else { "guesses" }),
                    MessageStyle::Info,
                );
            }
            GuessOutcome::Won(_) => {
                let celebration = match attempts {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    6 => "😅 PHEW! Got it in six! 😅",
                    _ => "🎊 SOLVED! 🎊",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            GuessOutcome::Lost(_) => {
                let answer = self
                    .engine
                    .reveal_answer()
                    .map(|w| w.text().to_uppercase())
                    .unwrap_or_default();
                self.add_message(
                    &format!("Out of guesses! The word was {answer}"),
                    MessageStyle::Error,
                );
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
        }

        self.stats.record(&outcome, attempts);
    }

    pub fn new_game(&mut self) {
        self.engine.start_new_game();
        self.input.clear();
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_game(),
            KeyCode::Esc => self.should_quit = true,
            code if self.status() != GameStatus::Playing => match code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Enter => self.new_game(),
                _ => {}
            },
            KeyCode::Char(c) => self.push_letter(c),
            KeyCode::Backspace => self.pop_letter(),
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: Rng>(app: App<R>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<R>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
