//! Simple interactive CLI mode
//!
//! Line-based play without the TUI

use crate::game::{GameEngine, GuessOutcome, Statistics};
use crate::output::{write_board, write_statistics};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run line mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<R: Rng>(engine: &mut GameEngine<R>) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(engine, &mut stdin.lock(), &mut stdout.lock())
}

/// Run line mode on arbitrary input and output
///
/// Ends on `/quit`, on end of input, or when the player declines another game.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple_with<R: Rng, I: BufRead, O: Write>(
    engine: &mut GameEngine<R>,
    input: &mut I,
    out: &mut O,
) -> Result<()> {
    let config = *engine.config();
    let mut stats = Statistics::new(config.max_guesses);

    writeln!(out, "\n╔══════════════════════════════════════════════╗")?;
    writeln!(out, "║              Wordle - Line Mode              ║")?;
    writeln!(out, "╚══════════════════════════════════════════════╝\n")?;
    writeln!(
        out,
        "Guess the {}-letter word in {} tries.",
        config.word_length, config.max_guesses
    )?;
    writeln!(out, "Commands: '/new' for a new game, '/quit' to exit\n")?;

    loop {
        if engine.is_over() {
            let Some(answer) = prompt(input, out, "Play again? (yes/no)")? else {
                break;
            };
            if matches!(answer.to_lowercase().as_str(), "yes" | "y") {
                engine.start_new_game();
                writeln!(out, "\n🔄 New game started!\n")?;
                continue;
            }
            break;
        }

        let turn = engine.history().len() + 1;
        let Some(line) = prompt(input, out, &format!("Guess {turn}/{}", config.max_guesses))?
        else {
            break;
        };

        match line.as_str() {
            "/quit" | "/q" => break,
            "/new" | "/n" => {
                engine.start_new_game();
                writeln!(out, "\n🔄 New game started!\n")?;
                continue;
            }
            _ => {}
        }

        let outcome = engine.evaluate_guess(&line)?;
        match &outcome {
            GuessOutcome::WrongWord => {
                let message = format!(
                    "❌ '{line}' is not in the word list, has the wrong length, or was already tried"
                );
                writeln!(out, "{}\n", message.red())?;
                continue;
            }
            GuessOutcome::TryAgain(_) => {
                write_board(out, engine.history(), &config)?;
                writeln!(out)?;
            }
            GuessOutcome::Won(_) => {
                write_board(out, engine.history(), &config)?;
                let attempts = engine.history().len();
                writeln!(
                    out,
                    "\n{}",
                    format!(
                        "🎉 Solved in {attempts} {}!",
                        if attempts == 1 { "guess" } else { "guesses" }
                    )
                    .green()
                    .bold()
                )?;
            }
            GuessOutcome::Lost(_) => {
                write_board(out, engine.history(), &config)?;
                let answer = engine
                    .reveal_answer()
                    .map(|w| w.text().to_uppercase())
                    .unwrap_or_default();
                writeln!(
                    out,
                    "\n{} {}",
                    "Out of guesses. The word was".red().bold(),
                    answer.bright_yellow().bold()
                )?;
            }
        }

        if outcome.is_terminal() {
            stats.record(&outcome, engine.history().len());
            writeln!(out)?;
            write_statistics(out, &stats)?;
            writeln!(out)?;
        }
    }

    writeln!(out, "\n👋 Thanks for playing!\n")?;
    Ok(())
}

/// Prompt and read one trimmed line, `None` at end of input
fn prompt<I: BufRead, O: Write>(
    input: &mut I,
    out: &mut O,
    text: &str,
) -> io::Result<Option<String>> {
    write!(out, "{text}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;
    use crate::game::GameConfig;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn play(script: &str) -> (String, GameEngine) {
        colored::control::set_override(false);

        let dictionary = Dictionary::new(["crane", "trace", "slate"], 5).unwrap();
        let mut engine =
            GameEngine::with_rng(dictionary, GameConfig::default(), StdRng::seed_from_u64(5))
                .unwrap();
        engine.start_with_answer("crane").unwrap();

        let mut input = script.as_bytes();
        let mut out = Vec::new();
        run_simple_with(&mut engine, &mut input, &mut out).unwrap();
        (String::from_utf8(out).unwrap(), engine)
    }

    #[test]
    fn win_then_decline() {
        let (text, engine) = play("trace\ncrane\nno\n");

        assert!(text.contains("   T  R  A  C  E "));
        assert!(text.contains("🎉 Solved in 2 guesses!"));
        assert!(text.contains("Games: 1 | Won: 1"));
        assert!(text.contains("Thanks for playing"));
        assert!(engine.is_over());
    }

    #[test]
    fn wrong_word_reprompts() {
        let (text, engine) = play("zzzzz\ntrace\ntrace\n/quit\n");

        assert_eq!(text.matches("is not in the word list").count(), 2);
        assert_eq!(engine.history().len(), 1);
    }

    #[test]
    fn new_command_resets_session() {
        let (text, engine) = play("trace\n/new\n");

        assert!(text.contains("New game started"));
        assert!(engine.history().is_empty());
    }

    #[test]
    fn short_command_aliases() {
        let (text, engine) = play("trace\n/n\nslate\n/q\ncrane\n");

        assert!(text.contains("New game started"));
        assert_eq!(engine.history().len(), 1);
        assert!(text.contains("Thanks for playing"));
    }

    #[test]
    fn end_of_input_stops() {
        let (text, engine) = play("");
        assert!(text.contains("Guess 1/6"));
        assert!(!engine.is_over());
    }
}
