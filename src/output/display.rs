//! Display functions for game state and command results

use super::formatters::{create_progress_bar, empty_row, scored_row};
use crate::commands::ScoreReport;
use crate::core::ScoredGuess;
use crate::game::{GameConfig, GuessOutcome, Statistics};
use colored::Colorize;
use std::io::{self, Write};

/// Write the board: scored rows, then placeholders up to `max_guesses`
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_board<W: Write>(
    out: &mut W,
    history: &[ScoredGuess],
    config: &GameConfig,
) -> io::Result<()> {
    for scored in history {
        writeln!(out, "  {}", scored_row(scored))?;
    }
    for _ in history.len()..config.max_guesses {
        writeln!(out, "  {}", empty_row(config.word_length))?;
    }
    Ok(())
}

/// Write the win/loss tally and guess distribution
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_statistics<W: Write>(out: &mut W, stats: &Statistics) -> io::Result<()> {
    writeln!(
        out,
        "  Games: {} | Won: {} | Win rate: {:.0}%",
        stats.total_games,
        stats.games_won,
        stats.win_rate()
    )?;

    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        writeln!(
            out,
            "  {}: {} {count}",
            i + 1,
            create_progress_bar(count, most, 20).green()
        )?;
    }
    Ok(())
}

/// Print the result of replaying guesses against a fixed answer
pub fn print_score_report(report: &ScoreReport) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Answer: {}",
        report.answer.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    for step in &report.steps {
        let guess = step.guess.to_uppercase();
        match &step.outcome {
            GuessOutcome::WrongWord => {
                println!("  {guess:<8} {}", "rejected (unknown, wrong length or repeated)".red());
            }
            GuessOutcome::TryAgain(scored) => {
                println!("  {guess:<8} {} {}", scored_row(scored), scored.to_emoji());
            }
            GuessOutcome::Won(scored) => {
                println!(
                    "  {guess:<8} {} {} {}",
                    scored_row(scored),
                    scored.to_emoji(),
                    "won".green().bold()
                );
            }
            GuessOutcome::Lost(scored) => {
                println!(
                    "  {guess:<8} {} {} {}",
                    scored_row(scored),
                    scored.to_emoji(),
                    "lost".red().bold()
                );
            }
        }
    }

    if !report.unplayed.is_empty() {
        println!(
            "\n  {} {}",
            "Not played (game already over):".bright_black(),
            report.unplayed.join(", ")
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Word, score};

    fn render<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn board_pads_to_max_guesses() {
        let history = vec![score(&Word::new("trace").unwrap(), &Word::new("crane").unwrap())];
        let text = render(|out| write_board(out, &history, &GameConfig::default()));

        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "   T  R  A  C  E ");
        assert_eq!(lines[5], "   ·  ·  ·  ·  · ");
    }

    #[test]
    fn statistics_lists_every_guess_count() {
        let mut stats = Statistics::new(6);
        let won = score(&Word::new("crane").unwrap(), &Word::new("crane").unwrap());
        stats.record(&GuessOutcome::Won(won), 2);

        let text = render(|out| write_statistics(out, &stats));
        assert!(text.contains("Games: 1 | Won: 1 | Win rate: 100%"));
        assert_eq!(text.lines().count(), 7);
        assert!(text.contains("2: ████████████████████ 1"));
    }
}
