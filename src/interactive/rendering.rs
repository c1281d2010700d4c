//! TUI rendering with ratatui
//!
//! Board, messages, and statistics for the game screen.

use super::app::{App, GameStatus, MessageStyle};
use crate::core::{LetterStatus, ScoredGuess};
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<R: Rng>(f: &mut Frame, app: &App<R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board
            Constraint::Percentage(40), // Side panel
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

const fn status_color(status: LetterStatus) -> Color {
    match status {
        LetterStatus::Correct => Color::Green,
        LetterStatus::Misplaced => Color::Yellow,
        LetterStatus::Incorrect => Color::DarkGray,
    }
}

fn scored_line(scored: &ScoredGuess) -> Line<'static> {
    let spans: Vec<Span> = scored
        .letters()
        .iter()
        .flat_map(|l| {
            [
                Span::styled(
                    format!(" {} ", l.letter.to_ascii_uppercase()),
                    Style::default()
                        .fg(Color::Black)
                        .bg(status_color(l.status))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
            ]
        })
        .collect();
    Line::from(spans)
}

fn input_line(input: &str, word_length: usize) -> Line<'static> {
    let spans: Vec<Span> = (0..word_length)
        .flat_map(|i| {
            let cell = input
                .chars()
                .nth(i)
                .map_or_else(|| " _ ".to_string(), |c| format!(" {} ", c.to_ascii_uppercase()));
            [
                Span::styled(
                    cell,
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
            ]
        })
        .collect();
    Line::from(spans)
}

fn empty_line(word_length: usize) -> Line<'static> {
    Line::styled(" · ".repeat(word_length), Style::default().fg(Color::DarkGray))
}

/// One line per allowed guess: scored rows, then the input row while playing, then blanks
#[must_use]
pub fn board_lines<R: Rng>(app: &App<R>) -> Vec<Line<'static>> {
    let config = app.engine.config();
    let history = app.engine.history();

    let mut lines: Vec<Line<'static>> = Vec::with_capacity(config.max_guesses * 2);
    for scored in history {
        lines.push(scored_line(scored));
        lines.push(Line::raw(""));
    }

    let mut rows = history.len();
    if app.status() == GameStatus::Playing && rows < config.max_guesses {
        lines.push(input_line(&app.input, config.word_length));
        lines.push(Line::raw(""));
        rows += 1;
    }

    for _ in rows..config.max_guesses {
        lines.push(empty_line(config.word_length));
        lines.push(Line::raw(""));
    }

    lines
}

fn render_board<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let (title, color) = match app.status() {
        GameStatus::Playing => (" Board ".to_string(), Color::White),
        GameStatus::Won => (" 🎉 Solved! 🎉 ".to_string(), Color::Green),
        GameStatus::Lost => {
            let answer = app
                .engine
                .reveal_answer()
                .map(|w| w.text().to_uppercase())
                .unwrap_or_default();
            (format!(" The word was {answer} "), Color::Red)
        }
    };

    let board = Paragraph::new(board_lines(app))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(board, area);
}

fn render_side_panel<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Guesses used
            Constraint::Percentage(50), // Distribution
            Constraint::Min(5),         // Messages
        ])
        .split(area);

    render_guess_gauge(f, app, chunks[0]);
    render_distribution(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_guess_gauge<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let max = app.engine.config().max_guesses;
    let used = app.engine.history().len();
    let percent = (used * 100 / max.max(1)).min(100) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Guesses ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{used}/{max} used"));

    f.render_widget(gauge, area);
}

fn render_distribution<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let most = app
        .stats
        .guess_distribution
        .iter()
        .copied()
        .max()
        .unwrap_or(0)
        .max(1);

    let items: Vec<ListItem> = app
        .stats
        .guess_distribution
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            let width = count * 16 / most;
            ListItem::new(Line::from(vec![
                Span::raw(format!("{}: ", i + 1)),
                Span::styled("█".repeat(width), Style::default().fg(Color::Green)),
                Span::raw(format!(" {count}")),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Guess Distribution ")
            .borders(Borders::ALL),
    );

    f.render_widget(list, area);
}

fn render_messages<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    f.render_widget(Paragraph::new(stats_text).alignment(Alignment::Center), chunks[0]);

    let left_text = format!("Guesses left: {}", app.engine.guesses_remaining());
    f.render_widget(Paragraph::new(left_text).alignment(Alignment::Center), chunks[1]);

    let help_text = if app.status() == GameStatus::Playing {
        "Enter: Submit | Ctrl-N: New Game | Esc: Quit"
    } else {
        "n: New Game | q: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;
    use crate::game::{GameConfig, GameEngine};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn app(answer: &str) -> App {
        let dictionary = Dictionary::new(["crane", "trace", "slate"], 5).unwrap();
        let mut engine =
            GameEngine::with_rng(dictionary, GameConfig::default(), StdRng::seed_from_u64(2))
                .unwrap();
        engine.start_with_answer(answer).unwrap();
        App::new(engine)
    }

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn board_has_a_row_per_guess() {
        let mut app = app("crane");
        app.engine.evaluate_guess("trace").unwrap();
        app.input = "sl".to_string();

        let lines = board_lines(&app);
        assert_eq!(lines.len(), 12);
        assert_eq!(line_text(&lines[0]), " T   R   A   C   E  ");
        assert_eq!(line_text(&lines[2]), " S   L   _   _   _  ");
        assert_eq!(line_text(&lines[4]), " ·  ·  ·  ·  · ");
    }

    #[test]
    fn scored_cells_use_status_colors() {
        let mut app = app("crane");
        app.engine.evaluate_guess("trace").unwrap();

        let lines = board_lines(&app);
        let backgrounds: Vec<_> = lines[0]
            .spans
            .iter()
            .step_by(2)
            .map(|s| s.style.bg)
            .collect();
        assert_eq!(
            backgrounds,
            [
                Some(Color::DarkGray),
                Some(Color::Green),
                Some(Color::Green),
                Some(Color::Yellow),
                Some(Color::Green),
            ]
        );
    }

    #[test]
    fn finished_board_has_no_input_row() {
        let mut app = app("crane");
        app.engine.evaluate_guess("crane").unwrap();

        let lines = board_lines(&app);
        assert_eq!(lines.len(), 12);
        assert_eq!(line_text(&lines[2]), " ·  ·  ·  ·  · ");
    }

    #[test]
    fn ui_draws_without_panicking() {
        let app = app("crane");
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();
    }
}
