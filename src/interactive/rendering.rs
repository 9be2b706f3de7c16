//! TUI rendering with ratatui
//!
//! Visualizations for the cascade puzzle board.

use super::app::{App, MessageStyle};
use crate::core::{MAX_HINTS, MAX_LETTER_GUESSES, MAX_VOWELS, Phase, Puzzle, WORD_COUNT};
use crate::engine::{current_streak, guess_history, score_breakdown};
use crate::output::formatters::BLANK;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input hints
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Info panel
        ])
        .split(chunks[1]);

    render_board_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("CASCADE - Daily Word Puzzle")
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

fn render_board_panel(f: &mut Frame, app: &App, area: Rect) {
    if app.puzzle.phase() == Phase::Complete {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(10), Constraint::Length(9)])
            .split(area);
        render_board(f, app, chunks[0]);
        render_breakdown(f, app, chunks[1]);
    } else {
        render_board(f, app, area);
    }
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let puzzle = &app.puzzle;
    let in_word_phase = puzzle.phase() == Phase::GuessingWords;
    let mut lines = vec![column_header_line(puzzle, in_word_phase), Line::from("")];

    let tallest = puzzle
        .words()
        .iter()
        .map(crate::core::PuzzleWord::len)
        .max()
        .unwrap_or(0);
    for row in 0..tallest {
        lines.push(board_row_line(puzzle, row));
    }

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn column_header_line(puzzle: &Puzzle, in_word_phase: bool) -> Line<'static> {
    let mut spans = Vec::with_capacity(WORD_COUNT * 2);
    for column in 0..WORD_COUNT {
        let selected = in_word_phase && puzzle.selected_word() == Some(column);
        let style = if selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!("{}", column + 1), style));
        spans.push(Span::raw("  "));
    }
    spans.push(Span::raw("   "));
    Line::from(spans)
}

fn board_row_line(puzzle: &Puzzle, row: usize) -> Line<'static> {
    let mut spans = Vec::with_capacity(WORD_COUNT * 2 + 1);
    for word in puzzle.words() {
        let span = if row < word.len() {
            cell_span(word.visible_letter(row), word.is_revealed(row))
        } else {
            Span::raw(" ")
        };
        spans.push(span);
        spans.push(Span::raw("  "));
    }

    if row == puzzle.cascade().row() {
        spans.push(Span::styled(
            " <",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ));
    } else {
        spans.push(Span::raw("  "));
    }
    Line::from(spans)
}

fn cell_span(visible: Option<char>, revealed: bool) -> Span<'static> {
    match visible {
        Some(letter) if revealed => Span::styled(
            letter.to_ascii_uppercase().to_string(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Some(letter) => Span::styled(letter.to_string(), Style::default().fg(Color::Yellow)),
        None => Span::styled(BLANK.to_string(), Style::default().fg(Color::DarkGray)),
    }
}

fn render_breakdown(f: &mut Frame, app: &App, area: Rect) {
    let rows = score_breakdown(&app.puzzle, &app.config);
    let mut lines: Vec<Line> = rows
        .iter()
        .map(|row| {
            let style = if row.points > 0 {
                Style::default().fg(Color::Green)
            } else if row.points < 0 {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Line::from(vec![
                Span::raw(format!("{:<10}", row.label)),
                Span::styled(format!("{:>6}", row.points), style),
                Span::raw(format!("  {}", row.detail)),
            ])
        })
        .collect();
    lines.push(Line::from(Span::styled(
        format!("{:<10}{:>6}", "TOTAL", app.puzzle.score()),
        Style::default().add_modifier(Modifier::BOLD),
    )));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Score Breakdown ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Guessed letters
            Constraint::Length(3), // Guess budget gauge
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_guess_rail(f, app, chunks[0]);
    render_guess_budget(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_guess_rail(f: &mut Frame, app: &App, area: Rect) {
    let history = guess_history(&app.puzzle);

    let rail = if history.is_empty() {
        vec![Line::from(Span::styled(
            "No letters guessed yet",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        let mut spans = Vec::with_capacity(history.len() * 2);
        for (letter, hit) in history {
            let (glyph, style) = if hit {
                ('+', Style::default().fg(Color::Green))
            } else {
                ('-', Style::default().fg(Color::Red))
            };
            spans.push(Span::styled(
                format!("{}{glyph}", letter.to_ascii_uppercase()),
                style,
            ));
            spans.push(Span::raw(" "));
        }
        let streak = current_streak(&app.puzzle);
        vec![
            Line::from(spans),
            Line::from(format!("Streak: x{streak}")),
        ]
    };

    let paragraph = Paragraph::new(rail).block(
        Block::default()
            .title(" Guessed Letters ")
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}

fn render_guess_budget(f: &mut Frame, app: &App, area: Rect) {
    let used = app.puzzle.guessed_letters().len();
    let percent = (used * 100 / MAX_LETTER_GUESSES) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Guess Budget ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent.min(100))
        .label(format!(
            "{used}/{MAX_LETTER_GUESSES} letters | {}/{MAX_VOWELS} vowels | {}/{MAX_HINTS} hints left",
            app.puzzle.guessed_vowels(),
            app.puzzle.hints_remaining(),
        ));
    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
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

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.puzzle.phase() {
        Phase::GuessingLetters => (
            " Type a letter to guess | Enter/TAB to skip to words | ESC to quit ",
            Color::Yellow,
        ),
        Phase::GuessingWords => (
            " Type letters | 1-5 select word | TAB next | . hint | Backspace erase | Enter submit ",
            Color::Cyan,
        ),
        Phase::Complete => {
            if app.puzzle.cascade_awarded() {
                (
                    " CASCADE SOLVED! | Press 'n' for new game or 'q' to quit ",
                    Color::Green,
                )
            } else {
                (
                    " Puzzle complete | Press 'n' for new game or 'q' to quit ",
                    Color::Yellow,
                )
            }
        }
    };

    let input = Paragraph::new("")
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let phase = Paragraph::new(format!("Phase: {}", app.puzzle.phase()))
        .alignment(Alignment::Center);
    f.render_widget(phase, chunks[0]);

    let score = Paragraph::new(format!("Score: {}", app.puzzle.score()))
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD));
    f.render_widget(score, chunks[1]);

    let stats_text = format!(
        "Games: {} | Cascades: {} | Best: {}",
        app.stats.games_played, app.stats.games_swept, app.stats.best_score
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[2]);

    let help = Paragraph::new("ESC: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
