//! TUI application state and logic
//!
//! The app is a thin host around the engine: it owns the current puzzle
//! snapshot and maps every keypress to exactly one [`Action`], keeping
//! whatever value the reducer returns.

use crate::commands::generate_content;
use crate::core::{Phase, Puzzle, WORD_COUNT};
use crate::engine::{Action, ScoringConfig, current_streak};
use crate::generator::WordBank;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub puzzle: Puzzle,
    pub config: ScoringConfig,
    pub bank: WordBank,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_played: usize,
    pub games_swept: usize,
    pub best_score: i64,
}

impl App {
    #[must_use]
    pub fn new(bank: WordBank, puzzle: Puzzle) -> Self {
        Self {
            puzzle,
            config: ScoringConfig::default(),
            bank,
            messages: vec![
                Message {
                    text: "Welcome! Guess letters to reveal the five words.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "The cascade word runs across the marked row.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Feed one action through the reducer, surfacing errors as messages
    fn dispatch(&mut self, action: Action) -> bool {
        match self.puzzle.apply(&action, &self.config) {
            Ok(next) => {
                self.puzzle = next;
                true
            }
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                false
            }
        }
    }

    pub fn guess_letter(&mut self, letter: char) {
        let before = self.puzzle.score();
        let phase_before = self.puzzle.phase();
        if !self.dispatch(Action::GuessLetter(letter)) {
            return;
        }

        let gained = self.puzzle.score() - before;
        if gained > 0 {
            let streak = current_streak(&self.puzzle);
            self.add_message(
                &format!("Hit! +{gained} points (streak x{streak})"),
                MessageStyle::Success,
            );
        } else {
            self.add_message("Miss - streak reset.", MessageStyle::Info);
        }

        if phase_before != self.puzzle.phase() {
            self.enter_word_phase_ui();
        }
    }

    pub fn skip(&mut self) {
        if self.dispatch(Action::SkipToWords) {
            self.enter_word_phase_ui();
        }
    }

    fn enter_word_phase_ui(&mut self) {
        self.dispatch(Action::SelectWord(0));
        self.add_message(
            "Fill in the blanks! Type letters, Tab to switch words, '.' for a hint.",
            MessageStyle::Info,
        );
    }

    /// Currently focused column, defaulting to the first
    #[must_use]
    pub fn selected(&self) -> usize {
        self.puzzle.selected_word().unwrap_or(0)
    }

    pub fn select(&mut self, index: usize) {
        self.dispatch(Action::SelectWord(index));
    }

    pub fn select_next(&mut self) {
        let next = (self.selected() + 1) % WORD_COUNT;
        self.select(next);
    }

    /// Type one letter into the first empty slot of the focused word
    pub fn type_letter(&mut self, letter: char) {
        let word = self.selected();
        let state = self.puzzle.word(word);
        let slot = (0..state.len())
            .find(|&i| !state.is_revealed(i) && state.user_input()[i].is_none());

        let Some(position) = slot else {
            self.add_message("No empty slot here - Tab to switch words.", MessageStyle::Info);
            return;
        };

        let mut input = state.user_input().to_vec();
        input[position] = Some(letter);
        self.dispatch(Action::UpdateInput { word, input });
    }

    /// Erase the last typed letter of the focused word
    pub fn erase_letter(&mut self) {
        let word = self.selected();
        let state = self.puzzle.word(word);
        let slot = (0..state.len())
            .rev()
            .find(|&i| state.user_input()[i].is_some());

        let Some(position) = slot else {
            return;
        };

        let mut input = state.user_input().to_vec();
        input[position] = None;
        self.dispatch(Action::UpdateInput { word, input });
    }

    /// Spend a hint on the first blank of the focused word
    pub fn hint(&mut self) {
        let word = self.selected();
        let state = self.puzzle.word(word);
        let Some(position) = (0..state.len()).find(|&i| !state.is_revealed(i)) else {
            self.add_message("That word is fully revealed.", MessageStyle::Info);
            return;
        };
        let letter = state.char_at(position).to_ascii_uppercase();

        if self.dispatch(Action::RevealHint { word, position }) {
            self.add_message(&format!("Hint: revealed '{letter}'."), MessageStyle::Success);
        }
    }

    pub fn submit(&mut self) {
        if !self.dispatch(Action::SubmitWords) {
            return;
        }

        self.stats.games_played += 1;
        self.stats.best_score = self.stats.best_score.max(self.puzzle.score());

        if self.puzzle.cascade_awarded() {
            self.stats.games_swept += 1;
            self.add_message(
                &format!(
                    "Cascade solved: {}! +{} bonus",
                    self.puzzle.cascade().word().to_uppercase(),
                    self.config.cascade_bonus
                ),
                MessageStyle::Success,
            );
        } else {
            self.add_message(
                &format!(
                    "{} of 5 words correct. The cascade stays locked.",
                    self.puzzle.correct_count()
                ),
                MessageStyle::Info,
            );
        }
        self.add_message("Press 'n' for a new puzzle or 'q' to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        match generate_content(&self.bank, None) {
            Ok(content) => match Puzzle::from_content(&content) {
                Ok(puzzle) => {
                    self.puzzle = puzzle;
                    self.messages.clear();
                    self.add_message("New puzzle! Guess letters to reveal the words.", MessageStyle::Info);
                }
                Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
            },
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only the last few messages
        if self.messages.len() > 6 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            } else {
                handle_key(&mut app, key.code);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_key(app: &mut App, code: KeyCode) {
    match app.puzzle.phase() {
        Phase::GuessingLetters => match code {
            KeyCode::Esc => app.should_quit = true,
            KeyCode::Enter | KeyCode::Tab => app.skip(),
            KeyCode::Char(c) if c.is_ascii_alphabetic() => app.guess_letter(c),
            _ => {}
        },
        Phase::GuessingWords => match code {
            KeyCode::Esc => app.should_quit = true,
            KeyCode::Tab => app.select_next(),
            KeyCode::Enter => app.submit(),
            KeyCode::Backspace => app.erase_letter(),
            KeyCode::Char('.') => app.hint(),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(index) = c.to_digit(10) {
                    let index = index as usize;
                    if (1..=WORD_COUNT).contains(&index) {
                        app.select(index - 1);
                    }
                }
            }
            KeyCode::Char(c) if c.is_ascii_alphabetic() => app.type_letter(c),
            _ => {}
        },
        Phase::Complete => match code {
            KeyCode::Esc | KeyCode::Char('q') => app.should_quit = true,
            KeyCode::Char('n') => app.new_game(),
            _ => {}
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PuzzleContent;

    fn test_app() -> App {
        let content = PuzzleContent {
            seed_word: "sport".to_string(),
            cascade_word: "aroma".to_string(),
            cascade_row: 2,
            column_words: [
                "slam".to_string(),
                "parks".to_string(),
                "odors".to_string(),
                "rumba".to_string(),
                "teapot".to_string(),
            ],
        };
        let puzzle = Puzzle::from_content(&content).unwrap();
        App::new(WordBank::from_embedded(), puzzle)
    }

    #[test]
    fn keys_map_to_letter_guesses() {
        let mut app = test_app();
        handle_key(&mut app, KeyCode::Char('r'));
        assert_eq!(app.puzzle.guessed_letters(), &['r']);
    }

    #[test]
    fn early_skip_surfaces_error_message() {
        let mut app = test_app();
        handle_key(&mut app, KeyCode::Tab);
        assert_eq!(app.puzzle.phase(), Phase::GuessingLetters);
        assert!(matches!(
            app.messages.last().unwrap().style,
            MessageStyle::Error
        ));
    }

    #[test]
    fn typing_fills_the_first_blank_of_the_selection() {
        let mut app = test_app();
        for key in ['c', 'f', 'g', 'h'] {
            handle_key(&mut app, KeyCode::Char(key));
        }
        handle_key(&mut app, KeyCode::Tab);
        assert_eq!(app.puzzle.phase(), Phase::GuessingWords);
        assert_eq!(app.selected(), 0);

        handle_key(&mut app, KeyCode::Char('l'));
        assert_eq!(app.puzzle.word(0).user_input()[1], Some('l'));

        handle_key(&mut app, KeyCode::Backspace);
        assert_eq!(app.puzzle.word(0).user_input()[1], None);
    }

    #[test]
    fn digit_selects_and_hint_reveals() {
        let mut app = test_app();
        for key in ['c', 'f', 'g', 'h'] {
            handle_key(&mut app, KeyCode::Char(key));
        }
        handle_key(&mut app, KeyCode::Tab);

        handle_key(&mut app, KeyCode::Char('3'));
        assert_eq!(app.selected(), 2);

        handle_key(&mut app, KeyCode::Char('.'));
        assert_eq!(app.puzzle.word(2).hints_used(), 1);
        assert_eq!(app.puzzle.hints_remaining(), 2);
    }

    #[test]
    fn submit_updates_statistics() {
        let mut app = test_app();
        for key in ['c', 'f', 'g', 'h'] {
            handle_key(&mut app, KeyCode::Char(key));
        }
        handle_key(&mut app, KeyCode::Tab);
        handle_key(&mut app, KeyCode::Enter);

        assert_eq!(app.puzzle.phase(), Phase::Complete);
        assert_eq!(app.stats.games_played, 1);
        assert!(!app.puzzle.cascade_awarded());
    }

    #[test]
    fn new_game_resets_the_board() {
        let mut app = test_app();
        for key in ['c', 'f', 'g', 'h'] {
            handle_key(&mut app, KeyCode::Char(key));
        }
        handle_key(&mut app, KeyCode::Tab);
        handle_key(&mut app, KeyCode::Enter);

        handle_key(&mut app, KeyCode::Char('n'));
        assert_eq!(app.puzzle.phase(), Phase::GuessingLetters);
        assert_eq!(app.puzzle.score(), 0);
    }
}
