//! Colored terminal output for the line-mode commands

use super::formatters::{board_lines, guess_rail, signed_points};
use crate::core::{MAX_VOWELS, Phase, Puzzle, PuzzleContent};
use crate::engine::{ScoringConfig, calculate_final_score, current_streak, score_breakdown};
use colored::Colorize;

/// Print the board grid with the cascade-row marker
pub fn print_board(puzzle: &Puzzle) {
    println!();
    for line in board_lines(puzzle) {
        if line.ends_with('<') {
            let (cells, marker) = line.split_at(line.len() - 1);
            println!("  {}{}", cells.bold(), marker.bright_magenta());
        } else {
            println!("  {}", line.bold());
        }
    }
    println!();
}

/// Print the one-line game status under the board
pub fn print_status(puzzle: &Puzzle) {
    match puzzle.phase() {
        Phase::GuessingLetters => {
            let rail = guess_rail(puzzle);
            if !rail.is_empty() {
                println!("Guessed: {rail}");
            }
            let streak = current_streak(puzzle);
            let streak_note = if streak > 1 {
                format!("  streak x{streak}").bright_yellow().to_string()
            } else {
                String::new()
            };
            println!(
                "Letters left: {}  Vowels left: {}  Score: {}{}",
                puzzle.guesses_remaining().to_string().cyan(),
                (MAX_VOWELS - puzzle.guessed_vowels()).to_string().cyan(),
                puzzle.score().to_string().bright_yellow().bold(),
                streak_note,
            );
            if puzzle.can_skip() {
                println!("{}", "You may skip to word guessing now.".bright_black());
            } else {
                let needed = crate::core::MIN_LETTERS_BEFORE_SKIP - puzzle.guessed_letters().len();
                println!(
                    "{}",
                    format!("{needed} more guess(es) before you may skip.").bright_black()
                );
            }
        }
        Phase::GuessingWords => {
            println!(
                "Hints left: {}  Score: {}",
                puzzle.hints_remaining().to_string().cyan(),
                puzzle.score().to_string().bright_yellow().bold(),
            );
            if let Some(selected) = puzzle.selected_word() {
                println!("Selected word: {}", (selected + 1).to_string().cyan());
            }
        }
        Phase::Complete => {
            println!(
                "Final score: {}",
                puzzle.score().to_string().bright_yellow().bold()
            );
        }
    }
}

/// Print the per-word score breakdown plus the cascade row
pub fn print_breakdown(puzzle: &Puzzle, config: &ScoringConfig) {
    println!("\n{}", "─".repeat(44).cyan());
    println!(" {} ", "SCORE BREAKDOWN".bright_cyan().bold());
    println!("{}", "─".repeat(44).cyan());

    for row in score_breakdown(puzzle, config) {
        let points = signed_points(row.points);
        let points = if row.points > 0 {
            points.green().bold()
        } else if row.points < 0 {
            points.red().bold()
        } else {
            points.bright_black().bold()
        };
        println!("  {:<8} {:<26} {points:>6}", row.label, row.detail);
    }

    println!("{}", "─".repeat(44).cyan());
    println!(
        "  {:<35} {:>6}",
        "TOTAL",
        puzzle.score().to_string().bright_yellow().bold()
    );

    if puzzle.cascade_awarded() {
        println!(
            "\n{}",
            format!(
                "🎉 Cascade solved: {} 🎉",
                puzzle.cascade().word().to_uppercase()
            )
            .green()
            .bold()
        );
    } else {
        println!(
            "\n{}",
            format!(
                "The cascade was {}.",
                puzzle.cascade().word().to_uppercase()
            )
            .bright_black()
        );
    }

    // The recomputed total must agree with the running score
    debug_assert_eq!(calculate_final_score(puzzle, config), puzzle.score());
}

/// Print freshly generated content for the curation pipeline
pub fn print_generated(content: &PuzzleContent) {
    println!("\n{}", "═".repeat(44).cyan());
    println!(" {} ", "GENERATED PUZZLE".bright_cyan().bold());
    println!("{}", "═".repeat(44).cyan());

    println!(
        "  Seed word:    {}",
        content.seed_word.to_uppercase().bright_yellow().bold()
    );
    println!(
        "  Cascade word: {} (row {})",
        content.cascade_word.to_uppercase().bright_magenta().bold(),
        content.cascade_row
    );
    println!("  Columns:");
    for (column, word) in content.column_words.iter().enumerate() {
        println!("    {}: {}", column + 1, word.to_uppercase());
    }
}
