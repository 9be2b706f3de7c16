//! Plain-string formatting helpers shared by the CLI and TUI hosts

use crate::core::Puzzle;
use crate::engine::guess_history;

/// Placeholder glyph for an unrevealed, untyped position
pub const BLANK: char = '\u{b7}';

/// The glyph a board cell shows right now
///
/// Revealed letters print uppercase, typed letters lowercase, blanks as a
/// middle dot.
#[must_use]
pub fn cell_glyph(puzzle: &Puzzle, column: usize, row: usize) -> Option<char> {
    let word = puzzle.word(column);
    if row >= word.len() {
        return None;
    }
    if word.is_revealed(row) {
        return Some(word.char_at(row).to_ascii_uppercase());
    }
    Some(word.user_input()[row].unwrap_or(BLANK))
}

/// The board as text lines, one per row, columns space-separated
///
/// The cascade row gets a trailing marker so the player knows where the
/// bonus word runs.
#[must_use]
pub fn board_lines(puzzle: &Puzzle) -> Vec<String> {
    let tallest = puzzle.words().iter().map(crate::core::PuzzleWord::len).max().unwrap_or(0);
    let mut lines = Vec::with_capacity(tallest);

    for row in 0..tallest {
        let mut line = String::new();
        for column in 0..puzzle.words().len() {
            if column > 0 {
                line.push(' ');
            }
            line.push(cell_glyph(puzzle, column, row).unwrap_or(' '));
        }
        if row == puzzle.cascade().row() {
            line.push_str("  <");
        }
        lines.push(line);
    }

    lines
}

/// Guess history as "R+ A+ M-" style markers
#[must_use]
pub fn guess_rail(puzzle: &Puzzle) -> String {
    guess_history(puzzle)
        .iter()
        .map(|(letter, hit)| {
            format!(
                "{}{}",
                letter.to_ascii_uppercase(),
                if *hit { '+' } else { '-' }
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Signed points for breakdown rows
#[must_use]
pub fn signed_points(points: i64) -> String {
    if points > 0 {
        format!("+{points}")
    } else {
        points.to_string()
    }
}
