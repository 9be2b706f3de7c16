//! Puzzle state
//!
//! The single value the whole game revolves around. A `Puzzle` is only ever
//! mutated by replacement: every engine operation takes the current value and
//! returns a new one.

use super::word::PuzzleWord;
use std::fmt;

/// Number of column words in every puzzle
pub const WORD_COUNT: usize = 5;

/// Fixed column word lengths, left to right
pub const COLUMN_LENGTHS: [usize; WORD_COUNT] = [4, 5, 5, 5, 6];

/// Length of the seed word and the cascade word
pub const SEED_LENGTH: usize = 5;

/// Maximum letter guesses per game
pub const MAX_LETTER_GUESSES: usize = 7;

/// Maximum vowel guesses per game
pub const MAX_VOWELS: usize = 3;

/// Hints available per game
pub const MAX_HINTS: usize = 3;

/// Letter guesses required before the player may skip to the word phase
pub const MIN_LETTERS_BEFORE_SKIP: usize = 4;

/// Whether a letter counts against the vowel cap
#[inline]
#[must_use]
pub fn is_vowel(letter: char) -> bool {
    matches!(letter, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Game phase, advancing one way only
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    GuessingLetters,
    GuessingWords,
    Complete,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GuessingLetters => write!(f, "guessing letters"),
            Self::GuessingWords => write!(f, "guessing words"),
            Self::Complete => write!(f, "complete"),
        }
    }
}

/// A (column, row) cell occupied by the cascade word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CascadePosition {
    pub column: usize,
    pub row: usize,
}

/// The hidden bonus word running across one shared row
///
/// The cascade's letters are a read-only projection of the column words at
/// `row`; they are never graded on their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CascadeWord {
    pub(crate) word: String,
    pub(crate) row: usize,
    pub(crate) positions: [CascadePosition; WORD_COUNT],
}

impl CascadeWord {
    pub(crate) fn new(word: &str, row: usize) -> Self {
        let positions =
            std::array::from_fn(|column| CascadePosition { column, row });
        Self {
            word: word.to_string(),
            row,
            positions,
        }
    }

    /// The bonus word itself
    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// The shared row (1, 2 or 3)
    #[inline]
    #[must_use]
    pub fn row(&self) -> usize {
        self.row
    }

    /// The five cells the cascade occupies, one per column
    #[inline]
    #[must_use]
    pub fn positions(&self) -> &[CascadePosition; WORD_COUNT] {
        &self.positions
    }
}

/// Full game state for one puzzle
///
/// Constructed through [`Puzzle::from_content`](super::PuzzleContent); an
/// inconsistent puzzle can never exist. All mutation goes through the engine
/// operations in [`crate::engine`], each of which returns a new value.
#[derive(Debug, Clone, PartialEq)]
pub struct Puzzle {
    pub(crate) key_word: String,
    pub(crate) words: [PuzzleWord; WORD_COUNT],
    pub(crate) guessed_letters: Vec<char>,
    pub(crate) guessed_vowels: usize,
    pub(crate) phase: Phase,
    pub(crate) score: i64,
    pub(crate) selected_word: Option<usize>,
    pub(crate) cascade: CascadeWord,
    pub(crate) cascade_locked: bool,
    pub(crate) cascade_awarded: bool,
    pub(crate) hints_remaining: usize,
}

impl Puzzle {
    /// The seed word whose letters head the five columns
    #[inline]
    #[must_use]
    pub fn key_word(&self) -> &str {
        &self.key_word
    }

    /// The five column words, left to right
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[PuzzleWord; WORD_COUNT] {
        &self.words
    }

    /// One column word
    ///
    /// # Panics
    /// Panics if `column >= WORD_COUNT`
    #[inline]
    #[must_use]
    pub fn word(&self, column: usize) -> &PuzzleWord {
        &self.words[column]
    }

    /// Letters guessed so far, in guess order
    #[inline]
    #[must_use]
    pub fn guessed_letters(&self) -> &[char] {
        &self.guessed_letters
    }

    /// Vowels spent so far
    #[inline]
    #[must_use]
    pub fn guessed_vowels(&self) -> usize {
        self.guessed_vowels
    }

    /// Current phase
    #[inline]
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Authoritative running score
    #[inline]
    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    /// Column selected for input, meaningful only while guessing words
    #[inline]
    #[must_use]
    pub fn selected_word(&self) -> Option<usize> {
        self.selected_word
    }

    /// The hidden cascade word
    #[inline]
    #[must_use]
    pub fn cascade(&self) -> &CascadeWord {
        &self.cascade
    }

    /// Whether the cascade bonus was lost
    #[inline]
    #[must_use]
    pub fn cascade_locked(&self) -> bool {
        self.cascade_locked
    }

    /// Whether the cascade bonus was won
    #[inline]
    #[must_use]
    pub fn cascade_awarded(&self) -> bool {
        self.cascade_awarded
    }

    /// Hints left for the word phase
    #[inline]
    #[must_use]
    pub fn hints_remaining(&self) -> usize {
        self.hints_remaining
    }

    /// Whether the player may skip to the word phase right now
    #[must_use]
    pub fn can_skip(&self) -> bool {
        self.phase == Phase::GuessingLetters
            && (self.guessed_letters.len() >= MIN_LETTERS_BEFORE_SKIP
                || self.guessed_letters.len() == MAX_LETTER_GUESSES)
    }

    /// Letter guesses still available
    #[inline]
    #[must_use]
    pub fn guesses_remaining(&self) -> usize {
        MAX_LETTER_GUESSES - self.guessed_letters.len()
    }

    /// Count of graded-correct column words
    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.words.iter().filter(|w| w.correct).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vowels_are_exactly_aeiou() {
        for v in ['a', 'e', 'i', 'o', 'u'] {
            assert!(is_vowel(v));
        }
        for c in ['y', 'w', 'b', 'z'] {
            assert!(!is_vowel(c));
        }
    }

    #[test]
    fn cascade_positions_share_row_and_cover_columns() {
        let cascade = CascadeWord::new("aroma", 2);
        assert_eq!(cascade.positions().len(), WORD_COUNT);
        for (column, pos) in cascade.positions().iter().enumerate() {
            assert_eq!(pos.column, column);
            assert_eq!(pos.row, 2);
        }
    }

    #[test]
    fn phase_display() {
        assert_eq!(Phase::GuessingLetters.to_string(), "guessing letters");
        assert_eq!(Phase::GuessingWords.to_string(), "guessing words");
        assert_eq!(Phase::Complete.to_string(), "complete");
    }

    #[test]
    fn column_lengths_total() {
        assert_eq!(COLUMN_LENGTHS.iter().sum::<usize>(), 25);
    }
}
