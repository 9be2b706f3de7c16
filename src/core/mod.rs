//! Core domain types

mod content;
mod puzzle;
mod word;

pub use content::{ContentError, PuzzleContent};
pub use puzzle::{
    CascadePosition, CascadeWord, COLUMN_LENGTHS, MAX_HINTS, MAX_LETTER_GUESSES, MAX_VOWELS,
    MIN_LETTERS_BEFORE_SKIP, Phase, Puzzle, SEED_LENGTH, WORD_COUNT, is_vowel,
};
pub use word::PuzzleWord;
