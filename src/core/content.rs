//! Curated puzzle content
//!
//! The construction contract between the engine and whatever supplies
//! puzzles: the procedural generator, a daily content feed, or a test. A
//! `PuzzleContent` is checked for internal consistency before a [`Puzzle`]
//! is assembled from it, so an inconsistent puzzle never exists.

use super::puzzle::{COLUMN_LENGTHS, CascadeWord, MAX_HINTS, Phase, Puzzle, SEED_LENGTH};
use super::word::PuzzleWord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw puzzle content before validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleContent {
    /// 5-letter word whose letters head the columns
    pub seed_word: String,
    /// 5-letter bonus word running across `cascade_row`
    pub cascade_word: String,
    /// Shared row the cascade occupies (1, 2 or 3)
    pub cascade_row: usize,
    /// Column words, lengths [4, 5, 5, 5, 6]
    pub column_words: [String; 5],
}

/// Why a piece of content cannot become a puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    SeedLength(usize),
    CascadeLength(usize),
    RowOutOfRange(usize),
    ColumnLength {
        column: usize,
        expected: usize,
        got: usize,
    },
    NotLowercaseAscii(String),
    SeedMismatch {
        column: usize,
    },
    CascadeMismatch {
        column: usize,
    },
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SeedLength(len) => {
                write!(f, "Seed word must be exactly {SEED_LENGTH} letters, got {len}")
            }
            Self::CascadeLength(len) => {
                write!(
                    f,
                    "Cascade word must be exactly {SEED_LENGTH} letters, got {len}"
                )
            }
            Self::RowOutOfRange(row) => {
                write!(f, "Cascade row must be 1, 2 or 3, got {row}")
            }
            Self::ColumnLength {
                column,
                expected,
                got,
            } => write!(
                f,
                "Column {column} word must be {expected} letters, got {got}"
            ),
            Self::NotLowercaseAscii(word) => {
                write!(f, "Word {word:?} must be lowercase ASCII letters")
            }
            Self::SeedMismatch { column } => write!(
                f,
                "Column {column} word does not start with the seed letter"
            ),
            Self::CascadeMismatch { column } => write!(
                f,
                "Column {column} word does not carry the cascade letter at the cascade row"
            ),
        }
    }
}

impl std::error::Error for ContentError {}

impl PuzzleContent {
    /// Check every consistency rule without building a puzzle
    ///
    /// # Errors
    /// Returns the first violated rule: word lengths, character set, row
    /// range, seed-letter agreement, cascade-letter agreement.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.seed_word.len() != SEED_LENGTH {
            return Err(ContentError::SeedLength(self.seed_word.len()));
        }
        if self.cascade_word.len() != SEED_LENGTH {
            return Err(ContentError::CascadeLength(self.cascade_word.len()));
        }
        if !(1..=3).contains(&self.cascade_row) {
            return Err(ContentError::RowOutOfRange(self.cascade_row));
        }

        for word in [&self.seed_word, &self.cascade_word]
            .into_iter()
            .chain(self.column_words.iter())
        {
            if !word.bytes().all(|b| b.is_ascii_lowercase()) {
                return Err(ContentError::NotLowercaseAscii(word.clone()));
            }
        }

        let seed = self.seed_word.as_bytes();
        let cascade = self.cascade_word.as_bytes();

        for (column, word) in self.column_words.iter().enumerate() {
            let expected = COLUMN_LENGTHS[column];
            if word.len() != expected {
                return Err(ContentError::ColumnLength {
                    column,
                    expected,
                    got: word.len(),
                });
            }

            let bytes = word.as_bytes();
            if bytes[0] != seed[column] {
                return Err(ContentError::SeedMismatch { column });
            }
            if bytes[self.cascade_row] != cascade[column] {
                return Err(ContentError::CascadeMismatch { column });
            }
        }

        Ok(())
    }
}

impl Puzzle {
    /// Build a fresh puzzle from curated content
    ///
    /// # Errors
    /// Returns [`ContentError`] if the content fails any consistency check.
    /// Construction failures are fatal by design; there is no partially valid
    /// puzzle state.
    pub fn from_content(content: &PuzzleContent) -> Result<Self, ContentError> {
        content.validate()?;

        let words = std::array::from_fn(|column| PuzzleWord::new(&content.column_words[column]));

        Ok(Self {
            key_word: content.seed_word.clone(),
            words,
            guessed_letters: Vec::new(),
            guessed_vowels: 0,
            phase: Phase::GuessingLetters,
            score: 0,
            selected_word: None,
            cascade: CascadeWord::new(&content.cascade_word, content.cascade_row),
            cascade_locked: false,
            cascade_awarded: false,
            hints_remaining: MAX_HINTS,
        })
    }
}
