//! Puzzle game engine
//!
//! Pure transition functions over an immutable [`Puzzle`] value: the host
//! holds the current snapshot, feeds one [`Action`] at a time through
//! [`Puzzle::apply`], and keeps whatever value comes back. No operation
//! mutates in place or performs I/O, so a fixed initial puzzle and a fixed
//! action sequence always reproduce the same final score bit for bit.

pub mod cascade;
pub mod letters;
pub mod scoring;
pub mod words;

pub use scoring::{
    BreakdownRow, ScoringConfig, calculate_final_score, current_streak, guess_history,
    score_breakdown, word_score,
};

use crate::core::{Phase, Puzzle};
use std::fmt;

/// One player action, consumed by the reducer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Spend one letter guess
    GuessLetter(char),
    /// End the letter phase early
    SkipToWords,
    /// Focus a column for input
    SelectWord(usize),
    /// Replace the typed letters of one column word
    UpdateInput {
        word: usize,
        input: Vec<Option<char>>,
    },
    /// Spend a hint to reveal one position
    RevealHint { word: usize, position: usize },
    /// Grade every word and finish the game
    SubmitWords,
}

/// Typed precondition failure
///
/// The engine never silently corrupts state: an operation outside its
/// preconditions returns one of these and leaves the puzzle untouched. A
/// permissive host may ignore them for input smoothness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    PhaseMismatch { expected: Phase, actual: Phase },
    GuessLimitExceeded,
    VowelLimitExceeded,
    LetterAlreadyGuessed(char),
    NotALetter(char),
    SkipUnavailable { guessed: usize },
    WordIndexOutOfRange(usize),
    WordAlreadyGuessed(usize),
    InputLengthMismatch { expected: usize, got: usize },
    PositionOutOfRange { word: usize, position: usize },
    HintExhausted,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PhaseMismatch { expected, actual } => {
                write!(f, "Operation requires phase {expected}, puzzle is {actual}")
            }
            Self::GuessLimitExceeded => write!(f, "No letter guesses remaining"),
            Self::VowelLimitExceeded => write!(f, "No vowel guesses remaining"),
            Self::LetterAlreadyGuessed(letter) => {
                write!(f, "Letter '{letter}' was already guessed")
            }
            Self::NotALetter(c) => write!(f, "'{c}' is not a letter"),
            Self::SkipUnavailable { guessed } => {
                write!(f, "Cannot skip after only {guessed} letter guesses")
            }
            Self::WordIndexOutOfRange(index) => write!(f, "No column word at index {index}"),
            Self::WordAlreadyGuessed(index) => {
                write!(f, "Column word {index} is already graded")
            }
            Self::InputLengthMismatch { expected, got } => {
                write!(f, "Input must cover {expected} positions, got {got}")
            }
            Self::PositionOutOfRange { word, position } => {
                write!(f, "Column word {word} has no position {position}")
            }
            Self::HintExhausted => {
                write!(f, "No hint available for that position")
            }
        }
    }
}

impl std::error::Error for EngineError {}

impl Puzzle {
    /// Reduce one action into the next puzzle value
    ///
    /// # Errors
    /// Returns [`EngineError`] when the action's preconditions do not hold;
    /// the current value stays valid either way.
    pub fn apply(&self, action: &Action, config: &ScoringConfig) -> Result<Self, EngineError> {
        match action {
            Action::GuessLetter(letter) => self.guess_letter(*letter, config),
            Action::SkipToWords => self.skip_to_words(),
            Action::SelectWord(index) => self.select_word(*index),
            Action::UpdateInput { word, input } => self.update_word_input(*word, input),
            Action::RevealHint { word, position } => self.reveal_hint(*word, *position),
            Action::SubmitWords => self.submit_all_words(config),
        }
    }

    pub(crate) fn require_phase(&self, expected: Phase) -> Result<(), EngineError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(EngineError::PhaseMismatch {
                expected,
                actual: self.phase,
            })
        }
    }
}

/// Transition A: freeze per-word blank counts and enter the word phase
///
/// The frozen counts are the scoring authority for the blank multiplier;
/// hint reveals later in the game never change them.
pub(crate) fn begin_word_phase(puzzle: &mut Puzzle) {
    for word in &mut puzzle.words {
        word.blanks_at_word_phase = word.unrevealed_count();
        if word.blanks_at_word_phase == 0 {
            word.auto_completed = true;
        }
    }
    puzzle.phase = Phase::GuessingWords;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PuzzleContent;

    fn fresh_puzzle() -> Puzzle {
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
        Puzzle::from_content(&content).unwrap()
    }

    #[test]
    fn apply_dispatches_guess() {
        let config = ScoringConfig::default();
        let puzzle = fresh_puzzle();

        let next = puzzle.apply(&Action::GuessLetter('r'), &config).unwrap();
        assert_eq!(next.guessed_letters(), &['r']);
        // The original snapshot is untouched
        assert_eq!(puzzle.guessed_letters(), &[] as &[char]);
    }

    #[test]
    fn replayed_action_sequence_is_deterministic() {
        let config = ScoringConfig::default();
        let actions = [
            Action::GuessLetter('r'),
            Action::GuessLetter('a'),
            Action::GuessLetter('m'),
            Action::GuessLetter('z'),
            Action::SkipToWords,
            Action::SelectWord(0),
            Action::UpdateInput {
                word: 0,
                input: vec![None, Some('l'), None, None],
            },
            Action::SubmitWords,
        ];

        let run = |mut puzzle: Puzzle| {
            for action in &actions {
                puzzle = puzzle.apply(action, &config).unwrap();
            }
            puzzle
        };

        let first = run(fresh_puzzle());
        let second = run(fresh_puzzle());
        assert_eq!(first, second);
        assert_eq!(first.score(), second.score());
    }

    #[test]
    fn error_on_failed_precondition_leaves_value_usable() {
        let config = ScoringConfig::default();
        let puzzle = fresh_puzzle();

        let err = puzzle.apply(&Action::SubmitWords, &config).unwrap_err();
        assert!(matches!(err, EngineError::PhaseMismatch { .. }));

        // Still in the letter phase and still playable
        assert_eq!(puzzle.phase(), Phase::GuessingLetters);
        assert!(puzzle.apply(&Action::GuessLetter('r'), &config).is_ok());
    }

    #[test]
    fn error_messages_name_the_problem() {
        let messages = [
            EngineError::GuessLimitExceeded.to_string(),
            EngineError::VowelLimitExceeded.to_string(),
            EngineError::LetterAlreadyGuessed('q').to_string(),
            EngineError::SkipUnavailable { guessed: 2 }.to_string(),
            EngineError::HintExhausted.to_string(),
        ];
        for message in &messages {
            assert!(!message.is_empty());
        }
    }
}
