//! Word guess engine
//!
//! Everything the player does after the letter phase: selecting a column,
//! editing typed input, spending hints, and the final grading submit.

use super::cascade;
use super::scoring::{self, ScoringConfig};
use super::EngineError;
use crate::core::{Phase, Puzzle, WORD_COUNT};

impl Puzzle {
    /// Focus a column word for input; idempotent on reselect
    ///
    /// # Errors
    /// Returns [`EngineError`] outside the word phase or for a bad index.
    pub fn select_word(&self, index: usize) -> Result<Self, EngineError> {
        self.require_phase(Phase::GuessingWords)?;
        if index >= WORD_COUNT {
            return Err(EngineError::WordIndexOutOfRange(index));
        }

        let mut next = self.clone();
        next.selected_word = Some(index);
        Ok(next)
    }

    /// Replace the typed letters of one column word
    ///
    /// Pure replacement: the new input is normalized to lowercase and
    /// positions that are already revealed carry no input. Applying the same
    /// input twice yields the same state.
    ///
    /// # Errors
    /// Returns [`EngineError`] outside the word phase, for a graded word,
    /// for a length mismatch, or for a non-letter entry.
    pub fn update_word_input(
        &self,
        index: usize,
        input: &[Option<char>],
    ) -> Result<Self, EngineError> {
        self.require_phase(Phase::GuessingWords)?;
        if index >= WORD_COUNT {
            return Err(EngineError::WordIndexOutOfRange(index));
        }
        let word = &self.words[index];
        if word.guessed {
            return Err(EngineError::WordAlreadyGuessed(index));
        }
        if input.len() != word.len() {
            return Err(EngineError::InputLengthMismatch {
                expected: word.len(),
                got: input.len(),
            });
        }
        for entry in input.iter().flatten() {
            if !entry.is_ascii_alphabetic() {
                return Err(EngineError::NotALetter(*entry));
            }
        }

        let mut next = self.clone();
        let word = &mut next.words[index];
        for (position, entry) in input.iter().enumerate() {
            word.user_input[position] = if word.revealed[position] {
                None
            } else {
                entry.map(|c| c.to_ascii_lowercase())
            };
        }
        Ok(next)
    }

    /// Spend one hint to reveal a single position
    ///
    /// The frozen `blanks_at_word_phase` is untouched, so the blank
    /// multiplier keeps its value; the cost lands as the escalating hint
    /// deduction at grading instead.
    ///
    /// # Errors
    /// Returns [`EngineError`] outside the word phase, for a bad index or
    /// position, with no hints left, or when the position is already
    /// revealed.
    pub fn reveal_hint(&self, index: usize, position: usize) -> Result<Self, EngineError> {
        self.require_phase(Phase::GuessingWords)?;
        if index >= WORD_COUNT {
            return Err(EngineError::WordIndexOutOfRange(index));
        }
        let word = &self.words[index];
        if position >= word.len() {
            return Err(EngineError::PositionOutOfRange { word: index, position });
        }
        if self.hints_remaining == 0 || word.revealed[position] {
            return Err(EngineError::HintExhausted);
        }

        let mut next = self.clone();
        next.hints_remaining -= 1;
        let word = &mut next.words[index];
        word.revealed[position] = true;
        word.user_input[position] = None;
        word.hints_used += 1;
        Ok(next)
    }

    /// Transition B: grade every ungraded word, settle the cascade, finish
    ///
    /// Correctness overlays the revealed letters with the typed input;
    /// auto-completed words are trivially correct. Correct words earn their
    /// word score, incorrect ones cost the flat wrong-guess penalty, and the
    /// cascade evaluator runs last.
    ///
    /// # Errors
    /// Returns [`EngineError`] outside the word phase.
    pub fn submit_all_words(&self, config: &ScoringConfig) -> Result<Self, EngineError> {
        self.require_phase(Phase::GuessingWords)?;

        let mut next = self.clone();
        for column in 0..WORD_COUNT {
            let word = &mut next.words[column];
            if word.guessed {
                continue;
            }
            word.guessed = true;
            word.correct = word.auto_completed || word.filled_correctly();

            let delta = if word.correct {
                scoring::word_score(word, column, config)
            } else {
                -config.wrong_guess_penalty
            };
            next.score = scoring::bump(next.score, delta, config);
        }

        cascade::evaluate(&mut next, config);
        next.phase = Phase::Complete;
        next.selected_word = None;
        Ok(next)
    }
}
