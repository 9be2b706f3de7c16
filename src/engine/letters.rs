//! Letter guess engine
//!
//! Applies one letter guess to a puzzle snapshot: reveal propagation across
//! all five columns, hit streak bonuses, auto-complete marking, and the
//! automatic hand-off to the word phase at the guess limit.

use super::scoring::{self, ScoringConfig};
use super::{EngineError, begin_word_phase};
use crate::core::{MAX_LETTER_GUESSES, MAX_VOWELS, MIN_LETTERS_BEFORE_SKIP, Phase, Puzzle, is_vowel};

impl Puzzle {
    /// Spend one letter guess
    ///
    /// Reveals the letter at every matching position past the key letter,
    /// pays the streak bonus on a hit, and transitions to the word phase
    /// automatically when this was the last guess.
    ///
    /// # Errors
    /// Returns [`EngineError`] outside the letter phase, for a repeated
    /// letter, past the guess limit, or past the vowel cap.
    pub fn guess_letter(&self, letter: char, config: &ScoringConfig) -> Result<Self, EngineError> {
        self.require_phase(Phase::GuessingLetters)?;

        let letter = letter.to_ascii_lowercase();
        if !letter.is_ascii_lowercase() {
            return Err(EngineError::NotALetter(letter));
        }
        if self.guessed_letters.contains(&letter) {
            return Err(EngineError::LetterAlreadyGuessed(letter));
        }
        if self.guessed_letters.len() >= MAX_LETTER_GUESSES {
            return Err(EngineError::GuessLimitExceeded);
        }
        if is_vowel(letter) && self.guessed_vowels >= MAX_VOWELS {
            return Err(EngineError::VowelLimitExceeded);
        }

        let mut next = self.clone();
        next.guessed_letters.push(letter);
        if is_vowel(letter) {
            next.guessed_vowels += 1;
        }

        // Position 0 is the pre-revealed key letter and is never re-evaluated
        for word in &mut next.words {
            for position in 1..word.len() {
                if word.char_at(position) == letter {
                    word.revealed[position] = true;
                    word.user_input[position] = None;
                }
            }
            if !word.auto_completed && word.is_fully_revealed() {
                word.auto_completed = true;
            }
        }

        if scoring::letter_is_hit(&next, letter) {
            let streak = scoring::current_streak(&next);
            next.score = scoring::bump(next.score, config.streak_bonus(streak), config);
        }

        if next.guessed_letters.len() == MAX_LETTER_GUESSES {
            begin_word_phase(&mut next);
        }

        Ok(next)
    }

    /// Transition A on player request: end the letter phase early
    ///
    /// # Errors
    /// Returns [`EngineError`] outside the letter phase or before enough
    /// letters have been spent.
    pub fn skip_to_words(&self) -> Result<Self, EngineError> {
        self.require_phase(Phase::GuessingLetters)?;

        let guessed = self.guessed_letters.len();
        if guessed < MIN_LETTERS_BEFORE_SKIP && guessed != MAX_LETTER_GUESSES {
            return Err(EngineError::SkipUnavailable { guessed });
        }

        let mut next = self.clone();
        begin_word_phase(&mut next);
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MAX_HINTS, PuzzleContent};

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
    fn hit_reveals_every_matching_position() {
        let config = ScoringConfig::default();
        let puzzle = fresh_puzzle().guess_letter('a', &config).unwrap();

        // slam: _ _ a _, parks: _ a _ _ _, rumba: _ _ _ _ a, teapot: _ _ a _ _ _
        assert!(puzzle.word(0).is_revealed(2));
        assert!(puzzle.word(1).is_revealed(1));
        assert!(puzzle.word(3).is_revealed(4));
        assert!(puzzle.word(4).is_revealed(2));
        // odors has no 'a'
        assert_eq!(puzzle.word(2).unrevealed_count(), 4);

        assert_eq!(puzzle.guessed_letters(), &['a']);
        assert_eq!(puzzle.guessed_vowels(), 1);
        assert_eq!(puzzle.score(), 10);
    }

    #[test]
    fn miss_scores_nothing() {
        let config = ScoringConfig::default();
        let puzzle = fresh_puzzle().guess_letter('j', &config).unwrap();
        assert_eq!(puzzle.score(), 0);
        assert_eq!(puzzle.guessed_letters(), &['j']);
    }

    #[test]
    fn key_letter_only_occurrence_counts_as_miss() {
        // Fixture where 'c' exists solely as a key letter
        let content = PuzzleContent {
            seed_word: "crane".to_string(),
            cascade_word: "hides".to_string(),
            cascade_row: 1,
            column_words: [
                "chat".to_string(),
                "rides".to_string(),
                "adopt".to_string(),
                "nerve".to_string(),
                "estate".to_string(),
            ],
        };
        let config = ScoringConfig::default();
        let puzzle = Puzzle::from_content(&content).unwrap();

        // 'c' heads column 0 and appears nowhere past position 0
        let next = puzzle.guess_letter('c', &config).unwrap();
        assert_eq!(next.score(), 0);
    }

    #[test]
    fn streak_sequence_pays_escalating_bonuses() {
        let config = ScoringConfig::default();
        let mut puzzle = fresh_puzzle();

        // hit, hit, hit, miss, hit -> 10 + 20 + 35 + 0 + 10
        for letter in ['r', 'm', 'k', 'z', 'l'] {
            puzzle = puzzle.guess_letter(letter, &config).unwrap();
        }
        assert_eq!(puzzle.score(), 75);
    }

    #[test]
    fn duplicate_letter_rejected() {
        let config = ScoringConfig::default();
        let puzzle = fresh_puzzle().guess_letter('r', &config).unwrap();
        assert_eq!(
            puzzle.guess_letter('r', &config),
            Err(EngineError::LetterAlreadyGuessed('r'))
        );
    }

    #[test]
    fn uppercase_input_is_normalized() {
        let config = ScoringConfig::default();
        let puzzle = fresh_puzzle().guess_letter('R', &config).unwrap();
        assert_eq!(puzzle.guessed_letters(), &['r']);
    }

    #[test]
    fn non_letter_rejected() {
        let config = ScoringConfig::default();
        assert_eq!(
            fresh_puzzle().guess_letter('3', &config),
            Err(EngineError::NotALetter('3'))
        );
    }

    #[test]
    fn vowel_cap_enforced() {
        let config = ScoringConfig::default();
        let mut puzzle = fresh_puzzle();
        for vowel in ['a', 'e', 'i'] {
            puzzle = puzzle.guess_letter(vowel, &config).unwrap();
        }
        assert_eq!(puzzle.guessed_vowels(), MAX_VOWELS);
        assert_eq!(
            puzzle.guess_letter('o', &config),
            Err(EngineError::VowelLimitExceeded)
        );
        // Consonants still fine
        assert!(puzzle.guess_letter('r', &config).is_ok());
    }

    #[test]
    fn seventh_guess_transitions_automatically() {
        let config = ScoringConfig::default();
        let mut puzzle = fresh_puzzle();
        for letter in ['c', 'f', 'g', 'h', 'j', 'n'] {
            puzzle = puzzle.guess_letter(letter, &config).unwrap();
        }
        assert_eq!(puzzle.phase(), Phase::GuessingLetters);

        puzzle = puzzle.guess_letter('q', &config).unwrap();
        assert_eq!(puzzle.phase(), Phase::GuessingWords);
        assert_eq!(puzzle.guessed_letters().len(), MAX_LETTER_GUESSES);

        // Frozen blank counts match what was revealed (here: nothing)
        for word in puzzle.words() {
            assert_eq!(word.blanks_at_word_phase(), word.len() - 1);
        }
    }

    #[test]
    fn skip_requires_minimum_guesses() {
        let config = ScoringConfig::default();
        let mut puzzle = fresh_puzzle();
        assert_eq!(
            puzzle.skip_to_words(),
            Err(EngineError::SkipUnavailable { guessed: 0 })
        );

        for letter in ['r', 'm', 'k', 'l'] {
            puzzle = puzzle.guess_letter(letter, &config).unwrap();
        }
        let skipped = puzzle.skip_to_words().unwrap();
        assert_eq!(skipped.phase(), Phase::GuessingWords);
        // Skipping changes no score
        assert_eq!(skipped.score(), puzzle.score());
    }

    #[test]
    fn skip_freezes_blank_counts() {
        let config = ScoringConfig::default();
        let mut puzzle = fresh_puzzle();
        for letter in ['r', 'm', 'k', 'l'] {
            puzzle = puzzle.guess_letter(letter, &config).unwrap();
        }
        let skipped = puzzle.skip_to_words().unwrap();

        // slam: 'l' and 'm' revealed, only 'a' still hidden
        assert_eq!(skipped.word(0).blanks_at_word_phase(), 1);
        for (column, word) in skipped.words().iter().enumerate() {
            assert_eq!(
                word.blanks_at_word_phase(),
                word.unrevealed_count(),
                "column {column}"
            );
        }
    }

    #[test]
    fn fully_revealed_word_marked_auto_completed() {
        let config = ScoringConfig::default();
        let mut puzzle = fresh_puzzle();
        // slam: reveal l, a, m
        for letter in ['l', 'a', 'm'] {
            puzzle = puzzle.guess_letter(letter, &config).unwrap();
        }
        assert!(puzzle.word(0).is_auto_completed());
        assert!(puzzle.word(0).is_fully_revealed());
        assert!(!puzzle.word(1).is_auto_completed());
    }

    #[test]
    fn caps_hold_across_any_valid_sequence() {
        let config = ScoringConfig::default();
        let mut puzzle = fresh_puzzle();
        for letter in 'a'..='z' {
            if let Ok(next) = puzzle.guess_letter(letter, &config) {
                puzzle = next;
            }
            assert!(puzzle.guessed_letters().len() <= MAX_LETTER_GUESSES);
            assert!(puzzle.guessed_vowels() <= MAX_VOWELS);
            for word in puzzle.words() {
                assert!(word.is_revealed(0));
            }
        }
        assert_eq!(puzzle.hints_remaining(), MAX_HINTS);
    }
}
