//! Cascade evaluator
//!
//! The cascade word's letters are a projection of the column words at the
//! shared row, so its fate is decided entirely by the column grades:
//! correctness of all five columns is both necessary and sufficient.

use super::scoring::{self, ScoringConfig};
use crate::core::Puzzle;

/// Settle the cascade outcome after all words are graded
///
/// Exactly one of `cascade_awarded` / `cascade_locked` ends up set; the
/// flat bonus lands only when awarded.
pub(crate) fn evaluate(puzzle: &mut Puzzle, config: &ScoringConfig) {
    let all_correct = puzzle.words.iter().all(|word| word.correct);

    puzzle.cascade_awarded = all_correct;
    puzzle.cascade_locked = !all_correct;

    if all_correct {
        puzzle.score = scoring::bump(puzzle.score, config.cascade_bonus, config);
    }
}
