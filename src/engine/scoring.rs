//! Score calculator
//!
//! Pure arithmetic over graded state. The running `Puzzle::score` is
//! authoritative for O(1) reads; [`calculate_final_score`] recomputes the
//! same total from first principles so any divergence between the two is a
//! defect a test can catch.

use crate::core::{Puzzle, PuzzleWord, WORD_COUNT};

/// Every balance knob in one place
///
/// The engine never reads a scoring constant from anywhere else, so a
/// simulation harness can rebalance the game without touching engine code.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringConfig {
    /// Base word score per column
    pub base_scores: [i64; WORD_COUNT],
    /// Bonus for the Nth consecutive hit, indexed by streak length (capped)
    pub streak_bonuses: [i64; 7],
    /// Multiplier gained per blank left when the word phase begins
    pub blank_multiplier_step: f64,
    /// Ceiling on the blank multiplier
    pub multiplier_cap: f64,
    /// Multiplier for words fully revealed during the letter phase
    pub auto_complete_multiplier: f64,
    /// Flat bonus on top of the auto-complete multiplier
    pub auto_complete_bonus: i64,
    /// Flat penalty for an incorrect word guess
    pub wrong_guess_penalty: i64,
    /// Multiplier deduction per hint, in hint order; first hint free
    pub hint_costs: Vec<f64>,
    /// Flat bonus when every column word is correct
    pub cascade_bonus: i64,
    /// Clamp the running score at zero after every change
    pub clamp_at_zero: bool,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_scores: [100, 150, 150, 150, 200],
            streak_bonuses: [0, 10, 20, 35, 50, 60, 70],
            blank_multiplier_step: 0.4,
            multiplier_cap: 2.5,
            auto_complete_multiplier: 2.0,
            auto_complete_bonus: 50,
            wrong_guess_penalty: 25,
            hint_costs: vec![0.0, 0.35, 0.5],
            cascade_bonus: 500,
            clamp_at_zero: false,
        }
    }
}

impl ScoringConfig {
    /// Bonus for a hit that extends the streak to `streak`
    #[must_use]
    pub fn streak_bonus(&self, streak: usize) -> i64 {
        self.streak_bonuses[streak.min(self.streak_bonuses.len() - 1)]
    }

    /// Total multiplier deduction for a word's hint usage
    ///
    /// Costs escalate per hint; usage beyond the table repeats the last
    /// entry.
    #[must_use]
    pub fn hint_deduction(&self, hints_used: usize) -> f64 {
        let last = self.hint_costs.last().copied().unwrap_or(0.0);
        (0..hints_used)
            .map(|i| self.hint_costs.get(i).copied().unwrap_or(last))
            .sum()
    }
}

/// Fold one delta into a running score, honoring the zero clamp
#[must_use]
pub(crate) fn bump(score: i64, delta: i64, config: &ScoringConfig) -> i64 {
    let next = score + delta;
    if config.clamp_at_zero { next.max(0) } else { next }
}

/// Points for one correctly guessed column word
///
/// Auto-completed words (zero blanks when the word phase began) take the
/// flat doubled path. Everything else earns the blank multiplier, capped,
/// with the hint deduction taken off the capped value and the result never
/// dropping below the base score.
#[must_use]
pub fn word_score(word: &PuzzleWord, column: usize, config: &ScoringConfig) -> i64 {
    let base = config.base_scores[column] as f64;

    if word.is_auto_completed() || word.blanks_at_word_phase() == 0 {
        return (base * config.auto_complete_multiplier).round() as i64
            + config.auto_complete_bonus;
    }

    let raw = 1.0 + config.blank_multiplier_step * word.blanks_at_word_phase() as f64;
    let capped = raw.min(config.multiplier_cap);
    let effective = (capped - config.hint_deduction(word.hints_used())).max(1.0);

    (base * effective).round() as i64
}

/// Whether a guessed letter counts as a hit
///
/// Position 0 letters are pre-revealed key letters and never count.
#[must_use]
pub(crate) fn letter_is_hit(puzzle: &Puzzle, letter: char) -> bool {
    puzzle
        .words()
        .iter()
        .any(|word| word.word().bytes().skip(1).any(|b| b as char == letter))
}

/// The guessed-letter history with each guess marked hit or miss
#[must_use]
pub fn guess_history(puzzle: &Puzzle) -> Vec<(char, bool)> {
    puzzle
        .guessed_letters()
        .iter()
        .map(|&letter| (letter, letter_is_hit(puzzle, letter)))
        .collect()
}

/// Length of the current hit run, newest guess last
///
/// The streak is a property of the ordered hit/miss history, never stored;
/// seven guesses make the replay trivial.
#[must_use]
pub fn current_streak(puzzle: &Puzzle) -> usize {
    puzzle
        .guessed_letters()
        .iter()
        .rev()
        .take_while(|&&letter| letter_is_hit(puzzle, letter))
        .count()
}

/// Recompute the final score from scratch
///
/// Replays the guessed-letter history for streak bonuses, then folds in the
/// graded words in column order and the cascade outcome, applying deltas in
/// the same order the engine did so the zero clamp agrees too. Must equal
/// `puzzle.score()` once the puzzle is complete.
#[must_use]
pub fn calculate_final_score(puzzle: &Puzzle, config: &ScoringConfig) -> i64 {
    let mut total = 0;
    let mut streak = 0;

    for &letter in puzzle.guessed_letters() {
        if letter_is_hit(puzzle, letter) {
            streak += 1;
            total = bump(total, config.streak_bonus(streak), config);
        } else {
            streak = 0;
        }
    }

    for (column, word) in puzzle.words().iter().enumerate() {
        if !word.is_guessed() {
            continue;
        }
        if word.is_correct() {
            total = bump(total, word_score(word, column, config), config);
        } else {
            total = bump(total, -config.wrong_guess_penalty, config);
        }
    }

    if puzzle.cascade_awarded() {
        total = bump(total, config.cascade_bonus, config);
    }

    total
}

/// One row of the presentation-only score breakdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakdownRow {
    pub label: String,
    pub detail: String,
    pub points: i64,
}

/// Enumerate one row per column word plus the cascade row
///
/// A view over already-graded state, not a scoring authority; ungraded
/// words show zero points.
#[must_use]
pub fn score_breakdown(puzzle: &Puzzle, config: &ScoringConfig) -> Vec<BreakdownRow> {
    let mut rows = Vec::with_capacity(WORD_COUNT + 1);

    for (column, word) in puzzle.words().iter().enumerate() {
        let label = word.word().to_uppercase();
        let (detail, points) = if !word.is_guessed() {
            ("not graded".to_string(), 0)
        } else if !word.is_correct() {
            ("missed".to_string(), -config.wrong_guess_penalty)
        } else if word.is_auto_completed() {
            (
                "auto-completed".to_string(),
                word_score(word, column, config),
            )
        } else {
            let mut detail = format!(
                "{} blank{} held",
                word.blanks_at_word_phase(),
                if word.blanks_at_word_phase() == 1 { "" } else { "s" },
            );
            if word.hints_used() > 0 {
                detail.push_str(&format!(
                    ", {} hint{}",
                    word.hints_used(),
                    if word.hints_used() == 1 { "" } else { "s" },
                ));
            }
            (detail, word_score(word, column, config))
        };

        rows.push(BreakdownRow {
            label,
            detail,
            points,
        });
    }

    let (detail, points) = if puzzle.cascade_awarded() {
        ("cascade solved".to_string(), config.cascade_bonus)
    } else if puzzle.cascade_locked() {
        ("cascade locked".to_string(), 0)
    } else {
        ("cascade pending".to_string(), 0)
    };

    rows.push(BreakdownRow {
        label: puzzle.cascade().word().to_uppercase(),
        detail,
        points,
    });

    rows
}
