//! Procedural puzzle generation
//!
//! Builds curated-content shaped puzzles out of the word bank: pick a
//! cascade word and a row, then search for a seed word whose letters can all
//! head a column word carrying the right cascade letter at that row.

use crate::core::{PuzzleContent, WORD_COUNT};
use rand::Rng;
use rand::seq::SliceRandom;
use rustc_hash::FxHashMap;
use std::fmt;

/// Length class per column
const LEN_INDEX: [usize; WORD_COUNT] = [0, 1, 1, 1, 2];

/// Why generation failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    EmptyBank,
    NoConsistentPuzzle,
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyBank => write!(f, "Word bank has an empty length class"),
            Self::NoConsistentPuzzle => {
                write!(f, "Word bank admits no consistent puzzle")
            }
        }
    }
}

impl std::error::Error for GeneratorError {}

/// Word lists indexed for column-constraint lookup
///
/// Each length class carries a map from `(first letter, row, row letter)`
/// to the words satisfying that pair of fixed positions.
pub struct WordBank {
    lists: [Vec<String>; 3],
    by_constraint: [FxHashMap<(u8, usize, u8), Vec<usize>>; 3],
}

impl WordBank {
    /// Build a bank from raw word lists, skipping malformed entries
    #[must_use]
    pub fn new<S: AsRef<str>>(words4: &[S], words5: &[S], words6: &[S]) -> Self {
        let lists: [Vec<String>; 3] = [
            clean_list(words4, 4),
            clean_list(words5, 5),
            clean_list(words6, 6),
        ];

        let by_constraint = std::array::from_fn(|class| {
            let mut map: FxHashMap<(u8, usize, u8), Vec<usize>> = FxHashMap::default();
            for (index, word) in lists[class].iter().enumerate() {
                let bytes = word.as_bytes();
                for row in 1..=3 {
                    map.entry((bytes[0], row, bytes[row]))
                        .or_default()
                        .push(index);
                }
            }
            map
        });

        Self {
            lists,
            by_constraint,
        }
    }

    /// Bank over the embedded curated lists
    #[must_use]
    pub fn from_embedded() -> Self {
        use crate::wordlists::{WORDS4, WORDS5, WORDS6};
        Self::new(WORDS4, WORDS5, WORDS6)
    }

    /// Word counts per length class
    #[must_use]
    pub fn sizes(&self) -> [usize; 3] {
        std::array::from_fn(|class| self.lists[class].len())
    }

    /// Whether any length class is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lists.iter().any(Vec::is_empty)
    }

    fn candidates(&self, column: usize, first: u8, row: usize, row_letter: u8) -> Option<&[usize]> {
        self.by_constraint[LEN_INDEX[column]]
            .get(&(first, row, row_letter))
            .map(Vec::as_slice)
    }
}

fn clean_list<S: AsRef<str>>(words: &[S], length: usize) -> Vec<String> {
    words
        .iter()
        .map(AsRef::as_ref)
        .filter(|w| w.len() == length && w.bytes().all(|b| b.is_ascii_lowercase()))
        .map(ToString::to_string)
        .collect()
}

/// Generate one consistent puzzle from the bank
///
/// The search order over cascade words, rows and seed words is shuffled by
/// `rng`, so a seeded generator reproduces its puzzle exactly.
///
/// # Errors
/// Returns [`GeneratorError`] when a length class is empty or no
/// seed/cascade/row combination lines up over the bank.
pub fn generate(bank: &WordBank, rng: &mut impl Rng) -> Result<PuzzleContent, GeneratorError> {
    if bank.is_empty() {
        return Err(GeneratorError::EmptyBank);
    }

    let five = &bank.lists[1];
    let mut cascade_order: Vec<usize> = (0..five.len()).collect();
    cascade_order.shuffle(rng);
    let mut seed_order: Vec<usize> = (0..five.len()).collect();
    seed_order.shuffle(rng);
    let mut rows = [1, 2, 3];
    rows.shuffle(rng);

    for &cascade_index in &cascade_order {
        let cascade = five[cascade_index].as_bytes();

        for &row in &rows {
            // Which first letters can head each column for this cascade/row
            let mut viable_firsts = [[false; 26]; WORD_COUNT];
            let mut feasible = true;

            for column in 0..WORD_COUNT {
                let mut any = false;
                for first in 0..26u8 {
                    if bank
                        .candidates(column, b'a' + first, row, cascade[column])
                        .is_some()
                    {
                        viable_firsts[column][first as usize] = true;
                        any = true;
                    }
                }
                if !any {
                    feasible = false;
                    break;
                }
            }
            if !feasible {
                continue;
            }

            for &seed_index in &seed_order {
                let seed = five[seed_index].as_bytes();
                let fits = (0..WORD_COUNT)
                    .all(|column| viable_firsts[column][(seed[column] - b'a') as usize]);
                if !fits {
                    continue;
                }

                return Ok(assemble(bank, seed, cascade, row, rng));
            }
        }
    }

    Err(GeneratorError::NoConsistentPuzzle)
}

/// Pick one column word per candidate list and package the content
fn assemble(
    bank: &WordBank,
    seed: &[u8],
    cascade: &[u8],
    row: usize,
    rng: &mut impl Rng,
) -> PuzzleContent {
    let column_words = std::array::from_fn(|column| {
        let candidates = bank
            .candidates(column, seed[column], row, cascade[column])
            .expect("feasibility checked for every column");
        let pick = candidates[rng.random_range(0..candidates.len())];
        bank.lists[LEN_INDEX[column]][pick].clone()
    });

    let content = PuzzleContent {
        seed_word: String::from_utf8_lossy(seed).into_owned(),
        cascade_word: String::from_utf8_lossy(cascade).into_owned(),
        cascade_row: row,
        column_words,
    };
    debug_assert!(content.validate().is_ok());
    content
}
