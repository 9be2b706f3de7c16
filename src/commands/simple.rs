//! Simple interactive CLI mode
//!
//! Text-based play without the TUI: each line of input maps to one engine
//! action against the current puzzle snapshot.

use crate::core::{Phase, Puzzle, PuzzleWord};
use crate::engine::{Action, ScoringConfig, current_streak};
use crate::output::{print_board, print_breakdown, print_status};
use std::io::{self, Write};

/// Run the simple line-mode game loop
///
/// # Errors
///
/// Returns an error if reading user input fails.
pub fn run_simple(mut puzzle: Puzzle, config: &ScoringConfig) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════╗");
    println!("║           CASCADE - Line Mode                ║");
    println!("╚══════════════════════════════════════════════╝");
    println!("\nFive words share their first letters with a hidden seed word.");
    println!("A bonus cascade word runs across the marked row.");
    println!("Guess letters first, then fill in the blanks per word.\n");

    loop {
        print_board(&puzzle);
        print_status(&puzzle);

        match puzzle.phase() {
            Phase::GuessingLetters => {
                let line = get_user_input("Letter (or 'skip', 'quit')")?;
                match line.as_str() {
                    "quit" => return Ok(()),
                    "skip" => match puzzle.apply(&Action::SkipToWords, config) {
                        Ok(next) => puzzle = next,
                        Err(err) => println!("{err}"),
                    },
                    other => {
                        let mut chars = other.chars();
                        match (chars.next(), chars.next()) {
                            (Some(letter), None) => {
                                puzzle = guess_one(&puzzle, letter, config);
                            }
                            _ => println!("Enter a single letter."),
                        }
                    }
                }
            }
            Phase::GuessingWords => {
                let line =
                    get_user_input("Command (word <n> <letters> | hint <n> | submit | quit)")?;
                let tokens: Vec<&str> = line.split_whitespace().collect();
                match tokens.as_slice() {
                    ["quit"] => return Ok(()),
                    ["submit"] => match puzzle.apply(&Action::SubmitWords, config) {
                        Ok(next) => puzzle = next,
                        Err(err) => println!("{err}"),
                    },
                    ["hint", index] => match parse_index(index) {
                        Some(word) => {
                            puzzle = hint_first_blank(&puzzle, word, config);
                        }
                        None => println!("Word number must be 1-5."),
                    },
                    ["word", index, letters] => match parse_index(index) {
                        Some(word) => {
                            puzzle = type_word(&puzzle, word, letters, config);
                        }
                        None => println!("Word number must be 1-5."),
                    },
                    _ => println!("Unknown command."),
                }
            }
            Phase::Complete => {
                print_breakdown(&puzzle, config);
                return Ok(());
            }
        }
    }
}

fn guess_one(puzzle: &Puzzle, letter: char, config: &ScoringConfig) -> Puzzle {
    match puzzle.apply(&Action::GuessLetter(letter), config) {
        Ok(next) => {
            let gained = next.score() - puzzle.score();
            if gained > 0 {
                let streak = current_streak(&next);
                println!("Hit! +{gained} (streak x{streak})");
            } else {
                println!("Miss - streak reset.");
            }
            next
        }
        Err(err) => {
            println!("{err}");
            puzzle.clone()
        }
    }
}

fn hint_first_blank(puzzle: &Puzzle, word: usize, config: &ScoringConfig) -> Puzzle {
    let Some(position) = first_blank(puzzle.word(word)) else {
        println!("That word has no blanks left.");
        return puzzle.clone();
    };
    match puzzle.apply(&Action::RevealHint { word, position }, config) {
        Ok(next) => next,
        Err(err) => {
            println!("{err}");
            puzzle.clone()
        }
    }
}

fn type_word(puzzle: &Puzzle, word: usize, letters: &str, config: &ScoringConfig) -> Puzzle {
    let input = match build_input(puzzle.word(word), letters) {
        Ok(input) => input,
        Err(message) => {
            println!("{message}");
            return puzzle.clone();
        }
    };

    let select = Action::SelectWord(word);
    let update = Action::UpdateInput { word, input };
    let applied = puzzle
        .apply(&select, config)
        .and_then(|next| next.apply(&update, config));
    match applied {
        Ok(next) => next,
        Err(err) => {
            println!("{err}");
            puzzle.clone()
        }
    }
}

/// Map a typed full word onto the input slots, skipping revealed positions
fn build_input(word: &PuzzleWord, letters: &str) -> Result<Vec<Option<char>>, String> {
    if letters.len() != word.len() {
        return Err(format!(
            "Expected {} letters, got {}.",
            word.len(),
            letters.len()
        ));
    }

    Ok(letters
        .chars()
        .enumerate()
        .map(|(position, letter)| {
            if word.is_revealed(position) {
                None
            } else {
                Some(letter)
            }
        })
        .collect())
}

fn first_blank(word: &PuzzleWord) -> Option<usize> {
    (0..word.len()).find(|&position| !word.is_revealed(position))
}

fn parse_index(token: &str) -> Option<usize> {
    token
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=5).contains(n))
        .map(|n| n - 1)
}

fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("\n{prompt}: ");
    io::stdout()
        .flush()
        .map_err(|e| format!("Failed to flush stdout: {e}"))?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| format!("Failed to read input: {e}"))?;

    Ok(input.trim().to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PuzzleContent;

    fn word_phase_puzzle() -> Puzzle {
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
        let config = ScoringConfig::default();
        let mut puzzle = Puzzle::from_content(&content).unwrap();
        for letter in ['c', 'f', 'g', 'h'] {
            puzzle = puzzle.guess_letter(letter, &config).unwrap();
        }
        puzzle.skip_to_words().unwrap()
    }

    #[test]
    fn build_input_skips_revealed_positions() {
        let puzzle = word_phase_puzzle();
        let input = build_input(puzzle.word(0), "slam").unwrap();
        assert_eq!(input, vec![None, Some('l'), Some('a'), Some('m')]);
    }

    #[test]
    fn build_input_rejects_wrong_length() {
        let puzzle = word_phase_puzzle();
        assert!(build_input(puzzle.word(0), "slams").is_err());
    }

    #[test]
    fn first_blank_finds_earliest_hidden_position() {
        let puzzle = word_phase_puzzle();
        assert_eq!(first_blank(puzzle.word(0)), Some(1));

        let hinted = puzzle.reveal_hint(0, 1).unwrap();
        assert_eq!(first_blank(hinted.word(0)), Some(2));
    }

    #[test]
    fn parse_index_is_one_based_and_bounded() {
        assert_eq!(parse_index("1"), Some(0));
        assert_eq!(parse_index("5"), Some(4));
        assert_eq!(parse_index("0"), None);
        assert_eq!(parse_index("6"), None);
        assert_eq!(parse_index("x"), None);
    }
}
