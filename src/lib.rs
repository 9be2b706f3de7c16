//! Cascade
//!
//! A daily word-reveal puzzle engine. Five column words share their first
//! letters with a hidden seed word, and a bonus cascade word runs across one
//! shared row. Players spend a small letter-guess budget, then fill in the
//! remaining blanks word by word.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use cascade::commands::generate_content;
//! use cascade::core::Puzzle;
//! use cascade::engine::{Action, ScoringConfig};
//! use cascade::generator::WordBank;
//!
//! let bank = WordBank::from_embedded();
//! let content = generate_content(&bank, Some(7)).unwrap();
//! let puzzle = Puzzle::from_content(&content).unwrap();
//!
//! // Every move is a pure transition: apply an action, keep the new value
//! let config = ScoringConfig::default();
//! let puzzle = puzzle.apply(&Action::GuessLetter('r'), &config).unwrap();
//! println!("score: {}", puzzle.score());
//! ```

// Core domain types
pub mod core;

// Pure game-state transitions and scoring
pub mod engine;

// Puzzle generation
pub mod generator;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
