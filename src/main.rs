//! Cascade - CLI
//!
//! Daily word puzzle: five column words share their first letters with a
//! hidden seed word, and a bonus cascade word runs across one shared row.

use anyhow::Result;
use cascade::{
    commands::{generate_content, run_simple},
    core::Puzzle,
    engine::ScoringConfig,
    generator::WordBank,
    output::print_generated,
    wordlists::loader::load_directory,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "cascade",
    about = "Daily word-reveal puzzle with a hidden cascade word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Fixed RNG seed for reproducible puzzles
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Directory holding words4.txt, words5.txt and words6.txt (default: embedded lists)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based play without TUI)
    Simple,

    /// Generate one puzzle without playing it
    Generate {
        /// Emit the puzzle as JSON for the curation pipeline
        #[arg(long)]
        json: bool,
    },
}

/// Build the word bank from the -w flag, falling back to the embedded lists
fn load_bank(wordlist: Option<&PathBuf>) -> Result<WordBank> {
    match wordlist {
        Some(dir) => {
            let lists = load_directory(dir)?;
            let bank = WordBank::new(&lists[0], &lists[1], &lists[2]);
            if bank.is_empty() {
                anyhow::bail!("word lists in {} have an empty length class", dir.display());
            }
            Ok(bank)
        }
        None => Ok(WordBank::from_embedded()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let bank = load_bank(cli.wordlist.as_ref())?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(bank, cli.seed),
        Commands::Simple => run_simple_command(&bank, cli.seed),
        Commands::Generate { json } => run_generate_command(&bank, cli.seed, json),
    }
}

fn run_play_command(bank: WordBank, seed: Option<u64>) -> Result<()> {
    use cascade::interactive::{App, run_tui};

    let content = generate_content(&bank, seed)?;
    let puzzle = Puzzle::from_content(&content)?;
    let app = App::new(bank, puzzle);
    run_tui(app)
}

fn run_simple_command(bank: &WordBank, seed: Option<u64>) -> Result<()> {
    let content = generate_content(bank, seed)?;
    let puzzle = Puzzle::from_content(&content)?;
    run_simple(puzzle, &ScoringConfig::default()).map_err(|e| anyhow::anyhow!(e))
}

fn run_generate_command(bank: &WordBank, seed: Option<u64>, json: bool) -> Result<()> {
    let content = generate_content(bank, seed)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&content)?);
    } else {
        print_generated(&content);
    }

    Ok(())
}
