//! Build script to generate embedded word lists
//!
//! Reads one curated word list per column length and generates Rust source
//! code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_word_list(
        "data/words4.txt",
        &Path::new(&out_dir).join("words4.rs"),
        "WORDS4",
        4,
        "Curated 4-letter words (column 0)",
    );

    generate_word_list(
        "data/words5.txt",
        &Path::new(&out_dir).join("words5.rs"),
        "WORDS5",
        5,
        "Curated 5-letter words (columns 1-3, seed and cascade words)",
    );

    generate_word_list(
        "data/words6.txt",
        &Path::new(&out_dir).join("words6.rs"),
        "WORDS6",
        6,
        "Curated 6-letter words (column 4)",
    );

    // Rebuild if word lists change
    println!("cargo:rerun-if-changed=data/words4.txt");
    println!("cargo:rerun-if-changed=data/words5.txt");
    println!("cargo:rerun-if-changed=data/words6.txt");
}

fn generate_word_list(
    input_path: &str,
    output_path: &Path,
    const_name: &str,
    expected_len: usize,
    doc_comment: &str,
) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        assert!(
            word.len() == expected_len && word.chars().all(|c| c.is_ascii_lowercase()),
            "{input_path}: bad entry {word:?}, expected {expected_len} lowercase letters"
        );
        writeln!(output, "    \"{word}\",").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
