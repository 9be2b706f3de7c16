//! Word list loading utilities
//!
//! Loads custom word lists from a directory holding `words4.txt`,
//! `words5.txt` and `words6.txt`, one word per line; malformed entries are
//! skipped.

use std::fs;
use std::io;
use std::path::Path;

/// Load one list, keeping only well-formed words of the expected length
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
pub fn load_list<P: AsRef<Path>>(path: P, length: usize) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim().to_ascii_lowercase();
            if trimmed.len() == length && trimmed.bytes().all(|b| b.is_ascii_lowercase()) {
                Some(trimmed)
            } else {
                None
            }
        })
        .collect();

    Ok(words)
}

/// Load the three per-length lists from one directory
///
/// # Errors
///
/// Returns an I/O error if any of the three files cannot be read.
pub fn load_directory<P: AsRef<Path>>(dir: P) -> io::Result<[Vec<String>; 3]> {
    let dir = dir.as_ref();
    Ok([
        load_list(dir.join("words4.txt"), 4)?,
        load_list(dir.join("words5.txt"), 5)?,
        load_list(dir.join("words6.txt"), 6)?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_list_filters_by_length_and_case() {
        let dir = std::env::temp_dir().join("cascade-loader-test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("mixed.txt");

        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "slam\nSLAM\ntoolong\nab\n  clap  \n").unwrap();
        drop(file);

        let words = load_list(&path, 4).unwrap();
        assert_eq!(words, vec!["slam".to_string(), "slam".to_string(), "clap".to_string()]);

        fs::remove_file(path).ok();
    }

    #[test]
    fn load_list_missing_file_errors() {
        assert!(load_list("no-such-file.txt", 4).is_err());
    }
}
