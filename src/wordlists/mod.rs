//! Curated word lists
//!
//! Provides embedded word lists compiled into the binary, one per column
//! length, plus a loader for custom lists.

mod embedded;
pub mod loader;

pub use embedded::{WORDS4, WORDS4_COUNT, WORDS5, WORDS5_COUNT, WORDS6, WORDS6_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_match_consts() {
        assert_eq!(WORDS4.len(), WORDS4_COUNT);
        assert_eq!(WORDS5.len(), WORDS5_COUNT);
        assert_eq!(WORDS6.len(), WORDS6_COUNT);
    }

    #[test]
    fn lists_are_nonempty() {
        assert!(!WORDS4.is_empty());
        assert!(!WORDS5.is_empty());
        assert!(!WORDS6.is_empty());
    }

    #[test]
    fn entries_have_declared_lengths() {
        for (list, length) in [(WORDS4, 4), (WORDS5, 5), (WORDS6, 6)] {
            for &word in list {
                assert_eq!(word.len(), length, "word {word:?}");
                assert!(
                    word.bytes().all(|b| b.is_ascii_lowercase()),
                    "word {word:?} contains non-lowercase chars"
                );
            }
        }
    }

    #[test]
    fn lists_hold_a_known_consistent_puzzle() {
        // sport / aroma at row 2 must stay generatable
        for word in ["slam"] {
            assert!(WORDS4.contains(&word));
        }
        for word in ["sport", "aroma", "parks", "odors", "rumba"] {
            assert!(WORDS5.contains(&word));
        }
        for word in ["teapot"] {
            assert!(WORDS6.contains(&word));
        }
    }
}
