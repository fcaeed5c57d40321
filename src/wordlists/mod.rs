//! Word lists for Wordle games
//!
//! Provides the bundled dictionary compiled into the binary, plus loading of
//! custom lists from disk.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::WordListError;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DEFAULT_WORD_LENGTH, validate};

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_valid_guesses() {
        for &word in WORDS {
            assert!(
                validate(word, DEFAULT_WORD_LENGTH),
                "Word '{word}' is not five lowercase letters"
            );
        }
    }

    #[test]
    fn words_are_unique() {
        let unique: std::collections::HashSet<_> = WORDS.iter().collect();
        assert_eq!(unique.len(), WORDS.len());
    }

    #[test]
    fn common_words_present() {
        for word in ["crane", "water", "slate", "apple"] {
            assert!(WORDS.contains(&word), "missing {word}");
        }
    }
}
