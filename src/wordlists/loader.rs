//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use super::WORDS;
use crate::core::validate;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors raised while loading a word list
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("Could not read word list '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Word list '{}' contains no {word_length}-letter words", .path.display())]
    Empty { path: PathBuf, word_length: usize },

    #[error("The bundled word list has no {0}-letter words; pass one with --wordlist")]
    NoBundledWords(usize),
}

/// Load words from a file
///
/// One word per line. Blank lines and lines starting with `#` are skipped,
/// entries are trimmed and lowercased, and anything that is still not a
/// well-formed `word_length`-letter word is dropped.
///
/// # Errors
///
/// Returns `WordListError::Io` if the file cannot be read, and
/// `WordListError::Empty` if no usable words remain.
///
/// # Examples
/// ```no_run
/// use wordle_rules::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(
    path: P,
    word_length: usize,
) -> Result<Vec<String>, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_word_list(&content, word_length);
    if words.is_empty() {
        return Err(WordListError::Empty {
            path: path.to_path_buf(),
            word_length,
        });
    }

    debug!(path = %path.display(), count = words.len(), "loaded word list");
    Ok(words)
}

/// Parse word list text, keeping well-formed words only
#[must_use]
pub fn parse_word_list(content: &str, word_length: usize) -> Vec<String> {
    let mut skipped = 0usize;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                return None;
            }

            let word = trimmed.to_lowercase();
            if validate(&word, word_length) {
                Some(word)
            } else {
                skipped += 1;
                None
            }
        })
        .collect();

    if skipped > 0 {
        warn!(skipped, word_length, "skipped malformed word list entries");
    }

    words
}

/// Bundled words of the requested length
///
/// # Errors
///
/// Returns `WordListError::NoBundledWords` if none of the bundled words have
/// `word_length` letters.
pub fn load_bundled(word_length: usize) -> Result<Vec<String>, WordListError> {
    let words: Vec<String> = WORDS
        .iter()
        .filter(|w| validate(w, word_length))
        .map(|&w| w.to_string())
        .collect();

    if words.is_empty() {
        return Err(WordListError::NoBundledWords(word_length));
    }

    debug!(count = words.len(), word_length, "using bundled word list");
    Ok(words)
}

/// Convert embedded string slice to an owned word vector
///
/// # Examples
/// ```
/// use wordle_rules::wordlists::loader::words_from_slice;
/// use wordle_rules::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_words() {
        let input = &["crane", "slate", "irate"];
        let words = words_from_slice(input);

        assert_eq!(words, vec!["crane", "slate", "irate"]);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn parse_skips_comments_blanks_and_malformed() {
        let content = "# header\ncrane\n\n  Slate  \ntoolong\nab3de\nirate\n";
        let words = parse_word_list(content, 5);

        assert_eq!(words, vec!["crane", "slate", "irate"]);
    }

    #[test]
    fn parse_respects_word_length() {
        let content = "cat\ncrane\ndog\n";
        assert_eq!(parse_word_list(content, 3), vec!["cat", "dog"]);
        assert_eq!(parse_word_list(content, 5), vec!["crane"]);
    }

    #[test]
    fn bundled_default_length_keeps_every_word() {
        let words = load_bundled(5).unwrap();
        assert_eq!(words.len(), WORDS.len());
    }

    #[test]
    fn bundled_other_length_is_an_error() {
        let err = load_bundled(6).unwrap_err();
        assert!(matches!(err, WordListError::NoBundledWords(6)));
        assert!(err.to_string().contains("--wordlist"));
    }

    #[test]
    fn load_from_file_reads_words() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "crane\nWATER\nnope").unwrap();

        let words = load_from_file(file.path(), 5).unwrap();
        assert_eq!(words, vec!["crane", "water"]);
    }

    #[test]
    fn load_from_file_without_usable_words_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# nothing here\nabc").unwrap();

        let err = load_from_file(file.path(), 5).unwrap_err();
        assert!(matches!(err, WordListError::Empty { word_length: 5, .. }));
    }

    #[test]
    fn load_from_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");

        let err = load_from_file(&missing, 5).unwrap_err();
        assert!(matches!(err, WordListError::Io { .. }));
        assert!(err.to_string().contains("missing.txt"));
    }
}
