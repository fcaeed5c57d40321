//! Wordle word representation
//!
//! A `Word` is a guess or secret that has already passed format validation.

use super::validate::{DEFAULT_WORD_LENGTH, validate};
use std::fmt;
use thiserror::Error;

/// A validated, immutable Wordle word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly {expected} letters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("Word must contain only lowercase ASCII letters: {0:?}")]
    InvalidCharacters(String),
}

impl Word {
    /// Create a word of the default length
    ///
    /// # Errors
    /// Returns `WordError` if the text is not five lowercase ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_rules::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("Crane").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        Self::with_length(text, DEFAULT_WORD_LENGTH)
    }

    /// Create a word of a specific length
    ///
    /// # Errors
    /// Returns `WordError` if the text has the wrong number of characters or
    /// contains anything other than lowercase ASCII letters.
    pub fn with_length(text: impl Into<String>, length: usize) -> Result<Self, WordError> {
        let text = text.into();

        if validate(&text, length) {
            return Ok(Self { text });
        }

        let actual = text.chars().count();
        if actual == length {
            Err(WordError::InvalidCharacters(text))
        } else {
            Err(WordError::InvalidLength {
                expected: length,
                actual,
            })
        }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
    }

    #[test]
    fn word_creation_uppercase_rejected() {
        assert_eq!(
            Word::new("CRANE"),
            Err(WordError::InvalidCharacters("CRANE".to_string()))
        );
        assert!(Word::new("CrAnE").is_err());
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new("too long"),
            Err(WordError::InvalidLength {
                expected: 5,
                actual: 8
            })
        ));
        assert!(matches!(
            Word::new("shrt"),
            Err(WordError::InvalidLength { actual: 4, .. })
        ));
        assert!(matches!(
            Word::new(""),
            Err(WordError::InvalidLength { actual: 0, .. })
        ));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("cran3").is_err()); // Number
        assert!(Word::new("cran ").is_err()); // Space
        assert!(Word::new("cran!").is_err()); // Punctuation
    }

    #[test]
    fn word_custom_length() {
        let word = Word::with_length("elephant", 8).unwrap();
        assert_eq!(word.text(), "elephant");
        assert!(Word::with_length("elephant", 5).is_err());
    }

    #[test]
    fn word_display_and_error_messages() {
        let word = Word::new("crane").unwrap();
        assert_eq!(format!("{word}"), "crane");

        let err = Word::new("shrt").unwrap_err();
        assert_eq!(err.to_string(), "Word must be exactly 5 letters, got 4");
    }
}
