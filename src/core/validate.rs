//! Guess format validation
//!
//! A guess is well-formed when it has exactly the expected number of characters
//! and every character is an ASCII lowercase letter. Validation fails closed:
//! malformed input yields `false`, never an error or a panic.

/// Word length used when the caller has no other preference
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Check that `guess` is a well-formed guess of `word_length` letters
///
/// Length is counted in characters, not bytes, so multi-byte input of the
/// right byte length is still rejected on length or on character class.
///
/// # Examples
/// ```
/// use wordle_rules::core::{validate, DEFAULT_WORD_LENGTH};
///
/// assert!(validate("prays", DEFAULT_WORD_LENGTH));
/// assert!(!validate("Prays", DEFAULT_WORD_LENGTH)); // uppercase
/// assert!(!validate("prayers", DEFAULT_WORD_LENGTH)); // too long
/// assert!(!validate("12345", DEFAULT_WORD_LENGTH)); // not letters
/// ```
#[must_use]
pub fn validate(guess: &str, word_length: usize) -> bool {
    let mut count = 0;

    for ch in guess.chars() {
        if !ch.is_ascii_lowercase() {
            return false;
        }
        count += 1;
    }

    count == word_length
}

/// Validate input that may be absent
///
/// `None` stands for "no value supplied" and is always rejected.
#[must_use]
pub fn validate_optional(guess: Option<&str>, word_length: usize) -> bool {
    guess.is_some_and(|g| validate(g, word_length))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_lowercase_word_of_expected_length() {
        assert!(validate("prays", DEFAULT_WORD_LENGTH));
        assert!(validate("crane", 5));
        assert!(validate("abc", 3));
    }

    #[test]
    fn rejects_uppercase() {
        assert!(!validate("Prays", DEFAULT_WORD_LENGTH));
        assert!(!validate("PRAYS", DEFAULT_WORD_LENGTH));
        assert!(!validate("prayS", DEFAULT_WORD_LENGTH));
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(!validate("prayers", DEFAULT_WORD_LENGTH));
        assert!(!validate("pray", DEFAULT_WORD_LENGTH));
        assert!(!validate("", DEFAULT_WORD_LENGTH));
    }

    #[test]
    fn rejects_non_alphabetic() {
        assert!(!validate("12345", DEFAULT_WORD_LENGTH));
        assert!(!validate("cran3", DEFAULT_WORD_LENGTH));
        assert!(!validate("cran ", DEFAULT_WORD_LENGTH));
        assert!(!validate("cra-e", DEFAULT_WORD_LENGTH));
    }

    #[test]
    fn rejects_non_ascii_letters() {
        // Five characters, but outside the ASCII alphabet
        assert!(!validate("crâne", DEFAULT_WORD_LENGTH));
        assert!(!validate("éclat", DEFAULT_WORD_LENGTH));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // "ü" is two bytes: four chars, five bytes
        assert!(!validate("übel", 5));
        assert!(!validate("übel", 4));
    }

    #[test]
    fn zero_length_only_matches_empty_input() {
        assert!(validate("", 0));
        assert!(!validate("a", 0));
    }

    #[test]
    fn absent_input_is_rejected() {
        assert!(!validate_optional(None, DEFAULT_WORD_LENGTH));
        assert!(validate_optional(Some("prays"), DEFAULT_WORD_LENGTH));
        assert!(!validate_optional(Some("Prays"), DEFAULT_WORD_LENGTH));
    }
}
