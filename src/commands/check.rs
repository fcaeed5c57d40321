//! Single-guess check command
//!
//! Runs the core rules on one secret/guess pair without a game around it.

use crate::core::{Dictionary, Feedback, evaluate, validate};

/// Result of checking one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub guess: String,
    pub secret_length: usize,
    /// Guess follows the format rules for the secret's length
    pub well_formed: bool,
    pub in_dictionary: bool,
    /// Empty when the lengths differ
    pub feedback: Feedback,
}

/// Evaluate `guess` against `secret` and collect the rule checks
#[must_use]
pub fn check_guess(secret: &str, guess: &str, dictionary: &Dictionary) -> CheckResult {
    let secret_length = secret.chars().count();

    CheckResult {
        guess: guess.to_string(),
        secret_length,
        well_formed: validate(guess, secret_length),
        in_dictionary: dictionary.contains(guess),
        feedback: evaluate(secret, guess),
    }
}
