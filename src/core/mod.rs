//! Core Wordle rules
//!
//! Four independent, pure operations: guess validation, guess evaluation,
//! dictionary membership and scoring. None of them fail: invalid input maps
//! to `false`, empty feedback or a score of 0. All are safe to call from any
//! number of threads at once.

mod dictionary;
mod feedback;
mod score;
mod validate;
mod word;

pub use dictionary::{Dictionary, is_valid_word};
pub use feedback::{Color, Feedback, FeedbackEntry, evaluate};
pub use score::{DEFAULT_MAX_GUESSES, score};
pub use validate::{DEFAULT_WORD_LENGTH, validate, validate_optional};
pub use word::{Word, WordError};
