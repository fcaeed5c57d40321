//! Game score calculation

/// Guess limit used when the caller has no other preference
pub const DEFAULT_MAX_GUESSES: i32 = 6;

/// Score a finished game
///
/// Fewer guesses score higher: solving in one guess yields `max_guesses`,
/// solving on the last allowed guess yields 1. Out-of-range counts
/// (zero, negative, or beyond the limit) score 0.
///
/// # Examples
/// ```
/// use wordle_rules::core::{score, DEFAULT_MAX_GUESSES};
///
/// assert_eq!(score(1, DEFAULT_MAX_GUESSES), 6);
/// assert_eq!(score(6, DEFAULT_MAX_GUESSES), 1);
/// assert_eq!(score(7, DEFAULT_MAX_GUESSES), 0);
/// ```
#[must_use]
pub const fn score(guesses_used: i32, max_guesses: i32) -> i32 {
    if guesses_used <= 0 || guesses_used > max_guesses {
        return 0;
    }
    max_guesses - guesses_used + 1
}
