//! Guess evaluation and feedback representation
//!
//! Feedback assigns one color to every letter of a guess:
//! - Green: letter matches the secret at the same position
//! - Yellow: letter occurs elsewhere in the secret and has not been used up
//! - Gray: no unused occurrence of the letter remains in the secret

use rustc_hash::FxHashMap;
use std::fmt;
use tracing::trace;

/// Color assigned to a single guess letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Green,
    Yellow,
    Gray,
}

impl Color {
    /// Square emoji used when sharing results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Green => '🟩',
            Self::Yellow => '🟨',
            Self::Gray => '⬜',
        }
    }

    /// Lowercase color name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Gray => "gray",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A guess letter paired with its color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackEntry {
    pub letter: char,
    pub color: Color,
}

impl FeedbackEntry {
    #[inline]
    #[must_use]
    pub const fn new(letter: char, color: Color) -> Self {
        Self { letter, color }
    }
}

/// Per-position feedback for a guess, in guess order
///
/// An empty `Feedback` means the guess and secret lengths differed and
/// nothing could be evaluated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<FeedbackEntry>);

impl Feedback {
    /// Number of entries (equals the guess length, or 0 on a length mismatch)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the lengths mismatched and no feedback was produced
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in guess order
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[FeedbackEntry] {
        &self.0
    }

    /// Iterate entries in guess order
    #[inline]
    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, FeedbackEntry> {
        self.0.iter()
    }

    /// Colors in guess order
    pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
        self.0.iter().map(|entry| entry.color)
    }

    /// True when every position is green
    ///
    /// Empty feedback is never solved.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.0.is_empty() && self.colors().all(|c| c == Color::Green)
    }

    /// Count positions with the given color
    #[must_use]
    pub fn count(&self, color: Color) -> usize {
        self.colors().filter(|&c| c == color).count()
    }

    /// Convert feedback to an emoji string like "🟩🟩⬜🟨🟨"
    ///
    /// # Examples
    /// ```
    /// use wordle_rules::core::evaluate;
    ///
    /// let feedback = evaluate("water", "waste");
    /// assert_eq!(feedback.to_emoji(), "🟩🟩⬜🟨🟨");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.colors().map(Color::emoji).collect()
    }
}

impl<'a> IntoIterator for &'a Feedback {
    type Item = &'a FeedbackEntry;
    type IntoIter = std::slice::Iter<'a, FeedbackEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Evaluate `guess` against `secret`
///
/// Implements the two-pass Wordle rules, including duplicate letters:
/// 1. First pass: exact position matches are green and leave the pool
/// 2. Second pass, left to right: a letter still in the pool is yellow and
///    consumes one occurrence; anything else is gray
///
/// Returns empty feedback when the character lengths differ.
///
/// # Examples
/// ```
/// use wordle_rules::core::{evaluate, Color};
///
/// let feedback = evaluate("water", "waste");
/// let colors: Vec<Color> = feedback.colors().collect();
/// assert_eq!(
///     colors,
///     [Color::Green, Color::Green, Color::Gray, Color::Yellow, Color::Yellow]
/// );
///
/// assert!(evaluate("water", "waters").is_empty());
/// ```
#[must_use]
pub fn evaluate(secret: &str, guess: &str) -> Feedback {
    let secret: Vec<char> = secret.chars().collect();
    let guess: Vec<char> = guess.chars().collect();

    if secret.len() != guess.len() {
        trace!(
            secret_len = secret.len(),
            guess_len = guess.len(),
            "length mismatch, no feedback"
        );
        return Feedback::default();
    }

    // None marks a position that is not resolved yet
    let mut colors: Vec<Option<Color>> = vec![None; guess.len()];
    let mut available: FxHashMap<char, usize> = FxHashMap::default();

    // First pass: greens, and pool the secret letters they did not consume
    for (i, (&g, &s)) in guess.iter().zip(&secret).enumerate() {
        if g == s {
            colors[i] = Some(Color::Green);
        } else {
            *available.entry(s).or_insert(0) += 1;
        }
    }

    // Second pass: yellows from the remaining pool, gray otherwise
    for (color, &letter) in colors.iter_mut().zip(&guess) {
        if color.is_some() {
            continue;
        }

        *color = match available.get_mut(&letter) {
            Some(count) if *count > 0 => {
                *count -= 1;
                Some(Color::Yellow)
            }
            _ => Some(Color::Gray),
        };
    }

    Feedback(
        guess
            .into_iter()
            .zip(colors)
            .map(|(letter, color)| FeedbackEntry::new(letter, color.unwrap_or(Color::Gray)))
            .collect(),
    )
}
