//! Formatting utilities for terminal output

use crate::core::{Color, Feedback};
use colored::{ColoredString, Colorize};

/// Format feedback as an emoji string
#[must_use]
pub fn feedback_to_emoji(feedback: &Feedback) -> String {
    feedback.to_emoji()
}

/// Render one letter as an uppercase tile colored by its feedback
#[must_use]
pub fn letter_tile(letter: char, color: Color) -> ColoredString {
    let tile = format!(" {} ", letter.to_ascii_uppercase()).bold();
    match color {
        Color::Green => tile.black().on_green(),
        Color::Yellow => tile.black().on_yellow(),
        Color::Gray => tile.white().on_bright_black(),
    }
}

/// Render feedback as a row of colored letter tiles
#[must_use]
pub fn feedback_tiles(feedback: &Feedback) -> String {
    feedback
        .iter()
        .map(|entry| letter_tile(entry.letter, entry.color).to_string())
        .collect()
}

/// Plain-text listing like "w:green a:green s:gray"
#[must_use]
pub fn feedback_plain(feedback: &Feedback) -> String {
    feedback
        .iter()
        .map(|entry| format!("{}:{}", entry.letter, entry.color))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
