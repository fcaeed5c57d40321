//! Game configuration

use crate::core::{DEFAULT_MAX_GUESSES, DEFAULT_WORD_LENGTH};

/// Rules for a single game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub word_length: usize,
    pub max_guesses: i32,
    /// Reject guesses that are well-formed but not in the dictionary
    pub require_dictionary_word: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: DEFAULT_WORD_LENGTH,
            max_guesses: DEFAULT_MAX_GUESSES,
            require_dictionary_word: true,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub const fn with_word_length(mut self, word_length: usize) -> Self {
        self.word_length = word_length;
        self
    }

    #[must_use]
    pub const fn with_max_guesses(mut self, max_guesses: i32) -> Self {
        self.max_guesses = max_guesses;
        self
    }

    #[must_use]
    pub const fn with_dictionary_check(mut self, require: bool) -> Self {
        self.require_dictionary_word = require;
        self
    }
}
